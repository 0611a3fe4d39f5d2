//! Main event loop for the TUI.
//!
//! Multiplexes terminal input, background content events, a periodic tick
//! and, while a section scroll is in flight, an animation frame timer.

use crate::app::{App, AppEvent};
use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::events::handle_app_event;
use super::input::handle_input;
use super::render::render;

/// Period of the housekeeping tick (status expiry).
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Frame period of a smooth section scroll.
const SCROLL_FRAME: Duration = Duration::from_millis(16);

/// Result of handling a key press event.
pub enum Action {
    Continue,
    Quit,
}

/// Runs the TUI until the user quits or the process is signalled.
///
/// Installs a panic hook that restores the terminal before unwinding.
pub async fn run(app: &mut App, mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut event_stream = crossterm::event::EventStream::new();

    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);
    let mut frame_interval = tokio::time::interval(SCROLL_FRAME);
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        // Drain settled content before more input so a burst of key
        // presses cannot hold back a finished fetch.
        while let Ok(event) = event_rx.try_recv() {
            handle_app_event(app, event);
        }

        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        let scrolling = app.is_scrolling();

        tokio::select! {
            biased;

            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                break;
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                break;
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        app.needs_redraw = true;
                        match handle_input(app, key) {
                            Action::Quit => break,
                            Action::Continue => {}
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.needs_redraw = true,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event stream error");
                    }
                    None => break,
                }
            }

            Some(event) = event_rx.recv() => {
                handle_app_event(app, event);
            }

            _ = frame_interval.tick(), if scrolling => {
                app.tick_scroll();
            }

            _ = tick_interval.tick() => {
                if app.clear_expired_status() {
                    app.needs_redraw = true;
                }
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
