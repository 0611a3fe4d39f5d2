//! Render functions for the TUI.
//!
//! The screen is a fixed header, the section nav strip, the scrolling page
//! body, a call-to-action bar and the status bar. Overlays draw on top.

use crate::app::{App, Overlay};
use crate::locale::format_number;
use crate::reviews::ReviewStats;
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::page::star_spans;
use super::{help, overlays, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Columns between nav labels.
const NAV_GAP: usize = 3;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_nav(f, app, chunks[1]);
    render_body(f, app, chunks[2]);
    render_cta(f, app, chunks[3]);
    status::render(f, app, chunks[4]);

    match app.overlay {
        Overlay::None => {}
        Overlay::Help => help::render(f, app),
        Overlay::AllReviews => overlays::render_all_reviews(f, app),
        Overlay::Gallery => overlays::render_gallery(f, app),
    }
    if app.gallery.viewer().is_some() {
        overlays::render_viewer(f, app);
    }
}

/// Title, duration, tags, price and the review summary.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let copy = app.copy;
    let strings = app.language.strings();
    let palette = &app.theme;

    let title = Line::from(vec![
        Span::styled(format!(" {}", copy.title), palette.title),
        Span::styled(format!("  {} {}", copy.days, strings.days), palette.muted),
    ]);

    let stats = ReviewStats::from_aggregate(&app.content.view().reviews.payload.aggregate);
    let mut details = vec![Span::raw(" ")];
    for tag in copy.tags {
        details.push(Span::styled(format!("#{} ", tag), palette.tag));
    }
    details.push(Span::styled(
        format!(" {} ", copy.price_label(app.language)),
        palette.price,
    ));
    details.push(Span::raw(" "));
    details.extend(star_spans(stats.average, palette));
    details.push(Span::styled(
        format!(
            " {} ({} {})",
            stats.average_label(),
            format_number(u64::from(stats.total)),
            strings.reviews_word
        ),
        palette.muted,
    ));

    f.render_widget(Paragraph::new(vec![title, Line::from(details)]), area);
}

/// The horizontally scrolling section strip. Records how many labels fit so
/// the active one can be kept in view.
fn render_nav(f: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width as usize;
    let labels: Vec<&str> = app
        .navigator
        .sections()
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    let first = app.nav_strip.first_visible().min(labels.len().saturating_sub(1));
    let palette = &app.theme;

    let mut spans = vec![Span::styled(
        if first > 0 { "◂ " } else { "  " },
        palette.nav_arrow,
    )];
    let mut used = 2;
    let mut shown = 0;
    // Keep two columns for the right arrow
    let room = width.saturating_sub(2);

    for (i, label) in labels.iter().enumerate().skip(first) {
        let gap = if shown == 0 { 0 } else { NAV_GAP };
        let label_width = display_width(label);
        if used + gap + label_width > room {
            if shown == 0 {
                let fitted = truncate_to_width(label, room.saturating_sub(used));
                spans.push(Span::styled(fitted.into_owned(), nav_style(app, i)));
                shown = 1;
            }
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(" ".repeat(gap)));
        }
        spans.push(Span::styled(label.to_string(), nav_style(app, i)));
        used += gap + label_width;
        shown += 1;
    }

    if first + shown < labels.len() {
        let pad = room.saturating_sub(used);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" ▸", palette.nav_arrow));
    }

    let shown = shown.max(1);
    if app.nav_visible != shown {
        app.nav_visible = shown;
        if let Some(active) = app.navigator.active_index() {
            app.nav_strip.reveal(active, shown);
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn nav_style(app: &App, index: usize) -> ratatui::style::Style {
    if app.navigator.active_index() == Some(index) {
        app.theme.nav_active
    } else {
        app.theme.nav_item
    }
}

fn render_body(f: &mut Frame, app: &mut App, area: Rect) {
    app.ensure_layout(area.width, area.height as usize);
    let lines = app.page_lines();
    let start = app.scroll_offset.min(lines.len());
    let end = (start + area.height as usize).min(lines.len());
    let visible = lines[start..end].to_vec();
    f.render_widget(Paragraph::new(visible), area);
}

/// Persistent booking bar.
fn render_cta(f: &mut Frame, app: &App, area: Rect) {
    let copy = app.copy;
    let text = format!(
        " {}  ·  [s] {}  ·  [w] {}",
        copy.price_label(app.language),
        copy.label(crate::copy::SectionKind::Adventure),
        copy.adventure.whatsapp_button
    );
    let fitted = truncate_to_width(&text, area.width as usize);
    f.render_widget(
        Paragraph::new(fitted.into_owned()).style(app.theme.cta_bar),
        area,
    );
}
