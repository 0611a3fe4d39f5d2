//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry for the topmost
//! surface (viewer, gallery, all-reviews panel, or the page itself), with
//! global bindings as the fallback.

use crate::app::App;
use crate::copy::SectionKind;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::helpers::open_link;
use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Action::Continue;
    }

    let Some(context) = app.key_context() else {
        handle_help_input(app, key.code);
        return Action::Continue;
    };

    let action = app
        .keybindings
        .action_for_key(key.code, key.modifiers, context);
    let Some(action) = action else {
        return Action::Continue;
    };
    tracing::trace!(context = context.name(), ?action, "Key action");

    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::ShowHelp => app.toggle_help(),
        KbAction::CycleTheme => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::Back => {
            app.back();
        }
        _ => match context {
            KbContext::Viewer => handle_viewer_action(app, action),
            KbContext::Gallery => handle_gallery_action(app, action),
            KbContext::Reviews => handle_reviews_action(app, action),
            KbContext::Page | KbContext::Global => handle_page_action(app, action),
        },
    }
    Action::Continue
}

/// The help overlay captures all keys: j/k scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.overlay_scroll = app.overlay_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overlay_scroll = app.overlay_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_page_action(app: &mut App, action: KbAction) {
    match action {
        KbAction::ScrollDown => app.scroll_by(1),
        KbAction::ScrollUp => app.scroll_by(-1),
        KbAction::PageDown => app.scroll_by(app.page_step()),
        KbAction::PageUp => app.scroll_by(-app.page_step()),
        KbAction::Top => app.scroll_to_top(),
        KbAction::Bottom => app.scroll_to_bottom(),
        KbAction::NextSection => {
            app.navigate_relative(1);
        }
        KbAction::PrevSection => {
            app.navigate_relative(-1);
        }
        KbAction::NavScrollLeft => app.nav_strip.scroll_left(),
        KbAction::NavScrollRight => {
            let total = app.navigator.sections().len();
            app.nav_strip
                .scroll_right(total.saturating_sub(app.nav_visible).saturating_add(1));
        }
        KbAction::JumpToReviews => {
            app.navigate_to_kind(SectionKind::Reviews);
        }
        KbAction::StartAdventure => {
            app.navigate_to_kind(SectionKind::Adventure);
        }
        KbAction::ToggleRating(stars) => app.toggle_rating(stars),
        KbAction::ClearRatings => {
            app.clear_ratings();
            app.set_status(app.language.strings().filter_cleared);
        }
        KbAction::ShowAllReviews => app.show_all_reviews(),
        KbAction::ToggleItinerary => app.toggle_all_days(),
        KbAction::ToggleDay => {
            if let Some(day) = app.toggle_day_in_view() {
                tracing::debug!(day, "Toggled itinerary day");
            }
        }
        KbAction::ExpandLists => app.toggle_lists(),
        KbAction::ShowGallery => {
            if !app.show_gallery() {
                report_images_unavailable(app);
            }
        }
        KbAction::ViewMainImage => {
            if !app.view_main_image() {
                report_images_unavailable(app);
            }
        }
        KbAction::OpenWhatsApp => {
            let link = app.copy.whatsapp_link();
            open_link(app, &link);
        }
        _ => {}
    }
}

fn report_images_unavailable(app: &mut App) {
    let strings = app.language.strings();
    let msg = if app.content.view().images.is_pending() {
        strings.loading_images
    } else {
        strings.images_unavailable
    };
    app.set_status(msg);
}

fn handle_reviews_action(app: &mut App, action: KbAction) {
    match action {
        KbAction::ScrollDown => app.overlay_scroll = app.overlay_scroll.saturating_add(1),
        KbAction::ScrollUp => app.overlay_scroll = app.overlay_scroll.saturating_sub(1),
        KbAction::PageDown => app.overlay_scroll = app.overlay_scroll.saturating_add(10),
        KbAction::PageUp => app.overlay_scroll = app.overlay_scroll.saturating_sub(10),
        _ => {}
    }
}

fn handle_gallery_action(app: &mut App, action: KbAction) {
    let len = app.images().map_or(0, |set| set.images.len());
    match action {
        KbAction::ScrollDown => app.gallery.move_cursor(1, len),
        KbAction::ScrollUp => app.gallery.move_cursor(-1, len),
        KbAction::Select => {
            app.view_selected_image();
        }
        _ => {}
    }
}

fn handle_viewer_action(app: &mut App, action: KbAction) {
    match action {
        KbAction::NextImage => app.step_viewer(1),
        KbAction::PrevImage => app.step_viewer(-1),
        KbAction::OpenInBrowser => {
            if let Some(url) = app.gallery.viewer().map(str::to_string) {
                open_link(app, &url);
            }
        }
        _ => {}
    }
}
