//! Help overlay: every key binding, grouped by what it does on the page.
//!
//! Keys bound to the same action share one row, so the five rating keys read
//! as `1 / 2 / 3 / 4 / 5`. Overrides from the config file show up here too.

use crate::app::App;
use crate::keybindings::{Action, Context};
use crate::locale::UiStrings;
use crate::util::display_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help screen groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    General,
    Moving,
    Sections,
    Reviews,
    Itinerary,
    Photos,
    Booking,
}

impl Group {
    const ALL: [Group; 7] = [
        Group::Moving,
        Group::Sections,
        Group::Reviews,
        Group::Itinerary,
        Group::Photos,
        Group::Booking,
        Group::General,
    ];

    fn title(self, strings: &UiStrings) -> &'static str {
        match self {
            Group::General => strings.help_general,
            Group::Moving => strings.help_moving,
            Group::Sections => strings.help_sections,
            Group::Reviews => strings.help_reviews,
            Group::Itinerary => strings.help_itinerary,
            Group::Photos => strings.help_photos,
            Group::Booking => strings.help_booking,
        }
    }

    /// Overlay contexts land in the group of the thing they show; page
    /// bindings are split by the part of the page they act on.
    fn of(context: Context, action: Action) -> Group {
        match context {
            Context::Global => Group::General,
            Context::Reviews => Group::Reviews,
            Context::Gallery | Context::Viewer => Group::Photos,
            Context::Page => match action {
                Action::NextSection
                | Action::PrevSection
                | Action::NavScrollLeft
                | Action::NavScrollRight
                | Action::JumpToReviews => Group::Sections,
                Action::ToggleRating(_) | Action::ClearRatings | Action::ShowAllReviews => {
                    Group::Reviews
                }
                Action::ToggleItinerary | Action::ToggleDay | Action::ExpandLists => {
                    Group::Itinerary
                }
                Action::ShowGallery | Action::ViewMainImage => Group::Photos,
                Action::StartAdventure | Action::OpenWhatsApp => Group::Booking,
                _ => Group::Moving,
            },
        }
    }
}

/// One help row: every key for a described action within a group.
#[derive(Debug, PartialEq)]
struct HelpEntry {
    keys: Vec<String>,
    description: &'static str,
}

/// Bindings bucketed by group, keeping registry order inside each group.
fn grouped_entries(app: &App) -> Vec<(Group, Vec<HelpEntry>)> {
    let language = app.language;
    let bindings = app.keybindings.all_bindings();

    Group::ALL
        .iter()
        .filter_map(|&group| {
            let mut entries: Vec<HelpEntry> = Vec::new();
            for (context, key, action, _) in &bindings {
                if Group::of(*context, *action) != group {
                    continue;
                }
                let description = action.describe_in(language);
                match entries.iter_mut().find(|e| e.description == description) {
                    Some(entry) if !entry.keys.contains(key) => entry.keys.push(key.clone()),
                    Some(_) => {}
                    None => entries.push(HelpEntry {
                        keys: vec![key.clone()],
                        description,
                    }),
                }
            }
            (!entries.is_empty()).then_some((group, entries))
        })
        .collect()
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let strings = app.language.strings();
    let palette = &app.theme;
    let groups = grouped_entries(app);

    let key_column = groups
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|e| display_width(&e.keys.join(" / ")))
        .max()
        .unwrap_or(0)
        .min(18);

    let mut lines = Vec::new();
    for (group, entries) in groups {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            group.title(strings).to_string(),
            palette.section_heading,
        )));
        for entry in entries {
            let keys = entry.keys.join(" / ");
            let pad = key_column.saturating_sub(display_width(&keys));
            lines.push(Line::from(vec![
                Span::styled(format!("  {}{}", keys, " ".repeat(pad)), palette.tag),
                Span::styled(format!("  {}", entry.description), palette.body),
            ]));
        }
    }
    lines
}

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }
    f.render_widget(Clear, overlay);

    let strings = app.language.strings();
    let lines = help_lines(app);
    let visible = overlay.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    let scroll = app.overlay_scroll.min(max_scroll);

    let title = if max_scroll > 0 {
        format!(" {} ({}/{}) ", strings.help_title, scroll + 1, max_scroll + 1)
    } else {
        format!(" {} ", strings.help_title)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.overlay_border)
        .title(title)
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", strings.help_close),
            app.theme.muted,
        )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, overlay);
}

/// Create a centered rectangle with the given percentage of the parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
