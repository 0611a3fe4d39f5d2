//! The scrollable page body, laid out as pre-wrapped lines.
//!
//! Layout is rebuilt only when content, interaction state or width changes.
//! Along with the lines it records where each section starts and ends, which
//! is what the scroll-spy observes.

use crate::aggregator::ImagesState;
use crate::app::App;
use crate::content::model::split_list;
use crate::copy::SectionKind;
use crate::gallery::{mosaic, representative, Slot};
use crate::itinerary::{needs_toggle, ListKey};
use crate::locale::{image_label, UiStrings};
use crate::navigation::SectionSpan;
use crate::reviews::{star_fill, ReviewStats};
use crate::theme::ColorPalette;
use crate::util::{display_width, strip_control_chars, wrap_text};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::ops::Range;

/// Left margin of the page body.
const MARGIN: &str = " ";
const STAR_BAR_WIDTH: usize = 10;

pub struct PageLayout {
    pub width: u16,
    revision: u64,
    generation: u64,
    pub lines: Vec<Line<'static>>,
    /// Section line spans, in page order.
    pub spans: Vec<SectionSpan>,
    /// Header line of each itinerary day.
    pub day_headers: Vec<(usize, u32)>,
    itinerary_lines: Range<usize>,
    /// Collapsible lists currently long enough to have a toggle.
    pub list_keys: Vec<ListKey>,
}

impl PageLayout {
    pub fn is_current(&self, width: u16, revision: u64, generation: u64) -> bool {
        self.width == width && self.revision == revision && self.generation == generation
    }

    pub fn span_for(&self, anchor_id: &str) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.anchor_id == anchor_id)
    }

    /// The itinerary day a page line belongs to: the last day header at or
    /// above it, or the first day if the line is above every header. `None`
    /// outside the itinerary section.
    pub fn day_at(&self, line: usize) -> Option<u32> {
        if !self.itinerary_lines.contains(&line) {
            return None;
        }
        self.day_headers
            .iter()
            .rev()
            .find(|(header, _)| *header <= line)
            .or_else(|| self.day_headers.first())
            .map(|(_, day)| *day)
    }
}

// ============================================================================
// Line Builder
// ============================================================================

struct PageBuilder<'a> {
    width: usize,
    palette: &'a ColorPalette,
    lines: Vec<Line<'static>>,
}

impl<'a> PageBuilder<'a> {
    fn new(width: u16, palette: &'a ColorPalette) -> Self {
        Self {
            width: (width as usize).saturating_sub(2).max(10),
            palette,
            lines: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(MARGIN));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        let style = self.palette.section_heading;
        self.push(vec![Span::styled(text.to_uppercase(), style)]);
        let rule = "─".repeat(display_width(text).min(self.width));
        self.push(vec![Span::styled(rule, self.palette.muted)]);
    }

    /// Wrapped text with `indent` columns of hanging indent.
    fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let clean = strip_control_chars(text);
        let pad = " ".repeat(indent);
        for line in wrap_text(&clean, self.width.saturating_sub(indent)) {
            self.push(vec![Span::raw(pad.clone()), Span::styled(line, style)]);
        }
    }

    /// A marker followed by wrapped text aligned after the marker.
    fn item(&mut self, indent: usize, marker: &str, marker_style: Style, text: &str, style: Style) {
        let clean = strip_control_chars(text);
        let lead = indent + display_width(marker) + 1;
        let wrapped = wrap_text(&clean, self.width.saturating_sub(lead));
        for (i, line) in wrapped.into_iter().enumerate() {
            let head = if i == 0 {
                Span::styled(format!("{}{} ", " ".repeat(indent), marker), marker_style)
            } else {
                Span::raw(" ".repeat(lead))
            };
            self.push(vec![head, Span::styled(line, style)]);
        }
    }

    fn bullet(&mut self, indent: usize, text: &str) {
        let (bullet, body) = (self.palette.bullet, self.palette.body);
        self.item(indent, "•", bullet, text, body);
    }

    /// "Label: value", wrapped.
    fn field(&mut self, indent: usize, label: &str, value: &str) {
        let clean = strip_control_chars(value);
        let label = format!("{}{}: ", " ".repeat(indent), label);
        let lead = display_width(&label);
        let wrapped = wrap_text(&clean, self.width.saturating_sub(lead));
        for (i, line) in wrapped.into_iter().enumerate() {
            let head = if i == 0 {
                Span::styled(label.clone(), self.palette.reviewer)
            } else {
                Span::raw(" ".repeat(lead))
            };
            self.push(vec![head, Span::styled(line, self.palette.body)]);
        }
    }

    fn hint(&mut self, indent: usize, key: &str, label: &str, enabled: bool) {
        let style = if enabled {
            self.palette.toggle
        } else {
            self.palette.muted
        };
        let key = if enabled {
            format!("{}[{}] ", " ".repeat(indent), key)
        } else {
            " ".repeat(indent)
        };
        self.push(vec![
            Span::styled(key, self.palette.muted),
            Span::styled(label.to_string(), style),
        ]);
    }
}

// ============================================================================
// Page Assembly
// ============================================================================

/// Lay out the whole page body for `width` columns.
pub fn build_page(app: &App, width: u16, revision: u64, generation: u64) -> PageLayout {
    let mut b = PageBuilder::new(width, &app.theme);
    let mut layout = PageLayout {
        width,
        revision,
        generation,
        lines: Vec::new(),
        spans: Vec::with_capacity(SectionKind::ALL.len()),
        day_headers: Vec::new(),
        itinerary_lines: 0..0,
        list_keys: Vec::new(),
    };

    render_mosaic(&mut b, app);
    b.blank();

    for (kind, section) in SectionKind::ALL.iter().zip(app.navigator.sections()) {
        let start = b.len();
        b.heading(&section.label);
        match kind {
            SectionKind::Overview => render_overview(&mut b, app),
            SectionKind::WhyLove => {
                for reason in app.copy.why_love {
                    b.bullet(1, reason);
                    b.blank();
                }
            }
            SectionKind::Itinerary => render_itinerary(&mut b, app, &mut layout),
            SectionKind::Included => render_included(&mut b, app, &mut layout),
            SectionKind::RightForYou => {
                for point in app.copy.right_for_you {
                    b.bullet(1, point);
                    b.blank();
                }
            }
            SectionKind::Adventure => render_adventure(&mut b, app),
            SectionKind::Notes => {
                for note in app.copy.important_notes {
                    b.bullet(1, note);
                    b.blank();
                }
            }
            SectionKind::Reviews => render_reviews(&mut b, app),
        }
        b.blank();
        let end = b.len();
        if *kind == SectionKind::Itinerary {
            layout.itinerary_lines = start..end;
        }
        layout.spans.push(SectionSpan {
            anchor_id: section.anchor_id.clone(),
            start,
            end,
        });
    }

    layout.lines = b.lines;
    layout
}

fn render_mosaic(b: &mut PageBuilder<'_>, app: &App) {
    let strings = app.language.strings();
    match &app.content.view().images {
        ImagesState::Pending => {
            let style = b.palette.image_loading;
            b.push(vec![Span::styled(format!("⟳ {}", strings.loading_images), style)]);
            b.hint(0, "g", strings.view_all_images, false);
        }
        ImagesState::Failed { .. } => {
            let style = b.palette.image_error;
            b.push(vec![Span::styled(format!("✕ {}", strings.images_failed), style)]);
            b.hint(0, "g", strings.view_all_images, false);
        }
        ImagesState::Loaded(set) => match mosaic(set) {
            None => {
                let style = b.palette.muted;
                b.push(vec![Span::styled(strings.images_unavailable.to_string(), style)]);
            }
            Some(tiles) => {
                let main = format!(
                    "{}: {}",
                    strings.main_image,
                    image_label(tiles.main, app.language, 0)
                );
                let (tile, muted) = (b.palette.image_tile, b.palette.muted);
                b.item(0, "▣", tile, &main, tile.add_modifier(Modifier::BOLD));
                for (i, image) in tiles.side.iter().enumerate() {
                    b.item(2, "▫", muted, &image_label(image, app.language, i + 1), tile);
                }
                let label = format!("{} ({})", strings.view_all_images, set.images.len());
                b.hint(0, "g", &label, true);
            }
        },
    }
}

/// The representative image line for a section slot.
fn render_slot(b: &mut PageBuilder<'_>, app: &App, slot: Slot, caption: &str) {
    let strings = app.language.strings();
    match &app.content.view().images {
        ImagesState::Pending => {
            let style = b.palette.image_loading;
            b.push(vec![Span::styled(format!("⟳ {}", strings.loading_images), style)]);
        }
        ImagesState::Failed { .. } => {
            let style = b.palette.image_error;
            b.push(vec![Span::styled(format!("✕ {}", strings.images_unavailable), style)]);
        }
        ImagesState::Loaded(set) => match representative(set, slot) {
            Some(image) => {
                let position = set
                    .images
                    .iter()
                    .position(|i| i.id == image.id)
                    .unwrap_or(0);
                let text = format!(
                    "{}: {}",
                    caption,
                    image_label(image, app.language, position)
                );
                let tile = b.palette.image_tile;
                b.item(0, "▣", tile, &text, tile);
            }
            None => {
                let style = b.palette.muted;
                b.push(vec![Span::styled(strings.images_unavailable.to_string(), style)]);
            }
        },
    }
}

fn render_overview(b: &mut PageBuilder<'_>, app: &App) {
    let body = b.palette.body;
    for paragraph in app.copy.overview {
        b.paragraph(paragraph, body, 0);
        b.blank();
    }
    for fact in app.copy.facts {
        b.field(1, fact.label, fact.value);
    }
    b.blank();
    render_slot(b, app, Slot::Overview, app.language.strings().overview_image);
}

/// Bulleted list showing at most five items until expanded.
fn render_list(
    b: &mut PageBuilder<'_>,
    app: &App,
    layout: &mut PageLayout,
    key: ListKey,
    items: &[&str],
    indent: usize,
) {
    for item in app.lists.visible(key, items) {
        b.bullet(indent, item);
    }
    if needs_toggle(items.len()) {
        layout.list_keys.push(key);
        let label = app
            .language
            .strings()
            .list_toggle(app.lists.is_expanded(key), items.len());
        b.hint(indent, "e", &label, true);
    }
}

fn render_itinerary(b: &mut PageBuilder<'_>, app: &App, layout: &mut PageLayout) {
    let strings: &UiStrings = app.language.strings();
    render_slot(b, app, Slot::Itinerary, strings.itinerary_image);
    b.blank();

    let days = &app.content.view().itinerary.payload.days;
    if days.is_empty() {
        let style = b.palette.muted;
        b.push(vec![Span::styled(strings.loading_itinerary.to_string(), style)]);
        return;
    }

    let numbers: Vec<u32> = days.iter().map(|d| d.day_number).collect();
    let toggle = if app.itinerary.all_open(&numbers) {
        strings.view_less
    } else {
        strings.view_all
    };
    b.hint(0, "i", toggle, true);
    b.blank();

    for day in days {
        let open = app.itinerary.is_open(day.day_number);
        layout.day_headers.push((b.len(), day.day_number));
        let marker = if open { "▾" } else { "▸" };
        let header = format!("{} {}: {}", strings.day, day.day_number, day.title);
        let style = b.palette.reviewer;
        b.item(0, marker, b.palette.toggle, &header, style);
        if !open {
            continue;
        }

        let body = b.palette.body;
        b.paragraph(&day.description, body, 2);
        b.field(2, strings.accommodation, &day.accommodation);
        b.field(2, strings.meals, &day.meals);

        let included = day.included_activity_list();
        if !included.is_empty() {
            b.field(2, strings.included_activities, "");
            render_list(b, app, layout, ListKey::DayActivities(day.day_number), &included, 3);
        }
        if !day.optional_activities.is_empty() {
            let optional: Vec<&str> = day.optional_activities.iter().map(String::as_str).collect();
            b.field(2, strings.optional_activities, "");
            render_list(b, app, layout, ListKey::DayOptional(day.day_number), &optional, 3);
        }
        if let Some(info) = &day.special_info {
            b.field(2, strings.special_info, info);
        }
        b.blank();
    }
}

fn render_included(b: &mut PageBuilder<'_>, app: &App, layout: &mut PageLayout) {
    let strings = app.language.strings();
    let inclusions = &app.copy.inclusions;

    b.field(1, strings.meals, inclusions.meals);
    b.blank();

    let transport = split_list(inclusions.transport);
    b.field(1, strings.transport, "");
    render_list(b, app, layout, ListKey::InclusionTransport, &transport, 2);
    b.blank();

    let accommodation = split_list(inclusions.accommodation);
    b.field(1, strings.accommodation, "");
    render_list(b, app, layout, ListKey::InclusionAccommodation, &accommodation, 2);
    b.blank();

    b.field(1, strings.included_activities, "");
    render_list(
        b,
        app,
        layout,
        ListKey::InclusionActivities,
        inclusions.included_activities,
        2,
    );
    b.blank();

    b.field(1, strings.optional_activities, "");
    render_list(
        b,
        app,
        layout,
        ListKey::InclusionOptional,
        inclusions.optional_activities,
        2,
    );
}

fn render_adventure(b: &mut PageBuilder<'_>, app: &App) {
    let adventure = &app.copy.adventure;
    render_slot(b, app, Slot::Adventure, app.language.strings().adventure_image);
    b.blank();

    let (title, body, muted) = (b.palette.title, b.palette.body, b.palette.muted);
    b.paragraph(adventure.title, title, 0);
    b.paragraph(adventure.description, muted, 0);
    b.blank();
    b.paragraph(adventure.content, body, 0);
    b.blank();
    for highlight in adventure.highlights {
        b.item(1, "✓", b.palette.bullet, highlight, body);
    }
    b.blank();
    let link = b.palette.link;
    b.push(vec![
        Span::styled("[w] ", muted),
        Span::styled(format!("☏ {}", adventure.whatsapp_button), link),
    ]);
}

/// Five stars for `average`, a star drawn filled once it is at least half full.
pub(super) fn star_spans(average: f64, palette: &ColorPalette) -> Vec<Span<'static>> {
    (0..5)
        .map(|i| {
            if star_fill(average, i) >= 50.0 {
                Span::styled("★", palette.star_filled)
            } else {
                Span::styled("☆", palette.star_empty)
            }
        })
        .collect()
}

fn render_reviews(b: &mut PageBuilder<'_>, app: &App) {
    let strings = app.language.strings();
    let payload = &app.content.view().reviews.payload;
    let stats = ReviewStats::from_aggregate(&payload.aggregate);

    let mut header = star_spans(stats.average, b.palette);
    header.push(Span::styled(
        format!(" {} · {} {}", stats.average_label(), stats.total, strings.reviews_word),
        b.palette.reviewer,
    ));
    b.push(header);
    b.blank();

    for row in &stats.rows {
        let filled = (row.share * STAR_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(STAR_BAR_WIDTH);
        b.push(vec![
            Span::styled(format!("{} ★ ", row.stars), b.palette.body),
            Span::styled("█".repeat(filled), b.palette.star_filled),
            Span::styled("░".repeat(STAR_BAR_WIDTH - filled), b.palette.star_empty),
            Span::styled(format!(" {}", row.count), b.palette.muted),
        ]);
    }
    b.blank();

    let label = format!("{}:", strings.filter_by_rating);
    let body = b.palette.body;
    b.paragraph(&label, body, 0);
    let mut filter_row = Vec::with_capacity(11);
    for stars in (1..=5u8).rev() {
        let style = if app.filter.is_selected(stars) {
            b.palette.filter_selected
        } else {
            b.palette.nav_item
        };
        filter_row.push(Span::styled(format!(" {}★ ", stars), style));
        filter_row.push(Span::raw(" "));
    }
    filter_row.push(Span::styled("[1-5, 0]", b.palette.muted));
    b.push(filter_row);
    b.blank();

    let featured = app.filter.featured(&payload.reviews);
    if featured.is_empty() {
        let style = b.palette.muted;
        b.paragraph(strings.no_reviews_match, style, 1);
        b.blank();
    }
    for review in featured {
        let mut line = star_spans(f64::from(review.display_rating()), b.palette);
        line.push(Span::styled(
            format!(" {}", strip_control_chars(&review.display_name)),
            b.palette.reviewer,
        ));
        line.push(Span::styled(
            format!(" · {}", strip_control_chars(&review.date)),
            b.palette.muted,
        ));
        b.push(line);
        let body = b.palette.body;
        b.paragraph(&review.body, body, 2);
        b.blank();
    }

    let label = format!("{} ({})", strings.read_all_reviews, payload.reviews.len());
    b.hint(0, "a", &label, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::KeybindingRegistry;
    use crate::locale::Language;
    use crate::theme::ThemeVariant;

    fn app(language: Language) -> App {
        App::new(language, "4days", ThemeVariant::Dark, KeybindingRegistry::new()).unwrap()
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_spans_cover_sections_in_order() {
        let app = app(Language::En);
        let layout = build_page(&app, 80, 0, 0);
        assert_eq!(layout.spans.len(), SectionKind::ALL.len());
        for pair in layout.spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
        assert_eq!(layout.spans.last().map(|s| s.end), Some(layout.lines.len()));
        assert_eq!(layout.spans[2].anchor_id, "Itinerary");
    }

    #[test]
    fn test_lines_fit_width() {
        let app = app(Language::Es);
        let layout = build_page(&app, 50, 0, 0);
        for line in &layout.lines {
            assert!(line.width() <= 50, "{:?}", text(line));
        }
    }

    #[test]
    fn test_pending_images_show_loading() {
        let app = app(Language::En);
        let layout = build_page(&app, 80, 0, 0);
        assert!(text(&layout.lines[0]).contains("Loading images..."));
    }

    #[test]
    fn test_collapsed_days_have_headers_only() {
        let app = app(Language::En);
        let layout = build_page(&app, 80, 0, 0);
        assert_eq!(
            layout.day_headers.iter().map(|(_, d)| *d).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        // Included activities (16 items) get a toggle
        assert!(layout.list_keys.contains(&ListKey::InclusionActivities));
        assert!(layout
            .lines
            .iter()
            .any(|l| text(l).contains("View all (16)")));
    }

    #[test]
    fn test_day_at_stays_inside_itinerary() {
        let app = app(Language::En);
        let layout = build_page(&app, 80, 0, 0);
        let itinerary = &layout.spans[2];
        assert_eq!(layout.day_at(itinerary.start), Some(1));
        let (day3_line, _) = layout.day_headers[2];
        assert_eq!(layout.day_at(day3_line), Some(3));
        assert_eq!(layout.day_at(itinerary.end), None);
        assert_eq!(layout.day_at(0), None);
    }
}
