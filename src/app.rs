use crate::aggregator::{ContentAggregator, Settlement};
use crate::content::{ContentCategory, Image, ImageSet};
use crate::copy::{PageCopy, SectionKind};
use crate::gallery::{mosaic, GalleryState};
use crate::itinerary::{ExpandedLists, ItineraryExpansion};
use crate::keybindings::{Context as KbContext, KeybindingRegistry};
use crate::locale::Language;
use crate::navigation::{
    observation_band, scroll_target, NavStrip, ScrollAnimation, SectionNavigator,
    VisibilityTracker,
};
use crate::reviews::ReviewFilter;
use crate::theme::{ColorPalette, ThemeVariant};
use crate::ui::page::{build_page, PageLayout};
use anyhow::Result;
use ratatui::text::Line;
use std::borrow::Cow;
use tokio::time::Instant;

/// Seconds a status message stays on screen.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Event and Overlay Types
// ============================================================================

/// Events sent from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A content category reached its final outcome (after any retries).
    CategorySettled(Settlement),
    /// A background task panicked.
    TaskPanicked { task: &'static str, error: String },
}

/// Full-screen panels drawn over the page. The image viewer is tracked
/// separately by [`GalleryState`] and sits above all of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    AllReviews,
    Gallery,
}

/// A programmatic scroll toward a section.
#[derive(Debug, Clone)]
struct Flight {
    anchor_id: String,
    animation: ScrollAnimation,
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    // Content
    pub language: Language,
    pub copy: &'static PageCopy,
    pub content: ContentAggregator,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: ColorPalette,

    // Keybindings
    pub keybindings: KeybindingRegistry,

    // Navigation
    pub navigator: SectionNavigator,
    tracker: VisibilityTracker,
    flight: Option<Flight>,
    pub nav_strip: NavStrip,
    /// Nav labels that fit the last rendered nav bar.
    pub nav_visible: usize,

    // Page interaction
    pub filter: ReviewFilter,
    pub gallery: GalleryState,
    pub itinerary: ItineraryExpansion,
    pub lists: ExpandedLists,
    pub overlay: Overlay,
    pub overlay_scroll: usize,

    // Viewport
    pub scroll_offset: usize,
    pub viewport_height: usize,
    layout: Option<PageLayout>,
    /// Bumped whenever page content changes without a content revision
    /// (filters, expansions, theme).
    page_generation: u64,

    // Chrome
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(
        language: Language,
        package_id: &str,
        theme_variant: ThemeVariant,
        keybindings: KeybindingRegistry,
    ) -> Result<Self> {
        let copy = PageCopy::for_language(language);
        let navigator = SectionNavigator::new(&copy.nav_links)?;

        Ok(Self {
            language,
            copy,
            content: ContentAggregator::seeded(language, package_id),
            theme_variant,
            theme: theme_variant.palette(),
            keybindings,
            navigator,
            tracker: VisibilityTracker::new(),
            flight: None,
            nav_strip: NavStrip::default(),
            nav_visible: SectionKind::ALL.len(),
            filter: ReviewFilter::new(),
            gallery: GalleryState::default(),
            itinerary: ItineraryExpansion::default(),
            lists: ExpandedLists::default(),
            overlay: Overlay::None,
            overlay_scroll: 0,
            scroll_offset: 0,
            viewport_height: 1,
            layout: None,
            page_generation: 0,
            status_message: None,
            needs_redraw: true,
        })
    }

    // ------------------------------------------------------------------------
    // Theme and status
    // ------------------------------------------------------------------------

    /// Cycle to the next theme variant. Returns the new variant's name.
    pub fn cycle_theme(&mut self) -> &'static str {
        self.theme_variant = self.theme_variant.next();
        self.theme = self.theme_variant.palette();
        self.invalidate_page();
        self.theme_variant.name()
    }

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Keybinding context for the topmost surface, or `None` while the help
    /// overlay captures input.
    pub fn key_context(&self) -> Option<KbContext> {
        if self.gallery.viewer().is_some() {
            return Some(KbContext::Viewer);
        }
        match self.overlay {
            Overlay::Help => None,
            Overlay::Gallery => Some(KbContext::Gallery),
            Overlay::AllReviews => Some(KbContext::Reviews),
            Overlay::None => Some(KbContext::Page),
        }
    }

    // ------------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------------

    /// Fold a fetch outcome into the page.
    pub fn apply_settlement(&mut self, settlement: Settlement) -> ContentCategory {
        let category = self.content.apply(settlement);

        let days: Vec<u32> = self.day_numbers();
        self.itinerary.retain_days(&days);

        if self.images().is_none() {
            self.gallery.close_viewer();
            if self.overlay == Overlay::Gallery {
                self.overlay = Overlay::None;
            }
        }

        self.needs_redraw = true;
        category
    }

    /// Images, once loaded.
    pub fn images(&self) -> Option<&ImageSet> {
        self.content.view().images.image_set()
    }

    fn day_numbers(&self) -> Vec<u32> {
        self.content
            .view()
            .itinerary
            .payload
            .days
            .iter()
            .map(|d| d.day_number)
            .collect()
    }

    fn invalidate_page(&mut self) {
        self.page_generation = self.page_generation.wrapping_add(1);
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------------
    // Layout and scrolling
    // ------------------------------------------------------------------------

    /// Rebuild the page layout if content, interaction state or width changed,
    /// then re-run visibility tracking for the current position.
    pub fn ensure_layout(&mut self, width: u16, height: usize) {
        self.viewport_height = height.max(1);
        let revision = self.content.revision();
        let stale = self
            .layout
            .as_ref()
            .map_or(true, |l| !l.is_current(width, revision, self.page_generation));

        if stale {
            let layout = build_page(self, width, revision, self.page_generation);
            if self.layout.as_ref().map(|l| l.width) != Some(width) {
                self.tracker.reset();
            }
            self.layout = Some(layout);
            self.retarget_flight();
        }

        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.observe_visibility();
    }

    /// Rendered page lines (empty before the first layout).
    pub fn page_lines(&self) -> &[Line<'static>] {
        match &self.layout {
            Some(layout) => &layout.lines,
            None => &[],
        }
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    /// Last offset at which the final line is still on screen at the top.
    /// Lets every section, including the last, reach the observation band.
    pub fn max_scroll(&self) -> usize {
        self.page_lines().len().saturating_sub(1)
    }

    /// Manual scroll. Cancels any programmatic scroll in flight.
    pub fn scroll_by(&mut self, delta: isize) {
        self.flight = None;
        let target = (self.scroll_offset as isize).saturating_add(delta);
        self.scroll_offset = target.clamp(0, self.max_scroll() as isize) as usize;
        self.observe_visibility();
    }

    pub fn page_step(&self) -> isize {
        (self.viewport_height.saturating_sub(2)).max(1) as isize
    }

    pub fn scroll_to_top(&mut self) {
        self.flight = None;
        self.scroll_offset = 0;
        self.observe_visibility();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.flight = None;
        self.scroll_offset = self.max_scroll();
        self.observe_visibility();
    }

    /// Feed the current band position to the scroll-spy.
    fn observe_visibility(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let changes = self
            .tracker
            .observe(&layout.spans, self.scroll_offset, self.viewport_height);

        let mut changed = false;
        for change in &changes {
            changed |= self.navigator.on_visibility(change);
        }
        if changed {
            if let Some(index) = self.navigator.active_index() {
                self.nav_strip.reveal(index, self.nav_visible);
            }
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------------
    // Section navigation
    // ------------------------------------------------------------------------

    /// Start a smooth scroll to the section labelled `label`.
    ///
    /// The active section is not touched here; it follows once the scroll
    /// brings the section into the band.
    pub fn navigate_to(&mut self, label: &str) -> bool {
        match self.navigator.request_scroll(label) {
            Some(request) => self.start_flight(request.anchor_id),
            None => {
                tracing::warn!(label = %label, "Navigation to unknown section");
                false
            }
        }
    }

    pub fn navigate_to_kind(&mut self, kind: SectionKind) -> bool {
        let label = self.copy.label(kind);
        self.navigate_to(label)
    }

    /// Scroll to the section `delta` steps from the active one.
    pub fn navigate_relative(&mut self, delta: isize) -> bool {
        match self.navigator.request_relative(delta) {
            Some(request) => self.start_flight(request.anchor_id),
            None => false,
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.flight.is_some()
    }

    fn flight_target(&self, anchor_id: &str) -> Option<usize> {
        let span = self.layout.as_ref()?.span_for(anchor_id)?;
        Some(scroll_target(span.start, self.viewport_height).min(self.max_scroll()))
    }

    fn start_flight(&mut self, anchor_id: String) -> bool {
        let Some(target) = self.flight_target(&anchor_id) else {
            tracing::debug!(anchor = %anchor_id, "No layout yet for navigation target");
            return false;
        };
        tracing::debug!(anchor = %anchor_id, from = self.scroll_offset, to = target, "Scrolling to section");
        self.flight = Some(Flight {
            anchor_id,
            animation: ScrollAnimation::new(self.scroll_offset, target),
        });
        self.needs_redraw = true;
        true
    }

    /// The page re-flowed mid-flight: aim at the section's new position.
    fn retarget_flight(&mut self) {
        let Some(anchor_id) = self.flight.as_ref().map(|f| f.anchor_id.clone()) else {
            return;
        };
        match self.flight_target(&anchor_id) {
            Some(target) => {
                self.flight = Some(Flight {
                    anchor_id,
                    animation: ScrollAnimation::new(self.scroll_offset, target),
                });
            }
            None => self.flight = None,
        }
    }

    /// Advance a programmatic scroll by one frame. Returns true if the page
    /// moved.
    pub fn tick_scroll(&mut self) -> bool {
        let Some(flight) = self.flight.as_mut() else {
            return false;
        };
        let step = flight.animation.step();
        let landed = flight.animation.is_done();
        if landed {
            self.flight = None;
        }
        match step {
            Some(offset) => {
                self.scroll_offset = offset.min(self.max_scroll());
                self.observe_visibility();
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------------

    pub fn toggle_rating(&mut self, rating: u8) {
        self.filter.toggle(rating);
        self.invalidate_page();
    }

    pub fn clear_ratings(&mut self) {
        self.filter.clear();
        self.invalidate_page();
    }

    pub fn show_all_reviews(&mut self) {
        self.overlay = Overlay::AllReviews;
        self.overlay_scroll = 0;
    }

    // ------------------------------------------------------------------------
    // Itinerary and lists
    // ------------------------------------------------------------------------

    /// "View all" / "View less" for itinerary days.
    pub fn toggle_all_days(&mut self) {
        let days = self.day_numbers();
        self.itinerary.toggle_all(&days);
        self.invalidate_page();
    }

    /// Toggle the itinerary day whose header is nearest above the band.
    /// Returns the day toggled, if the band is inside the itinerary.
    pub fn toggle_day_in_view(&mut self) -> Option<u32> {
        let (band_top, _) = observation_band(self.scroll_offset, self.viewport_height);
        let day = self.layout.as_ref()?.day_at(band_top)?;
        self.itinerary.toggle_day(day);
        self.invalidate_page();
        Some(day)
    }

    /// Expand every collapsible list on the page, or collapse them all.
    pub fn toggle_lists(&mut self) {
        let keys = self
            .layout
            .as_ref()
            .map(|l| l.list_keys.clone())
            .unwrap_or_default();
        self.lists.toggle_all(&keys);
        self.invalidate_page();
    }

    // ------------------------------------------------------------------------
    // Gallery and viewer
    // ------------------------------------------------------------------------

    /// Open the full gallery. Disabled while images are pending or failed.
    pub fn show_gallery(&mut self) -> bool {
        match self.images() {
            Some(set) if !set.images.is_empty() => {
                self.gallery.open_gallery();
                self.overlay = Overlay::Gallery;
                true
            }
            _ => false,
        }
    }

    pub fn close_gallery(&mut self) {
        self.gallery.close_gallery();
        if self.overlay == Overlay::Gallery {
            self.overlay = Overlay::None;
        }
    }

    /// Enlarge the mosaic's main image.
    pub fn view_main_image(&mut self) -> bool {
        let url = self
            .images()
            .and_then(mosaic)
            .map(|m| m.main.url.clone());
        match url {
            Some(url) => {
                self.gallery.open_viewer(url);
                true
            }
            None => false,
        }
    }

    /// Enlarge the image under the gallery cursor.
    pub fn view_selected_image(&mut self) -> bool {
        let url = self
            .images()
            .and_then(|set| set.images.get(self.gallery.cursor))
            .map(|img| img.url.clone());
        match url {
            Some(url) => {
                self.gallery.open_viewer(url);
                true
            }
            None => false,
        }
    }

    /// The enlarged image and its position in the gallery.
    pub fn viewed_image(&self) -> Option<(usize, &Image)> {
        let url = self.gallery.viewer()?;
        self.images()?
            .images
            .iter()
            .enumerate()
            .find(|(_, img)| img.url == url)
    }

    /// Move the viewer to the next/previous image, wrapping around.
    pub fn step_viewer(&mut self, delta: isize) {
        let Some(set) = self.images() else {
            return;
        };
        let len = set.images.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.viewed_image().map_or(0, |(i, _)| i) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        let url = set.images[next].url.clone();
        self.gallery.cursor = next;
        self.gallery.open_viewer(url);
    }

    /// Close the topmost surface. Returns false if there was nothing to close.
    pub fn back(&mut self) -> bool {
        if self.gallery.viewer().is_some() {
            self.gallery.close_viewer();
            return true;
        }
        match self.overlay {
            Overlay::None => false,
            Overlay::Gallery => {
                self.close_gallery();
                true
            }
            Overlay::Help | Overlay::AllReviews => {
                self.overlay = Overlay::None;
                true
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = if self.overlay == Overlay::Help {
            Overlay::None
        } else {
            self.overlay_scroll = 0;
            Overlay::Help
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
