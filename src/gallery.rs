//! Image classification, per-slot representative images, and the gallery and
//! full-screen viewer state.
//!
//! Nothing here owns images: functions take a borrowed [`ImageSet`] from the
//! aggregator's view and return references into it.

use crate::content::{Image, ImageSet};

/// Category used as the second-tier fallback for every slot.
pub const HERO_CATEGORY: &str = "hero";

/// Side tiles shown next to the large mosaic image.
pub const MOSAIC_SIDE_TILES: usize = 4;

/// A page section that shows one representative image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Overview,
    Itinerary,
    Adventure,
}

impl Slot {
    pub fn category(self) -> &'static str {
        match self {
            Slot::Overview => "overview",
            Slot::Itinerary => "itinerary",
            Slot::Adventure => "adventure",
        }
    }
}

/// Images whose category equals `category`, ignoring ASCII case, in fetch order.
pub fn images_by_category<'a>(set: &'a ImageSet, category: &str) -> Vec<&'a Image> {
    set.images
        .iter()
        .filter(|img| img.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Representative image for a slot: first of the slot's category, else the
/// first hero image, else the first image overall.
pub fn representative(set: &ImageSet, slot: Slot) -> Option<&Image> {
    let first_of = |category: &str| {
        set.images
            .iter()
            .find(|img| img.category.eq_ignore_ascii_case(category))
    };
    first_of(slot.category())
        .or_else(|| first_of(HERO_CATEGORY))
        .or_else(|| set.images.first())
}

/// The header mosaic: one large image and up to four side tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosaic<'a> {
    pub main: &'a Image,
    pub side: Vec<&'a Image>,
}

pub fn mosaic(set: &ImageSet) -> Option<Mosaic<'_>> {
    let (main, rest) = set.images.split_first()?;
    Some(Mosaic {
        main,
        side: rest.iter().take(MOSAIC_SIDE_TILES).collect(),
    })
}

/// Full gallery list cursor and the single enlarged image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub open: bool,
    pub cursor: usize,
    viewer: Option<String>,
}

impl GalleryState {
    pub fn open_gallery(&mut self) {
        self.open = true;
        self.cursor = 0;
    }

    pub fn close_gallery(&mut self) {
        self.open = false;
        self.viewer = None;
    }

    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Enlarge an image. Replaces whatever was enlarged before.
    pub fn open_viewer(&mut self, url: impl Into<String>) {
        self.viewer = Some(url.into());
    }

    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }

    pub fn viewer(&self) -> Option<&str> {
        self.viewer.as_deref()
    }
}
