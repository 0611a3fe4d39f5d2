//! Internal content types.
//!
//! These are what the rest of the crate works with. Wire shapes live in
//! [`super::wire`] and are converted at the fetch boundary.

use std::collections::BTreeMap;
use std::fmt;

/// An independently fetched, independently degradable kind of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    Reviews,
    Images,
    Itinerary,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 3] = [Self::Reviews, Self::Images, Self::Itinerary];

    pub fn name(self) -> &'static str {
        match self {
            Self::Reviews => "reviews",
            Self::Images => "images",
            Self::Itinerary => "itinerary",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u64,
    pub display_name: String,
    /// Opaque display string ("November 2024"); never parsed.
    pub date: String,
    pub rating: u8,
    pub body: String,
}

impl Review {
    /// Rating clamped into 1..=5 for star rendering.
    pub fn display_rating(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// Server-computed review summary. Trusted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAggregate {
    pub average_rating: f64,
    pub total_count: u32,
    /// Rating (1..=5) to number of reviews with that rating.
    pub star_distribution: BTreeMap<u8, u32>,
}

impl ReviewAggregate {
    pub fn count_for(&self, stars: u8) -> u32 {
        self.star_distribution.get(&stars).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsPayload {
    pub aggregate: ReviewAggregate,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: u64,
    pub url: String,
    /// Free-form label: "hero", "overview", "itinerary", "adventure", ...
    pub category: String,
    /// Alt text in the primary language (Spanish).
    pub alt_text: String,
    pub alt_text_en: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub package_id: String,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day_number: u32,
    pub title: String,
    pub description: String,
    pub accommodation: String,
    /// Comma-joined on the wire and kept that way; see [`Self::included_activity_list`].
    pub included_activities: String,
    pub meals: String,
    pub optional_activities: Vec<String>,
    pub special_info: Option<String>,
}

impl ItineraryDay {
    /// Included activities split on commas, trimmed, blanks dropped.
    pub fn included_activity_list(&self) -> Vec<&str> {
        split_list(&self.included_activities)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub package_id: String,
    pub days: Vec<ItineraryDay>,
}

/// Split a comma-joined display list into trimmed, non-empty items.
pub fn split_list(joined: &str) -> Vec<&str> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
