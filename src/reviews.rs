//! Star-rating filter and review statistics.

use crate::content::{Review, ReviewAggregate};
use std::collections::BTreeSet;

/// Most reviews shown inline on the page.
pub const FEATURED_LIMIT: usize = 8;

/// Selected star ratings. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    selected: BTreeSet<u8>,
}

impl ReviewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rating` to the selection, or remove it if already present.
    pub fn toggle(&mut self, rating: u8) {
        if !self.selected.remove(&rating) {
            self.selected.insert(rating);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, rating: u8) -> bool {
        self.selected.contains(&rating)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = u8> + '_ {
        self.selected.iter().copied()
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.selected.is_empty() || self.selected.contains(&review.rating)
    }

    /// Matching reviews, highest rating first. Equal ratings keep their
    /// original order.
    pub fn filtered<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let mut out: Vec<&Review> = reviews.iter().filter(|r| self.matches(r)).collect();
        sort_by_rating(&mut out);
        out
    }

    /// The inline view: filtered, sorted, capped at [`FEATURED_LIMIT`].
    pub fn featured<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        let mut out = self.filtered(reviews);
        out.truncate(FEATURED_LIMIT);
        out
    }
}

/// Every review, highest rating first, ignoring any filter.
pub fn all_reviews_sorted(reviews: &[Review]) -> Vec<&Review> {
    let mut out: Vec<&Review> = reviews.iter().collect();
    sort_by_rating(&mut out);
    out
}

fn sort_by_rating(reviews: &mut [&Review]) {
    // sort_by_key is stable
    reviews.sort_by_key(|r| std::cmp::Reverse(r.rating));
}

/// One row of the star breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRow {
    pub stars: u8,
    pub count: u32,
    /// Share of all reviews, 0.0..=1.0.
    pub share: f64,
}

/// Display-ready summary of a [`ReviewAggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub average: f64,
    pub total: u32,
    /// Rows for 5 down to 1 stars.
    pub rows: Vec<StarRow>,
}

impl ReviewStats {
    pub fn from_aggregate(aggregate: &ReviewAggregate) -> Self {
        let total = aggregate.total_count;
        let rows = (1..=5u8)
            .rev()
            .map(|stars| {
                let count = aggregate.count_for(stars);
                let share = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                StarRow {
                    stars,
                    count,
                    share,
                }
            })
            .collect();

        Self {
            average: aggregate.average_rating,
            total,
            rows,
        }
    }

    /// Average with one decimal, e.g. "4.4".
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// Fill percentage (0..=100) of header star `index` (0-based) for `average`.
pub fn star_fill(average: f64, index: usize) -> f64 {
    ((average - index as f64) * 100.0).clamp(0.0, 100.0)
}
