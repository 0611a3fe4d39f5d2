//! Expansion state for itinerary days and collapsible lists.

use std::collections::{BTreeSet, HashSet};

/// Items a collapsed list shows before "View all".
pub const COLLAPSED_VISIBLE: usize = 5;

/// Which itinerary days are expanded, keyed by day number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryExpansion {
    open: BTreeSet<u32>,
}

impl ItineraryExpansion {
    pub fn is_open(&self, day: u32) -> bool {
        self.open.contains(&day)
    }

    pub fn toggle_day(&mut self, day: u32) {
        if !self.open.remove(&day) {
            self.open.insert(day);
        }
    }

    /// True when every one of `days` is open (and there is at least one).
    pub fn all_open(&self, days: &[u32]) -> bool {
        !days.is_empty() && days.iter().all(|d| self.open.contains(d))
    }

    /// Close everything if all days are open, otherwise open all of them.
    pub fn toggle_all(&mut self, days: &[u32]) {
        if self.all_open(days) {
            self.open.clear();
        } else {
            self.open = days.iter().copied().collect();
        }
    }

    /// Drop days that no longer exist (the itinerary was replaced).
    pub fn retain_days(&mut self, days: &[u32]) {
        self.open.retain(|d| days.contains(d));
    }
}

/// Identifies one collapsible list on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    InclusionTransport,
    InclusionAccommodation,
    InclusionActivities,
    InclusionOptional,
    DayActivities(u32),
    DayOptional(u32),
}

/// Which collapsible lists are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedLists {
    expanded: HashSet<ListKey>,
}

impl ExpandedLists {
    pub fn is_expanded(&self, key: ListKey) -> bool {
        self.expanded.contains(&key)
    }

    pub fn toggle(&mut self, key: ListKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    /// Expand every list in `keys`, or collapse them all if they already are.
    pub fn toggle_all(&mut self, keys: &[ListKey]) {
        if !keys.is_empty() && keys.iter().all(|k| self.expanded.contains(k)) {
            for key in keys {
                self.expanded.remove(key);
            }
        } else {
            self.expanded.extend(keys.iter().copied());
        }
    }

    /// The slice of `items` currently visible for `key`.
    pub fn visible<'a, T>(&self, key: ListKey, items: &'a [T]) -> &'a [T] {
        if self.is_expanded(key) {
            items
        } else {
            &items[..items.len().min(COLLAPSED_VISIBLE)]
        }
    }
}

/// Whether a list of `len` items needs a "View all" toggle at all.
pub fn needs_toggle(len: usize) -> bool {
    len > COLLAPSED_VISIBLE
}
