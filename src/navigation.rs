//! Scroll-spy and programmatic navigation between page sections.
//!
//! The active section has a single source of truth: visibility changes
//! reported for the observation band. A navigation request only produces a
//! scroll target; the section becomes active when the scroll brings it into
//! the band. While a scroll is in flight, intermediate sections may briefly
//! be reported active.

use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Separator substituted for spaces when deriving anchor ids.
pub const ANCHOR_SEPARATOR: char = '-';

/// Top edge of the observation band, as a percentage of viewport height.
pub const BAND_TOP_PERCENT: usize = 20;
/// Bottom edge of the observation band, as a percentage of viewport height.
pub const BAND_BOTTOM_PERCENT: usize = 30;

/// Frames a programmatic scroll takes to land.
pub const SCROLL_FRAMES: u32 = 8;

#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("section label is empty")]
    EmptyLabel,
    #[error("section labels {first:?} and {second:?} map to the same anchor {anchor:?}")]
    AnchorCollision {
        first: String,
        second: String,
        anchor: String,
    },
}

/// Derive a section's anchor id from its label.
pub fn anchor_id(label: &str) -> String {
    label.replace(' ', &ANCHOR_SEPARATOR.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    pub label: String,
    pub anchor_id: String,
}

/// An "entered/left the band" notification for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    pub anchor_id: String,
    pub entered: bool,
}

/// Where a navigation request wants the page to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor_id: String,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: Vec<SectionState>,
    by_anchor: HashMap<String, usize>,
    active: Option<usize>,
}

impl SectionNavigator {
    /// Build a navigator for the given labels, in page order.
    ///
    /// Fails if two labels would share an anchor, since the anchor must map
    /// back to exactly one label.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self, NavigationError> {
        let mut sections = Vec::with_capacity(labels.len());
        let mut by_anchor: HashMap<String, usize> = HashMap::new();

        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                return Err(NavigationError::EmptyLabel);
            }
            let anchor = anchor_id(label);
            if let Some(&existing) = by_anchor.get(&anchor) {
                let first: &SectionState = &sections[existing];
                return Err(NavigationError::AnchorCollision {
                    first: first.label.clone(),
                    second: label.to_string(),
                    anchor,
                });
            }
            by_anchor.insert(anchor.clone(), sections.len());
            sections.push(SectionState {
                label: label.to_string(),
                anchor_id: anchor,
            });
        }

        Ok(Self {
            sections,
            by_anchor,
            active: None,
        })
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    pub fn label_for_anchor(&self, anchor: &str) -> Option<&str> {
        self.by_anchor
            .get(anchor)
            .map(|&i| self.sections[i].label.as_str())
    }

    pub fn index_of_label(&self, label: &str) -> Option<usize> {
        self.by_anchor.get(&anchor_id(label)).copied()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].label.as_str())
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active_label() == Some(label)
    }

    /// Apply one visibility notification. Returns true if the active section
    /// changed.
    ///
    /// Entering the band makes a section active; leaving it never clears the
    /// active section. When several sections enter in one batch the last one
    /// processed wins.
    pub fn on_visibility(&mut self, change: &VisibilityChange) -> bool {
        if !change.entered {
            return false;
        }
        let Some(&index) = self.by_anchor.get(&change.anchor_id) else {
            tracing::debug!(anchor = %change.anchor_id, "Visibility change for unknown section");
            return false;
        };
        if self.active == Some(index) {
            return false;
        }
        tracing::trace!(anchor = %change.anchor_id, "Active section changed");
        self.active = Some(index);
        true
    }

    /// Resolve a navigation request for `label`. Does not touch the active
    /// section.
    pub fn request_scroll(&self, label: &str) -> Option<ScrollRequest> {
        let anchor = anchor_id(label);
        let index = *self.by_anchor.get(&anchor)?;
        Some(ScrollRequest {
            anchor_id: anchor,
            index,
        })
    }

    /// Navigation request for the section `delta` steps from the active one
    /// (or from the top, before any section has been active).
    pub fn request_relative(&self, delta: isize) -> Option<ScrollRequest> {
        if self.sections.is_empty() {
            return None;
        }
        let last = self.sections.len() as isize - 1;
        let from = match self.active {
            Some(i) => i as isize,
            None if delta > 0 => -1,
            None => 0,
        };
        let index = (from + delta).clamp(0, last) as usize;
        let section = &self.sections[index];
        Some(ScrollRequest {
            anchor_id: section.anchor_id.clone(),
            index,
        })
    }
}

/// Line span a section occupies in the rendered page, `start..end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub anchor_id: String,
    pub start: usize,
    pub end: usize,
}

/// Band of the viewport, in absolute page lines, that counts as "in view".
pub fn observation_band(offset: usize, viewport_height: usize) -> (usize, usize) {
    let top = offset + viewport_height * BAND_TOP_PERCENT / 100;
    let bottom = (offset + viewport_height * BAND_BOTTOM_PERCENT / 100).max(top + 1);
    (top, bottom)
}

/// Offset that places a section's first line at the top of the band.
pub fn scroll_target(span_start: usize, viewport_height: usize) -> usize {
    span_start.saturating_sub(viewport_height * BAND_TOP_PERCENT / 100)
}

/// Turns scroll positions into enter/leave notifications for the band.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    intersecting: HashSet<String>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the band at this position against the last observation and
    /// report sections that entered or left it, in span order.
    pub fn observe(
        &mut self,
        spans: &[SectionSpan],
        offset: usize,
        viewport_height: usize,
    ) -> Vec<VisibilityChange> {
        let (top, bottom) = observation_band(offset, viewport_height);
        let mut changes = Vec::new();

        for span in spans {
            let inside = span.start < bottom && span.end > top;
            let was_inside = self.intersecting.contains(&span.anchor_id);
            if inside && !was_inside {
                self.intersecting.insert(span.anchor_id.clone());
                changes.push(VisibilityChange {
                    anchor_id: span.anchor_id.clone(),
                    entered: true,
                });
            } else if !inside && was_inside {
                self.intersecting.remove(&span.anchor_id);
                changes.push(VisibilityChange {
                    anchor_id: span.anchor_id.clone(),
                    entered: false,
                });
            }
        }

        changes
    }

    /// Forget everything, e.g. after the layout changed width.
    pub fn reset(&mut self) {
        self.intersecting.clear();
    }
}

/// Smooth scroll from one offset to another over a fixed number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    from: usize,
    to: usize,
    frame: u32,
    frames: u32,
}

impl ScrollAnimation {
    pub fn new(from: usize, to: usize) -> Self {
        Self::with_frames(from, to, SCROLL_FRAMES)
    }

    pub fn with_frames(from: usize, to: usize, frames: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            frames: frames.max(1),
        }
    }

    pub fn target(&self) -> usize {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advance one frame and return the new offset, or `None` once landed.
    pub fn step(&mut self) -> Option<usize> {
        if self.is_done() {
            return None;
        }
        self.frame += 1;
        let t = self.frame as f64 / self.frames as f64;
        // Ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = self.from as f64;
        let to = self.to as f64;
        let offset = (from + (to - from) * eased).round() as usize;
        Some(if self.is_done() { self.to } else { offset })
    }
}

/// Horizontally scrolling window over the nav labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavStrip {
    first_visible: usize,
}

impl NavStrip {
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn scroll_left(&mut self) {
        self.first_visible = self.first_visible.saturating_sub(1);
    }

    pub fn scroll_right(&mut self, total: usize) {
        if self.first_visible + 1 < total {
            self.first_visible += 1;
        }
    }

    /// Shift the window so `index` is visible when `visible` labels fit.
    pub fn reveal(&mut self, index: usize, visible: usize) {
        let visible = visible.max(1);
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + visible {
            self.first_visible = index + 1 - visible;
        }
    }
}
