//! tripview: a terminal presenter for a bilingual travel package page.
//!
//! Page content comes from three independent categories (reviews, images,
//! itinerary) fetched concurrently with retry. Reviews and itinerary start
//! from bundled fallback copy and are replaced as live data arrives; images
//! have no fallback and show a loading or failure state instead.

pub mod aggregator;
pub mod app;
pub mod config;
pub mod content;
pub mod copy;
pub mod gallery;
pub mod itinerary;
pub mod keybindings;
pub mod locale;
pub mod navigation;
pub mod reviews;
pub mod theme;
pub mod ui;
pub mod util;
