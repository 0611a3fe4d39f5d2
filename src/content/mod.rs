//! Content acquisition: retrying HTTP client, per-category fetchers, wire
//! normalization and bundled fallback content.

pub mod client;
pub mod fallback;
pub mod fetchers;
pub mod model;
pub mod probe;
pub mod wire;

pub use client::{fetch_with_retry, retry_with_backoff, ErrorKind, FetchError, RetryPolicy};
pub use fetchers::ContentClient;
pub use model::{
    ContentCategory, Image, ImageSet, Itinerary, ItineraryDay, Review, ReviewAggregate,
    ReviewsPayload,
};
