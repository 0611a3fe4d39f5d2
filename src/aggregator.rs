//! Per-category content state and the concurrent fetch that fills it.
//!
//! The aggregator is the only writer of fetch state. It is seeded before any
//! request goes out (fallback for reviews and itinerary, an explicit pending
//! marker for images) and then updated once per category as results arrive.

use crate::content::fallback;
use crate::content::{
    ContentCategory, ContentClient, FetchError, ImageSet, Itinerary, ReviewsPayload,
};
use crate::locale::Language;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    /// Fetch in flight; fallback payload on display.
    Pending,
    /// Live data on display.
    Loaded,
    /// Fetch failed; fallback payload on display.
    Degraded,
}

/// State of a category that always has something presentable.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryState<T> {
    pub status: CategoryStatus,
    pub payload: T,
    pub last_error: Option<String>,
}

impl<T> CategoryState<T> {
    fn seeded(payload: T) -> Self {
        Self {
            status: CategoryStatus::Pending,
            payload,
            last_error: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == CategoryStatus::Loaded
    }
}

/// Images have no safe placeholder, so pending and failed are shown as such.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagesState {
    Pending,
    Loaded(ImageSet),
    Failed { error: String },
}

impl ImagesState {
    pub fn image_set(&self) -> Option<&ImageSet> {
        match self {
            ImagesState::Loaded(set) => Some(set),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImagesState::Pending)
    }
}

/// The final outcome of one category's fetch.
#[derive(Debug)]
pub enum Settlement {
    Reviews(Result<ReviewsPayload, FetchError>),
    Images(Result<ImageSet, FetchError>),
    Itinerary(Result<Itinerary, FetchError>),
}

impl Settlement {
    /// A failed outcome for `category`.
    pub fn failed(category: ContentCategory, error: FetchError) -> Self {
        match category {
            ContentCategory::Reviews => Settlement::Reviews(Err(error)),
            ContentCategory::Images => Settlement::Images(Err(error)),
            ContentCategory::Itinerary => Settlement::Itinerary(Err(error)),
        }
    }

    pub fn category(&self) -> ContentCategory {
        match self {
            Settlement::Reviews(_) => ContentCategory::Reviews,
            Settlement::Images(_) => ContentCategory::Images,
            Settlement::Itinerary(_) => ContentCategory::Itinerary,
        }
    }
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub reviews: CategoryState<ReviewsPayload>,
    pub images: ImagesState,
    pub itinerary: CategoryState<Itinerary>,
}

#[derive(Debug)]
pub struct ContentAggregator {
    language: Language,
    package_id: String,
    view: ContentView,
    /// Bumped on every applied settlement; lets renderers cache derived layout.
    revision: u64,
}

impl ContentAggregator {
    /// Seed every category before any fetch is issued.
    pub fn seeded(language: Language, package_id: &str) -> Self {
        Self {
            language,
            package_id: package_id.to_string(),
            view: ContentView {
                reviews: CategoryState::seeded(fallback::reviews(language)),
                images: ImagesState::Pending,
                itinerary: CategoryState::seeded(fallback::itinerary(language, package_id)),
            },
            revision: 0,
        }
    }

    pub fn view(&self) -> &ContentView {
        &self.view
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// True once no category is pending.
    pub fn is_settled(&self) -> bool {
        self.view.reviews.status != CategoryStatus::Pending
            && self.view.itinerary.status != CategoryStatus::Pending
            && !self.view.images.is_pending()
    }

    /// Categories whose fetch has not settled yet.
    pub fn pending(&self) -> Vec<ContentCategory> {
        let mut pending = Vec::new();
        if self.view.reviews.status == CategoryStatus::Pending {
            pending.push(ContentCategory::Reviews);
        }
        if self.view.images.is_pending() {
            pending.push(ContentCategory::Images);
        }
        if self.view.itinerary.status == CategoryStatus::Pending {
            pending.push(ContentCategory::Itinerary);
        }
        pending
    }

    /// Fold one category's final outcome into the view.
    ///
    /// Failure keeps (or restores) fallback content for reviews and itinerary
    /// and switches images to the failed state. Other categories are untouched.
    pub fn apply(&mut self, settlement: Settlement) -> ContentCategory {
        let category = settlement.category();
        match settlement {
            Settlement::Reviews(Ok(payload)) => {
                tracing::info!(category = %category, count = payload.reviews.len(), "Loaded live content");
                self.view.reviews = CategoryState {
                    status: CategoryStatus::Loaded,
                    payload,
                    last_error: None,
                };
            }
            Settlement::Reviews(Err(e)) => {
                tracing::warn!(category = %category, error = %e, kind = ?e.kind(), "Using fallback content");
                self.view.reviews = CategoryState {
                    status: CategoryStatus::Degraded,
                    payload: fallback::reviews(self.language),
                    last_error: Some(e.to_string()),
                };
            }
            Settlement::Itinerary(Ok(payload)) => {
                tracing::info!(category = %category, count = payload.days.len(), "Loaded live content");
                self.view.itinerary = CategoryState {
                    status: CategoryStatus::Loaded,
                    payload,
                    last_error: None,
                };
            }
            Settlement::Itinerary(Err(e)) => {
                tracing::warn!(category = %category, error = %e, kind = ?e.kind(), "Using fallback content");
                self.view.itinerary = CategoryState {
                    status: CategoryStatus::Degraded,
                    payload: fallback::itinerary(self.language, &self.package_id),
                    last_error: Some(e.to_string()),
                };
            }
            Settlement::Images(Ok(set)) => {
                tracing::info!(category = %category, count = set.images.len(), "Loaded live content");
                self.view.images = ImagesState::Loaded(set);
            }
            Settlement::Images(Err(e)) => {
                tracing::warn!(category = %category, error = %e, kind = ?e.kind(), "Images unavailable");
                self.view.images = ImagesState::Failed {
                    error: e.to_string(),
                };
            }
        }
        self.revision += 1;
        category
    }

    /// Run all three fetches and apply each result as it arrives.
    pub async fn load(&mut self, client: &ContentClient) {
        let mut settlements = fetch_all(client, &self.package_id, self.language);
        while let Some(settlement) = settlements.next().await {
            self.apply(settlement);
        }
    }
}

/// Issue the three category fetches together.
///
/// The returned stream yields each category's final outcome in arrival order.
/// No fetch waits on another.
pub fn fetch_all(
    client: &ContentClient,
    package_id: &str,
    language: Language,
) -> FuturesUnordered<BoxFuture<'static, Settlement>> {
    let settlements = FuturesUnordered::new();

    let (c, pkg) = (client.clone(), package_id.to_string());
    settlements.push(async move { Settlement::Reviews(c.fetch_reviews(&pkg).await) }.boxed());

    let (c, pkg) = (client.clone(), package_id.to_string());
    settlements.push(async move { Settlement::Images(c.fetch_images(&pkg).await) }.boxed());

    let (c, pkg) = (client.clone(), package_id.to_string());
    settlements.push(
        async move { Settlement::Itinerary(c.fetch_itinerary(&pkg, language).await) }.boxed(),
    );

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Image, ItineraryDay, ReviewAggregate};
    use std::collections::BTreeMap;

    fn live_reviews() -> ReviewsPayload {
        ReviewsPayload {
            aggregate: ReviewAggregate {
                average_rating: 5.0,
                total_count: 1,
                star_distribution: BTreeMap::from([(5, 1)]),
            },
            reviews: vec![],
        }
    }

    fn live_images() -> ImageSet {
        ImageSet {
            package_id: "4days".to_string(),
            images: vec![Image {
                id: 1,
                url: "http://localhost:8000/api/images/4days/proxy/1".to_string(),
                category: "hero".to_string(),
                alt_text: "Lago".to_string(),
                alt_text_en: None,
            }],
        }
    }

    fn live_itinerary() -> Itinerary {
        Itinerary {
            package_id: "4days".to_string(),
            days: vec![ItineraryDay {
                day_number: 1,
                title: "Live".to_string(),
                description: String::new(),
                accommodation: String::new(),
                included_activities: String::new(),
                meals: String::new(),
                optional_activities: vec![],
                special_info: None,
            }],
        }
    }

    #[test]
    fn test_seeded_state() {
        let agg = ContentAggregator::seeded(Language::En, "4days");
        let view = agg.view();

        assert_eq!(view.reviews.status, CategoryStatus::Pending);
        assert_eq!(view.reviews.payload, fallback::reviews(Language::En));
        assert_eq!(view.itinerary.payload.days.len(), 4);
        assert_eq!(view.images, ImagesState::Pending);
        assert!(!agg.is_settled());
    }

    #[test]
    fn test_success_replaces_fallback() {
        let mut agg = ContentAggregator::seeded(Language::Es, "4days");
        agg.apply(Settlement::Reviews(Ok(live_reviews())));
        agg.apply(Settlement::Itinerary(Ok(live_itinerary())));

        assert!(agg.view().reviews.is_live());
        assert_eq!(agg.view().reviews.payload.aggregate.total_count, 1);
        assert_eq!(agg.view().itinerary.payload.days[0].title, "Live");
        // Images untouched by other categories settling.
        assert!(agg.view().images.is_pending());
    }

    #[test]
    fn test_failure_degrades_only_that_category() {
        let mut agg = ContentAggregator::seeded(Language::Es, "4days");
        agg.apply(Settlement::Images(Ok(live_images())));
        agg.apply(Settlement::Reviews(Err(FetchError::HttpStatus(503))));

        let view = agg.view();
        assert_eq!(view.reviews.status, CategoryStatus::Degraded);
        assert_eq!(view.reviews.payload, fallback::reviews(Language::Es));
        assert!(view.reviews.last_error.is_some());
        assert_eq!(view.images.image_set().map(|s| s.images.len()), Some(1));
        assert_eq!(view.itinerary.status, CategoryStatus::Pending);
    }

    #[test]
    fn test_images_failure_is_explicit() {
        let mut agg = ContentAggregator::seeded(Language::En, "4days");
        agg.apply(Settlement::Images(Err(FetchError::Decode("bad".into()))));
        assert!(matches!(agg.view().images, ImagesState::Failed { .. }));
        assert!(agg.view().images.image_set().is_none());
    }

    #[test]
    fn test_pending_lists_unsettled_categories() {
        let mut agg = ContentAggregator::seeded(Language::En, "4days");
        assert_eq!(agg.pending(), ContentCategory::ALL.to_vec());

        agg.apply(Settlement::Reviews(Ok(live_reviews())));
        assert_eq!(
            agg.pending(),
            vec![ContentCategory::Images, ContentCategory::Itinerary]
        );

        agg.apply(Settlement::failed(
            ContentCategory::Itinerary,
            FetchError::Aborted("gone".into()),
        ));
        assert_eq!(agg.view().itinerary.status, CategoryStatus::Degraded);
        assert_eq!(agg.pending(), vec![ContentCategory::Images]);
    }

    #[test]
    fn test_settled_after_all_three_and_revision_counts() {
        let mut agg = ContentAggregator::seeded(Language::En, "4days");
        agg.apply(Settlement::Reviews(Ok(live_reviews())));
        agg.apply(Settlement::Images(Err(FetchError::HttpStatus(404))));
        assert!(!agg.is_settled());
        agg.apply(Settlement::Itinerary(Err(FetchError::HttpStatus(500))));

        assert!(agg.is_settled());
        assert_eq!(agg.revision(), 3);
        assert_eq!(agg.view().itinerary.payload.days.len(), 4);
    }

    #[test]
    fn test_later_failure_reverts_to_fallback() {
        let mut agg = ContentAggregator::seeded(Language::En, "4days");
        agg.apply(Settlement::Itinerary(Ok(live_itinerary())));
        agg.apply(Settlement::Itinerary(Err(FetchError::HttpStatus(502))));
        assert_eq!(
            agg.view().itinerary.payload,
            fallback::itinerary(Language::En, "4days")
        );
    }
}
