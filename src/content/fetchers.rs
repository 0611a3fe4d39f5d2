use super::client::{get_json, FetchError, RetryPolicy};
use super::model::{ImageSet, Itinerary, ReviewsPayload};
use super::wire::{WireImagesResponse, WireItineraryResponse, WireReviewsResponse};
use crate::locale::Language;
use reqwest::redirect::Policy;

/// Create a redirect policy with loop detection and limited hops.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

/// Category fetchers for the content service.
///
/// The base URL is fixed for the lifetime of the client; it is injected here
/// rather than read from any global.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    policy: RetryPolicy,
}

impl ContentClient {
    /// Build a client with its own HTTP connection pool.
    pub fn new(base_url: &str, policy: RetryPolicy) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .user_agent(concat!("tripview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, base_url, policy))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: &str, policy: RetryPolicy) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn reviews_url(&self, package_id: &str) -> String {
        format!(
            "{}/api/reviews/{}",
            self.base_url,
            urlencoding::encode(package_id)
        )
    }

    pub fn images_url(&self, package_id: &str) -> String {
        format!(
            "{}/api/images/{}",
            self.base_url,
            urlencoding::encode(package_id)
        )
    }

    pub fn itinerary_url(&self, package_id: &str, language: Language) -> String {
        format!(
            "{}/api/itinerary/{}?lang={}",
            self.base_url,
            urlencoding::encode(package_id),
            language.code()
        )
    }

    /// Reviews plus the server-side aggregate.
    pub async fn fetch_reviews(&self, package_id: &str) -> Result<ReviewsPayload, FetchError> {
        let url = self.reviews_url(package_id);
        let wire: WireReviewsResponse = get_json(&self.http, &url, &self.policy).await?;
        let payload = wire.normalize()?;
        tracing::debug!(count = payload.reviews.len(), "Fetched reviews");
        Ok(payload)
    }

    /// Image set with every URL rewritten to the service's proxy path.
    pub async fn fetch_images(&self, package_id: &str) -> Result<ImageSet, FetchError> {
        let url = self.images_url(package_id);
        let wire: WireImagesResponse = get_json(&self.http, &url, &self.policy).await?;
        let set = wire.normalize(&self.base_url, package_id);
        tracing::debug!(count = set.images.len(), "Fetched images");
        Ok(set)
    }

    /// Itinerary days in the requested language.
    pub async fn fetch_itinerary(
        &self,
        package_id: &str,
        language: Language,
    ) -> Result<Itinerary, FetchError> {
        let url = self.itinerary_url(package_id, language);
        let wire: WireItineraryResponse = get_json(&self.http, &url, &self.policy).await?;
        let itinerary = wire.normalize()?;
        tracing::debug!(days = itinerary.days.len(), "Fetched itinerary");
        Ok(itinerary)
    }
}
