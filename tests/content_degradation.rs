//! Integration tests for per-category degradation against a mock content
//! service: each category settles on its own, and a failing one never holds
//! back or spoils the others.

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tripview::aggregator::{fetch_all, CategoryStatus, ContentAggregator, ImagesState};
use tripview::content::{ContentCategory, ContentClient, RetryPolicy};
use tripview::locale::Language;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(20),
        timeout: Duration::from_millis(150),
    }
}

fn reviews_body() -> serde_json::Value {
    let reviews: Vec<_> = [(1, "Ana", 5), (2, "Luis", 4), (3, "Marta", 5), (4, "Tom", 3), (5, "Eva", 5)]
        .iter()
        .map(|(id, name, rating)| {
            json!({
                "id": id,
                "name": name,
                "date": "Enero 2025",
                "rating": rating,
                "body": format!("Reseña de {}", name)
            })
        })
        .collect();
    json!({
        "reviews": reviews,
        "total_reviews": 5,
        "average_rating": 4.4,
        "star_distribution": {"5": 3, "4": 1, "3": 1, "2": 0, "1": 0}
    })
}

fn itinerary_body() -> serde_json::Value {
    let days: Vec<_> = (1..=4)
        .map(|day| {
            json!({
                "day": day,
                "title": format!("Día {}", day),
                "description": "Recorrido",
                "accommodation": "Hotel (1 noche)",
                "included_activities": "Bus, Guía",
                "meals": "Desayuno",
                "optional_activities": [],
                "special_info": ""
            })
        })
        .collect();
    json!({"package_id": "4days", "itinerary": days, "total_days": 4})
}

async fn mount_reviews(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/reviews/4days"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reviews_body()))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_itinerary(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/itinerary/4days"))
        .and(query_param("lang", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(itinerary_body()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_slow_images_degrade_alone() {
    let server = MockServer::start().await;
    mount_reviews(&server).await;
    mount_itinerary(&server).await;
    // Every images attempt outlives the per-attempt timeout
    Mock::given(method("GET"))
        .and(path("/api/images/4days"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"package_id": "4days", "images": []}))
                .set_delay(Duration::from_millis(600)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = ContentClient::new(&server.uri(), fast_policy()).unwrap();
    let mut aggregator = ContentAggregator::seeded(Language::Es, "4days");
    aggregator.load(&client).await;

    let view = aggregator.view();
    assert_eq!(view.reviews.status, CategoryStatus::Loaded);
    assert_eq!(view.reviews.payload.reviews.len(), 5);
    assert_eq!(view.reviews.payload.aggregate.average_rating, 4.4);
    assert_eq!(view.itinerary.status, CategoryStatus::Loaded);
    assert_eq!(view.itinerary.payload.days.len(), 4);
    assert!(matches!(view.images, ImagesState::Failed { .. }));
    assert!(aggregator.is_settled());
    // Expectations (1 + 1 + 3 requests) are verified when the server drops
}

#[tokio::test]
async fn test_fast_categories_settle_before_slow_images() {
    let server = MockServer::start().await;
    mount_reviews(&server).await;
    mount_itinerary(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/images/4days"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(50)))
        .expect(3)
        .mount(&server)
        .await;

    let client = ContentClient::new(&server.uri(), fast_policy()).unwrap();
    let order: Vec<ContentCategory> = fetch_all(&client, "4days", Language::Es)
        .map(|settlement| settlement.category())
        .collect()
        .await;

    assert_eq!(order.len(), 3);
    assert_eq!(order.last(), Some(&ContentCategory::Images));
}

#[tokio::test]
async fn test_unreachable_service_keeps_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews/4days"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;
    // Client errors are not retried
    Mock::given(method("GET"))
        .and(path("/api/itinerary/4days"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/images/4days"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package_id": "4days",
            "images": [{"id": 7, "url": "https://cdn.example.com/7.jpg", "category": "hero", "alt_text": "Lago"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ContentClient::new(&server.uri(), fast_policy()).unwrap();
    let seeded = ContentAggregator::seeded(Language::Es, "4days");
    let fallback_reviews = seeded.view().reviews.payload.clone();
    let fallback_days = seeded.view().itinerary.payload.days.len();

    let mut aggregator = seeded;
    aggregator.load(&client).await;
    let view = aggregator.view();

    assert_eq!(view.reviews.status, CategoryStatus::Degraded);
    assert_eq!(view.reviews.payload, fallback_reviews);
    assert!(view.reviews.last_error.is_some());
    assert_eq!(view.itinerary.status, CategoryStatus::Degraded);
    assert_eq!(view.itinerary.payload.days.len(), fallback_days);

    let set = view.images.image_set().expect("images loaded");
    assert_eq!(set.images.len(), 1);
    assert_eq!(
        set.images[0].url,
        format!("{}/api/images/4days/proxy/7", server.uri())
    );
}
