//! Wire shapes returned by the content service, and their normalization.
//!
//! The service speaks snake_case and ships a few fields in forms that the
//! presentation layer doesn't want (string-keyed star distribution, empty
//! string for "no special info", direct image URLs that may be blocked
//! cross-origin). Everything is converted here, once, at the boundary.

use super::model::{
    Image, ImageSet, Itinerary, ItineraryDay, Review, ReviewAggregate, ReviewsPayload,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A successful response whose body doesn't satisfy the shape we rely on.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("star distribution key {0:?} is not a rating")]
    BadStarKey(String),
    #[error("itinerary day {0} appears more than once")]
    DuplicateDay(u32),
    #[error("itinerary days are not contiguous from 1 (missing day {0})")]
    MissingDay(u32),
}

#[derive(Debug, Deserialize)]
pub struct WireReview {
    pub id: u64,
    pub name: String,
    pub date: String,
    pub rating: u8,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct WireReviewsResponse {
    pub reviews: Vec<WireReview>,
    pub total_reviews: u32,
    pub average_rating: f64,
    #[serde(default)]
    pub star_distribution: HashMap<String, u32>,
}

#[derive(Debug, Deserialize)]
pub struct WireImage {
    pub id: u64,
    pub url: String,
    pub category: String,
    pub alt_text: String,
    #[serde(default)]
    pub alt_text_en: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireImagesResponse {
    pub package_id: String,
    pub images: Vec<WireImage>,
    #[serde(default)]
    #[allow(dead_code)] // Redundant with images.len(); kept so the full shape is documented
    pub total_images: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WireItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub accommodation: String,
    pub included_activities: String,
    pub meals: String,
    #[serde(default)]
    pub optional_activities: Vec<String>,
    #[serde(default)]
    pub special_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireItineraryResponse {
    pub package_id: String,
    pub itinerary: Vec<WireItineraryDay>,
    #[serde(default)]
    #[allow(dead_code)] // Redundant with itinerary.len(); kept so the full shape is documented
    pub total_days: Option<u32>,
}

impl From<WireReview> for Review {
    fn from(w: WireReview) -> Self {
        Self {
            id: w.id,
            display_name: w.name,
            date: w.date,
            rating: w.rating,
            body: w.body,
        }
    }
}

impl WireReviewsResponse {
    pub fn normalize(self) -> Result<ReviewsPayload, ShapeError> {
        let mut star_distribution = BTreeMap::new();
        for (key, count) in self.star_distribution {
            let stars: u8 = key
                .trim()
                .parse()
                .map_err(|_| ShapeError::BadStarKey(key.clone()))?;
            star_distribution.insert(stars, count);
        }

        Ok(ReviewsPayload {
            aggregate: ReviewAggregate {
                average_rating: self.average_rating,
                total_count: self.total_reviews,
                star_distribution,
            },
            reviews: self.reviews.into_iter().map(Review::from).collect(),
        })
    }
}

/// Proxy path that serves an image through the content service itself.
pub fn proxy_image_url(base_url: &str, package_id: &str, image_id: u64) -> String {
    format!(
        "{}/api/images/{}/proxy/{}",
        base_url,
        urlencoding::encode(package_id),
        image_id
    )
}

impl WireImagesResponse {
    /// Convert, rewriting every image URL to the service's proxy path.
    ///
    /// The package id in the path is the one the caller requested, not the
    /// one echoed in the body.
    pub fn normalize(self, base_url: &str, package_id: &str) -> ImageSet {
        let images = self
            .images
            .into_iter()
            .map(|w| Image {
                url: proxy_image_url(base_url, package_id, w.id),
                id: w.id,
                category: w.category,
                alt_text: w.alt_text,
                alt_text_en: w.alt_text_en,
            })
            .collect();

        ImageSet {
            package_id: self.package_id,
            images,
        }
    }
}

impl From<WireItineraryDay> for ItineraryDay {
    fn from(w: WireItineraryDay) -> Self {
        Self {
            day_number: w.day,
            title: w.title,
            description: w.description,
            accommodation: w.accommodation,
            included_activities: w.included_activities,
            meals: w.meals,
            optional_activities: w.optional_activities,
            special_info: w.special_info.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl WireItineraryResponse {
    /// Convert and check that day numbers run 1..=N without gaps or repeats.
    /// Days are returned in day order regardless of wire order.
    pub fn normalize(self) -> Result<Itinerary, ShapeError> {
        let mut days: Vec<ItineraryDay> = self.itinerary.into_iter().map(Into::into).collect();
        days.sort_by_key(|d| d.day_number);

        for (i, day) in days.iter().enumerate() {
            let expected = i as u32 + 1;
            if day.day_number < expected {
                return Err(ShapeError::DuplicateDay(day.day_number));
            }
            if day.day_number > expected {
                return Err(ShapeError::MissingDay(expected));
            }
        }

        Ok(Itinerary {
            package_id: self.package_id,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reviews_normalize_maps_names_and_distribution() {
        let raw = r#"{
            "reviews": [
                {"id": 7, "name": "Ana", "date": "May 2025", "rating": 5, "body": "Great"}
            ],
            "total_reviews": 1,
            "average_rating": 5.0,
            "star_distribution": {"1": 0, "5": 1}
        }"#;
        let wire: WireReviewsResponse = serde_json::from_str(raw).unwrap();
        let payload = wire.normalize().unwrap();

        assert_eq!(payload.reviews[0].display_name, "Ana");
        assert_eq!(payload.aggregate.total_count, 1);
        assert_eq!(payload.aggregate.count_for(5), 1);
        assert_eq!(payload.aggregate.count_for(1), 0);
    }

    #[test]
    fn test_reviews_bad_star_key_is_shape_error() {
        let wire = WireReviewsResponse {
            reviews: vec![],
            total_reviews: 0,
            average_rating: 0.0,
            star_distribution: HashMap::from([("five".to_string(), 1)]),
        };
        assert_eq!(
            wire.normalize(),
            Err(ShapeError::BadStarKey("five".to_string()))
        );
    }

    #[test]
    fn test_images_rewritten_to_proxy() {
        let raw = r#"{
            "package_id": "4days",
            "images": [
                {"id": 3, "url": "https://bucket.example.com/a.webp", "category": "overview",
                 "alt_text": "Isla", "alt_text_en": "Island"},
                {"id": 9, "url": "https://bucket.example.com/b.webp", "category": "hero",
                 "alt_text": "Lago"}
            ],
            "total_images": 2
        }"#;
        let wire: WireImagesResponse = serde_json::from_str(raw).unwrap();
        let set = wire.normalize("https://api.example.com", "4days");

        assert_eq!(
            set.images[0].url,
            "https://api.example.com/api/images/4days/proxy/3"
        );
        assert_eq!(
            set.images[1].url,
            "https://api.example.com/api/images/4days/proxy/9"
        );
        assert_eq!(set.images[1].alt_text_en, None);
    }

    fn wire_day(day: u32, special: Option<&str>) -> WireItineraryDay {
        WireItineraryDay {
            day,
            title: format!("Day {}", day),
            description: String::new(),
            accommodation: "Hotel".to_string(),
            included_activities: "Boat, Hike".to_string(),
            meals: "Lunch".to_string(),
            optional_activities: vec![],
            special_info: special.map(str::to_string),
        }
    }

    #[test]
    fn test_itinerary_renames_fields_and_drops_empty_special_info() {
        let raw = r#"{
            "package_id": "4days",
            "itinerary": [
                {"day": 1, "title": "Copacabana", "description": "d", "accommodation": "Hotel",
                 "included_activities": "Bus, Market", "meals": "Lunch",
                 "optional_activities": ["Museum"], "special_info": ""}
            ],
            "total_days": 1
        }"#;
        let wire: WireItineraryResponse = serde_json::from_str(raw).unwrap();
        let itinerary = wire.normalize().unwrap();
        let day = &itinerary.days[0];

        assert_eq!(day.included_activities, "Bus, Market");
        assert_eq!(day.optional_activities, vec!["Museum".to_string()]);
        assert_eq!(day.special_info, None);
    }

    #[test]
    fn test_itinerary_keeps_real_special_info() {
        let wire = WireItineraryResponse {
            package_id: "4days".to_string(),
            itinerary: vec![wire_day(1, Some("Bring a jacket"))],
            total_days: Some(1),
        };
        let itinerary = wire.normalize().unwrap();
        assert_eq!(
            itinerary.days[0].special_info.as_deref(),
            Some("Bring a jacket")
        );
    }

    #[test]
    fn test_itinerary_sorted_by_day() {
        let wire = WireItineraryResponse {
            package_id: "4days".to_string(),
            itinerary: vec![wire_day(2, None), wire_day(1, None), wire_day(3, None)],
            total_days: None,
        };
        let days: Vec<u32> = wire
            .normalize()
            .unwrap()
            .days
            .iter()
            .map(|d| d.day_number)
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_itinerary_gap_rejected() {
        let wire = WireItineraryResponse {
            package_id: "4days".to_string(),
            itinerary: vec![wire_day(1, None), wire_day(3, None)],
            total_days: None,
        };
        assert_eq!(wire.normalize(), Err(ShapeError::MissingDay(2)));
    }

    #[test]
    fn test_itinerary_duplicate_rejected() {
        let wire = WireItineraryResponse {
            package_id: "4days".to_string(),
            itinerary: vec![wire_day(1, None), wire_day(1, None)],
            total_days: None,
        };
        assert_eq!(wire.normalize(), Err(ShapeError::DuplicateDay(1)));
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let raw = r#"{"package_id": "4days", "itinerary": [{"day": 1}]}"#;
        assert!(serde_json::from_str::<WireItineraryResponse>(raw).is_err());
    }
}
