//! Integration tests for rating filters applied to the page's reviews.

use pretty_assertions::assert_eq;
use tripview::app::App;
use tripview::content::fallback;
use tripview::keybindings::KeybindingRegistry;
use tripview::locale::Language;
use tripview::reviews::{all_reviews_sorted, ReviewFilter};
use tripview::theme::ThemeVariant;

fn ratings(reviews: &[&tripview::content::Review]) -> Vec<u8> {
    reviews.iter().map(|r| r.rating).collect()
}

#[test]
fn test_filter_sequence_five_then_four_then_both() {
    let payload = fallback::reviews(Language::En);
    let mut filter = ReviewFilter::new();

    filter.toggle(5);
    assert_eq!(ratings(&filter.filtered(&payload.reviews)), vec![5, 5, 5]);

    // Switch the selection from 5 to 4
    filter.toggle(5);
    filter.toggle(4);
    assert_eq!(ratings(&filter.filtered(&payload.reviews)), vec![4]);

    // Selecting 5 again while 4 is active widens the set
    filter.toggle(5);
    assert!(filter.is_selected(4) && filter.is_selected(5));
    assert_eq!(ratings(&filter.filtered(&payload.reviews)), vec![5, 5, 5, 4]);
}

#[test]
fn test_filter_keeps_fetch_order_within_rating() {
    let payload = fallback::reviews(Language::Es);
    let mut filter = ReviewFilter::new();
    filter.toggle(5);
    let names: Vec<&str> = filter
        .filtered(&payload.reviews)
        .iter()
        .map(|r| r.display_name.as_str())
        .collect();
    let expected: Vec<&str> = payload
        .reviews
        .iter()
        .filter(|r| r.rating == 5)
        .map(|r| r.display_name.as_str())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_page_filter_does_not_touch_all_reviews_view() {
    let mut app = App::new(
        Language::En,
        "4days",
        ThemeVariant::Dark,
        KeybindingRegistry::new(),
    )
    .unwrap();
    app.toggle_rating(3);

    let reviews = &app.content.view().reviews.payload.reviews.clone();
    assert_eq!(ratings(&app.filter.featured(reviews)), vec![3]);
    assert_eq!(all_reviews_sorted(reviews).len(), reviews.len());

    app.clear_ratings();
    assert_eq!(app.filter.featured(reviews).len(), reviews.len());
}
