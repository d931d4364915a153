use insightify_be::{
    models::{Language, Place, PlaceDetails, Review, seed::seed_reviews},
    summary::{
        average_rating, dashboard_summary, language_distribution, rating_distribution,
        total_review_count,
    },
};

fn details(name: &str, rating: Option<f64>, count: Option<u64>) -> PlaceDetails {
    PlaceDetails {
        name: Some(name.to_string()),
        formatted_address: None,
        rating,
        user_ratings_total: count,
        reviews: Vec::new(),
        photos: Vec::new(),
        website: None,
        international_phone_number: None,
        price_level: None,
        place_id: None,
        business_status: None,
    }
}

fn place(id: &str, rating: Option<f64>, count: Option<u64>) -> Place {
    Place {
        id: id.to_string(),
        details: Some(details(id, rating, count)),
    }
}

#[test]
fn test_average_rating_empty_is_zero() {
    let avg = average_rating(&[]);
    assert_eq!(avg, 0.0);
    assert!(!avg.is_nan());
}

#[test]
fn test_two_place_totals() {
    let places = vec![place("A", Some(5.0), Some(10)), place("B", Some(3.0), None)];

    assert_eq!(average_rating(&places), 4.0);
    assert_eq!(total_review_count(&places), 10);
}

#[test]
fn test_failed_place_is_tolerated() {
    let places = vec![Place::missing("X")];

    assert!(rating_distribution(&places).is_empty());
    assert_eq!(total_review_count(&places), 0);
    assert_eq!(average_rating(&places), 0.0);
}

#[test]
fn test_failed_place_counts_towards_average() {
    let places = vec![place("A", Some(4.0), Some(8)), Place::missing("X")];

    assert_eq!(average_rating(&places), 2.0);
    assert_eq!(total_review_count(&places), 8);
}

#[test]
fn test_rating_distribution_skips_unrated() {
    let mut unnamed = place("C", Some(4.5), Some(2));
    if let Some(d) = unnamed.details.as_mut() {
        d.name = None;
    }

    let places = vec![
        place("A", Some(5.0), Some(10)),
        place("B", None, Some(7)),
        Place::missing("X"),
        unnamed,
    ];

    let dist = rating_distribution(&places);
    assert_eq!(dist.len(), 2);

    assert_eq!(dist[0].name, "A");
    assert_eq!(dist[0].rating, 5.0);
    assert_eq!(dist[0].review_count, 10);

    assert_eq!(dist[1].name, "Unknown");
    assert_eq!(dist[1].review_count, 2);
}

#[test]
fn test_language_distribution_empty() {
    let reviews: Vec<Review> = Vec::new();
    assert!(language_distribution(&reviews).is_empty());
}

#[test]
fn test_language_distribution_single_language() {
    let reviews = vec![
        Review::new("1", "a", Language::Spanish),
        Review::new("2", "b", Language::Spanish),
        Review::new("3", "c", Language::Spanish),
    ];

    let dist = language_distribution(&reviews);
    assert_eq!(dist.len(), 1);
    assert_eq!(dist[&Language::Spanish], 100.0);
}

#[test]
fn test_language_distribution_sums_to_hundred() {
    let dist = language_distribution(&seed_reviews());

    assert_eq!(dist.len(), 3);
    let total: f64 = dist.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((dist[&Language::English] - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_dashboard_summary() {
    let places = vec![place("A", Some(5.0), Some(10)), place("B", Some(3.0), Some(4))];
    let summary = dashboard_summary(&places, &seed_reviews());

    assert_eq!(summary.total_locations, 2);
    assert_eq!(summary.average_rating, 4.0);
    assert_eq!(summary.total_reviews, 14);
    assert_eq!(summary.rating_distribution.len(), 2);
    assert_eq!(summary.language_distribution.len(), 3);
}
