//! Dashboard aggregates. Every function here is pure over its inputs.

use std::collections::BTreeMap;

use crate::models::{
    Language, Place, Review,
    summary::{DashboardSummary, RatingEntry},
};

/// Mean of every place's rating. Places without a rating count as 0.
pub fn average_rating(places: &[Place]) -> f64 {
    if places.is_empty() {
        return 0.0;
    }

    let sum: f64 = places.iter().map(|p| p.rating().unwrap_or(0.0)).sum();
    sum / places.len() as f64
}

pub fn total_review_count(places: &[Place]) -> u64 {
    places.iter().map(Place::rating_count).sum()
}

/// One entry per place that has rating data; the rest are left out.
pub fn rating_distribution(places: &[Place]) -> Vec<RatingEntry> {
    places
        .iter()
        .filter_map(|place| {
            let details = place.details.as_ref()?;
            let rating = details.rating.filter(|r| *r > 0.0)?;

            Some(RatingEntry {
                name: details.name.clone().unwrap_or_else(|| "Unknown".into()),
                rating,
                review_count: details.user_ratings_total.unwrap_or(0),
            })
        })
        .collect()
}

/// Share of reviews per language, in percent.
pub fn language_distribution<R>(reviews: &[R]) -> BTreeMap<Language, f64>
where
    R: AsRef<Review>,
{
    let mut counts: BTreeMap<Language, usize> = BTreeMap::new();
    for review in reviews {
        *counts.entry(review.as_ref().lang).or_default() += 1;
    }

    let total = reviews.len() as f64;
    counts
        .into_iter()
        .map(|(lang, count)| (lang, count as f64 * 100.0 / total))
        .collect()
}

pub fn dashboard_summary<R>(places: &[Place], reviews: &[R]) -> DashboardSummary
where
    R: AsRef<Review>,
{
    DashboardSummary {
        total_locations: places.len(),
        average_rating: average_rating(places),
        total_reviews: total_review_count(places),
        rating_distribution: rating_distribution(places),
        language_distribution: language_distribution(reviews),
    }
}
