use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::review::Language;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub name: String,
    pub rating: f64,
    pub review_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_locations: usize,
    pub average_rating: f64,
    pub total_reviews: u64,
    pub rating_distribution: Vec<RatingEntry>,
    pub language_distribution: BTreeMap<Language, f64>,
}
