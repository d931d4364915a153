use serde::{Deserialize, Serialize};

/// A single review as returned by the places proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author_name: String,
    #[serde(default)]
    pub profile_photo_url: String,
    pub rating: Option<u8>,
    #[serde(default)]
    pub relative_time_description: String,
    #[serde(default)]
    pub text: String,
    /// Unix seconds.
    pub time: i64,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    pub website: Option<String>,
    pub international_phone_number: Option<String>,
    pub price_level: Option<String>,
    pub place_id: Option<String>,
    pub business_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub result: PlaceDetails,
    pub status: String,
}

/// A requested place. `details` is `None` when the gateway could not supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub details: Option<PlaceDetails>,
}

impl Place {
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            details: None,
        }
    }

    pub fn rating(&self) -> Option<f64> {
        self.details.as_ref().and_then(|d| d.rating)
    }

    pub fn rating_count(&self) -> u64 {
        self.details
            .as_ref()
            .and_then(|d| d.user_ratings_total)
            .unwrap_or(0)
    }
}
