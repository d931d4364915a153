//! Client for the upstream places API.
//!
//! The upstream v1 payload is normalized into [`PlaceResponse`], the shape the
//! dashboard consumes. Failures surface as [`AppError::GatewayUnavailable`];
//! batch fetches turn them into places without details.

use std::time::Duration;

use chrono::DateTime;
use futures::future::join_all;
use reqwest::{Client, Url};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    config::Config,
    db::replace_reviews,
    errors::AppError,
    models::{
        Language, Place, PlaceDetails, PlaceResponse, PlaceReview, Rating, Review, ReviewAuthor,
        place::PlacePhoto,
    },
    state::{SharedPlaces, SharedReviewStore},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalizedText {
    #[serde(default)]
    text: String,
    language_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorAttribution {
    display_name: Option<String>,
    photo_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamReview {
    rating: Option<f64>,
    relative_publish_time_description: Option<String>,
    text: Option<LocalizedText>,
    publish_time: Option<String>,
    author_attribution: Option<AuthorAttribution>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamPhoto {
    name: String,
    #[serde(default)]
    height_px: u32,
    #[serde(default)]
    width_px: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamPlace {
    id: Option<String>,
    display_name: Option<LocalizedText>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_rating_count: Option<u64>,
    #[serde(default)]
    reviews: Vec<UpstreamReview>,
    #[serde(default)]
    photos: Vec<UpstreamPhoto>,
    website_uri: Option<String>,
    international_phone_number: Option<String>,
    price_level: Option<String>,
    business_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: Option<UpstreamErrorBody>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

impl From<UpstreamReview> for PlaceReview {
    fn from(review: UpstreamReview) -> Self {
        let (author_name, profile_photo_url) = review
            .author_attribution
            .map(|a| (a.display_name.unwrap_or_default(), a.photo_uri.unwrap_or_default()))
            .unwrap_or_default();

        let (text, language) = review
            .text
            .map(|t| (t.text, t.language_code.unwrap_or_default()))
            .unwrap_or_default();

        let time = review
            .publish_time
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|dt| dt.timestamp())
            .unwrap_or(0);

        PlaceReview {
            author_name,
            profile_photo_url,
            rating: review.rating.map(|r| r.round().clamp(0.0, 255.0) as u8),
            relative_time_description: review.relative_publish_time_description.unwrap_or_default(),
            text,
            time,
            language,
        }
    }
}

impl From<UpstreamPlace> for PlaceDetails {
    fn from(place: UpstreamPlace) -> Self {
        PlaceDetails {
            name: place.display_name.map(|n| n.text),
            formatted_address: place.formatted_address,
            rating: place.rating,
            user_ratings_total: place.user_rating_count,
            reviews: place.reviews.into_iter().map(PlaceReview::from).collect(),
            photos: place
                .photos
                .into_iter()
                .map(|p| PlacePhoto {
                    photo_reference: p.name,
                    height: p.height_px,
                    width: p.width_px,
                    html_attributions: Vec::new(),
                })
                .collect(),
            website: place.website_uri,
            international_phone_number: place.international_phone_number,
            price_level: place.price_level,
            place_id: place.id,
            business_status: place.business_status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlacesGateway {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl PlacesGateway {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::EnvError(format!("Invalid places API url {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::EnvError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            &config.places_api_url,
            config.places_api_key.clone(),
            config.gateway_timeout,
        )
    }

    fn place_url(&self, place_id: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::EnvError("Places API url cannot be a base".into()))?
            .pop_if_empty()
            .push("places")
            .push(place_id);
        Ok(url)
    }

    pub async fn fetch_place_details(&self, place_id: &str) -> Result<PlaceResponse, AppError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(AppError::BadRequest("Place ID is required".into()));
        }

        let url = self.place_url(place_id)?;
        tracing::info!("Fetching place details for {}", place_id);

        let res = self
            .client
            .get(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", "*")
            .header("Accept-Language", "en")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach places API: {}", e);
                AppError::GatewayUnavailable(format!("Failed to fetch place details: {e}"))
            })?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<UpstreamError>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|err| err.message)
                .unwrap_or_else(|| "Failed to fetch place details".to_string());
            tracing::error!("Places API returned {} for {}: {}", status, place_id, message);
            return Err(AppError::GatewayUnavailable(message));
        }

        let place: UpstreamPlace = res.json().await.map_err(|e| {
            tracing::error!("Invalid places API response: {}", e);
            AppError::GatewayUnavailable(format!("Invalid places API response: {e}"))
        })?;

        Ok(PlaceResponse {
            result: place.into(),
            status: "OK".to_string(),
        })
    }

    /// Fetches every place concurrently. Places that fail come back without
    /// details instead of failing the batch.
    pub async fn fetch_places(&self, place_ids: &[String]) -> Vec<Place> {
        let fetches = place_ids.iter().map(|id| async move {
            match self.fetch_place_details(id).await {
                Ok(response) => Place {
                    id: id.clone(),
                    details: Some(response.result),
                },
                Err(e) => {
                    tracing::warn!("No data for place {}: {}", id, e);
                    Place::missing(id.clone())
                }
            }
        });

        join_all(fetches).await
    }
}

pub fn review_from_place_review(review: &PlaceReview) -> Review {
    let id = Uuid::new_v4().to_string();
    let author = ReviewAuthor {
        id: Uuid::new_v4().to_string(),
        username: review.author_name.clone(),
        avatar_url: review.profile_photo_url.clone(),
    };

    Review {
        response_time: Some(review.relative_time_description.clone())
            .filter(|s| !s.is_empty()),
        ..Review::new(id, review.text.clone(), Language::from_code(&review.language))
            .with_author(author)
            .with_rating(review.rating.and_then(Rating::new))
    }
}

pub fn reviews_from_places(places: &[Place]) -> Vec<Review> {
    places
        .iter()
        .filter_map(|p| p.details.as_ref())
        .flat_map(|d| d.reviews.iter().map(review_from_place_review))
        .collect()
}

/// Fetches the given places and, when at least one succeeded, replaces the
/// review store and the place list with the result. When every place fails
/// nothing is touched.
pub async fn ingest_places(
    gateway: &PlacesGateway,
    place_ids: &[String],
    store: &SharedReviewStore,
    places: &SharedPlaces,
) -> Result<Vec<Place>, AppError> {
    if place_ids.is_empty() {
        return Err(AppError::BadRequest("At least one place ID is required".into()));
    }

    let fetched = gateway.fetch_places(place_ids).await;
    let succeeded = fetched.iter().filter(|p| p.details.is_some()).count();

    if succeeded == 0 {
        tracing::warn!("Ingestion failed for all {} places", place_ids.len());
        return Err(AppError::GatewayUnavailable(
            "No place details could be fetched".into(),
        ));
    }

    let reviews = reviews_from_places(&fetched);
    replace_reviews(reviews, store).await;
    *places.write().await = fetched.clone();

    tracing::info!("Ingested {}/{} places", succeeded, place_ids.len());
    Ok(fetched)
}
