use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    errors::AppError,
    gateway::ingest_places,
    models::{Place, PlaceResponse},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsPayload {
    pub place_id: Option<String>,
}

pub async fn place_details_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlaceDetailsPayload>,
) -> Result<Json<PlaceResponse>, (StatusCode, String)> {
    let place_id = payload
        .place_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing placeId in request");
            AppError::BadRequest("Place ID is required".into()).to_response()
        })?;

    let response = state
        .gateway
        .fetch_place_details(&place_id)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching place {}: {}", place_id, e);
            e.to_response()
        })?;

    Ok(Json(response))
}

pub async fn get_places_handler(State(state): State<AppState>) -> Json<Vec<Place>> {
    Json(state.places.read().await.clone())
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IngestPayload {
    pub place_ids: Option<Vec<String>>,
}

pub async fn ingest_places_handler(
    State(state): State<AppState>,
    Json(payload): Json<IngestPayload>,
) -> Result<Json<Vec<Place>>, (StatusCode, String)> {
    let place_ids = payload
        .place_ids
        .unwrap_or_else(|| state.place_ids.as_ref().clone());

    let places = ingest_places(&state.gateway, &place_ids, &state.store, &state.places)
        .await
        .map_err(|e| {
            tracing::error!("Error ingesting places: {}", e);
            e.to_response()
        })?;

    Ok(Json(places))
}
