use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{get_all_reviews, get_review, get_reviews_filtered},
    errors::AppError,
    models::{Language, ResponseFilter, Review},
    reviews::{RespondOutcome, TranslateStart},
    state::AppState,
};

fn snapshot(review: Arc<Review>) -> Review {
    Arc::unwrap_or_clone(review)
}

fn review_not_found(id: &str) -> (StatusCode, String) {
    tracing::warn!("Review {} not found", id);
    AppError::NotFound("Review not found".into()).to_response()
}

#[derive(Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub filter: ResponseFilter,
}

pub async fn get_reviews_handler(
    Query(query): Query<ReviewQuery>,
    State(state): State<AppState>,
) -> Json<Vec<Review>> {
    let reviews = get_reviews_filtered(query.filter, &state.store).await;
    Json(reviews.into_iter().map(snapshot).collect())
}

pub async fn get_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let review = get_review(&id, &state.store)
        .await
        .ok_or_else(|| review_not_found(&id))?;

    Ok(Json(snapshot(review)))
}

fn default_wait() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload {
    pub target_language: Language,
    #[serde(default = "default_wait")]
    pub wait: bool,
}

pub async fn translate_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    match state.engine.start_translate(&id, payload.target_language).await {
        TranslateStart::NotFound => Err(review_not_found(&id)),
        TranslateStart::AlreadyTranslating(_) => {
            Err(AppError::Conflict(format!("Review {id} is already translating")).to_response())
        }
        TranslateStart::Started(pending) if payload.wait => {
            let review = pending.settle().await.ok_or_else(|| review_not_found(&id))?;
            tracing::info!("Review {} translated to {}", id, payload.target_language);
            Ok((StatusCode::OK, Json(snapshot(review))))
        }
        TranslateStart::Started(pending) => {
            tracing::info!("Review {} translating to {}", id, payload.target_language);
            Ok((StatusCode::ACCEPTED, Json(snapshot(pending.in_flight))))
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateAllPayload {
    pub target_language: Language,
}

pub async fn translate_all_handler(
    State(state): State<AppState>,
    Json(payload): Json<TranslateAllPayload>,
) -> Json<Vec<Review>> {
    let outcomes = state.engine.begin_translate_all(payload.target_language).await;
    tracing::info!(
        "Translate-all to {} settled {} reviews",
        payload.target_language,
        outcomes.len()
    );

    let reviews = get_all_reviews(&state.store).await;
    Json(reviews.into_iter().map(snapshot).collect())
}

pub async fn respond_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Review>, (StatusCode, String)> {
    match state.engine.mark_responded(&id).await {
        RespondOutcome::Responded(review) => {
            tracing::info!("Review {} marked as responded", id);
            Ok(Json(snapshot(review)))
        }
        RespondOutcome::AlreadyResponded(review) => Ok(Json(snapshot(review))),
        RespondOutcome::NotFound => Err(review_not_found(&id)),
    }
}

#[derive(Serialize)]
pub struct DraftResponse {
    pub response: String,
}

pub async fn draft_response_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DraftResponse>, (StatusCode, String)> {
    let review = get_review(&id, &state.store)
        .await
        .ok_or_else(|| review_not_found(&id))?;

    let response = state.drafter.draft_response(&review).await;
    Ok(Json(DraftResponse { response }))
}

#[derive(Deserialize)]
pub struct SummarizePayload {
    pub text: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(payload): Json<SummarizePayload>,
) -> Result<Json<SummarizeResponse>, (StatusCode, String)> {
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".into()).to_response());
    }

    let summary = state.summarizer.summarize(&payload.text).await;
    Ok(Json(SummarizeResponse { summary }))
}
