use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        draft_response_handler, get_places_handler, get_review_handler, get_reviews_handler,
        get_summary_handler, ingest_places_handler, place_details_handler, respond_handler,
        summarize_handler, translate_all_handler, translate_review_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/reviews", get(get_reviews_handler))
        .route("/reviews/translate-all", post(translate_all_handler))
        .route("/reviews/{id}", get(get_review_handler))
        .route("/reviews/{id}/translate", post(translate_review_handler))
        .route("/reviews/{id}/respond", post(respond_handler))
        .route("/reviews/{id}/draft-response", post(draft_response_handler))
        .route("/summarize", post(summarize_handler))
        .route("/summary", get(get_summary_handler))
        .route("/places", get(get_places_handler))
        .route("/places/ingest", post(ingest_places_handler))
        .route("/api/places/reviews", post(place_details_handler))
        .with_state(state)
}
