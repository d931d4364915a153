use axum::{extract::State, response::Json};

use crate::{
    db::get_all_reviews, models::summary::DashboardSummary, state::AppState,
    summary::dashboard_summary,
};

pub async fn get_summary_handler(State(state): State<AppState>) -> Json<DashboardSummary> {
    let reviews = get_all_reviews(&state.store).await;
    let places = state.places.read().await;

    Json(dashboard_summary(&places, &reviews))
}
