pub mod config;
pub mod db;
pub mod errors;
pub mod gateway;
pub mod http;
mod middleware;
pub mod models;
pub mod reviews;
pub mod state;
pub mod summary;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::{config::Config, errors::AppError, state::AppState};

/// Router with every endpoint, without the per-IP rate limiter.
pub fn create_app(state: AppState) -> Router {
    http::create_http_routes(state)
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" })
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;

    if !config.place_ids.is_empty() {
        if let Err(e) =
            gateway::ingest_places(&state.gateway, &config.place_ids, &state.store, &state.places)
                .await
        {
            tracing::warn!("Initial place ingestion failed, serving seed reviews: {}", e);
        }
    }

    let global_rate_limiter = create_global_rate_limiter();

    let app = create_app(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind port {}: {e}", config.port)))?;

    tracing::info!("Insightify server running at http://127.0.0.1:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Server error: {}", e);
        AppError::InternalError
    })
}
