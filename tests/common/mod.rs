use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use insightify_be::{
    gateway::PlacesGateway,
    reviews::NoDelay,
    state::{AppState, Capabilities},
};
use serde_json::{Value, json};

pub const TEST_API_KEY: &str = "test-key";

fn upstream_place(id: &str) -> Value {
    json!({
        "id": id,
        "displayName": { "text": "Cafe Central", "languageCode": "en" },
        "formattedAddress": "1 Main St",
        "rating": 4.5,
        "userRatingCount": 120,
        "websiteUri": "https://cafe.example",
        "businessStatus": "OPERATIONAL",
        "reviews": [
            {
                "rating": 5,
                "relativePublishTimeDescription": "a week ago",
                "text": { "text": "Excelente café", "languageCode": "es" },
                "publishTime": "2024-11-29T10:00:00Z",
                "authorAttribution": {
                    "displayName": "Ana",
                    "photoUri": "https://photos.example/ana.png"
                }
            },
            {
                "rating": 4,
                "relativePublishTimeDescription": "2 days ago",
                "text": { "text": "Lovely place", "languageCode": "en" },
                "publishTime": "2024-12-01T08:30:00Z",
                "authorAttribution": { "displayName": "Tom" }
            }
        ],
        "photos": [
            { "name": "places/good/photos/1", "heightPx": 600, "widthPx": 800 }
        ]
    })
}

async fn stub_place(
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let key = headers
        .get("X-Goog-Api-Key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if key != TEST_API_KEY {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "message": "API key not valid" } })),
        ));
    }

    if id.starts_with("good") {
        Ok(Json(upstream_place(&id)))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "message": format!("Place {id} not found") } })),
        ))
    }
}

/// Starts a local stand-in for the places API and returns its base URL.
pub async fn spawn_places_stub() -> String {
    let app = Router::new().route("/places/{id}", get(stub_place));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr: SocketAddr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}")
}

pub fn create_gateway(base_url: &str, api_key: &str) -> PlacesGateway {
    PlacesGateway::new(base_url, api_key, Duration::from_secs(5)).expect("gateway")
}

#[allow(dead_code)]
pub fn create_test_state(base_url: &str) -> AppState {
    AppState::build(
        create_gateway(base_url, TEST_API_KEY),
        vec!["good-1".to_string()],
        Arc::new(NoDelay),
        Capabilities::default(),
    )
}
