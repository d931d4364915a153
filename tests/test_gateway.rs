mod common;

use std::sync::Arc;

use common::{TEST_API_KEY, create_gateway, create_test_state, spawn_places_stub};
use insightify_be::{
    db::{ReviewStore, get_all_reviews},
    errors::AppError,
    gateway::{ingest_places, reviews_from_places},
    models::{Language, seed::seed_reviews},
    state::{SharedPlaces, SharedReviewStore},
    summary::{rating_distribution, total_review_count},
};
use tokio::sync::Mutex;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_fetch_place_details_normalizes_response() {
    let base = spawn_places_stub().await;
    let gateway = create_gateway(&base, TEST_API_KEY);

    let response = gateway.fetch_place_details("good-1").await.unwrap();
    assert_eq!(response.status, "OK");

    let result = response.result;
    assert_eq!(result.name.as_deref(), Some("Cafe Central"));
    assert_eq!(result.formatted_address.as_deref(), Some("1 Main St"));
    assert_eq!(result.rating, Some(4.5));
    assert_eq!(result.user_ratings_total, Some(120));
    assert_eq!(result.place_id.as_deref(), Some("good-1"));
    assert_eq!(result.website.as_deref(), Some("https://cafe.example"));

    assert_eq!(result.reviews.len(), 2);
    let first = &result.reviews[0];
    assert_eq!(first.author_name, "Ana");
    assert_eq!(first.profile_photo_url, "https://photos.example/ana.png");
    assert_eq!(first.text, "Excelente café");
    assert_eq!(first.language, "es");
    assert_eq!(first.rating, Some(5));
    assert_eq!(first.time, 1_732_874_400);
    assert_eq!(result.reviews[1].profile_photo_url, "");

    assert_eq!(result.photos.len(), 1);
    assert_eq!(result.photos[0].photo_reference, "places/good/photos/1");
    assert_eq!(result.photos[0].width, 800);
}

#[tokio::test]
async fn test_fetch_place_details_errors() {
    let base = spawn_places_stub().await;
    let gateway = create_gateway(&base, TEST_API_KEY);

    let missing = gateway.fetch_place_details("unknown").await;
    assert!(matches!(missing, Err(AppError::GatewayUnavailable(ref m)) if m.contains("not found")));

    let empty = gateway.fetch_place_details("  ").await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let unauthorized = create_gateway(&base, "wrong-key")
        .fetch_place_details("good-1")
        .await;
    assert!(
        matches!(unauthorized, Err(AppError::GatewayUnavailable(ref m)) if m == "API key not valid")
    );
}

#[tokio::test]
async fn test_unreachable_gateway() {
    // Nothing listens on the discard port
    let gateway = create_gateway("http://127.0.0.1:9", TEST_API_KEY);

    let result = gateway.fetch_place_details("good-1").await;
    assert!(matches!(result, Err(AppError::GatewayUnavailable(_))));
}

#[tokio::test]
async fn test_fetch_places_tolerates_partial_failure() {
    let base = spawn_places_stub().await;
    let gateway = create_gateway(&base, TEST_API_KEY);

    let places = gateway
        .fetch_places(&ids(&["good-1", "broken", "good-2"]))
        .await;

    assert_eq!(places.len(), 3);
    assert!(places[0].details.is_some());
    assert!(places[1].details.is_none());
    assert_eq!(places[1].id, "broken");
    assert!(places[2].details.is_some());

    assert_eq!(rating_distribution(&places).len(), 2);
    assert_eq!(total_review_count(&places), 240);

    let reviews = reviews_from_places(&places);
    assert_eq!(reviews.len(), 4);
    assert_eq!(reviews[0].lang, Language::Spanish);
    assert_eq!(reviews[0].user.username, "Ana");
    assert_eq!(reviews[0].rating.map(|r| r.value()), Some(5));
    assert_eq!(reviews[0].response_time.as_deref(), Some("a week ago"));
    assert!(!reviews[0].responded);
    assert!(reviews[0].original_text.is_none());
    assert_ne!(reviews[0].id, reviews[2].id);
}

#[tokio::test]
async fn test_ingest_replaces_store() {
    let base = spawn_places_stub().await;
    let state = create_test_state(&base);

    let places = ingest_places(
        &state.gateway,
        &ids(&["good-1", "broken"]),
        &state.store,
        &state.places,
    )
    .await
    .unwrap();
    assert_eq!(places.len(), 2);

    let reviews = get_all_reviews(&state.store).await;
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.id != "1"));
    assert_eq!(state.places.read().await.len(), 2);
}

#[tokio::test]
async fn test_ingest_all_failed_leaves_state_untouched() {
    let base = spawn_places_stub().await;
    let gateway = create_gateway(&base, TEST_API_KEY);
    let store: SharedReviewStore = Arc::new(Mutex::new(ReviewStore::new(seed_reviews())));
    let places: SharedPlaces = Default::default();

    let result = ingest_places(&gateway, &ids(&["nope", "also-nope"]), &store, &places).await;
    assert!(matches!(result, Err(AppError::GatewayUnavailable(_))));

    assert_eq!(get_all_reviews(&store).await.len(), 3);
    assert!(places.read().await.is_empty());

    let result = ingest_places(&gateway, &[], &store, &places).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
