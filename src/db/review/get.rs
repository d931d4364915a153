use std::sync::Arc;

use crate::{
    models::{ResponseFilter, Review},
    state::SharedReviewStore,
};

pub async fn get_all_reviews(store: &SharedReviewStore) -> Vec<Arc<Review>> {
    store.lock().await.get_all()
}

pub async fn get_reviews_filtered(
    filter: ResponseFilter,
    store: &SharedReviewStore,
) -> Vec<Arc<Review>> {
    let store = store.lock().await;
    store
        .get_all()
        .into_iter()
        .filter(|review| filter.matches(review))
        .collect()
}

pub async fn get_review(id: &str, store: &SharedReviewStore) -> Option<Arc<Review>> {
    store.lock().await.get_by_id(id)
}
