use crate::{models::Review, state::SharedReviewStore};

pub async fn replace_reviews(reviews: Vec<Review>, store: &SharedReviewStore) {
    let count = reviews.len();
    store.lock().await.replace_all(reviews);
    tracing::info!("Review store replaced with {} reviews", count);
}
