pub mod place;
pub mod review;
pub mod summary;

pub use place::{get_places_handler, ingest_places_handler, place_details_handler};
pub use review::{
    draft_response_handler, get_review_handler, get_reviews_handler, respond_handler,
    summarize_handler, translate_all_handler, translate_review_handler,
};
pub use summary::get_summary_handler;
