pub mod review;
pub mod store;

pub use review::{get_all_reviews, get_review, get_reviews_filtered, replace_reviews};
pub use store::ReviewStore;
