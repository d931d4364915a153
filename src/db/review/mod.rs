pub mod get;
pub mod put;

pub use get::{get_all_reviews, get_review, get_reviews_filtered};
pub use put::replace_reviews;
