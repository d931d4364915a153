pub mod place;
pub mod review;
pub mod seed;
pub mod summary;

pub use place::{Place, PlaceDetails, PlaceResponse, PlaceReview};
pub use review::{Language, Rating, ResponseFilter, Review, ReviewAuthor};
