use crate::models::review::{Language, Rating, Review, ReviewAuthor};

/// Placeholder avatar/image reference used by the demo data.
pub const PLACEHOLDER_IMAGE: &str = "#image#";

fn author(id: &str, username: &str) -> ReviewAuthor {
    ReviewAuthor {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Demo reviews the store starts with before any place is ingested.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            response_time: Some("2h".into()),
            ..Review::new("1", "Great service!", Language::English)
                .with_author(author("1", "John Doe"))
                .with_rating(Rating::new(5))
        },
        Review {
            responded: true,
            response_time: Some("1d".into()),
            ..Review::new("2", "Muy buen producto", Language::Spanish)
                .with_author(author("2", "Maria Garcia"))
                .with_rating(Rating::new(4))
                .with_original_text("Very good product!")
        },
        Review {
            image_url: Some(PLACEHOLDER_IMAGE.into()),
            response_time: Some("3d".into()),
            ..Review::new("3", "Produit de qualité", Language::French)
                .with_author(author("3", "Jean Dupont"))
                .with_rating(Rating::new(3))
                .with_original_text("Very good product!")
        },
    ]
}
