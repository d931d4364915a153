use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    Other,
}

impl Language {
    /// Maps an upstream language code ("en", "es-419", "fr-CA", ...) to a
    /// dashboard language.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Language::English,
            "es" => Language::Spanish,
            "fr" => Language::French,
            _ => Language::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| {
            AppError::Deserialization(format!("Rating must be between 1 and 5, got {value}"))
        })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// Current display text, possibly translated.
    pub text: String,
    pub lang: Language,
    pub user_id: String,
    pub user: ReviewAuthor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub responded: bool,
    #[serde(default)]
    pub is_translating: bool,
    /// Captured once, the first time the review is translated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
}

impl Review {
    pub fn new(id: impl Into<String>, text: impl Into<String>, lang: Language) -> Self {
        let id = id.into();
        Self {
            user_id: id.clone(),
            user: ReviewAuthor {
                id: id.clone(),
                username: String::new(),
                avatar_url: String::new(),
            },
            id,
            text: text.into(),
            lang,
            image_url: None,
            responded: false,
            is_translating: false,
            original_text: None,
            rating: None,
            response_time: None,
        }
    }

    pub fn with_author(mut self, author: ReviewAuthor) -> Self {
        self.user_id = author.id.clone();
        self.user = author;
        self
    }

    pub fn with_rating(mut self, rating: Option<Rating>) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_original_text(mut self, original: impl Into<String>) -> Self {
        self.original_text = Some(original.into());
        self
    }

    /// Text a translation is derived from: the captured original, or the
    /// display text when nothing was captured yet.
    pub fn source_text(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl AsRef<Review> for Review {
    fn as_ref(&self) -> &Review {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseFilter {
    #[default]
    All,
    Responded,
    NotResponded,
}

impl ResponseFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ResponseFilter::All => true,
            ResponseFilter::Responded => review.responded,
            ResponseFilter::NotResponded => !review.responded,
        }
    }
}
