use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::Language;

static DEFAULT_TRANSLATIONS: Lazy<HashMap<Language, HashMap<String, String>>> = Lazy::new(|| {
    let table: [(Language, &[(&str, &str)]); 2] = [
        (
            Language::Spanish,
            &[
                ("Great service!", "¡Excelente servicio!"),
                ("Muy buen producto", "Very good product"),
                (
                    "Thank you for your feedback! We appreciate your kind words.",
                    "¡Gracias por sus comentarios! Apreciamos sus amables palabras.",
                ),
                (
                    "We're glad you enjoyed our service.",
                    "Nos alegra que haya disfrutado de nuestro servicio.",
                ),
            ],
        ),
        (
            Language::French,
            &[
                ("Produit de qualité", "Quality product"),
                (
                    "Thank you for your review! We strive for excellence.",
                    "Merci pour votre avis ! Nous visons l'excellence.",
                ),
                (
                    "We appreciate your business.",
                    "Nous apprécions votre confiance.",
                ),
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(lang, pairs)| {
            let entries = pairs
                .iter()
                .map(|(src, dst)| (src.to_string(), dst.to_string()))
                .collect();
            (lang, entries)
        })
        .collect()
});

/// Static `(target language, exact source text) -> translation` table.
#[derive(Debug, Clone, Default)]
pub struct TranslationLookup {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self {
            entries: HashMap::clone(&DEFAULT_TRANSLATIONS),
        }
    }

    pub fn with_entry(
        mut self,
        language: Language,
        text: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        self.entries
            .entry(language)
            .or_default()
            .insert(text.into(), translated.into());
        self
    }

    pub fn get(&self, language: Language, text: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|m| m.get(text))
            .map(String::as_str)
    }

    /// Exact-match lookup. A miss yields a labelled placeholder.
    pub fn lookup(&self, language: Language, text: &str) -> String {
        match self.get(language, text) {
            Some(translated) => translated.to_string(),
            None => placeholder(language, text),
        }
    }
}

pub fn placeholder(language: Language, text: &str) -> String {
    format!("Translated to {language}: {text}")
}

pub fn is_placeholder(language: Language, text: &str, candidate: &str) -> bool {
    candidate == placeholder(language, text)
}
