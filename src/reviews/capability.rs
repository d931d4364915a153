//! Optional AI capabilities.
//!
//! Each capability is either `Available`, wrapping a real provider, or
//! `Unavailable`, in which case callers get the scripted fallback. Code
//! outside this module never checks which one it has.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::{errors::AppError, models::Language, reviews::lookup::TranslationLookup};

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String, AppError>;
}

#[async_trait]
pub trait Writer: Send + Sync {
    async fn write(&self, prompt: &str) -> Result<String, AppError>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AppError>;
}

#[derive(Clone, Default)]
pub enum TranslatorCapability {
    Available(Arc<dyn Translator>),
    #[default]
    Unavailable,
}

impl TranslatorCapability {
    /// Translates through the provider when present. Provider errors and
    /// absence both resolve through `lookup`.
    pub async fn translate(
        &self,
        text: &str,
        target: Language,
        lookup: &TranslationLookup,
    ) -> String {
        match self {
            TranslatorCapability::Available(translator) => {
                match translator.translate(text, target).await {
                    Ok(translated) => translated,
                    Err(e) => {
                        tracing::warn!("Translator failed, using lookup table: {}", e);
                        lookup.lookup(target, text)
                    }
                }
            }
            TranslatorCapability::Unavailable => lookup.lookup(target, text),
        }
    }
}

impl fmt::Debug for TranslatorCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorCapability::Available(_) => f.write_str("TranslatorCapability::Available"),
            TranslatorCapability::Unavailable => f.write_str("TranslatorCapability::Unavailable"),
        }
    }
}

#[derive(Clone, Default)]
pub enum WriterCapability {
    Available(Arc<dyn Writer>),
    #[default]
    Unavailable,
}

impl fmt::Debug for WriterCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterCapability::Available(_) => f.write_str("WriterCapability::Available"),
            WriterCapability::Unavailable => f.write_str("WriterCapability::Unavailable"),
        }
    }
}

#[derive(Clone, Default)]
pub enum SummarizerCapability {
    Available(Arc<dyn Summarizer>),
    #[default]
    Unavailable,
}

impl fmt::Debug for SummarizerCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizerCapability::Available(_) => f.write_str("SummarizerCapability::Available"),
            SummarizerCapability::Unavailable => f.write_str("SummarizerCapability::Unavailable"),
        }
    }
}
