use std::{collections::HashMap, sync::Arc};

use crate::reviews::{capability::SummarizerCapability, delay::Delay};

const TINY: &str = "A very short summary.";
const SHORT: &str = "A brief summary of the provided content.";
const MEDIUM: &str = "A concise summary of the main points of the provided content.";
const LONG: &str = "A comprehensive summary of the lengthy content provided, covering key points while maintaining brevity.";

/// Scripted summaries used when no summarizer is available.
#[derive(Debug, Clone)]
pub struct FallbackSummaries {
    exact: HashMap<String, String>,
    prefixes: Vec<(String, String)>,
}

impl Default for FallbackSummaries {
    fn default() -> Self {
        let exact = [
            ("hello world", "A simple greeting."),
            ("lorem ipsum", "A placeholder text commonly used in design."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let prefixes = [
            ("email:", "Summary of an email communication."),
            ("article:", "Summary of a news or blog article."),
            ("code:", "Description of code functionality."),
            ("meeting:", "Summary of meeting minutes."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { exact, prefixes }
    }
}

impl FallbackSummaries {
    /// Exact match first, then known prefixes, then a length bucket.
    pub fn summarize(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();

        if let Some(summary) = self.exact.get(&normalized) {
            return summary.clone();
        }

        if let Some((_, summary)) = self
            .prefixes
            .iter()
            .find(|(prefix, _)| normalized.starts_with(prefix.as_str()))
        {
            return summary.clone();
        }

        let words = text.split_whitespace().count();
        let bucket = match words {
            0..10 => TINY,
            10..50 => SHORT,
            50..200 => MEDIUM,
            _ => LONG,
        };
        bucket.to_string()
    }
}

#[derive(Clone)]
pub struct TextSummarizer {
    summarizer: SummarizerCapability,
    fallback: FallbackSummaries,
    delay: Arc<dyn Delay>,
}

impl TextSummarizer {
    pub fn new(summarizer: SummarizerCapability, delay: Arc<dyn Delay>) -> Self {
        Self {
            summarizer,
            fallback: FallbackSummaries::default(),
            delay,
        }
    }

    pub async fn summarize(&self, text: &str) -> String {
        match &self.summarizer {
            SummarizerCapability::Available(summarizer) => match summarizer.summarize(text).await {
                Ok(summary) => summary,
                Err(e) => {
                    tracing::warn!("Summarizer failed, using fallback: {}", e);
                    self.fallback.summarize(text)
                }
            },
            SummarizerCapability::Unavailable => {
                self.delay.wait().await;
                self.fallback.summarize(text)
            }
        }
    }
}
