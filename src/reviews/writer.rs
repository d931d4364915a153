use std::sync::Arc;

use crate::{
    models::Review,
    reviews::{capability::WriterCapability, delay::Delay},
};

pub const FALLBACK_RESPONSE: &str = "Thank you for your feedback! We’re glad you enjoyed your experience and will strive to make it even better.";

/// Drafts replies to reviews, falling back to a canned reply.
#[derive(Clone)]
pub struct ResponseDrafter {
    writer: WriterCapability,
    delay: Arc<dyn Delay>,
}

impl ResponseDrafter {
    pub fn new(writer: WriterCapability, delay: Arc<dyn Delay>) -> Self {
        Self { writer, delay }
    }

    pub async fn draft_response(&self, review: &Review) -> String {
        let prompt = format!(
            "Write a short, polite reply from the business to this customer review: {}",
            review.source_text()
        );

        match &self.writer {
            WriterCapability::Available(writer) => match writer.write(&prompt).await {
                Ok(draft) => draft,
                Err(e) => {
                    tracing::warn!("Writer failed for review {}, using fallback: {}", review.id, e);
                    FALLBACK_RESPONSE.to_string()
                }
            },
            WriterCapability::Unavailable => {
                self.delay.wait().await;
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
