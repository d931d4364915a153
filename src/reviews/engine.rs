use std::sync::Arc;

use futures::future::join_all;
use tokio::task::JoinHandle;

use crate::{
    models::{Language, Review},
    reviews::{capability::TranslatorCapability, delay::Delay, lookup::TranslationLookup},
    state::SharedReviewStore,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TranslateOutcome {
    Translated(Arc<Review>),
    AlreadyTranslating(Arc<Review>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RespondOutcome {
    Responded(Arc<Review>),
    AlreadyResponded(Arc<Review>),
    NotFound,
}

pub enum TranslateStart {
    Started(PendingTranslation),
    AlreadyTranslating(Arc<Review>),
    NotFound,
}

/// A translation whose completion is running on its own task.
pub struct PendingTranslation {
    /// Snapshot taken right after `is_translating` was raised.
    pub in_flight: Arc<Review>,
    id: String,
    epoch: u64,
    handle: JoinHandle<Option<Arc<Review>>>,
    engine: TransitionEngine,
}

impl PendingTranslation {
    /// Waits for the completion task. `None` means the review left the
    /// store, or the store was replaced, while it was being translated.
    pub async fn settle(self) -> Option<Arc<Review>> {
        match self.handle.await {
            Ok(review) => review,
            Err(e) => {
                tracing::error!("Translation task for review {} failed: {}", self.id, e);
                self.engine.finish(&self.id, self.epoch, None).await
            }
        }
    }
}

/// Drives reviews through the translate and respond workflows.
#[derive(Clone)]
pub struct TransitionEngine {
    store: SharedReviewStore,
    lookup: Arc<TranslationLookup>,
    translator: TranslatorCapability,
    delay: Arc<dyn Delay>,
}

impl TransitionEngine {
    pub fn new(
        store: SharedReviewStore,
        lookup: Arc<TranslationLookup>,
        translator: TranslatorCapability,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            store,
            lookup,
            translator,
            delay,
        }
    }

    pub fn store(&self) -> &SharedReviewStore {
        &self.store
    }

    /// Raises `is_translating`, captures the original text on first use and
    /// hands the rest of the transition to a background task. Once started
    /// the transition always runs to completion.
    pub async fn start_translate(&self, id: &str, target: Language) -> TranslateStart {
        let (in_flight, epoch) = {
            let mut store = self.store.lock().await;

            let Some(current) = store.get_by_id(id) else {
                tracing::debug!("Translate requested for unknown review {}", id);
                return TranslateStart::NotFound;
            };
            if current.is_translating {
                tracing::debug!("Review {} is already translating", id);
                return TranslateStart::AlreadyTranslating(current);
            }

            match store.update(id, |r| Review {
                is_translating: true,
                original_text: Some(r.source_text().to_string()),
                ..r.clone()
            }) {
                Some(review) => (review, store.epoch()),
                None => return TranslateStart::NotFound,
            }
        };

        let source = in_flight.source_text().to_string();
        let engine = self.clone();
        let task_id = id.to_string();

        let handle = tokio::spawn(async move {
            let worker = engine.clone();
            let translated = tokio::spawn(async move {
                worker.delay.wait().await;
                worker
                    .translator
                    .translate(&source, target, &worker.lookup)
                    .await
            })
            .await;

            let translated = match translated {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::error!("Translating review {} failed: {}", task_id, e);
                    None
                }
            };

            engine.finish(&task_id, epoch, translated).await
        });

        TranslateStart::Started(PendingTranslation {
            in_flight,
            id: id.to_string(),
            epoch,
            handle,
            engine: self.clone(),
        })
    }

    /// Translates one review and waits until it has settled.
    pub async fn begin_translate(&self, id: &str, target: Language) -> TranslateOutcome {
        match self.start_translate(id, target).await {
            TranslateStart::Started(pending) => match pending.settle().await {
                Some(review) => TranslateOutcome::Translated(review),
                None => TranslateOutcome::NotFound,
            },
            TranslateStart::AlreadyTranslating(review) => {
                TranslateOutcome::AlreadyTranslating(review)
            }
            TranslateStart::NotFound => TranslateOutcome::NotFound,
        }
    }

    /// Resolves once the review is no longer translating. `None` when it is
    /// not in the store.
    pub async fn wait_settled(&self, id: &str) -> Option<Arc<Review>> {
        loop {
            let mut changes = {
                let store = self.store.lock().await;
                match store.get_by_id(id) {
                    Some(review) if review.is_translating => store.subscribe(),
                    settled => return settled,
                }
            };

            if changes.changed().await.is_err() {
                return self.store.lock().await.get_by_id(id);
            }
        }
    }

    /// Translates one review to `target`, first waiting out any transition
    /// already running on it.
    async fn translate_after_in_flight(&self, id: &str, target: Language) -> TranslateOutcome {
        loop {
            match self.begin_translate(id, target).await {
                TranslateOutcome::AlreadyTranslating(_) => {
                    tracing::debug!("Waiting for in-flight translation of review {}", id);
                    if self.wait_settled(id).await.is_none() {
                        return TranslateOutcome::NotFound;
                    }
                }
                outcome => return outcome,
            }
        }
    }

    /// Translates every review concurrently; returns once all have settled.
    /// Reviews already translating are waited on and then translated to
    /// `target`.
    pub async fn begin_translate_all(&self, target: Language) -> Vec<TranslateOutcome> {
        let ids: Vec<String> = {
            let store = self.store.lock().await;
            store.get_all().iter().map(|r| r.id.clone()).collect()
        };

        tracing::info!("Translating {} reviews to {}", ids.len(), target);

        let tasks = ids.into_iter().map(|id| {
            let engine = self.clone();
            async move { engine.translate_after_in_flight(&id, target).await }
        });

        join_all(tasks).await
    }

    pub async fn mark_responded(&self, id: &str) -> RespondOutcome {
        let mut store = self.store.lock().await;

        match store.get_by_id(id) {
            None => {
                tracing::debug!("Respond requested for unknown review {}", id);
                RespondOutcome::NotFound
            }
            Some(review) if review.responded => RespondOutcome::AlreadyResponded(review),
            Some(_) => match store.update(id, |r| Review {
                responded: true,
                ..r.clone()
            }) {
                Some(review) => RespondOutcome::Responded(review),
                None => RespondOutcome::NotFound,
            },
        }
    }

    /// Lowers `is_translating`, applying `translated` when there is one.
    /// Completions started before the store was replaced are dropped.
    async fn finish(
        &self,
        id: &str,
        epoch: u64,
        translated: Option<String>,
    ) -> Option<Arc<Review>> {
        let mut store = self.store.lock().await;
        if store.epoch() != epoch {
            tracing::debug!("Dropping stale translation of review {}", id);
            return None;
        }

        store.update(id, |r| Review {
            text: translated.unwrap_or_else(|| r.text.clone()),
            is_translating: false,
            ..r.clone()
        })
    }
}
