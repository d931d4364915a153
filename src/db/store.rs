use std::{collections::HashMap, sync::Arc};

use tokio::sync::watch;

use crate::models::Review;

/// In-memory review collection for the lifetime of the process.
///
/// Records are handed out as `Arc` snapshots. `update` swaps only the
/// touched record, so untouched records stay pointer-equal across reads.
/// Every mutation bumps a version that subscribers can wait on, and every
/// bulk replace starts a new epoch.
#[derive(Debug)]
pub struct ReviewStore {
    reviews: Vec<Arc<Review>>,
    index: HashMap<String, usize>,
    epoch: u64,
    changes: watch::Sender<u64>,
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self {
            reviews: Vec::new(),
            index: HashMap::new(),
            epoch: 0,
            changes: watch::Sender::new(0),
        }
    }
}

impl ReviewStore {
    pub fn new(reviews: Vec<Review>) -> Self {
        let mut store = Self::default();
        store.replace_all(reviews);
        store
    }

    pub fn get_all(&self) -> Vec<Arc<Review>> {
        self.reviews.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Arc<Review>> {
        self.index.get(id).map(|&i| Arc::clone(&self.reviews[i]))
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Incremented by every `replace_all`. Records read under one epoch are
    /// not the same records once it moves on, even when ids repeat.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Receiver that wakes on every mutation made after this call.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Replaces every record. A later duplicate id wins over an earlier one.
    pub fn replace_all(&mut self, reviews: Vec<Review>) {
        self.reviews.clear();
        self.index.clear();

        for review in reviews {
            match self.index.get(&review.id) {
                Some(&i) => {
                    tracing::warn!("Duplicate review id {} in bulk replace", review.id);
                    self.reviews[i] = Arc::new(review);
                }
                None => {
                    self.index.insert(review.id.clone(), self.reviews.len());
                    self.reviews.push(Arc::new(review));
                }
            }
        }

        self.epoch += 1;
        self.notify();
    }

    /// Applies `f` to the matching record. Unknown ids are a no-op.
    pub fn update<F>(&mut self, id: &str, f: F) -> Option<Arc<Review>>
    where
        F: FnOnce(&Review) -> Review,
    {
        let Some(&i) = self.index.get(id) else {
            tracing::debug!("Ignoring update for unknown review {}", id);
            return None;
        };

        let mut next = f(&self.reviews[i]);
        // Identity is fixed; the index depends on it.
        next.id = self.reviews[i].id.clone();

        let next = Arc::new(next);
        self.reviews[i] = Arc::clone(&next);
        self.notify();
        Some(next)
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}
