use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    config::Config,
    db::ReviewStore,
    errors::AppError,
    gateway::PlacesGateway,
    models::{Place, seed::seed_reviews},
    reviews::{
        Delay, RandomDelay, ResponseDrafter, SummarizerCapability, TextSummarizer,
        TransitionEngine, TranslationLookup, TranslatorCapability, WriterCapability,
    },
};

pub type SharedReviewStore = Arc<Mutex<ReviewStore>>;

pub type SharedPlaces = Arc<RwLock<Vec<Place>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedReviewStore,
    pub places: SharedPlaces,
    pub engine: TransitionEngine,
    pub drafter: ResponseDrafter,
    pub summarizer: TextSummarizer,
    pub gateway: PlacesGateway,
    pub place_ids: Arc<Vec<String>>,
}

/// Capabilities wired into the state. All default to their fallbacks.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    pub translator: TranslatorCapability,
    pub writer: WriterCapability,
    pub summarizer: SummarizerCapability,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let delay = Arc::new(RandomDelay::new(
            config.translate_delay_min,
            config.translate_delay_max,
        ));
        let gateway = PlacesGateway::from_config(config)?;

        Ok(Self::build(
            gateway,
            config.place_ids.clone(),
            delay,
            Capabilities::default(),
        ))
    }

    /// Assembles the state around the seed reviews with an explicit delay
    /// and capability set.
    pub fn build(
        gateway: PlacesGateway,
        place_ids: Vec<String>,
        delay: Arc<dyn Delay>,
        capabilities: Capabilities,
    ) -> Self {
        let store: SharedReviewStore = Arc::new(Mutex::new(ReviewStore::new(seed_reviews())));
        let lookup = Arc::new(TranslationLookup::with_defaults());

        let engine = TransitionEngine::new(
            store.clone(),
            lookup,
            capabilities.translator,
            delay.clone(),
        );

        Self {
            store,
            places: Default::default(),
            engine,
            drafter: ResponseDrafter::new(capabilities.writer, delay.clone()),
            summarizer: TextSummarizer::new(capabilities.summarizer, delay),
            gateway,
            place_ids: Arc::new(place_ids),
        }
    }
}
