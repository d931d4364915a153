pub mod capability;
pub mod delay;
pub mod engine;
pub mod lookup;
pub mod summarizer;
pub mod writer;

pub use capability::{SummarizerCapability, TranslatorCapability, WriterCapability};
pub use delay::{Delay, FixedDelay, NoDelay, RandomDelay};
pub use engine::{RespondOutcome, TranslateOutcome, TranslateStart, TransitionEngine};
pub use lookup::TranslationLookup;
pub use summarizer::TextSummarizer;
pub use writer::ResponseDrafter;
