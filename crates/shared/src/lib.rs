// Public modules
pub mod actions;
pub mod briefing;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod segmenter;
pub mod store;
pub mod summarizer;

// Re-export commonly used types
pub use actions::extract_actions;
pub use briefing::BriefingPipeline;
pub use config::Config;
pub use error::BriefingError;
pub use extractor::TextExtractor;
pub use models::Briefing;
pub use segmenter::segment;
pub use store::{BriefingStore, DeleteOutcome};
pub use summarizer::{rank_sentences, word_frequencies};
