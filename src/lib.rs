// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod intent;
pub mod models;
pub mod pipeline;
pub mod retrieval;
pub mod store;
pub mod synthesis;
pub mod text;
pub mod utils;

pub use config::{Config, RetrievalConfig, StoreConfig, SynthesisConfig};
pub use error::{AssistantError, Result};
pub use intent::{Intent, IntentResolver, RelevanceClassifier};
pub use models::{
    Answer, AnswerKind, AnswerRequest, AnswerResponse, Document, Platform, PlatformResults, Query,
    RetrievalResult, Scope, SearchHit, Source,
};
pub use pipeline::{PipelineOutcome, QueryPipeline};
pub use retrieval::RetrievalAdapter;
pub use store::{CorpusLoader, DocumentationStore, MemoryStore};
pub use synthesis::{AnswerSynthesizer, ComparisonSynthesizer, QuestionShape};
pub use text::{PatternSegmenter, TextNormalizer, TextSegmenter};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator, check_store};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let store = std::sync::Arc::new(MemoryStore::new(Vec::new()));
        let _pipeline = QueryPipeline::new(store, &config);
    }
}
