// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod document;
pub mod platform;
pub mod query;
pub mod search_result;

pub use answer::{Answer, AnswerKind, AnswerRequest, AnswerResponse, Source};
pub use document::Document;
pub use platform::{Platform, Scope};
pub use query::{NormalizedText, Query};
pub use search_result::{PlatformResults, RetrievalResult, SearchHit};
