// file: src/intent/mod.rs
// description: query classification module exports
// reference: internal module structure

pub mod relevance;
pub mod resolver;

pub use relevance::RelevanceClassifier;
pub use resolver::{Intent, IntentResolver};
