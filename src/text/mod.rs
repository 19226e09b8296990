// file: src/text/mod.rs
// description: text normalization and segmentation module exports
// reference: internal module structure

pub mod keywords;
pub mod normalizer;
pub mod patterns;
pub mod segmentation;
pub mod vocabulary;

pub use keywords::{DEFAULT_KEYWORD_COUNT, extract_keywords};
pub use normalizer::TextNormalizer;
pub use segmentation::{PatternSegmenter, TextSegmenter};
