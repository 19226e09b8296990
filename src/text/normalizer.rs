// file: src/text/normalizer.rs
// description: query text normalization into lowercase, word tokens and stems
// reference: https://docs.rs/rust-stemmers

use crate::models::NormalizedText;
use crate::text::patterns::WORD_TOKEN;
use rust_stemmers::{Algorithm, Stemmer};

pub struct TextNormalizer {
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Every word token is kept; filtering belongs to the consumers.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let lowercased = text.to_lowercase();
        let tokens = self.tokenize(&lowercased);
        let stemmed = tokens.iter().map(|token| self.stem(token)).collect();

        NormalizedText {
            lowercased,
            tokens,
            stemmed,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
