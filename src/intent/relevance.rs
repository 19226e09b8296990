// file: src/intent/relevance.rs
// description: in-domain check for customer data platform questions
// reference: vocabulary-based classification

use crate::models::Query;
use crate::text::vocabulary::{DOMAIN_TERMS, matches_vocabulary};

pub struct RelevanceClassifier {
    terms: &'static [&'static str],
}

impl RelevanceClassifier {
    pub fn new() -> Self {
        Self::with_terms(DOMAIN_TERMS)
    }

    pub fn with_terms(terms: &'static [&'static str]) -> Self {
        Self { terms }
    }

    /// In-domain when any token equals or contains a domain term.
    pub fn is_relevant(&self, query: &Query) -> bool {
        query
            .tokens()
            .iter()
            .any(|token| matches_vocabulary(token, self.terms))
    }
}

impl Default for RelevanceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
