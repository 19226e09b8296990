// file: src/models/query.rs
// description: user question with its normalized forms
// reference: internal data structures

use crate::models::Scope;
use crate::text::TextNormalizer;
use serde::Serialize;

/// Lowercased, tokenized and stemmed form of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    pub lowercased: String,
    pub tokens: Vec<String>,
    pub stemmed: Vec<String>,
}

impl NormalizedText {
    pub fn joined_tokens(&self) -> String {
        self.tokens.join(" ")
    }
}

/// A question as submitted, with derived forms computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    raw: String,
    requested_scope: Option<Scope>,
    normalized: NormalizedText,
}

impl Query {
    pub fn new(raw: impl Into<String>, requested_scope: Option<Scope>, normalizer: &TextNormalizer) -> Self {
        let raw = raw.into();
        let normalized = normalizer.normalize(&raw);
        Self {
            raw,
            requested_scope,
            normalized,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn requested_scope(&self) -> Option<Scope> {
        self.requested_scope
    }

    pub fn lowercased(&self) -> &str {
        &self.normalized.lowercased
    }

    pub fn tokens(&self) -> &[String] {
        &self.normalized.tokens
    }

    pub fn stemmed(&self) -> &[String] {
        &self.normalized.stemmed
    }

    pub fn normalized(&self) -> &NormalizedText {
        &self.normalized
    }
}
