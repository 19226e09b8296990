// file: src/intent/resolver.rs
// description: platform scope resolution, comparison detection and feature keywords
// reference: rule-based intent resolution

use crate::models::{Platform, Query, Scope};
use crate::text::vocabulary::{
    COMPARISON_TERMS, FEATURE_TERMS, GENERAL_FEATURE, is_exact_term, matches_vocabulary,
};
use serde::Serialize;

/// What a query asks for, once its scope and shape are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub scope: Scope,
    pub comparison: bool,
}

pub struct IntentResolver;

impl IntentResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, query: &Query) -> Intent {
        Intent {
            scope: self.resolve_scope(query),
            comparison: self.is_comparison(query),
        }
    }

    /// An explicit platform from the caller wins; otherwise the first platform
    /// mentioned in the text, in [`Platform::ALL`] order; otherwise `All`.
    pub fn resolve_scope(&self, query: &Query) -> Scope {
        if let Some(Scope::Platform(platform)) = query.requested_scope() {
            return Scope::Platform(platform);
        }

        Platform::ALL
            .into_iter()
            .find(|platform| platform.is_mentioned_in(query.lowercased()))
            .map_or(Scope::All, Scope::Platform)
    }

    pub fn mentioned_platforms(&self, query: &Query) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|platform| platform.is_mentioned_in(query.lowercased()))
            .collect()
    }

    pub fn is_comparison(&self, query: &Query) -> bool {
        let has_comparison_term = query
            .tokens()
            .iter()
            .any(|token| is_exact_term(token, COMPARISON_TERMS));

        has_comparison_term || self.mentioned_platforms(query).len() >= 2
    }

    /// Query tokens naming a product feature, in query order. Falls back to
    /// the single keyword `general`.
    pub fn feature_keywords(&self, query: &Query) -> Vec<String> {
        let features: Vec<String> = query
            .tokens()
            .iter()
            .filter(|token| matches_vocabulary(token, FEATURE_TERMS))
            .cloned()
            .collect();

        if features.is_empty() {
            vec![GENERAL_FEATURE.to_string()]
        } else {
            features
        }
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new()
    }
}
