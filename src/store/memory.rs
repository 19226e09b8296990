// file: src/store/memory.rs
// description: in-memory documentation store with stemmed text relevance ranking
// reference: text index over title, content and keywords

use crate::error::Result;
use crate::models::{Document, Platform, SearchHit};
use crate::store::DocumentationStore;
use crate::text::TextNormalizer;
use crate::text::vocabulary::is_search_stop_word;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

struct IndexedDocument {
    document: Document,
    title_terms: Vec<String>,
    content_terms: Vec<String>,
    keyword_terms: Vec<String>,
}

pub struct MemoryStore {
    normalizer: TextNormalizer,
    documents: Vec<IndexedDocument>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Document>) -> Self {
        let mut store = Self {
            normalizer: TextNormalizer::new(),
            documents: Vec::with_capacity(documents.len()),
        };
        for document in documents {
            store.insert(document);
        }
        store
    }

    pub fn insert(&mut self, document: Document) {
        let title_terms = self.normalizer.normalize(&document.title).stemmed;
        let content_terms = self.normalizer.normalize(&document.content).stemmed;
        let keyword_terms = self
            .normalizer
            .normalize(&document.keywords.join(" "))
            .stemmed;

        self.documents.push(IndexedDocument {
            document,
            title_terms,
            content_terms,
            keyword_terms,
        });
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Unique stems of the tokens that are not search stop words, in query order.
    fn query_terms(&self, query: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(query);
        let mut seen = HashSet::new();

        normalized
            .tokens
            .iter()
            .zip(normalized.stemmed)
            .filter(|(token, _)| !is_search_stop_word(token))
            .filter_map(|(_, stem)| seen.insert(stem.clone()).then_some(stem))
            .collect()
    }

    fn field_score(field_terms: &[String], query_terms: &HashSet<&str>) -> f32 {
        if field_terms.is_empty() {
            return 0.0;
        }
        let matches = field_terms
            .iter()
            .filter(|term| query_terms.contains(term.as_str()))
            .count();
        matches as f32 / (1.0 + (field_terms.len() as f32).ln())
    }

    fn score(indexed: &IndexedDocument, query_terms: &HashSet<&str>) -> f32 {
        Self::field_score(&indexed.title_terms, query_terms)
            + Self::field_score(&indexed.content_terms, query_terms)
            + Self::field_score(&indexed.keyword_terms, query_terms)
    }

    fn rank(&self, query: &str, platform: Option<Platform>, limit: usize) -> Vec<SearchHit> {
        let terms = self.query_terms(query);
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }
        let term_set: HashSet<&str> = terms.iter().map(String::as_str).collect();

        let mut scored: Vec<(usize, f32)> = self
            .documents
            .iter()
            .enumerate()
            .filter(|(_, indexed)| platform.is_none_or(|p| indexed.document.platform == p))
            .map(|(idx, indexed)| (idx, Self::score(indexed, &term_set)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        debug!(
            "Ranked {} documents for terms {:?} (platform: {:?})",
            scored.len(),
            terms,
            platform
        );

        scored
            .into_iter()
            .map(|(idx, score)| SearchHit::new(self.documents[idx].document.clone(), score))
            .collect()
    }
}

#[async_trait]
impl DocumentationStore for MemoryStore {
    async fn search(
        &self,
        query: &str,
        platform: Option<Platform>,
        limit: usize,
    ) -> Result<Vec<SearchHit>> {
        Ok(self.rank(query, platform, limit))
    }

    async fn list_by_platform(&self, platform: Platform) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .filter(|indexed| indexed.document.platform == platform)
            .map(|indexed| indexed.document.clone())
            .collect();

        // Undated documents sort after dated ones.
        documents.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(documents)
    }

    async fn count(&self, platform: Option<Platform>) -> Result<usize> {
        Ok(self
            .documents
            .iter()
            .filter(|indexed| platform.is_none_or(|p| indexed.document.platform == p))
            .count())
    }
}
