// file: src/models/search_result.rs
// description: Ranked search hits and per-scope retrieval results
// reference: Used for text relevance search results

use crate::models::{Document, Platform, Scope};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document: Document,

    /// Store-provided relevance score (higher is more relevant)
    pub score: f32,
}

impl SearchHit {
    pub fn new(document: Document, score: f32) -> Self {
        Self { document, score }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_content_len: usize) -> String {
        let content_preview = Validator::truncate_text(&self.document.content, max_content_len);

        format!(
            "Score: {:.4} | [{}] {} ({})\n{}\n",
            self.score,
            self.document.platform,
            self.document.title,
            self.document.url,
            content_preview
        )
    }
}

/// Documents returned for one (query, scope) pair, most relevant first.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalResult {
    pub scope: Scope,
    pub hits: Vec<SearchHit>,
}

impl RetrievalResult {
    pub fn new(scope: Scope, hits: Vec<SearchHit>) -> Self {
        Self { scope, hits }
    }

    pub fn empty(scope: Scope) -> Self {
        Self::new(scope, Vec::new())
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.hits.iter().map(|hit| &hit.document)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// One retrieval result per platform, held in the fixed platform order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformResults {
    pub segment: RetrievalResult,
    pub mparticle: RetrievalResult,
    pub lytics: RetrievalResult,
    pub zeotap: RetrievalResult,
}

impl PlatformResults {
    pub fn get(&self, platform: Platform) -> &RetrievalResult {
        match platform {
            Platform::Segment => &self.segment,
            Platform::Mparticle => &self.mparticle,
            Platform::Lytics => &self.lytics,
            Platform::Zeotap => &self.zeotap,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &RetrievalResult)> {
        Platform::ALL
            .into_iter()
            .map(move |platform| (platform, self.get(platform)))
    }

    pub fn total_documents(&self) -> usize {
        self.iter().map(|(_, result)| result.len()).sum()
    }
}
