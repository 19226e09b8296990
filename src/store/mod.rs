// file: src/store/mod.rs
// description: documentation store interface and implementations
// reference: internal module structure

pub mod corpus;
pub mod memory;

use crate::error::Result;
use crate::models::{Document, Platform, SearchHit};
use async_trait::async_trait;

pub use corpus::CorpusLoader;
pub use memory::MemoryStore;

/// Text-searchable collection of platform documentation.
///
/// Implementations must return an error, never an empty result, when the
/// underlying search could not be performed.
#[async_trait]
pub trait DocumentationStore: Send + Sync {
    /// Documents ranked by relevance to `query`, best first, at most `limit`.
    async fn search(
        &self,
        query: &str,
        platform: Option<Platform>,
        limit: usize,
    ) -> Result<Vec<SearchHit>>;

    /// All documents of one platform, most recently updated first.
    async fn list_by_platform(&self, platform: Platform) -> Result<Vec<Document>>;

    async fn count(&self, platform: Option<Platform>) -> Result<usize>;
}
