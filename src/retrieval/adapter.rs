// file: src/retrieval/adapter.rs
// description: turns a normalized query and scope into documentation store searches
// reference: scoped and global text search with parallel per-platform fan-out

use crate::config::RetrievalConfig;
use crate::error::{AssistantError, Result};
use crate::models::{Platform, PlatformResults, Query, RetrievalResult, Scope};
use crate::store::DocumentationStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct RetrievalAdapter {
    store: Arc<dyn DocumentationStore>,
    global_limit: usize,
    scoped_limit: usize,
}

impl RetrievalAdapter {
    pub fn new(store: Arc<dyn DocumentationStore>, config: &RetrievalConfig) -> Self {
        Self {
            store,
            global_limit: config.global_limit,
            scoped_limit: config.scoped_limit,
        }
    }

    /// One search for the query's joined tokens: global for `All`, otherwise
    /// filtered to the platform.
    pub async fn retrieve(&self, query: &Query, scope: Scope) -> Result<RetrievalResult> {
        let search_text = query.normalized().joined_tokens();

        let platform = scope.platform();
        let limit = if platform.is_some() {
            self.scoped_limit
        } else {
            self.global_limit
        };

        debug!("Searching {} for \"{}\" (limit {})", scope, search_text, limit);

        let hits = self
            .store
            .search(&search_text, platform, limit)
            .await
            .map_err(|e| {
                warn!("Retrieval failed for {}: {}", scope, e);
                AssistantError::Retrieval {
                    scope: scope.to_string(),
                    message: e.to_string(),
                }
            })?;

        info!("Retrieved {} documents for scope {}", hits.len(), scope);
        Ok(RetrievalResult::new(scope, hits))
    }

    /// Queries every platform concurrently with the feature keywords and
    /// waits for all four before returning. Any single failure fails the call.
    pub async fn retrieve_for_comparison(&self, features: &[String]) -> Result<PlatformResults> {
        let search_text = features.join(" ");
        debug!("Comparison search for \"{}\" across all platforms", search_text);

        let (segment, mparticle, lytics, zeotap) = futures::try_join!(
            self.scoped_search(Platform::Segment, &search_text),
            self.scoped_search(Platform::Mparticle, &search_text),
            self.scoped_search(Platform::Lytics, &search_text),
            self.scoped_search(Platform::Zeotap, &search_text),
        )?;

        let results = PlatformResults {
            segment,
            mparticle,
            lytics,
            zeotap,
        };
        info!(
            "Comparison retrieval returned {} documents",
            results.total_documents()
        );
        Ok(results)
    }

    async fn scoped_search(&self, platform: Platform, search_text: &str) -> Result<RetrievalResult> {
        let hits = self
            .store
            .search(search_text, Some(platform), self.scoped_limit)
            .await
            .map_err(|e| {
                warn!("Comparison retrieval failed for {}: {}", platform, e);
                AssistantError::ComparisonRetrieval {
                    platform: platform.to_string(),
                    message: e.to_string(),
                }
            })?;

        Ok(RetrievalResult::new(Scope::Platform(platform), hits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, SearchHit};
    use crate::text::TextNormalizer;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Barrier;

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<(String, Option<Platform>, usize)>>,
        fail_for: Option<Platform>,
    }

    #[async_trait]
    impl DocumentationStore for RecordingStore {
        async fn search(
            &self,
            query: &str,
            platform: Option<Platform>,
            limit: usize,
        ) -> Result<Vec<SearchHit>> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), platform, limit));

            if platform.is_some() && platform == self.fail_for {
                return Err(AssistantError::Store("connection reset".to_string()));
            }

            let platform = platform.unwrap_or(Platform::Segment);
            Ok(vec![SearchHit::new(
                Document::new(platform, "Doc", "body", "https://segment.com/docs/x/", "x"),
                1.0,
            )])
        }

        async fn list_by_platform(&self, _platform: Platform) -> Result<Vec<Document>> {
            Ok(Vec::new())
        }

        async fn count(&self, _platform: Option<Platform>) -> Result<usize> {
            Ok(0)
        }
    }

    /// Every platform-filtered search blocks until all four have started.
    struct RendezvousStore {
        barrier: Barrier,
    }

    #[async_trait]
    impl DocumentationStore for RendezvousStore {
        async fn search(
            &self,
            _query: &str,
            platform: Option<Platform>,
            _limit: usize,
        ) -> Result<Vec<SearchHit>> {
            self.barrier.wait().await;
            let platform = platform.unwrap_or(Platform::Segment);
            Ok(vec![SearchHit::new(
                Document::new(platform, "Doc", "body", "https://segment.com/docs/x/", "x"),
                1.0,
            )])
        }

        async fn list_by_platform(&self, _platform: Platform) -> Result<Vec<Document>> {
            Ok(Vec::new())
        }

        async fn count(&self, _platform: Option<Platform>) -> Result<usize> {
            Ok(0)
        }
    }

    fn adapter(store: Arc<RecordingStore>) -> RetrievalAdapter {
        RetrievalAdapter::new(store, &RetrievalConfig::default())
    }

    #[tokio::test]
    async fn test_unscoped_search_uses_global_limit() {
        let store = Arc::new(RecordingStore::default());
        let query = Query::new("What is a Destination?", None, &TextNormalizer::new());

        let result = adapter(store.clone()).retrieve(&query, Scope::All).await.unwrap();

        assert_eq!(result.scope, Scope::All);
        let calls = store.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("what is a destination".to_string(), None, 5)]
        );
    }

    #[tokio::test]
    async fn test_scoped_search_uses_scoped_limit() {
        let store = Arc::new(RecordingStore::default());
        let query = Query::new("lytics audiences", None, &TextNormalizer::new());

        adapter(store.clone())
            .retrieve(&query, Scope::Platform(Platform::Lytics))
            .await
            .unwrap();

        let calls = store.calls.lock().unwrap();
        assert_eq!(calls[0].1, Some(Platform::Lytics));
        assert_eq!(calls[0].2, 3);
    }

    #[tokio::test]
    async fn test_comparison_queries_every_platform() {
        let store = Arc::new(RecordingStore::default());
        let features = vec!["audience".to_string(), "segment".to_string()];

        let results = adapter(store.clone())
            .retrieve_for_comparison(&features)
            .await
            .unwrap();

        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(q, _, limit)| q == "audience segment" && *limit == 3));
        for (platform, result) in results.iter() {
            assert_eq!(result.scope, Scope::Platform(platform));
            assert_eq!(result.hits[0].document.platform, platform);
        }
    }

    #[tokio::test]
    async fn test_comparison_searches_run_concurrently() {
        let store = Arc::new(RendezvousStore {
            barrier: Barrier::new(Platform::ALL.len()),
        });
        let adapter = RetrievalAdapter::new(store, &RetrievalConfig::default());

        let results = tokio::time::timeout(
            Duration::from_secs(5),
            adapter.retrieve_for_comparison(&["audience".to_string()]),
        )
        .await
        .expect("comparison searches were not issued concurrently")
        .unwrap();

        assert_eq!(results.total_documents(), 4);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_retrieval_error() {
        let store = Arc::new(RecordingStore {
            fail_for: Some(Platform::Zeotap),
            ..Default::default()
        });
        let query = Query::new("zeotap consent", None, &TextNormalizer::new());

        let err = adapter(store.clone())
            .retrieve(&query, Scope::Platform(Platform::Zeotap))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Retrieval { .. }));

        let err = adapter(store)
            .retrieve_for_comparison(&["consent".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AssistantError::ComparisonRetrieval { ref platform, .. } if platform == "zeotap"
        ));
    }
}
