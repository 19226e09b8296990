// file: src/store/corpus.rs
// description: loads documentation records from a JSON corpus file
// reference: https://docs.rs/serde_json

use crate::error::{AssistantError, Result};
use crate::models::{Document, Platform};
use crate::store::MemoryStore;
use crate::text::{DEFAULT_KEYWORD_COUNT, extract_keywords};
use crate::utils::Validator;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CorpusRecord {
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

pub struct CorpusLoader {
    path: PathBuf,
}

impl CorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Document>> {
        Validator::validate_file_path(&self.path).map_err(|e| self.error(e.to_string()))?;

        let raw = fs::read_to_string(&self.path)?;
        let documents = self.parse(&raw)?;

        info!(
            "Loaded {} documents from {}",
            documents.len(),
            self.path.display()
        );
        Ok(documents)
    }

    pub fn load_store(&self) -> Result<MemoryStore> {
        Ok(MemoryStore::new(self.load()?))
    }

    /// Records sharing a (platform, url) pair replace the earlier record in place.
    pub fn parse(&self, raw: &str) -> Result<Vec<Document>> {
        let records: Vec<CorpusRecord> =
            serde_json::from_str(raw).map_err(|e| self.error(format!("invalid JSON: {}", e)))?;

        let mut documents: Vec<Document> = Vec::with_capacity(records.len());
        let mut positions: HashMap<(Platform, String), usize> = HashMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let document = self
                .to_document(record)
                .map_err(|e| self.error(format!("record {}: {}", index, e)))?;

            let key = (document.platform, document.url.clone());
            match positions.get(&key) {
                Some(&position) => {
                    debug!("Replacing duplicate record for {}", document.url);
                    documents[position] = document;
                }
                None => {
                    positions.insert(key, documents.len());
                    documents.push(document);
                }
            }
        }

        Ok(documents)
    }

    fn to_document(&self, record: CorpusRecord) -> Result<Document> {
        Validator::validate_required("title", &record.title)?;
        Validator::validate_required("content", &record.content)?;
        Validator::validate_required("url", &record.url)?;
        Validator::validate_url(&record.url)?;

        let platform = match record.platform.as_deref() {
            Some(name) => name.parse::<Platform>()?,
            None => Platform::from_url(&record.url).ok_or_else(|| {
                AssistantError::UnknownPlatform(format!("cannot infer platform from {}", record.url))
            })?,
        };

        let category = record
            .category
            .filter(|category| !category.trim().is_empty())
            .unwrap_or_else(|| category_from_url(&record.url));

        let keywords = match record.keywords {
            Some(keywords) if !keywords.is_empty() => keywords,
            _ => extract_keywords(&record.title, &record.content, DEFAULT_KEYWORD_COUNT),
        };

        let mut document = Document::new(platform, record.title, record.content, record.url, category)
            .with_keywords(keywords);
        document.last_updated = record.last_updated;

        Ok(document)
    }

    fn error(&self, message: String) -> AssistantError {
        AssistantError::Corpus {
            path: self.path.clone(),
            message,
        }
    }
}

/// Second-to-last path segment of the URL, or `general`.
fn category_from_url(url: &str) -> String {
    let parts: Vec<&str> = url.split('/').collect();
    parts
        .len()
        .checked_sub(2)
        .map(|idx| parts[idx])
        .filter(|segment| !segment.is_empty())
        .unwrap_or("general")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader() -> CorpusLoader {
        CorpusLoader::new("corpus.json")
    }

    #[test]
    fn test_parse_fills_defaults() {
        let raw = r#"[
            {
                "title": "Sources Overview",
                "content": "A source sends tracking data to Segment. Sources include websites and servers.",
                "url": "https://segment.com/docs/connections/sources/"
            }
        ]"#;

        let docs = loader().parse(raw).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].platform, Platform::Segment);
        assert_eq!(docs[0].category, "sources");
        assert!(docs[0].keywords.contains(&"sources".to_string()));
    }

    #[test]
    fn test_parse_keeps_explicit_fields() {
        let raw = r#"[
            {
                "platform": "lytics",
                "title": "Audiences",
                "content": "Audiences group users.",
                "url": "https://docs.lytics.com/docs/audiences",
                "category": "audiences",
                "keywords": ["audience"],
                "last_updated": "2025-03-01T00:00:00Z"
            }
        ]"#;

        let docs = loader().parse(raw).unwrap();
        assert_eq!(docs[0].category, "audiences");
        assert_eq!(docs[0].keywords, vec!["audience".to_string()]);
        assert!(docs[0].last_updated.is_some());
    }

    #[test]
    fn test_duplicate_records_upsert() {
        let raw = r#"[
            {"title": "Old", "content": "old body", "url": "https://docs.zeotap.com/home/a"},
            {"title": "Other", "content": "other body", "url": "https://docs.zeotap.com/home/b"},
            {"title": "New", "content": "new body", "url": "https://docs.zeotap.com/home/a"}
        ]"#;

        let docs = loader().parse(raw).unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Other"]);
    }

    #[test]
    fn test_rejects_invalid_records() {
        let missing_title = r#"[{"content": "body", "url": "https://segment.com/docs/a/"}]"#;
        assert!(matches!(
            loader().parse(missing_title),
            Err(AssistantError::Corpus { .. })
        ));

        let unknown_host = r#"[{"title": "t", "content": "body", "url": "https://example.com/a"}]"#;
        assert!(loader().parse(unknown_host).is_err());

        let bad_platform =
            r#"[{"platform": "hubspot", "title": "t", "content": "c", "url": "https://segment.com/a"}]"#;
        assert!(loader().parse(bad_platform).is_err());

        assert!(loader().parse("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("corpus.json");
        std::fs::write(
            &path,
            r#"[{"title": "Kits", "content": "Kits forward events.", "url": "https://docs.mparticle.com/guides/kits"}]"#,
        )
        .unwrap();

        let store = CorpusLoader::new(&path).load_store().unwrap();
        assert_eq!(store.len(), 1);

        let missing = CorpusLoader::new(temp.path().join("missing.json"));
        assert!(matches!(missing.load(), Err(AssistantError::Corpus { .. })));
    }

    #[test]
    fn test_category_from_url() {
        assert_eq!(
            category_from_url("https://segment.com/docs/connections/sources/"),
            "sources"
        );
        assert_eq!(category_from_url("https://docs.lytics.com/docs/audiences"), "docs");
        assert_eq!(category_from_url("nourl"), "general");
    }
}
