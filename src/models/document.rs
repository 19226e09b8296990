// file: src/models/document.rs
// description: documentation record as stored and read by the pipeline
// reference: internal data structures

use crate::models::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub platform: Platform,
    pub title: String,
    pub content: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(
        platform: Platform,
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            title: title.into(),
            content: content.into(),
            url: url.into(),
            category: category.into(),
            keywords: Vec::new(),
            last_updated: None,
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }
}
