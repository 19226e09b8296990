// file: src/models/answer.rs
// description: synthesized answers, citations and the request/response surface
// reference: internal data structures

use crate::models::{Document, Platform, Scope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub platform: Platform,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>, platform: Platform) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            platform,
        }
    }

    /// Cite a document under its own platform. Untitled documents are not cited.
    pub fn from_document(document: &Document) -> Option<Self> {
        Self::attributed(document, document.platform)
    }

    /// Cite a document under the platform it was retrieved for.
    pub fn attributed(document: &Document, platform: Platform) -> Option<Self> {
        if document.title.is_empty() {
            return None;
        }
        Some(Self::new(document.title.clone(), document.url.clone(), platform))
    }
}

/// How the answer text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    OutOfDomain,
    NoResults,
    InsufficientComparisonData,
    HowTo,
    Informational,
    Comparison,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<Source>,
    pub kind: AnswerKind,
}

impl Answer {
    pub fn new(text: String, sources: Vec<Source>, kind: AnswerKind) -> Self {
        Self {
            text,
            sources,
            kind,
        }
    }

    pub fn without_sources(text: String, kind: AnswerKind) -> Self {
        Self::new(text, Vec::new(), kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub query: String,
    #[serde(default)]
    pub platform: Option<Scope>,
}

impl AnswerRequest {
    pub fn new(query: impl Into<String>, platform: Option<Scope>) -> Self {
        Self {
            query: query.into(),
            platform,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub sources: Vec<Source>,
    /// Scope the query was resolved against
    pub platform: Scope,
}

impl AnswerResponse {
    pub fn from_answer(answer: Answer, platform: Scope) -> Self {
        Self {
            answer: answer.text,
            sources: answer.sources,
            platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_documents_are_not_cited() {
        let titled = Document::new(Platform::Zeotap, "Consent", "c", "https://docs.zeotap.com/a", "a");
        let untitled = Document::new(Platform::Zeotap, "", "c", "https://docs.zeotap.com/b", "b");

        assert!(Source::from_document(&titled).is_some());
        assert!(Source::from_document(&untitled).is_none());
    }

    #[test]
    fn test_attributed_source_uses_given_platform() {
        let doc = Document::new(Platform::Segment, "Audiences", "c", "https://segment.com/a", "a");
        let source = Source::attributed(&doc, Platform::Lytics).unwrap();
        assert_eq!(source.platform, Platform::Lytics);
    }

    #[test]
    fn test_request_deserializes_optional_platform() {
        let request: AnswerRequest = serde_json::from_str(r#"{"query": "What is a source?"}"#).unwrap();
        assert!(request.platform.is_none());

        let request: AnswerRequest =
            serde_json::from_str(r#"{"query": "q", "platform": "zeotap"}"#).unwrap();
        assert_eq!(request.platform, Some(Scope::Platform(Platform::Zeotap)));
    }

    #[test]
    fn test_response_serializes_scope_as_string() {
        let answer = Answer::without_sources("text".to_string(), AnswerKind::NoResults);
        let response = AnswerResponse::from_answer(answer, Scope::All);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["platform"], "all");
        assert_eq!(json["sources"].as_array().map(Vec::len), Some(0));
    }
}
