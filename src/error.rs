// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Documentation store error: {0}")]
    Store(String),

    #[error("Retrieval failed for {scope}: {message}")]
    Retrieval { scope: String, message: String },

    #[error("Comparison retrieval failed for {platform}: {message}")]
    ComparisonRetrieval { platform: String, message: String },

    #[error("Corpus error in {path}: {message}")]
    Corpus { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AssistantError {
    /// Message safe to show the person who asked the question.
    pub fn user_message(&self) -> String {
        match self {
            AssistantError::Validation(message) => message.clone(),
            AssistantError::ComparisonRetrieval { .. } => {
                "Failed to process your comparison query. Please try again.".to_string()
            }
            _ => "Failed to process your query. Please try again.".to_string(),
        }
    }

    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            AssistantError::Retrieval { .. } | AssistantError::ComparisonRetrieval { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_retrieval() {
        let err = AssistantError::Retrieval {
            scope: "segment".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.is_retrieval_failure());
        assert_eq!(
            err.user_message(),
            "Failed to process your query. Please try again."
        );
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_user_message_for_comparison() {
        let err = AssistantError::ComparisonRetrieval {
            platform: "lytics".to_string(),
            message: "timeout".to_string(),
        };
        assert!(err.is_retrieval_failure());
        assert!(err.user_message().contains("comparison query"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AssistantError::Validation("Query is required".to_string());
        assert!(!err.is_retrieval_failure());
        assert_eq!(err.user_message(), "Query is required");
    }
}
