// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{AssistantError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(AssistantError::Validation("Query is required".to_string()));
        }
        Ok(())
    }

    pub fn validate_required(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AssistantError::Validation(format!("{} is required", field)));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AssistantError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(AssistantError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }
        Ok(())
    }

    pub fn validate_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(AssistantError::Validation(
                "Limit must be greater than 0".to_string(),
            ));
        }

        if limit > 100 {
            return Err(AssistantError::Validation(
                "Limit too large (max 100)".to_string(),
            ));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_length).collect();
            format!("{}...", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_query() {
        assert!(Validator::validate_query("What is a source?").is_ok());
        assert!(Validator::validate_query("").is_err());
        assert!(Validator::validate_query("   ").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(Validator::validate_required("title", "Sources").is_ok());
        let err = Validator::validate_required("title", " ").unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://segment.com/docs").is_ok());
        assert!(Validator::validate_url("http://docs.lytics.com").is_ok());
        assert!(Validator::validate_url("segment.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("corpus.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent/corpus.json")).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(Validator::validate_limit(10).is_ok());
        assert!(Validator::validate_limit(0).is_err());
        assert!(Validator::validate_limit(101).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }
}
