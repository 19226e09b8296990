// file: src/text/patterns.rs
// description: compiled regex patterns for tokenizing and segmenting documentation text
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tokens
    pub static ref WORD_TOKEN: Regex = Regex::new(
        r"\w+"
    ).expect("WORD_TOKEN regex is valid");

    // Numbered list items: "3. Click Save"
    pub static ref STEP_MARKER: Regex = Regex::new(
        r"[0-9]+\.\s"
    ).expect("STEP_MARKER regex is valid");

    pub static ref STEP_BOUNDARY: Regex = Regex::new(
        r"[0-9]+\."
    ).expect("STEP_BOUNDARY regex is valid");

    pub static ref LEADING_STEP_MARKER: Regex = Regex::new(
        r"^[0-9]+\.\s"
    ).expect("LEADING_STEP_MARKER regex is valid");

    // Question shapes that ask for a procedure
    pub static ref HOW_TO_PATTERNS: Vec<Regex> = [
        r"(?i)how (do|to|can|would|should) (i|we|you)",
        r"(?i)how (is|are|was|were)",
        r"(?i)steps to",
        r"(?i)guide for",
        r"(?i)tutorial for",
        r"(?i)process (of|for)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("HOW_TO_PATTERNS regex is valid"))
    .collect();
}

pub fn is_how_to_question(text: &str) -> bool {
    HOW_TO_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// True when `word` begins with an integer other than zero ("2024", "3rd").
pub fn starts_with_nonzero_integer(word: &str) -> bool {
    let digits: String = word.chars().take_while(|c| c.is_ascii_digit()).collect();
    !digits.is_empty() && digits.chars().any(|c| c != '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokens() {
        let tokens: Vec<&str> = WORD_TOKEN
            .find_iter("what's the api_key for m-particle?")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["what", "s", "the", "api_key", "for", "m", "particle"]);
    }

    #[test]
    fn test_step_marker() {
        assert!(STEP_MARKER.is_match("1. Open the app"));
        assert!(STEP_MARKER.is_match("12.\tOpen"));
        assert!(!STEP_MARKER.is_match("version 2.5"));
        assert!(STEP_BOUNDARY.is_match("version 2.5"));
    }

    #[test]
    fn test_how_to_patterns() {
        assert!(is_how_to_question("How do I create a source in Segment?"));
        assert!(is_how_to_question("how are audiences built"));
        assert!(is_how_to_question("Steps to enable consent"));
        assert!(is_how_to_question("Is there a guide for webhooks"));
        assert!(is_how_to_question("what is the process of identity resolution"));
        assert!(!is_how_to_question("What is a source in Segment?"));
    }

    #[test]
    fn test_starts_with_nonzero_integer() {
        assert!(starts_with_nonzero_integer("2024"));
        assert!(starts_with_nonzero_integer("3rd"));
        assert!(!starts_with_nonzero_integer("000"));
        assert!(!starts_with_nonzero_integer("audience"));
    }
}
