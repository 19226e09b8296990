// file: src/text/keywords.rs
// description: frequency-ranked keyword extraction for documentation records
// reference: internal keyword heuristics

use crate::text::patterns::{WORD_TOKEN, starts_with_nonzero_integer};
use crate::text::vocabulary::is_stop_word;
use std::collections::HashMap;

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Most frequent meaningful words of a title and body. Words of three
/// characters or fewer, stop words and numbers are skipped; ties keep the
/// order of first appearance.
pub fn extract_keywords(title: &str, content: &str, max_keywords: usize) -> Vec<String> {
    let text = format!("{} {}", title, content).to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for word in WORD_TOKEN.find_iter(&text).map(|m| m.as_str()) {
        if word.chars().count() <= 3 || is_stop_word(word) || starts_with_nonzero_integer(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|word| (word, counts[word]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_by_frequency() {
        let keywords = extract_keywords(
            "Audience Builder",
            "Build an audience from profile traits. Audience membership updates as profile data changes.",
            3,
        );
        assert_eq!(keywords, vec!["audience", "profile", "builder"]);
    }

    #[test]
    fn test_skips_short_stop_and_numeric_words() {
        let keywords = extract_keywords(
            "API",
            "The 2024 release adds about 3000 webhooks between apps",
            DEFAULT_KEYWORD_COUNT,
        );
        assert_eq!(keywords, vec!["release", "adds", "webhooks", "apps"]);
    }

    #[test]
    fn test_caps_result_size() {
        let content = (0..30)
            .map(|i| format!("keyword{}", char::from(b'a' + (i % 26) as u8)))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extract_keywords("", &content, DEFAULT_KEYWORD_COUNT);
        assert_eq!(keywords.len(), DEFAULT_KEYWORD_COUNT);
    }
}
