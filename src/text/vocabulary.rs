// file: src/text/vocabulary.rs
// description: fixed term tables used by classification and keyword extraction
// reference: internal rule tables

/// Terms that mark a question as being about customer data platforms.
pub const DOMAIN_TERMS: &[&str] = &[
    "segment",
    "mparticle",
    "lytics",
    "zeotap",
    "cdp",
    "customer data",
    "platform",
    "integration",
    "source",
    "destination",
    "audience",
    "profile",
    "track",
    "event",
    "data",
    "analytics",
    "user",
    "identity",
    "api",
    "webhook",
];

/// Tokens that ask for a side-by-side comparison. Matched exactly.
pub const COMPARISON_TERMS: &[&str] = &[
    "compare",
    "comparison",
    "versus",
    "vs",
    "difference",
    "different",
    "better",
    "best",
    "worse",
    "worst",
    "similar",
    "similarly",
];

/// Product features a comparison can be scoped to.
pub const FEATURE_TERMS: &[&str] = &[
    "audience",
    "segment",
    "integration",
    "source",
    "destination",
    "tracking",
    "event",
    "profile",
    "identity",
    "user",
    "data",
    "api",
    "webhook",
    "consent",
    "privacy",
    "gdpr",
    "ccpa",
    "schema",
    "mapping",
    "transform",
    "enrichment",
];

/// Feature set used when a comparison names no known feature.
pub const GENERAL_FEATURE: &str = "general";

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "into", "like", "through", "after", "over", "between", "out", "against", "during",
    "without", "before", "under", "around", "among",
];

/// English stop words ignored by full-text search. Covers question words and
/// the fragments left by splitting contractions ("don't" → "don", "t").
pub const SEARCH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "among", "an", "and",
    "any", "are", "aren", "around", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "cannot", "could", "couldn", "d", "did",
    "didn", "do", "does", "doesn", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn", "has", "hasn", "have", "haven", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "isn", "it", "its", "itself", "just", "like", "ll", "m", "me", "more", "most", "mustn",
    "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "re", "s", "same",
    "shan", "she", "should", "shouldn", "so", "some", "such", "t", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was", "wasn",
    "we", "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "without", "won", "would", "wouldn", "you", "your", "yours", "yourself",
    "yourselves",
];

/// A token matches a table when it equals an entry or contains one.
pub fn matches_vocabulary(token: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| token == *term || token.contains(term))
}

pub fn is_exact_term(token: &str, terms: &[&str]) -> bool {
    terms.contains(&token)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn is_search_stop_word(word: &str) -> bool {
    SEARCH_STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_substring_matches() {
        assert!(matches_vocabulary("webhook", DOMAIN_TERMS));
        assert!(matches_vocabulary("webhooks", DOMAIN_TERMS));
        assert!(matches_vocabulary("users", DOMAIN_TERMS));
        assert!(!matches_vocabulary("weather", DOMAIN_TERMS));
    }

    #[test]
    fn test_multi_word_term_never_matches_single_token() {
        assert!(!matches_vocabulary("customer", &["customer data"]));
    }

    #[test]
    fn test_comparison_terms_are_exact() {
        assert!(is_exact_term("vs", COMPARISON_TERMS));
        assert!(!is_exact_term("bestow", COMPARISON_TERMS));
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("between"));
        assert!(!is_stop_word("audience"));
    }

    #[test]
    fn test_search_stop_words_cover_keyword_stop_words() {
        for word in STOP_WORDS {
            assert!(is_search_stop_word(word), "{} missing", word);
        }
        for word in ["what", "is", "how", "do", "i", "does", "which"] {
            assert!(is_search_stop_word(word));
            assert!(!is_stop_word(word));
        }
        assert!(!is_search_stop_word("audience"));
    }
}
