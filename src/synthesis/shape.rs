// file: src/synthesis/shape.rs
// description: question shape classification for single-scope answers
// reference: phrasal pattern matching

use crate::text::patterns::is_how_to_question;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionShape {
    HowTo,
    Informational,
}

impl QuestionShape {
    pub fn classify(query: &str) -> Self {
        if is_how_to_question(query) {
            QuestionShape::HowTo
        } else {
            QuestionShape::Informational
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            QuestionShape::classify("How do I create a source in Segment?"),
            QuestionShape::HowTo
        );
        assert_eq!(
            QuestionShape::classify("What is a source in Segment?"),
            QuestionShape::Informational
        );
        assert_eq!(
            QuestionShape::classify("Steps to build an audience in Lytics"),
            QuestionShape::HowTo
        );
        assert_eq!(
            QuestionShape::classify("HOW ARE profiles merged"),
            QuestionShape::HowTo
        );
    }
}
