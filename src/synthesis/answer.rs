// file: src/synthesis/answer.rs
// description: builds how-to and informational answers from retrieved documents
// reference: extractive answer synthesis over sentence and step segments

use crate::config::SynthesisConfig;
use crate::models::{Answer, AnswerKind, Document, Scope, Source};
use crate::synthesis::messages;
use crate::synthesis::shape::QuestionShape;
use crate::text::TextSegmenter;
use std::sync::Arc;
use tracing::debug;

/// Extractive synthesizer for a single scope. Output depends only on the
/// query, the documents and the scope.
pub struct AnswerSynthesizer {
    segmenter: Arc<dyn TextSegmenter>,
    max_steps: usize,
    max_sentences: usize,
}

impl AnswerSynthesizer {
    pub fn new(segmenter: Arc<dyn TextSegmenter>, config: &SynthesisConfig) -> Self {
        Self {
            segmenter,
            max_steps: config.max_steps,
            max_sentences: config.max_sentences,
        }
    }

    /// `documents` is expected to be non-empty; the empty case is answered
    /// before synthesis with [`messages::no_documents`].
    pub fn synthesize(&self, query: &str, documents: &[Document], scope: Scope) -> Answer {
        let sources = documents.iter().filter_map(Source::from_document).collect();

        let shape = QuestionShape::classify(query);
        debug!("Question shape: {:?}", shape);

        let (text, kind) = match shape {
            QuestionShape::HowTo => self.how_to(query, documents, scope),
            QuestionShape::Informational => self.informational(query, documents, scope),
        };

        Answer::new(text, sources, kind)
    }

    fn how_to(&self, query: &str, documents: &[Document], scope: Scope) -> (String, AnswerKind) {
        let action = action_phrase(query);

        let mut steps = Vec::new();
        let mut unstructured = String::new();
        for document in documents {
            let items = self.segmenter.extract_numbered_items(&document.content);
            if items.is_empty() {
                unstructured.push_str(&document.content);
                unstructured.push(' ');
            } else {
                steps.extend(items);
            }
        }

        let mut kind = AnswerKind::HowTo;
        let mut response;

        if !steps.is_empty() {
            response = messages::steps_lead_in(&action, scope);
            for (index, step) in steps.iter().take(self.max_steps).enumerate() {
                response.push_str(&format!("{}. {}\n", index + 1, step));
            }
        } else {
            response = messages::typical_steps_lead_in(&action, scope);
            let sentences = self.relevant_sentences(query, &unstructured);

            if sentences.is_empty() {
                response.push_str(messages::NO_STEPS_FOUND);
                kind = AnswerKind::NoResults;
            } else {
                for (index, sentence) in sentences.iter().take(self.max_sentences).enumerate() {
                    response.push_str(&format!("{}. {}.\n", index + 1, sentence));
                }
            }
        }

        response.push_str(&messages::documentation_pointer(scope));
        (response, kind)
    }

    fn informational(
        &self,
        query: &str,
        documents: &[Document],
        scope: Scope,
    ) -> (String, AnswerKind) {
        let combined_text: String = documents
            .iter()
            .map(|document| format!("{} ", document.content))
            .collect();

        let sentences = self.relevant_sentences(query, &combined_text);
        if sentences.is_empty() {
            return (
                messages::no_relevant_information(query, scope),
                AnswerKind::NoResults,
            );
        }

        let combined = sentences
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(". ");

        (
            format!("{}.{}", combined, messages::informational_attribution(scope)),
            AnswerKind::Informational,
        )
    }

    /// Sentences containing at least one query word longer than three characters.
    fn relevant_sentences(&self, query: &str, text: &str) -> Vec<String> {
        let words = query_words(query);
        if words.is_empty() {
            return Vec::new();
        }

        self.segmenter
            .split_sentences(text)
            .into_iter()
            .filter(|sentence| {
                let lowered = sentence.to_lowercase();
                words.iter().any(|word| lowered.contains(word.as_str()))
            })
            .collect()
    }
}

/// Space-separated words of the lowercased query, longer than three characters.
/// Punctuation stays attached to the word.
fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(' ')
        .filter(|word| word.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// The lowercased query with the first "how do i " and then the first
/// "how to " removed.
fn action_phrase(query: &str) -> String {
    query
        .to_lowercase()
        .replacen("how do i ", "", 1)
        .replacen("how to ", "", 1)
}
