// file: src/text/segmentation.rs
// description: sentence splitting and numbered-step extraction over document bodies
// reference: https://docs.rs/regex

use crate::text::patterns::{LEADING_STEP_MARKER, STEP_BOUNDARY, STEP_MARKER};

/// Text segmentation capability used by the answer synthesizers.
pub trait TextSegmenter: Send + Sync {
    /// Trimmed, non-empty sentences in document order.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Bodies of "N. text" list items with the marker removed, in order.
    fn extract_numbered_items(&self, text: &str) -> Vec<String>;
}

/// Segmenter driven by the compiled patterns in [`crate::text::patterns`].
///
/// A period only ends a sentence when the next character is not a digit, so
/// decimals such as "2.5" stay inside their sentence. A numbered item runs
/// from its "N. " marker up to the next "N." anywhere in the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSegmenter;

impl PatternSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl TextSegmenter for PatternSegmenter {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut push = |segment: &str| {
            let trimmed = segment.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
        };

        let mut start = 0;
        let mut chars = text.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            if c != '.' {
                continue;
            }
            let followed_by_digit = chars
                .peek()
                .is_some_and(|(_, next)| next.is_ascii_digit());
            if !followed_by_digit {
                push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
        }
        push(&text[start..]);

        sentences
    }

    fn extract_numbered_items(&self, text: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut position = 0;

        while let Some(marker) = STEP_MARKER.find_at(text, position) {
            let end = STEP_BOUNDARY
                .find_at(text, marker.end())
                .map_or(text.len(), |boundary| boundary.start());

            let item = text[marker.start()..end].trim();
            items.push(LEADING_STEP_MARKER.replace(item, "").into_owned());

            position = end;
        }

        items
    }
}
