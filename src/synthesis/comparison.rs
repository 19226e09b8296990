// file: src/synthesis/comparison.rs
// description: merges per-platform snippets into a side-by-side comparison answer
// reference: extractive answer synthesis across platform result sets

use crate::models::{Answer, AnswerKind, Platform, PlatformResults, RetrievalResult, Source};
use crate::synthesis::messages;
use crate::text::TextSegmenter;
use std::sync::Arc;
use tracing::debug;

const MIN_PLATFORMS_TO_COMPARE: usize = 2;

pub struct ComparisonSynthesizer {
    segmenter: Arc<dyn TextSegmenter>,
}

impl ComparisonSynthesizer {
    pub fn new(segmenter: Arc<dyn TextSegmenter>) -> Self {
        Self { segmenter }
    }

    pub fn synthesize(&self, results: &PlatformResults, features: &[String]) -> Answer {
        let feature = features.join(" ");

        let platform_info: Vec<(Platform, String)> = results
            .iter()
            .map(|(platform, result)| (platform, self.platform_info(result, features)))
            .filter(|(_, info)| !info.is_empty())
            .collect();

        debug!(
            "{} platforms have information about \"{}\"",
            platform_info.len(),
            feature
        );

        if platform_info.len() < MIN_PLATFORMS_TO_COMPARE {
            return Answer::without_sources(
                messages::insufficient_comparison(&feature),
                AnswerKind::InsufficientComparisonData,
            );
        }

        let mut response = messages::comparison_lead_in(&feature);
        for (platform, info) in &platform_info {
            response.push_str(&format!("**{}**: {}\n\n", platform.capitalized(), info));
        }
        response.push_str(&messages::comparison_caveat(&feature));

        // Every retrieved document is cited under the platform it was searched for.
        let sources = results
            .iter()
            .flat_map(|(platform, result)| {
                result
                    .documents()
                    .filter_map(move |document| Source::attributed(document, platform))
            })
            .collect();

        Answer::new(response, sources, AnswerKind::Comparison)
    }

    /// Sentences mentioning any feature keyword, per document, joined with ". ".
    fn platform_info(&self, result: &RetrievalResult, features: &[String]) -> String {
        let keywords: Vec<String> = features.iter().map(|f| f.to_lowercase()).collect();

        let mut info = String::new();
        for document in result.documents() {
            let relevant: Vec<String> = self
                .segmenter
                .split_sentences(&document.content)
                .into_iter()
                .filter(|sentence| {
                    let lowered = sentence.to_lowercase();
                    keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
                })
                .collect();

            if !relevant.is_empty() {
                info.push_str(&relevant.join(". "));
                info.push_str(". ");
            }
        }

        info.trim().to_string()
    }
}
