// file: src/pipeline/orchestrator.rs
// description: coordinates normalization, classification, retrieval and synthesis for one question
// reference: orchestrates the asynchronous answer workflow

use crate::config::Config;
use crate::error::Result;
use crate::intent::{Intent, IntentResolver, RelevanceClassifier};
use crate::models::{Answer, AnswerKind, AnswerRequest, AnswerResponse, Query, Scope};
use crate::retrieval::RetrievalAdapter;
use crate::store::DocumentationStore;
use crate::synthesis::{AnswerSynthesizer, ComparisonSynthesizer, messages};
use crate::text::{PatternSegmenter, TextNormalizer, TextSegmenter};
use crate::utils::{OperationTimer, Validator};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const SLOW_QUERY_THRESHOLD: Duration = Duration::from_secs(2);

/// Everything the pipeline decided for a question, including the answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub scope: Scope,
    /// `None` when the question was refused as out of domain
    pub intent: Option<Intent>,
    pub answer: Answer,
}

impl PipelineOutcome {
    pub fn into_response(self) -> AnswerResponse {
        AnswerResponse::from_answer(self.answer, self.scope)
    }
}

pub struct QueryPipeline {
    normalizer: TextNormalizer,
    classifier: RelevanceClassifier,
    resolver: IntentResolver,
    retrieval: RetrievalAdapter,
    answers: AnswerSynthesizer,
    comparisons: ComparisonSynthesizer,
}

impl QueryPipeline {
    pub fn new(store: Arc<dyn DocumentationStore>, config: &Config) -> Self {
        Self::with_segmenter(store, config, Arc::new(PatternSegmenter::new()))
    }

    pub fn with_segmenter(
        store: Arc<dyn DocumentationStore>,
        config: &Config,
        segmenter: Arc<dyn TextSegmenter>,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            classifier: RelevanceClassifier::new(),
            resolver: IntentResolver::new(),
            retrieval: RetrievalAdapter::new(store, &config.retrieval),
            answers: AnswerSynthesizer::new(segmenter.clone(), &config.synthesis),
            comparisons: ComparisonSynthesizer::new(segmenter),
        }
    }

    pub async fn respond(&self, request: &AnswerRequest) -> Result<AnswerResponse> {
        Ok(self.process(request).await?.into_response())
    }

    pub async fn process(&self, request: &AnswerRequest) -> Result<PipelineOutcome> {
        Validator::validate_query(&request.query)?;

        let timer = OperationTimer::new("answer query");
        let query = Query::new(request.query.as_str(), request.platform, &self.normalizer);

        if !self.classifier.is_relevant(&query) {
            warn!("Query is outside the CDP domain, skipping retrieval");
            timer.finish();
            return Ok(PipelineOutcome {
                scope: request.platform.unwrap_or_default(),
                intent: None,
                answer: Answer::without_sources(
                    messages::OUT_OF_DOMAIN.to_string(),
                    AnswerKind::OutOfDomain,
                ),
            });
        }

        let intent = self.resolver.resolve(&query);
        info!(
            "Resolved scope {} (comparison: {})",
            intent.scope, intent.comparison
        );

        let answer = if intent.comparison {
            self.compare(&query).await?
        } else {
            self.answer_in_scope(&query, intent.scope).await?
        };

        timer.checkpoint(&format!("answer kind {:?}", answer.kind));
        timer.warn_if_slow(SLOW_QUERY_THRESHOLD, request.query.as_str());
        timer.finish();

        Ok(PipelineOutcome {
            scope: intent.scope,
            intent: Some(intent),
            answer,
        })
    }

    async fn answer_in_scope(&self, query: &Query, scope: Scope) -> Result<Answer> {
        let result = self.retrieval.retrieve(query, scope).await?;

        if result.is_empty() {
            warn!("No documents found for scope {}", scope);
            return Ok(Answer::without_sources(
                messages::no_documents(query.raw(), scope),
                AnswerKind::NoResults,
            ));
        }

        let documents: Vec<_> = result.documents().cloned().collect();
        Ok(self.answers.synthesize(query.raw(), &documents, scope))
    }

    async fn compare(&self, query: &Query) -> Result<Answer> {
        let features = self.resolver.feature_keywords(query);
        info!("Comparing platforms on {:?}", features);

        let results = self.retrieval.retrieve_for_comparison(&features).await?;
        Ok(self.comparisons.synthesize(&results, &features))
    }
}
