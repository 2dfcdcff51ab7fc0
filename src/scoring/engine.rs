use std::sync::Arc;

use tracing::{debug, info};

use super::error::{ScoringError, ScoringResult};
use super::known_property::PropertyProcessor;
use super::processor::Processor;
use super::store::PropertyStore;
use super::types::{RelevanceVerdict, Report};
use crate::constants::{CONFIDENCE_THRESHOLD, SCORE_THRESHOLD, ThresholdError, validate_threshold};
use crate::dictionary::DictionaryLookup;
use crate::item::Item;
use crate::nlp::LexiconTagger;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Thresholds for accepting a report and rejecting a candidate.
pub struct EngineConfig {
    /// A report (and a candidate's score) must be strictly above this to count.
    pub confidence_threshold: f64,
    /// A candidate scoring strictly below this is rejected.
    pub score_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            score_threshold: SCORE_THRESHOLD,
        }
    }
}

impl EngineConfig {
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ThresholdError> {
        validate_threshold("confidence_threshold", self.confidence_threshold)?;
        validate_threshold("score_threshold", self.score_threshold)
    }
}

/// Runs an ordered list of [`Processor`]s and turns the first confident report into a
/// keep/reject decision for a candidate item.
///
/// Rejection requires strong, corroborated evidence; anything weaker keeps the candidate.
pub struct RelevanceEngine {
    processors: Vec<Arc<dyn Processor>>,
    config: EngineConfig,
}

impl RelevanceEngine {
    /// Creates an engine with no processors.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            processors: Vec::new(),
            config,
        }
    }

    /// Creates the default pipeline: a [`PropertyProcessor`] over `lookup` and the built-in
    /// [`LexiconTagger`].
    pub fn with_dictionary(lookup: Arc<dyn DictionaryLookup>, config: EngineConfig) -> Self {
        let store = Arc::new(PropertyStore::new(lookup));
        let processor = PropertyProcessor::new(store, Arc::new(LexiconTagger::new()));
        Self::new(config).with_processor(Arc::new(processor))
    }

    /// Appends a processor; processors run in registration order.
    pub fn register(&mut self, processor: Arc<dyn Processor>) {
        self.processors.push(processor);
    }

    pub fn with_processor(mut self, processor: Arc<dyn Processor>) -> Self {
        self.register(processor);
        self
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the first report more confident than the threshold, or an empty report.
    pub async fn score(&self, items: &[Item], title: &str) -> ScoringResult<Report> {
        if items.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }

        for processor in &self.processors {
            let report = processor.score(items, title).await?;

            debug!(
                processor = processor.name(),
                confidence = report.confidence,
                threshold = self.config.confidence_threshold,
                "Processor report"
            );

            if report.exceeds_threshold(self.config.confidence_threshold) {
                return Ok(report);
            }
        }

        Ok(Report::empty())
    }

    /// Classifies `candidate` against the evidence gathered from `items`.
    pub async fn evaluate(
        &self,
        candidate: &Item,
        items: &[Item],
        title: &str,
    ) -> ScoringResult<RelevanceVerdict> {
        let report = self.score(items, title).await?;

        if report.is_empty() {
            debug!(candidate = %candidate.id, "No confident report, keeping candidate");
            return Ok(RelevanceVerdict::NoEvidence);
        }

        let score = *report
            .score_for(&candidate.id)
            .ok_or_else(|| ScoringError::MissingScore {
                item_id: candidate.id.clone(),
            })?;

        let verdict = if score.is_rejected(
            self.config.confidence_threshold,
            self.config.score_threshold,
        ) {
            RelevanceVerdict::Rejected { score }
        } else {
            RelevanceVerdict::Corroborated { score }
        };

        info!(
            candidate = %candidate.id,
            title,
            verdict = verdict.debug_status(),
            score = score.score,
            confidence = score.confidence,
            "Relevance check complete"
        );

        Ok(verdict)
    }

    /// Returns `false` only when the candidate is confidently scored as a mismatch.
    pub async fn is_relevant_to_listing(
        &self,
        candidate: &Item,
        items: &[Item],
        title: &str,
    ) -> ScoringResult<bool> {
        Ok(self.evaluate(candidate, items, title).await?.is_relevant())
    }
}

impl std::fmt::Debug for RelevanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceEngine")
            .field(
                "processors",
                &self.processors.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}
