use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Per-item verdict: `score` is 1 when property evidence was found, 0 otherwise.
pub struct BetterBayScore {
    pub score: f64,
    pub confidence: f64,
}

impl BetterBayScore {
    /// Property evidence found.
    pub const fn matched() -> Self {
        Self {
            score: 1.0,
            confidence: 1.0,
        }
    }

    /// No evidence found; confidence is back-filled once the whole batch is scanned.
    pub const fn unmatched() -> Self {
        Self {
            score: 0.0,
            confidence: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.score >= 1.0
    }

    /// Returns `true` when this score is strong evidence *against* the item.
    pub fn is_rejected(&self, confidence_threshold: f64, score_threshold: f64) -> bool {
        self.confidence > confidence_threshold && self.score < score_threshold
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Aggregate confidence plus one score per item id.
///
/// `scores` is either empty or keyed by exactly the ids of the scored batch.
pub struct Report {
    pub confidence: f64,
    pub scores: HashMap<String, BetterBayScore>,
}

impl Report {
    pub fn new(confidence: f64, scores: HashMap<String, BetterBayScore>) -> Self {
        Self { confidence, scores }
    }

    /// `{confidence: 0, scores: {}}`: no usable evidence.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score_for(&self, item_id: &str) -> Option<&BetterBayScore> {
        self.scores.get(item_id)
    }

    pub fn exceeds_threshold(&self, threshold: f64) -> bool {
        self.confidence > threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a relevance check for one candidate item.
pub enum RelevanceVerdict {
    /// No processor was confident enough; the candidate is kept.
    NoEvidence,
    /// Evidence exists but does not count against the candidate.
    Corroborated { score: BetterBayScore },
    /// Strong evidence that the candidate does not match its listing.
    Rejected { score: BetterBayScore },
}

impl RelevanceVerdict {
    /// Only a [`Rejected`](Self::Rejected) verdict marks the candidate irrelevant.
    pub fn is_relevant(&self) -> bool {
        !matches!(self, RelevanceVerdict::Rejected { .. })
    }

    pub fn score(&self) -> Option<BetterBayScore> {
        match self {
            RelevanceVerdict::Corroborated { score } | RelevanceVerdict::Rejected { score } => {
                Some(*score)
            }
            RelevanceVerdict::NoEvidence => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            RelevanceVerdict::NoEvidence => "NO_EVIDENCE",
            RelevanceVerdict::Corroborated { .. } => "CORROBORATED",
            RelevanceVerdict::Rejected { .. } => "REJECTED",
        }
    }
}

impl std::fmt::Display for RelevanceVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelevanceVerdict::NoEvidence => write!(f, "NO_EVIDENCE"),
            RelevanceVerdict::Corroborated { score } => write!(
                f,
                "CORROBORATED (score: {:.0}, confidence: {:.4})",
                score.score, score.confidence
            ),
            RelevanceVerdict::Rejected { score } => write!(
                f,
                "REJECTED (score: {:.0}, confidence: {:.4})",
                score.score, score.confidence
            ),
        }
    }
}
