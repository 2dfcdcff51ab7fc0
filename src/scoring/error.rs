use thiserror::Error;

use crate::nlp::TaggingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("cannot score an empty item batch")]
    EmptyBatch,

    #[error("no score produced for candidate item '{item_id}'")]
    MissingScore { item_id: String },

    #[error("tagging error: {0}")]
    Tagging(#[from] TaggingError),

    #[error("processor '{processor}' failed: {reason}")]
    ProcessorFailed { processor: String, reason: String },
}

pub type ScoringResult<T> = Result<T, ScoringError>;
