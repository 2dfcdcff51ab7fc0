use thiserror::Error;

/// Part-of-speech tagging failures.
///
/// Unlike dictionary errors these are not absorbed: they abort the enclosing scoring call.
#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("part-of-speech tagging failed: {reason}")]
    Failed { reason: String },
}
