//! Cross-cutting, shared constants.
//!
//! # Threshold Invariants
//!
//! The relevance decision is driven by two thresholds that are shared between the
//! engine, its configuration and the tests:
//!
//! 1. A report must be strictly more confident than [`CONFIDENCE_THRESHOLD`] before its
//!    scores are used at all.
//! 2. A candidate is only rejected when its own confidence is strictly above
//!    [`CONFIDENCE_THRESHOLD`] *and* its score is strictly below [`SCORE_THRESHOLD`].
//!
//! Use [`validate_threshold`] at configuration boundaries to reject values outside `[0, 1]`.

pub const CONFIDENCE_THRESHOLD: f64 = 0.65;

pub const SCORE_THRESHOLD: f64 = 0.5;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// `title` returned by the dictionary API when a word has no entries.
pub const NO_DEFINITIONS_FOUND: &str = "No Definitions Found";

pub const DEFAULT_EBAY_API_BASE: &str = "https://api.ebay.com";

pub const DEFAULT_EBAY_TOKEN_URL: &str = "https://api.ebay.com/identity/v1/oauth2/token";

pub const EBAY_OAUTH_SCOPE: &str = "https://api.ebay.com/oauth/api_scope";

/// Tags treated as nouns when scanning descriptions.
pub const NOUN_TAGS: [&str; 5] = ["N", "NN", "NNP", "NNPS", "NNS"];

/// Tags treated as adjectives when scanning descriptions.
pub const ADJECTIVE_TAGS: [&str; 1] = ["JJ"];

/// Error returned when a threshold lies outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdError {
    /// Value is NaN or outside the unit interval.
    OutOfRange { name: &'static str, value: f64 },
}

impl std::fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { name, value } => {
                write!(f, "{} must be between 0.0 and 1.0, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

/// Validates that a threshold lies within `[0, 1]`.
///
/// # Example
///
/// ```
/// use betterbay::constants::{validate_threshold, CONFIDENCE_THRESHOLD};
///
/// validate_threshold("confidence_threshold", CONFIDENCE_THRESHOLD).unwrap();
/// assert!(validate_threshold("confidence_threshold", 1.5).is_err());
/// ```
pub fn validate_threshold(name: &'static str, value: f64) -> Result<(), ThresholdError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ThresholdError::OutOfRange { name, value });
    }
    Ok(())
}
