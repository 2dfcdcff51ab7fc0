use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by dictionary lookups.
///
/// These never reach the relevance engine's caller: the cache degrades them to its
/// default value.
pub enum DictionaryError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("dictionary request for '{word}' failed: {source}")]
    Request {
        /// Word being looked up.
        word: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with an unexpected status code.
    #[error("dictionary returned status {status} for '{word}'")]
    Status {
        /// Word being looked up.
        word: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected entry format.
    #[error("failed to decode dictionary response for '{word}': {source}")]
    Decode {
        /// Word being looked up.
        word: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client could not be constructed.
    #[error("invalid dictionary client configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Lookup failed for another reason (used by alternative implementations).
    #[error("dictionary lookup for '{word}' failed: {reason}")]
    Unavailable { word: String, reason: String },
}

pub type DictionaryResult<T> = Result<T, DictionaryError>;
