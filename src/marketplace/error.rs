use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
/// Errors returned by marketplace operations.
pub enum MarketplaceError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request to '{endpoint}' failed: {source}")]
    Request {
        /// Endpoint URL.
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("'{endpoint}' returned status {status}")]
    Status {
        /// Endpoint URL.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from '{endpoint}': {source}")]
    Decode {
        /// Endpoint URL.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The item group exists but holds no items.
    #[error("item group '{group_id}' returned zero items")]
    EmptyItemGroup { group_id: String },

    /// Token acquisition was refused by the identity endpoint.
    #[error("failed to acquire access token: {reason}")]
    Auth { reason: String },

    /// Client could not be constructed or was given unusable settings.
    #[error("invalid marketplace configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Relevance analysis of a cheapest item failed.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

pub type MarketplaceResult<T> = Result<T, MarketplaceError>;
