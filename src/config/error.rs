//! Configuration error types.

use thiserror::Error;

use crate::constants::ThresholdError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A decimal setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidFloat {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A flag was neither a recognised true nor false spelling.
    #[error("invalid boolean {name}='{value}': expected true/false, 1/0, yes/no or on/off")]
    InvalidBool { name: &'static str, value: String },

    /// A URL setting is not an absolute `http(s)` URL.
    #[error("invalid URL {name}='{value}': expected an absolute http(s) URL with a host")]
    InvalidUrl { name: &'static str, value: String },

    /// A timeout was explicitly set to zero.
    #[error("{name} must be greater than zero")]
    ZeroTimeout { name: &'static str },

    /// A threshold lies outside `[0, 1]`.
    #[error(transparent)]
    InvalidThreshold(#[from] ThresholdError),

    /// A required environment variable was not set.
    ///
    /// Only raised by [`Config::require_credentials`](super::Config::require_credentials):
    /// scoring runs without marketplace credentials.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },
}
