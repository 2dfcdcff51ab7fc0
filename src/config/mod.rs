//! Environment-backed configuration.
//!
//! Every setting has a default except the marketplace credentials. Override with
//! `BETTERBAY_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::constants::{
    CONFIDENCE_THRESHOLD, DEFAULT_DICTIONARY_URL, DEFAULT_EBAY_API_BASE, DEFAULT_EBAY_TOKEN_URL,
    validate_threshold,
};
use crate::scoring::EngineConfig;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `BETTERBAY_*` overrides on top of defaults.
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Dictionary entry endpoint; the word is appended. Default: `dictionaryapi.dev`.
    pub dictionary_url: String,

    /// Per-request dictionary timeout. Default: none.
    pub dictionary_timeout: Option<Duration>,

    /// Browse/Analytics API base. Default: `https://api.ebay.com`.
    pub ebay_api_base: String,

    /// OAuth token endpoint.
    pub ebay_token_url: String,

    pub ebay_client_id: Option<String>,

    pub ebay_client_secret: Option<String>,

    /// Refresh the application token every `expires_in` seconds. Default: `false`.
    pub auto_refresh_token: bool,

    /// Confidence a report must exceed. Default: `0.65`.
    pub confidence_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            dictionary_timeout: None,
            ebay_api_base: DEFAULT_EBAY_API_BASE.to_string(),
            ebay_token_url: DEFAULT_EBAY_TOKEN_URL.to_string(),
            ebay_client_id: None,
            ebay_client_secret: None,
            auto_refresh_token: false,
            confidence_threshold: CONFIDENCE_THRESHOLD,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("dictionary_url", &self.dictionary_url)
            .field("dictionary_timeout", &self.dictionary_timeout)
            .field("ebay_api_base", &self.ebay_api_base)
            .field("ebay_token_url", &self.ebay_token_url)
            .field("ebay_client_id", &self.ebay_client_id)
            .field(
                "ebay_client_secret",
                &self.ebay_client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("auto_refresh_token", &self.auto_refresh_token)
            .field("confidence_threshold", &self.confidence_threshold)
            .finish()
    }
}

impl Config {
    const ENV_DICTIONARY_URL: &'static str = "BETTERBAY_DICTIONARY_URL";
    const ENV_DICTIONARY_TIMEOUT_MS: &'static str = "BETTERBAY_DICTIONARY_TIMEOUT_MS";
    const ENV_EBAY_API_BASE: &'static str = "BETTERBAY_EBAY_API_BASE";
    const ENV_EBAY_TOKEN_URL: &'static str = "BETTERBAY_EBAY_TOKEN_URL";
    const ENV_EBAY_CLIENT_ID: &'static str = "BETTERBAY_EBAY_CLIENT_ID";
    const ENV_EBAY_CLIENT_SECRET: &'static str = "BETTERBAY_EBAY_CLIENT_SECRET";
    const ENV_AUTO_REFRESH_TOKEN: &'static str = "BETTERBAY_AUTO_REFRESH_TOKEN";
    const ENV_CONFIDENCE_THRESHOLD: &'static str = "BETTERBAY_CONFIDENCE_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let dictionary_url =
            Self::parse_string_from_env(Self::ENV_DICTIONARY_URL, defaults.dictionary_url);
        let dictionary_timeout = Self::parse_optional_millis_from_env(Self::ENV_DICTIONARY_TIMEOUT_MS)?;
        let ebay_api_base =
            Self::parse_string_from_env(Self::ENV_EBAY_API_BASE, defaults.ebay_api_base);
        let ebay_token_url =
            Self::parse_string_from_env(Self::ENV_EBAY_TOKEN_URL, defaults.ebay_token_url);
        let ebay_client_id = Self::parse_optional_string_from_env(Self::ENV_EBAY_CLIENT_ID);
        let ebay_client_secret = Self::parse_optional_string_from_env(Self::ENV_EBAY_CLIENT_SECRET);
        let auto_refresh_token =
            Self::parse_bool_from_env(Self::ENV_AUTO_REFRESH_TOKEN, defaults.auto_refresh_token)?;
        let confidence_threshold = Self::parse_f64_from_env(
            Self::ENV_CONFIDENCE_THRESHOLD,
            defaults.confidence_threshold,
        )?;

        Ok(Self {
            dictionary_url,
            dictionary_timeout,
            ebay_api_base,
            ebay_token_url,
            ebay_client_id,
            ebay_client_secret,
            auto_refresh_token,
            confidence_threshold,
        })
    }

    /// Validates URLs, the timeout and the threshold (no network access).
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_url(Self::ENV_DICTIONARY_URL, &self.dictionary_url)?;
        Self::validate_url(Self::ENV_EBAY_API_BASE, &self.ebay_api_base)?;
        Self::validate_url(Self::ENV_EBAY_TOKEN_URL, &self.ebay_token_url)?;

        if self.dictionary_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout {
                name: Self::ENV_DICTIONARY_TIMEOUT_MS,
            });
        }

        validate_threshold(Self::ENV_CONFIDENCE_THRESHOLD, self.confidence_threshold)?;

        Ok(())
    }

    /// Returns `(client_id, client_secret)` or the first missing variable.
    pub fn require_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let client_id = self
            .ebay_client_id
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_EBAY_CLIENT_ID,
            })?;
        let client_secret =
            self.ebay_client_secret
                .as_deref()
                .ok_or(ConfigError::MissingEnvVar {
                    name: Self::ENV_EBAY_CLIENT_SECRET,
                })?;
        Ok((client_id, client_secret))
    }

    /// Engine thresholds derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_confidence_threshold(self.confidence_threshold)
    }

    fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
        match Url::parse(value) {
            Ok(url)
                if matches!(url.scheme(), "http" | "https")
                    && url.host_str().is_some_and(|host| !host.is_empty()) =>
            {
                Ok(())
            }
            _ => Err(ConfigError::InvalidUrl {
                name,
                value: value.to_string(),
            }),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_optional_millis_from_env(
        var_name: &'static str,
    ) -> Result<Option<Duration>, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => {
                let millis: u64 = value.parse().map_err(|e| ConfigError::InvalidInteger {
                    name: var_name,
                    value: value.clone(),
                    source: e,
                })?;
                Ok(Some(Duration::from_millis(millis)))
            }
            None => Ok(None),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(var_name) else {
            return Ok(default);
        };

        match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                name: var_name,
                value,
            }),
        }
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidFloat {
                name: var_name,
                value,
                source: e,
            }),
            None => Ok(default),
        }
    }
}
