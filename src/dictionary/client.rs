use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::error::{DictionaryError, DictionaryResult};
use super::model::{DictionaryResponse, LookupOutcome};
use crate::constants::{DEFAULT_DICTIONARY_URL, NO_DEFINITIONS_FOUND};

#[async_trait]
/// Remote "look up a word's dictionary senses" capability.
pub trait DictionaryLookup: Send + Sync {
    /// Looks up `word` (already lowercased by the caller).
    async fn lookup(&self, word: &str) -> DictionaryResult<LookupOutcome>;
}

/// HTTP client for the `dictionaryapi.dev` entry format.
#[derive(Clone)]
pub struct DictionaryApiClient {
    http: HttpClient,
    base_url: String,
}

impl DictionaryApiClient {
    /// Creates a client for the public dictionary endpoint (no request timeout).
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_DICTIONARY_URL)
    }

    /// Creates a client for `base_url`; the word is appended as the final path segment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Rebuilds the underlying HTTP client with a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> DictionaryResult<Self> {
        self.http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DictionaryError::InvalidConfig {
                reason: e.to_string(),
            })?;
        Ok(self)
    }

    /// Returns the configured base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, word: &str) -> String {
        format!("{}{}", self.base_url, word)
    }
}

impl Default for DictionaryApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DictionaryApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl DictionaryLookup for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> DictionaryResult<LookupOutcome> {
        let url = self.url_for(word);
        debug!(word, url = %url, "Querying dictionary");

        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|source| DictionaryError::Request {
                    word: word.to_string(),
                    source,
                })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| DictionaryError::Request {
                word: word.to_string(),
                source,
            })?;

        let parsed = serde_json::from_slice::<DictionaryResponse>(&body);

        // The service reports unknown words with a 404 and a titled JSON body.
        if let Ok(DictionaryResponse::Missing(ref notice)) = parsed
            && notice.title == NO_DEFINITIONS_FOUND
        {
            return Ok(LookupOutcome::NotFound);
        }

        if !status.is_success() {
            return Err(DictionaryError::Status {
                word: word.to_string(),
                status: status.as_u16(),
            });
        }

        match parsed {
            Ok(DictionaryResponse::Entries(entries)) => Ok(LookupOutcome::from_entries(entries)),
            Ok(DictionaryResponse::Missing(notice)) => Err(DictionaryError::Unavailable {
                word: word.to_string(),
                reason: notice.title,
            }),
            Err(source) => Err(DictionaryError::Decode {
                word: word.to_string(),
                source,
            }),
        }
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}
