use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::client::DictionaryLookup;
use super::error::{DictionaryError, DictionaryResult};
use super::model::{LookupOutcome, Meaning, WordEntry};

#[derive(Clone)]
enum MockResponse {
    Entries(Vec<WordEntry>),
    Failure(String),
}

/// In-memory [`DictionaryLookup`] that records how often each word was requested.
///
/// Unknown words resolve to [`LookupOutcome::NotFound`].
#[derive(Default)]
pub struct MockDictionary {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `word` with the given `(part of speech, definitions)` meanings.
    pub fn with_meanings(mut self, word: &str, meanings: &[(&str, &[&str])]) -> Self {
        let entry = WordEntry {
            word: word.to_string(),
            meanings: meanings
                .iter()
                .map(|(pos, defs)| Meaning::new(*pos, defs))
                .collect(),
        };
        self.responses
            .insert(word.to_string(), MockResponse::Entries(vec![entry]));
        self
    }

    /// Registers `word` with a single noun sense.
    pub fn with_noun(self, word: &str, definition: &str) -> Self {
        self.with_meanings(word, &[("noun", &[definition])])
    }

    /// Makes lookups of `word` fail.
    pub fn with_failure(mut self, word: &str, reason: &str) -> Self {
        self.responses
            .insert(word.to_string(), MockResponse::Failure(reason.to_string()));
        self
    }

    /// Sleeps for `delay` before answering every lookup.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups issued for `word`.
    pub fn call_count(&self, word: &str) -> usize {
        self.calls.lock().get(word).copied().unwrap_or(0)
    }

    /// Total number of lookups issued.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }
}

#[async_trait]
impl DictionaryLookup for MockDictionary {
    async fn lookup(&self, word: &str) -> DictionaryResult<LookupOutcome> {
        *self.calls.lock().entry(word.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.responses.get(word) {
            Some(MockResponse::Entries(entries)) => {
                Ok(LookupOutcome::from_entries(entries.clone()))
            }
            Some(MockResponse::Failure(reason)) => Err(DictionaryError::Unavailable {
                word: word.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(LookupOutcome::NotFound),
        }
    }
}
