//! Word → value memoization in front of a [`DictionaryLookup`].

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, warn};

use super::client::DictionaryLookup;
use super::model::{LookupOutcome, noun_and_adjective_definitions};

/// Converts the ordered noun/adjective definition texts of a word into a stored value.
pub type MappingFn<V> = Arc<dyn Fn(&[String]) -> V + Send + Sync>;

/// Caching dictionary client.
///
/// Every distinct (lowercased) word is resolved at most once for the lifetime of the
/// cache. Failed and empty lookups are stored as `default_value`, exactly like a genuine
/// negative result, and are never retried. Concurrent first-time lookups of the same word
/// share a single in-flight request.
///
/// The cache is unbounded and never evicts.
pub struct DictionaryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    entries: Cache<String, V>,
    lookup: Arc<dyn DictionaryLookup>,
    mapping: MappingFn<V>,
    default_value: V,
}

impl<V> DictionaryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache backed by `lookup`.
    pub fn new<F>(lookup: Arc<dyn DictionaryLookup>, mapping: F, default_value: V) -> Self
    where
        F: Fn(&[String]) -> V + Send + Sync + 'static,
    {
        Self {
            entries: Cache::builder().build(),
            lookup,
            mapping: Arc::new(mapping),
            default_value,
        }
    }

    /// Returns the stored value for `word`, querying the dictionary on first sight.
    pub async fn get_definition(&self, word: &str) -> V {
        let word = word.to_lowercase();

        if let Some(value) = self.entries.get(&word).await {
            debug!(word = %word, "Dictionary cache hit");
            return value;
        }

        self.entries
            .get_with(word.clone(), self.resolve(&word))
            .await
    }

    /// Returns `true` if `word` has already been resolved.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Approximate number of resolved words.
    ///
    /// The count is updated lazily; call [`run_pending_tasks`](Self::run_pending_tasks)
    /// first when an exact figure is needed.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Flushes pending bookkeeping in the underlying cache.
    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }

    /// Returns the value stored for failed or empty lookups.
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    async fn resolve(&self, word: &str) -> V {
        match self.lookup.lookup(word).await {
            Ok(LookupOutcome::Found(entries)) => {
                let definitions = noun_and_adjective_definitions(&entries);
                debug!(
                    word,
                    definitions = definitions.len(),
                    "Dictionary cache miss resolved"
                );
                (self.mapping)(&definitions)
            }
            Ok(LookupOutcome::NotFound) => {
                debug!(word, "No definitions found, caching default");
                self.default_value.clone()
            }
            Err(error) => {
                warn!(word, error = %error, "Dictionary lookup failed, caching default");
                self.default_value.clone()
            }
        }
    }
}

impl<V> std::fmt::Debug for DictionaryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
