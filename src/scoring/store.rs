use std::collections::HashMap;
use std::sync::Arc;

use super::property::PropertyType;
use crate::dictionary::{DictionaryCache, DictionaryLookup};

/// One boolean dictionary cache per property type.
///
/// A word "has" a property when any of its noun/adjective senses mentions one of the
/// property's triggers.
pub struct PropertyStore {
    caches: HashMap<PropertyType, DictionaryCache<bool>>,
}

impl PropertyStore {
    /// Creates caches for every [`PropertyType`].
    pub fn new(lookup: Arc<dyn DictionaryLookup>) -> Self {
        Self::with_types(lookup, PropertyType::ALL)
    }

    /// Creates caches only for `types`; other types always answer `false`.
    pub fn with_types(
        lookup: Arc<dyn DictionaryLookup>,
        types: impl IntoIterator<Item = PropertyType>,
    ) -> Self {
        let caches = types
            .into_iter()
            .map(|ty| {
                let cache = DictionaryCache::new(lookup.clone(), Self::mapping_for(ty), false);
                (ty, cache)
            })
            .collect();
        Self { caches }
    }

    /// Mapping applied to a word's definitions for `ty`.
    pub fn mapping_for(ty: PropertyType) -> impl Fn(&[String]) -> bool + Send + Sync + 'static {
        move |definitions: &[String]| {
            definitions
                .iter()
                .any(|definition| ty.is_triggered_by(definition))
        }
    }

    /// Returns `true` if the dictionary definition of `word` indicates `ty`.
    pub async fn has_property(&self, word: &str, ty: PropertyType) -> bool {
        match self.caches.get(&ty) {
            Some(cache) => cache.get_definition(word).await,
            None => false,
        }
    }

    /// Returns the cache backing `ty`, if registered.
    pub fn cache(&self, ty: PropertyType) -> Option<&DictionaryCache<bool>> {
        self.caches.get(&ty)
    }

    pub fn supports(&self, ty: PropertyType) -> bool {
        self.caches.contains_key(&ty)
    }
}

impl std::fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyStore")
            .field("types", &self.caches.keys().collect::<Vec<_>>())
            .finish()
    }
}
