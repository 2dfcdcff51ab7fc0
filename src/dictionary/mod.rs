//! Dictionary lookups and the word cache in front of them.
//!
//! [`DictionaryLookup`] is the remote capability (implemented over HTTP by
//! [`DictionaryApiClient`]); [`DictionaryCache`] memoizes one value per word on top of it.
//!
//! # Failure Policy
//!
//! Lookup errors never propagate past the cache. A transport failure, an unexpected status
//! or an empty answer is stored as the cache's default value and is remembered until the
//! cache is dropped.

pub mod cache;
pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;


pub use cache::{DictionaryCache, MappingFn};
pub use client::{DictionaryApiClient, DictionaryLookup};
pub use error::{DictionaryError, DictionaryResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockDictionary;
pub use model::{
    Definition, DictionaryResponse, LookupOutcome, Meaning, NoDefinitionResponse, WordEntry,
    noun_and_adjective_definitions,
};
