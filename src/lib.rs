//! BetterBay library crate (used by the command-line binary and integration tests).
//!
//! Picks the cheapest variant of a grouped marketplace listing and decides whether that
//! variant really matches what the listing advertises.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`Item`], [`ItemDescription`], [`ItemGroup`] - Listing variants
//! - [`RelevanceEngine`], [`EngineConfig`], [`RelevanceVerdict`] - Keep/reject decisions
//!
//! ## Scoring
//! - [`Processor`] - Pluggable scorer trait
//! - [`PropertyProcessor`], [`PropertyStore`], [`PropertyType`] - Dictionary-backed
//!   property evidence
//! - [`Report`], [`BetterBayScore`] - Scorer output
//!
//! ## Dictionary & Tagging
//! - [`DictionaryCache`], [`DictionaryLookup`], [`DictionaryApiClient`] - Memoized word
//!   lookups
//! - [`PosTagger`], [`LexiconTagger`], [`TaggedWord`] - Part-of-speech tagging
//!
//! ## Marketplace
//! - [`EbayClient`], [`ItemGroupSource`] - Item groups and rate-limit health
//! - [`TokenProvider`], [`spawn_token_refresh`] - OAuth application tokens
//! - [`CheapestItemFinder`], [`CheapestItem`] - Cheapest variant per group
//!
//! ## Test/Mock Support
//! [`MockDictionary`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod dictionary;
pub mod item;
pub mod marketplace;
pub mod nlp;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{CONFIDENCE_THRESHOLD, SCORE_THRESHOLD, ThresholdError, validate_threshold};
#[cfg(any(test, feature = "mock"))]
pub use dictionary::MockDictionary;
pub use dictionary::{
    DictionaryApiClient, DictionaryCache, DictionaryError, DictionaryLookup, LookupOutcome,
};
pub use item::{Item, ItemDescription, ItemGroup};
pub use marketplace::{
    AccessToken, CheapestItem, CheapestItemFinder, EbayClient, HealthReport, ItemGroupSource,
    MarketplaceError, RateLimitStatus, TokenProvider, spawn_token_refresh,
};
pub use nlp::{LexiconTagger, PosTagger, TaggedWord, TaggingError};
pub use scoring::{
    BetterBayScore, EngineConfig, Processor, PropertyProcessor, PropertyStore, PropertyType,
    RelevanceEngine, RelevanceVerdict, Report, ScoringError,
};
