//! Relevance classification for the cheapest item of a group.
//!
//! The [`RelevanceEngine`] consults an ordered list of [`Processor`]s. The built-in
//! [`PropertyProcessor`] looks for a known distinguishing property (e.g. colour) in each
//! item's attributes and asks the dictionary whether the attribute values really describe
//! that property.
//!
//! # Confidence Back-Fill
//!
//! Within one property scan an unmatched item is reported with the batch's mean score as
//! its confidence. If most items in a group clearly exhibit the property, an item that
//! does not is reported with correspondingly high suspicion.
//!
//! # Decision Rule
//!
//! A candidate is rejected only if the accepted report gives it
//! `confidence > confidence_threshold` and `score < score_threshold`. Missing or weak
//! evidence always keeps the candidate.

pub mod engine;
pub mod error;
pub mod known_property;
pub mod processor;
pub mod property;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{EngineConfig, RelevanceEngine};
pub use error::{ScoringError, ScoringResult};
pub use known_property::{PropertyProcessor, most_confident};
pub use processor::Processor;
pub use property::PropertyType;
pub use store::PropertyStore;
pub use types::{BetterBayScore, RelevanceVerdict, Report};
