use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::error::{ScoringError, ScoringResult};
use super::processor::Processor;
use super::property::PropertyType;
use super::store::PropertyStore;
use super::types::{BetterBayScore, Report};
use crate::item::Item;
use crate::nlp::{PosTagger, TaggedWord};

/// Scores items by looking for dictionary evidence of a known property in their
/// description values.
///
/// For every registered [`PropertyType`] whose triggers appear in the first item's
/// attribute names, each item's description is tagged and its nouns/adjectives are checked
/// against the [`PropertyStore`]. The most confident per-type report wins.
pub struct PropertyProcessor {
    store: Arc<PropertyStore>,
    tagger: Arc<dyn PosTagger>,
    types: Vec<PropertyType>,
}

impl PropertyProcessor {
    pub const NAME: &'static str = "known_property";

    /// Creates a processor scanning every [`PropertyType`].
    pub fn new(store: Arc<PropertyStore>, tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            store,
            tagger,
            types: PropertyType::ALL.to_vec(),
        }
    }

    /// Restricts (and orders) the property types scanned by [`Processor::score`].
    pub fn with_types(mut self, types: impl IntoIterator<Item = PropertyType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn types(&self) -> &[PropertyType] {
        &self.types
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Quick filter: does any attribute *name* mention one of the type's triggers?
    pub fn description_contains_prop(item: &Item, ty: PropertyType) -> bool {
        item.description.names().any(|name| ty.is_triggered_by(name))
    }

    /// Attribute values joined by single spaces, in description order.
    pub fn get_description_string(item: &Item) -> String {
        item.description.values().collect::<Vec<_>>().join(" ")
    }

    /// Lowercases `text` and tags it.
    pub fn tag_parts_of_speech(&self, text: &str) -> ScoringResult<Vec<TaggedWord>> {
        Ok(self.tagger.tag(&text.to_lowercase())?)
    }

    /// Scores every item for a single property type.
    ///
    /// An item scores 1 on the first noun/adjective whose definition indicates `ty`; the
    /// rest of its tokens are not looked up. Unmatched items take the batch's mean score as
    /// their confidence.
    pub async fn score_for_type(&self, items: &[Item], ty: PropertyType) -> ScoringResult<Report> {
        if items.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }

        let mut results: HashMap<String, BetterBayScore> = HashMap::with_capacity(items.len());

        for item in items {
            let description = Self::get_description_string(item);
            let tagged = self.tag_parts_of_speech(&description)?;

            let mut score = BetterBayScore::unmatched();
            for word in tagged.iter().filter(|w| w.is_content_word()) {
                if self.store.has_property(&word.token, ty).await {
                    debug!(item_id = %item.id, word = %word.token, property = %ty, "Property evidence found");
                    score = BetterBayScore::matched();
                    break;
                }
            }

            results.insert(item.id.clone(), score);
        }

        let scored = results.len() as f64;
        let avg_score = results.values().map(|s| s.score).sum::<f64>() / scored;

        for score in results.values_mut().filter(|s| s.score == 0.0) {
            score.confidence = avg_score;
        }

        let confidence = results.values().map(|s| s.confidence).sum::<f64>() / scored;

        debug!(
            property = %ty,
            items = items.len(),
            avg_score,
            confidence,
            "Scored property type"
        );

        Ok(Report::new(confidence, results))
    }
}

impl std::fmt::Debug for PropertyProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyProcessor")
            .field("store", &self.store)
            .field("types", &self.types)
            .finish()
    }
}

#[async_trait]
impl Processor for PropertyProcessor {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn score(&self, items: &[Item], title: &str) -> ScoringResult<Report> {
        let Some(first) = items.first() else {
            return Err(ScoringError::EmptyBatch);
        };

        let mut reports = Vec::with_capacity(self.types.len());
        for &ty in &self.types {
            if !Self::description_contains_prop(first, ty) {
                debug!(property = %ty, title, "Description has no matching attribute, skipping");
                reports.push(Report::empty());
                continue;
            }
            reports.push(self.score_for_type(items, ty).await?);
        }

        Ok(most_confident(reports))
    }
}

/// Returns the report with the strictly greatest confidence; the earliest report wins ties.
///
/// An empty input yields [`Report::empty`].
pub fn most_confident(reports: impl IntoIterator<Item = Report>) -> Report {
    reports
        .into_iter()
        .reduce(|best, current| {
            if current.confidence > best.confidence {
                current
            } else {
                best
            }
        })
        .unwrap_or_default()
}
