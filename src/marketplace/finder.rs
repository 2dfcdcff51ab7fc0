use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::client::ItemGroupSource;
use super::error::{MarketplaceError, MarketplaceResult};
use super::selection::cheapest_item;
use crate::item::Item;
use crate::scoring::RelevanceEngine;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// The cheapest variant of a group, optionally annotated with a relevance verdict.
pub struct CheapestItem {
    #[serde(flatten)]
    pub item: Item,
    /// Present only when analysis was requested.
    #[serde(rename = "isRelevant", skip_serializing_if = "Option::is_none")]
    pub is_relevant: Option<bool>,
}

/// Finds the cheapest item of each requested group.
pub struct CheapestItemFinder {
    source: Arc<dyn ItemGroupSource>,
    engine: Arc<RelevanceEngine>,
}

impl CheapestItemFinder {
    pub fn new(source: Arc<dyn ItemGroupSource>, engine: Arc<RelevanceEngine>) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &RelevanceEngine {
        &self.engine
    }

    /// Fetches each group in turn and reduces it to its cheapest item.
    ///
    /// With `analyse` set, the engine checks the cheapest item against the rest of its
    /// group. The first failing group aborts the whole call.
    pub async fn get_cheapest_items<I, S>(
        &self,
        group_ids: I,
        analyse: bool,
    ) -> MarketplaceResult<BTreeMap<String, CheapestItem>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cheapest = BTreeMap::new();

        for group_id in group_ids {
            let group_id = group_id.as_ref();
            let group = self.source.get_item_group(group_id).await?;

            let item = cheapest_item(&group.items)
                .cloned()
                .ok_or_else(|| MarketplaceError::EmptyItemGroup {
                    group_id: group_id.to_string(),
                })?;
            debug!(group_id, item_id = %item.id, price = %item.price, "Cheapest item selected");

            let is_relevant = if analyse {
                let relevant = self
                    .engine
                    .is_relevant_to_listing(&item, &group.items, &group.title)
                    .await?;
                info!(group_id, item_id = %item.id, relevant, "Cheapest item analysed");
                Some(relevant)
            } else {
                None
            };

            cheapest.insert(group_id.to_string(), CheapestItem { item, is_relevant });
        }

        Ok(cheapest)
    }
}

impl std::fmt::Debug for CheapestItemFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheapestItemFinder")
            .field("engine", &self.engine)
            .finish()
    }
}
