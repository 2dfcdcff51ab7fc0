use async_trait::async_trait;

use super::error::ScoringResult;
use super::types::Report;
use crate::item::Item;

#[async_trait]
/// A heuristic scorer the [`RelevanceEngine`](super::RelevanceEngine) can consult.
///
/// Implementations must return either an empty report or one score per input item.
/// Callers guarantee `items` is non-empty.
pub trait Processor: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Scores every item of a group against the group's title.
    async fn score(&self, items: &[Item], title: &str) -> ScoringResult<Report>;
}
