use std::collections::{HashMap, HashSet};

use super::error::{MarketplaceError, MarketplaceResult};
use super::model::EbayItem;
use crate::item::{Item, ItemDescription, ItemGroup};

/// Aspect names that take more than one distinct value across the group, in
/// first-seen order.
///
/// These are the attributes a buyer actually chooses between (colour, size, ...); aspects
/// shared by every variant say nothing about an individual item.
pub fn get_selection_keys(items: &[EbayItem]) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut values: HashMap<&str, HashSet<&str>> = HashMap::new();

    for aspect in items.iter().flat_map(|item| &item.localized_aspects) {
        let seen = values.entry(aspect.name.as_str()).or_insert_with(|| {
            order.push(aspect.name.as_str());
            HashSet::new()
        });
        seen.insert(aspect.value.as_str());
    }

    order
        .into_iter()
        .filter(|name| values.get(name).is_some_and(|v| v.len() > 1))
        .map(str::to_string)
        .collect()
}

/// Description restricted to `selection_keys`, in key order. Keys the item lacks are
/// skipped.
pub fn build_item_description(item: &EbayItem, selection_keys: &[String]) -> ItemDescription {
    selection_keys
        .iter()
        .filter_map(|key| item.aspect(key).map(|value| (key.as_str(), value)))
        .collect()
}

/// Cheapest item by parsed price, or `None` for an empty slice.
///
/// On equal prices the later item wins. Unparseable prices sort as infinitely expensive.
pub fn cheapest_item(items: &[Item]) -> Option<&Item> {
    let price = |item: &Item| item.price_value().unwrap_or(f64::INFINITY);

    items
        .iter()
        .reduce(|prev, curr| if price(prev) < price(curr) { prev } else { curr })
}

/// Converts a Browse API response into an [`ItemGroup`].
///
/// Every item's description is restricted to the group's selection keys. The group title
/// and currency come from the first item and are stamped on every item.
pub fn build_item_group(group_id: &str, items: &[EbayItem]) -> MarketplaceResult<ItemGroup> {
    let Some(first) = items.first() else {
        return Err(MarketplaceError::EmptyItemGroup {
            group_id: group_id.to_string(),
        });
    };

    let selection_keys = get_selection_keys(items);
    let title = first.title.clone();
    let currency = first.price.currency().to_string();

    let items = items
        .iter()
        .map(|ebay_item| Item {
            id: ebay_item.item_id.clone(),
            price: ebay_item.price.amount().to_string(),
            description: build_item_description(ebay_item, &selection_keys),
            title: title.clone(),
            currency: currency.clone(),
        })
        .collect();

    Ok(ItemGroup {
        title,
        currency,
        items,
    })
}
