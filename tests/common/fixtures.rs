//! Test fixtures for integration tests.

use betterbay::MockDictionary;
use betterbay::item::Item;
use serde_json::{Value, json};

pub const DEFAULT_PRICE: &str = "9.99";

pub const DEFAULT_TITLE: &str = "Wool Scarf";

pub const DEFAULT_CURRENCY: &str = "GBP";

#[derive(Default)]
pub struct ItemBuilder {
    id: Option<String>,
    price: Option<String>,
    title: Option<String>,
    currency: Option<String>,
    attributes: Vec<(String, String)>,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn colour(self, value: &str) -> Self {
        self.attribute("Colour", value)
    }

    pub fn build(self) -> Item {
        let item = Item::new(
            self.id.unwrap_or_else(|| "1".to_string()),
            self.price.unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        )
        .with_title(self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
        .with_currency(self.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()));

        self.attributes
            .into_iter()
            .fold(item, |item, (name, value)| item.with_attribute(name, value))
    }
}

/// One item per `(price, colour)`, with ids `"1"`, `"2"`, ...
pub fn create_colour_group(variants: &[(&str, &str)]) -> Vec<Item> {
    variants
        .iter()
        .enumerate()
        .map(|(i, (price, colour))| {
            ItemBuilder::new()
                .id(&(i + 1).to_string())
                .price(price)
                .colour(colour)
                .build()
        })
        .collect()
}

/// Black, red and a cheap beige decoy whose only sense is a fabric.
pub fn create_scarf_group() -> Vec<Item> {
    create_colour_group(&[("9.99", "Black"), ("9.99", "Red"), ("0.99", "Beige")])
}

pub fn create_colour_dictionary() -> MockDictionary {
    MockDictionary::new()
        .with_noun("black", "The colour of coal or soot.")
        .with_meanings(
            "red",
            &[
                ("adjective", &["Having red as its colour."]),
                ("verb", &["To make red."]),
            ],
        )
        .with_noun("beige", "A type of undyed woollen fabric.")
}

/// `dictionaryapi.dev` body for `word`.
pub fn dictionary_entry(word: &str, meanings: &[(&str, &[&str])]) -> Value {
    let meanings: Vec<Value> = meanings
        .iter()
        .map(|(pos, defs)| {
            json!({
                "partOfSpeech": pos,
                "definitions": defs
                    .iter()
                    .map(|d| json!({ "definition": d, "synonyms": [], "antonyms": [] }))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    json!([{ "word": word, "phonetics": [], "meanings": meanings }])
}

pub fn no_definitions_body() -> Value {
    json!({
        "title": "No Definitions Found",
        "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
        "resolution": "You can try the search again at later time or head to the web instead."
    })
}

/// Browse API item with the given aspects.
pub fn ebay_item(id: &str, price: &str, aspects: &[(&str, &str)]) -> Value {
    json!({
        "itemId": id,
        "title": DEFAULT_TITLE,
        "price": {
            "value": price,
            "currency": "USD",
            "convertedFromValue": price,
            "convertedFromCurrency": DEFAULT_CURRENCY
        },
        "localizedAspects": aspects
            .iter()
            .map(|(name, value)| json!({ "type": "STRING", "name": name, "value": value }))
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let item = ItemBuilder::new().build();

        assert_eq!(item.id, "1");
        assert_eq!(item.price, DEFAULT_PRICE);
        assert_eq!(item.title, DEFAULT_TITLE);
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_colour_group_ids() {
        let items = create_scarf_group();

        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(items[2].description.get("Colour"), Some("Beige"));
    }
}
