//! Listing items and their attribute descriptions.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Ordered `attribute-name → attribute-value` mapping.
///
/// Insertion order is preserved: the description string handed to the tagger joins
/// values in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDescription {
    attributes: Vec<(String, String)>,
}

impl ItemDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing the value in place if `name` already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ItemDescription {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut description = Self::new();
        for (name, value) in iter {
            description.insert(name, value);
        }
        description
    }
}

impl Serialize for ItemDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A single variant inside an item group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    /// Decimal price as reported by the marketplace (e.g. `"2.42"`).
    pub price: String,
    pub description: ItemDescription,
    pub title: String,
    pub currency: String,
}

impl Item {
    pub fn new(id: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price: price.into(),
            description: ItemDescription::new(),
            title: String::new(),
            currency: String::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.description.insert(name, value);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Parsed price; `None` if the marketplace string is not a finite decimal.
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }
}

/// Items sharing one parent listing identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemGroup {
    pub title: String,
    pub currency: String,
    pub items: Vec<Item>,
}
