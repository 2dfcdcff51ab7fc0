use serde::Deserialize;

const NOUN: &str = "noun";
const ADJECTIVE: &str = "adjective";

/// One headword returned by the dictionary service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A group of senses sharing one grammatical category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, definitions: &[&str]) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definitions: definitions
                .iter()
                .map(|d| Definition {
                    definition: d.to_string(),
                })
                .collect(),
        }
    }

    /// Only noun and adjective senses are used for classification.
    pub fn is_noun_or_adjective(&self) -> bool {
        self.part_of_speech.eq_ignore_ascii_case(NOUN)
            || self.part_of_speech.eq_ignore_ascii_case(ADJECTIVE)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,
}

/// `{ "title": "No Definitions Found", ... }` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoDefinitionResponse {
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Either a list of entries or a "not found" notice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DictionaryResponse {
    Entries(Vec<WordEntry>),
    Missing(NoDefinitionResponse),
}

/// Result of a successful round-trip to the dictionary service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The service knows nothing about the word.
    NotFound,
    /// One or more entries were returned.
    Found(Vec<WordEntry>),
}

impl LookupOutcome {
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        if entries.is_empty() {
            Self::NotFound
        } else {
            Self::Found(entries)
        }
    }
}

/// Collects noun/adjective definition texts across all entries and meanings.
///
/// Order follows the response; duplicates are kept.
pub fn noun_and_adjective_definitions(entries: &[WordEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.meanings.iter())
        .filter(|meaning| meaning.is_noun_or_adjective())
        .flat_map(|meaning| meaning.definitions.iter())
        .map(|d| d.definition.clone())
        .collect()
}
