use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use super::error::TaggingError;
use super::lexicon::DEFAULT_LEXICON;
use crate::constants::{ADJECTIVE_TAGS, NOUN_TAGS};

/// Tag assigned to words the lexicon and rules know nothing about.
pub const DEFAULT_TAG: &str = "N";

const NUMBER_TAG: &str = "CD";

const COLOUR_STEMS: [&str; 4] = ["colour", "color", "coloured", "colored"];

const ADJECTIVE_SUFFIXES: [&str; 8] = ["able", "ible", "ful", "ous", "ive", "less", "ish", "al"];

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub token: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }

    pub fn is_noun(&self) -> bool {
        NOUN_TAGS.contains(&self.tag.as_str())
    }

    pub fn is_adjective(&self) -> bool {
        ADJECTIVE_TAGS.contains(&self.tag.as_str())
    }

    /// Nouns and adjectives are the only tokens worth a dictionary lookup.
    pub fn is_content_word(&self) -> bool {
        self.is_noun() || self.is_adjective()
    }
}

/// Part-of-speech tagging capability.
pub trait PosTagger: Send + Sync {
    /// Tokenizes `text` into words and tags each one, preserving order.
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggingError>;
}

/// Lexicon-driven tagger with Brill-style transformation rules.
///
/// 1. Initial tag from the lexicon; numerals become `CD`.
/// 2. Unknown words are tagged from their suffix, falling back to [`DEFAULT_TAG`].
/// 3. Context rules: a noun after `TO`/`MD` becomes `VB`; a `VB` after `DT` becomes `NN`.
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl LexiconTagger {
    /// Creates a tagger with the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|(word, tag)| (word.to_string(), tag.to_string()))
                .collect(),
        }
    }

    /// Adds or overrides lexicon entries.
    pub fn with_entries<I, W, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        for (word, tag) in entries {
            self.lexicon.insert(word.into().to_lowercase(), tag.into());
        }
        self
    }

    /// Number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    fn initial_tag(&self, token: &str) -> String {
        if let Some(tag) = self.lexicon.get(&token.to_lowercase()) {
            return tag.clone();
        }
        if is_numeral(token) {
            return NUMBER_TAG.to_string();
        }
        suffix_tag(&token.to_lowercase()).to_string()
    }

    fn apply_context_rules(tagged: &mut [TaggedWord]) {
        for i in 1..tagged.len() {
            let prev = tagged[i - 1].tag.as_str();
            let current = tagged[i].tag.as_str();

            let next = match (prev, current) {
                ("TO" | "MD", "N" | "NN") => Some("VB"),
                ("DT", "VB") => Some("NN"),
                _ => None,
            };

            if let Some(tag) = next {
                tagged[i].tag = tag.to_string();
            }
        }
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LexiconTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconTagger")
            .field("lexicon", &self.lexicon.len())
            .finish()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggingError> {
        let mut tagged: Vec<TaggedWord> = text
            .unicode_words()
            .map(|token| TaggedWord::new(token, self.initial_tag(token)))
            .collect();

        Self::apply_context_rules(&mut tagged);
        Ok(tagged)
    }
}

fn is_numeral(token: &str) -> bool {
    token.chars().any(|c| c.is_numeric())
        && token
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',')
}

fn suffix_tag(word: &str) -> &'static str {
    let len = word.chars().count();

    // Colour compounds such as "tricoloured" are adjectives, not participles.
    if COLOUR_STEMS.iter().any(|stem| word.ends_with(stem)) {
        return "JJ";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return "VBN";
    }
    if len > 3 && word.ends_with("ly") {
        return "RB";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| len > suffix.len() + 2 && word.ends_with(suffix))
    {
        return "JJ";
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return "NNS";
    }
    DEFAULT_TAG
}
