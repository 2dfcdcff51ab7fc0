//! Part-of-speech tagging for item descriptions.
//!
//! Scoring only needs to know which tokens are nouns (`N`, `NN`, `NNP`, `NNPS`, `NNS`) or
//! adjectives (`JJ`); every other tag is ignored. The [`PosTagger`] trait is the seam for
//! swapping in a different tagger.

pub mod error;
pub mod lexicon;
pub mod tagger;


pub use error::TaggingError;
pub use tagger::{DEFAULT_TAG, LexiconTagger, PosTagger, TaggedWord};
