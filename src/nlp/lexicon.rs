//! Built-in English lexicon for [`LexiconTagger`](super::LexiconTagger).
//!
//! Closed-class words, inflected forms of common verbs, colour adjectives and nouns that
//! show up in listing attributes. Anything missing falls through to the suffix rules.

pub const DEFAULT_LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("another", "DT"),
    // Pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("which", "WDT"),
    ("who", "WP"),
    ("what", "WP"),
    // Prepositions
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("by", "IN"),
    ("from", "IN"),
    ("of", "IN"),
    ("about", "IN"),
    ("into", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("before", "IN"),
    ("after", "IN"),
    ("above", "IN"),
    ("below", "IN"),
    ("between", "IN"),
    ("under", "IN"),
    ("over", "IN"),
    ("against", "IN"),
    ("without", "IN"),
    ("within", "IN"),
    ("across", "IN"),
    ("per", "IN"),
    ("via", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("if", "IN"),
    ("to", "TO"),
    // Conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("plus", "CC"),
    // Modals
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // Auxiliaries and common verbs
    ("be", "VB"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("am", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("run", "VB"),
    ("runs", "VBZ"),
    ("ran", "VBD"),
    ("running", "VBG"),
    ("walk", "VB"),
    ("walks", "VBZ"),
    ("walked", "VBD"),
    ("walking", "VBG"),
    ("make", "VB"),
    ("makes", "VBZ"),
    ("made", "VBN"),
    ("include", "VB"),
    ("includes", "VBZ"),
    ("included", "VBN"),
    ("including", "VBG"),
    ("use", "VB"),
    ("uses", "VBZ"),
    ("using", "VBG"),
    ("work", "VB"),
    ("works", "VBZ"),
    ("working", "VBG"),
    ("fits", "VBZ"),
    ("sold", "VBN"),
    ("comes", "VBZ"),
    ("came", "VBD"),
    ("go", "VB"),
    ("went", "VBD"),
    ("get", "VB"),
    ("got", "VBD"),
    // Adverbs
    ("not", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("only", "RB"),
    ("just", "RB"),
    ("well", "RB"),
    ("here", "RB"),
    ("there", "RB"),
    ("now", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("slowly", "RB"),
    ("quickly", "RB"),
    // Colours
    ("black", "JJ"),
    ("white", "JJ"),
    ("red", "JJ"),
    ("blue", "JJ"),
    ("green", "JJ"),
    ("yellow", "JJ"),
    ("orange", "JJ"),
    ("purple", "JJ"),
    ("pink", "JJ"),
    ("brown", "JJ"),
    ("grey", "JJ"),
    ("gray", "JJ"),
    ("beige", "JJ"),
    ("navy", "JJ"),
    ("silver", "JJ"),
    ("gold", "JJ"),
    ("golden", "JJ"),
    ("ivory", "JJ"),
    ("cream", "JJ"),
    ("teal", "JJ"),
    ("turquoise", "JJ"),
    ("maroon", "JJ"),
    ("khaki", "JJ"),
    ("coloured", "JJ"),
    ("colored", "JJ"),
    ("multicoloured", "JJ"),
    ("multicolored", "JJ"),
    ("multicolour", "JJ"),
    ("multicolor", "JJ"),
    ("tinted", "JJ"),
    // Other adjectives
    ("large", "JJ"),
    ("small", "JJ"),
    ("big", "JJ"),
    ("little", "JJ"),
    ("new", "JJ"),
    ("old", "JJ"),
    ("good", "JJ"),
    ("great", "JJ"),
    ("best", "JJS"),
    ("long", "JJ"),
    ("short", "JJ"),
    ("wide", "JJ"),
    ("narrow", "JJ"),
    ("light", "JJ"),
    ("dark", "JJ"),
    ("heavy", "JJ"),
    ("soft", "JJ"),
    ("hard", "JJ"),
    ("waterproof", "JJ"),
    ("wireless", "JJ"),
    // Nouns
    ("dog", "NN"),
    ("cat", "NN"),
    ("size", "NN"),
    ("colour", "NN"),
    ("color", "NN"),
    ("model", "NN"),
    ("case", "NN"),
    ("cover", "NN"),
    ("phone", "NN"),
    ("cable", "NN"),
    ("charger", "NN"),
    ("battery", "NN"),
    ("screen", "NN"),
    ("shirt", "NN"),
    ("set", "NN"),
    ("pack", "NN"),
    ("pair", "NN"),
    ("quantity", "NN"),
    ("material", "NN"),
    ("style", "NN"),
    ("type", "NN"),
    ("bag", "NN"),
    ("box", "NN"),
    ("watch", "NN"),
    ("item", "NN"),
    ("length", "NN"),
    ("width", "NN"),
    ("capacity", "NN"),
    ("storage", "NN"),
    ("version", "NN"),
    ("edition", "NN"),
    // Number words
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
];
