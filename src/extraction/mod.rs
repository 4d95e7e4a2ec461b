//! Sentence tokenization, concept extraction and polarity tagging.

pub mod concepts;
pub mod polarity;

pub use concepts::{ConceptExtractor, looks_like_noun};
pub use polarity::{
    CueScanner, SentenceSentiment, analyze_sentence, determine_sentiment_abundance, sentiment_cue,
};

/// Minimum token length for general extraction.
pub const MIN_TOKEN_LEN: usize = 2;

/// Minimum token length for the ecosystem-labeling variant.
pub const MIN_LABELING_TOKEN_LEN: usize = 3;

/// A token with its original casing preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased form used for every lookup.
    pub word: String,
    /// Form as typed, used for the capitalization heuristic.
    pub original: String,
    /// Index in the full token stream, before length filtering.
    pub position: usize,
}

/// Lowercase a sentence, drop apostrophes and turn all other punctuation
/// into spaces. "Bees don't like water!" becomes "bees dont like water".
pub fn normalize(sentence: &str) -> String {
    tokenize_raw(sentence)
        .into_iter()
        .map(|t| t.word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a sentence into tokens of at least `min_len` characters.
///
/// Positions refer to the unfiltered token stream, so they stay stable
/// across both extraction variants.
pub fn tokenize(sentence: &str, min_len: usize) -> Vec<Token> {
    tokenize_raw(sentence)
        .into_iter()
        .filter(|t| t.word.chars().count() >= min_len)
        .collect()
}

fn tokenize_raw(sentence: &str) -> Vec<Token> {
    let cleaned: String = sentence
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .enumerate()
        .map(|(position, original)| Token {
            word: original.to_lowercase(),
            original: original.to_string(),
            position,
        })
        .collect()
}
