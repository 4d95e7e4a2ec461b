//! Sentence-local polarity: is a word present/liked or absent/disliked?
//!
//! Two checks run side by side. Indicator lists are matched anywhere in the
//! sentence; word-scoped cues require the cue to sit between the entity and
//! the word, or right next to the word. Any negative hit wins. With no hit at
//! all the word is treated as present.

use super::{normalize, tokenize};
use crate::domain::{Abundance, SentimentCue};
use crate::lexicon::Lexicon;
use crate::lexicon::sentiment::{
    ABUNDANCE_QUANTIFIERS, NEGATIVE_PATTERN_VERBS, POSITIVE_PATTERN_VERBS, SCARCITY_ADJECTIVES,
    SCARCITY_QUANTIFIERS,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that close a negation scope early.
const CLAUSE_BREAKS: &[&str] = &["but", "though", "although", "however", "and"];

/// Sentence-level sentiment used by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceSentiment {
    pub is_positive: bool,
    pub is_negative: bool,
    /// Tokens inside a negation scope, e.g. `like` and `water` in
    /// "bees dont like water".
    pub negated_words: Vec<String>,
}

impl SentenceSentiment {
    pub fn is_negated(&self, word: &str) -> bool {
        self.negated_words.iter().any(|w| w == word)
    }
}

/// Scan a sentence for positive and negative cues and negation scopes.
///
/// `negation_window` is how many tokens after a negation cue are treated
/// as negated.
pub fn analyze_sentence(
    sentence: &str,
    lexicon: &Lexicon,
    negation_window: usize,
) -> SentenceSentiment {
    let normalized = normalize(sentence);
    let words: Vec<String> = tokenize(sentence, 1).into_iter().map(|t| t.word).collect();

    let mut negated_words = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if !lexicon.is_negation_cue(word) {
            continue;
        }
        for next in words.iter().skip(i + 1).take(negation_window) {
            if CLAUSE_BREAKS.contains(&next.as_str()) {
                break;
            }
            if !lexicon.is_negation_cue(next) && !negated_words.contains(next) {
                negated_words.push(next.clone());
            }
        }
    }

    SentenceSentiment {
        is_positive: contains_any(&normalized, lexicon.positive_indicators()),
        is_negative: contains_any(&normalized, lexicon.negative_indicators()),
        negated_words,
    }
}

/// Compiled `\b(?:a|b|c)\b` matcher over a phrase list.
fn phrase_regex(phrases: &[&str]) -> Option<Regex> {
    let alternation = phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!(r"\b(?:{alternation})\b")) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid sentiment phrase list, ignoring it");
            None
        }
    }
}

static NEGATIVE_VERBS: LazyLock<Option<Regex>> =
    LazyLock::new(|| phrase_regex(NEGATIVE_PATTERN_VERBS));
static POSITIVE_VERBS: LazyLock<Option<Regex>> =
    LazyLock::new(|| phrase_regex(POSITIVE_PATTERN_VERBS));
static SCARCITY: LazyLock<Option<Regex>> = LazyLock::new(|| phrase_regex(SCARCITY_QUANTIFIERS));
static ABUNDANCE: LazyLock<Option<Regex>> = LazyLock::new(|| phrase_regex(ABUNDANCE_QUANTIFIERS));
static SCARCE_AFTER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let adjectives: Vec<String> = SCARCITY_ADJECTIVES
        .iter()
        .flat_map(|adj| [format!("is {adj}"), format!("are {adj}")])
        .collect();
    let adjectives: Vec<&str> = adjectives.iter().map(String::as_str).collect();
    phrase_regex(&adjectives)
});

/// Per-sentence polarity cues, computed once and queried per word.
///
/// A word is marked negative when it follows the entity and a negative
/// verb, sits within two tokens after a scarcity quantifier, or comes
/// before "is/are <scarce>". Positive marks use the positive verbs and
/// abundance quantifiers the same way.
#[derive(Debug, Clone, Default)]
pub struct CueScanner {
    negative_words: HashSet<String>,
    positive_words: HashSet<String>,
    sentence_negative: bool,
    sentence_positive: bool,
}

impl CueScanner {
    pub fn new(sentence: &str, entity: &str, lexicon: &Lexicon) -> Self {
        let normalized = normalize(sentence);
        let entity_end = entity_end(&normalized, &lexicon.entity_tokens(entity));

        let mut negative_words = HashSet::new();
        let mut positive_words = HashSet::new();

        if let Some(start) = entity_end {
            let rest = &normalized[start..];
            if let Some(m) = NEGATIVE_VERBS.as_ref().and_then(|re| re.find(rest)) {
                negative_words.extend(words(&rest[m.end()..], usize::MAX));
            }
            if let Some(m) = POSITIVE_VERBS.as_ref().and_then(|re| re.find(rest)) {
                positive_words.extend(words(&rest[m.end()..], usize::MAX));
            }
        }
        if let Some(re) = SCARCITY.as_ref() {
            for m in re.find_iter(&normalized) {
                negative_words.extend(words(&normalized[m.end()..], 2));
            }
        }
        if let Some(re) = ABUNDANCE.as_ref() {
            for m in re.find_iter(&normalized) {
                positive_words.extend(words(&normalized[m.end()..], 2));
            }
        }
        if let Some(m) = SCARCE_AFTER.as_ref().and_then(|re| re.find_iter(&normalized).last()) {
            negative_words.extend(words(&normalized[..m.start()], usize::MAX));
        }

        Self {
            negative_words,
            positive_words,
            sentence_negative: contains_any(&normalized, lexicon.negative_indicators()),
            sentence_positive: contains_any(&normalized, lexicon.positive_indicators()),
        }
    }

    /// Which cue, if any, decides the abundance of `word`. Negative wins.
    pub fn cue(&self, word: &str) -> SentimentCue {
        let word = word.to_lowercase();
        if self.sentence_negative || self.negative_words.contains(&word) {
            SentimentCue::Negative
        } else if self.sentence_positive || self.positive_words.contains(&word) {
            SentimentCue::Positive
        } else {
            SentimentCue::None
        }
    }
}

/// Which cue, if any, decides the abundance of `word` in `sentence`.
pub fn sentiment_cue(sentence: &str, word: &str, entity: &str, lexicon: &Lexicon) -> SentimentCue {
    CueScanner::new(sentence, entity, lexicon).cue(word)
}

/// `low` if a negative cue applies to `word` in `sentence`, otherwise `high`.
pub fn determine_sentiment_abundance(sentence: &str, word: &str, entity: &str) -> Abundance {
    sentiment_cue(sentence, word, entity, Lexicon::standard()).abundance()
}

/// Whole-token phrase containment on a normalized sentence.
fn contains_any(normalized: &str, phrases: &[&str]) -> bool {
    let padded = format!(" {normalized} ");
    phrases.iter().any(|p| padded.contains(&format!(" {p} ")))
}

/// Byte offset just past the earliest mention of the entity.
fn entity_end(normalized: &str, entity_tokens: &HashSet<String>) -> Option<usize> {
    let padded = format!(" {normalized} ");
    entity_tokens
        .iter()
        .filter_map(|token| {
            padded
                .find(&format!(" {token} "))
                .map(|pos| pos + token.len())
        })
        .min()
}

fn words(text: &str, limit: usize) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().take(limit).map(str::to_string)
}
