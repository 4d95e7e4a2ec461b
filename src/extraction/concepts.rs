//! Concept extraction.
//!
//! [`ConceptExtractor::extract`] is the permissive pass: every lexicon list
//! is tried and a token may yield several concepts. The labeling pass,
//! [`ConceptExtractor::extract_for_labeling`], keeps one concept per token,
//! drops verbs and filler words, and tags what is left with its polarity.

use super::polarity::CueScanner;
use super::{MIN_LABELING_TOKEN_LEN, MIN_TOKEN_LEN, Token, tokenize};
use crate::domain::{Concept, ConceptCategory, TaggedConcept};
use crate::lexicon::Lexicon;
use crate::lexicon::vocabulary::{NOUN_SUFFIXES, VERB_SUFFIXES};

/// Confidence for an exact relevant-noun hit.
pub const EXACT_CONFIDENCE: f64 = 1.0;
/// Confidence for a substring relevant-noun hit.
pub const PARTIAL_CONFIDENCE: f64 = 0.7;
/// Confidence for a habitat or trait word.
pub const HABITAT_CONFIDENCE: f64 = 0.8;
/// Confidence for a relationship verb.
pub const VERB_CONFIDENCE: f64 = 0.6;
/// Confidence for a token kept only by the noun heuristic.
pub const HEURISTIC_CONFIDENCE: f64 = 0.5;

/// Substring matches need both sides at least this long.
const MIN_PARTIAL_LEN: usize = 3;

/// Pulls concepts out of single sentences.
#[derive(Debug, Clone, Copy)]
pub struct ConceptExtractor {
    lexicon: &'static Lexicon,
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl ConceptExtractor {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extract every concept, habitat trait and relationship verb.
    ///
    /// A token can appear more than once if it matches several lists.
    /// Empty or whitespace-only input gives an empty list.
    pub fn extract(&self, sentence: &str, entity: &str) -> Vec<Concept> {
        let nouns = self.lexicon.relevant_nouns(entity);
        let mut concepts = Vec::new();

        for token in tokenize(sentence, MIN_TOKEN_LEN) {
            if let Some(confidence) = noun_match(&token.word, &nouns) {
                concepts.push(make_concept(&token, ConceptCategory::Concept, confidence, sentence));
            }
            if self.lexicon.is_habitat_trait(&token.word) {
                concepts.push(make_concept(
                    &token,
                    ConceptCategory::HabitatTrait,
                    HABITAT_CONFIDENCE,
                    sentence,
                ));
            }
            if self.lexicon.is_relationship_verb(&token.word) {
                concepts.push(make_concept(
                    &token,
                    ConceptCategory::RelationshipVerb,
                    VERB_CONFIDENCE,
                    sentence,
                ));
            }
        }

        concepts
    }

    /// Extract true concepts only and tag each with its abundance.
    ///
    /// Tokens naming the entity come back as subject concepts (purple).
    pub fn extract_for_labeling(&self, sentence: &str, entity: &str) -> Vec<TaggedConcept> {
        let nouns = self.lexicon.relevant_nouns(entity);
        let entity_tokens = self.lexicon.entity_tokens(entity);
        let cues = CueScanner::new(sentence, entity, self.lexicon);
        let mut tagged = Vec::new();

        for token in tokenize(sentence, MIN_LABELING_TOKEN_LEN) {
            if entity_tokens.contains(&token.word) {
                let concept =
                    make_concept(&token, ConceptCategory::Concept, EXACT_CONFIDENCE, sentence);
                tagged.push(TaggedConcept::subject(concept));
                continue;
            }

            let Some((category, confidence)) = self.classify_for_labeling(&token, &nouns) else {
                continue;
            };

            let concept = make_concept(&token, category, confidence, sentence);
            let cue = cues.cue(&token.word);
            tagged.push(TaggedConcept::new(concept, cue));
        }

        tagged
    }

    fn classify_for_labeling(
        &self,
        token: &Token,
        nouns: &[&str],
    ) -> Option<(ConceptCategory, f64)> {
        let word = token.word.as_str();
        if let Some(confidence) = noun_match(word, nouns) {
            return Some((ConceptCategory::Concept, confidence));
        }
        if self.lexicon.is_habitat_trait(word) {
            return Some((ConceptCategory::HabitatTrait, HABITAT_CONFIDENCE));
        }
        if self.lexicon.is_relationship_verb(word) || self.lexicon.is_stopword(word) {
            return None;
        }
        looks_like_noun(token, self.lexicon)
            .then_some((ConceptCategory::Concept, HEURISTIC_CONFIDENCE))
    }
}

/// Last-resort guess at whether a token is a noun.
pub fn looks_like_noun(token: &Token, lexicon: &Lexicon) -> bool {
    let word = token.word.as_str();
    if lexicon.is_known_noun(word) {
        return true;
    }

    let len = word.chars().count();
    if len >= 5 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return true;
    }
    if token.position > 0 && token.original.chars().next().is_some_and(char::is_uppercase) {
        return true;
    }

    len >= 4 && !VERB_SUFFIXES.iter().any(|s| word.ends_with(s))
}

fn noun_match(word: &str, nouns: &[&str]) -> Option<f64> {
    if nouns.contains(&word) {
        return Some(EXACT_CONFIDENCE);
    }
    if word.len() < MIN_PARTIAL_LEN {
        return None;
    }
    nouns
        .iter()
        .filter(|n| n.len() >= MIN_PARTIAL_LEN)
        .any(|n| n.contains(word) || word.contains(n))
        .then_some(PARTIAL_CONFIDENCE)
}

fn make_concept(token: &Token, category: ConceptCategory, confidence: f64, sentence: &str) -> Concept {
    Concept {
        word: token.word.clone(),
        category,
        confidence,
        position: token.position,
        source_text: sentence.to_string(),
    }
}
