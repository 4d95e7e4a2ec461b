//! Static word tables, consolidated into a single versioned [`Lexicon`].
//!
//! Every stage of the pipeline reads its word lists from here, so keyword,
//! sentiment and relationship tables cannot drift apart between stages.

pub mod entities;
pub mod keywords;
pub mod relations;
pub mod sentiment;
pub mod vocabulary;

use crate::domain::Ecosystem;
use entities::{ENTITIES, EntityNouns};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static STANDARD: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

/// All word tables used by extraction, similarity and scoring.
#[derive(Debug)]
pub struct Lexicon {
    entities: &'static [EntityNouns],
    union_nouns: Vec<&'static str>,
    relations: HashMap<&'static str, &'static [&'static str]>,
    habitat_traits: HashSet<&'static str>,
    relationship_verbs: HashSet<&'static str>,
    stopwords: HashSet<&'static str>,
    known_nouns: HashSet<&'static str>,
    negation_cues: HashSet<&'static str>,
}

impl Lexicon {
    /// Revision of the word tables.
    pub const VERSION: &'static str = "2024.3";

    /// The shared lexicon, built on first use.
    pub fn standard() -> &'static Lexicon {
        &STANDARD
    }

    fn build() -> Self {
        let mut union_nouns: Vec<&'static str> = Vec::new();
        for noun in ENTITIES.iter().flat_map(EntityNouns::all_nouns) {
            if !union_nouns.contains(&noun) {
                union_nouns.push(noun);
            }
        }

        Self {
            entities: ENTITIES,
            union_nouns,
            relations: relations::RELATIONS.iter().copied().collect(),
            habitat_traits: vocabulary::HABITAT_TRAITS.iter().copied().collect(),
            relationship_verbs: vocabulary::RELATIONSHIP_VERBS.iter().copied().collect(),
            stopwords: vocabulary::STOPWORDS.iter().copied().collect(),
            known_nouns: vocabulary::KNOWN_NOUNS.iter().copied().collect(),
            negation_cues: sentiment::NEGATION_CUES.iter().copied().collect(),
        }
    }

    /// Entity record for a caller-supplied label, if known.
    pub fn entity(&self, label: &str) -> Option<&EntityNouns> {
        let label = normalize_label(label);
        self.entities.iter().find(|e| e.answers_to(&label))
    }

    /// Relevant nouns for an entity; unknown entities get the union of all.
    pub fn relevant_nouns(&self, entity: &str) -> Vec<&'static str> {
        match self.entity(entity) {
            Some(known) => known.all_nouns().collect(),
            None => self.union_nouns.clone(),
        }
    }

    /// Lowercase tokens that name the entity, including its aliases.
    pub fn entity_tokens(&self, entity: &str) -> HashSet<String> {
        let label = normalize_label(entity);
        let mut names: Vec<&str> = vec![label.as_str()];
        if let Some(known) = self.entity(entity) {
            names.push(known.name);
            names.extend(known.aliases);
        }

        let mut tokens = HashSet::new();
        for name in names {
            for word in name.split_whitespace() {
                tokens.insert(word.to_string());
                if let Some(stem) = word.strip_suffix('s') {
                    if stem.len() >= 2 {
                        tokens.insert(stem.to_string());
                    }
                } else {
                    tokens.insert(format!("{word}s"));
                }
            }
        }
        tokens
    }

    pub fn class_keywords(&self, ecosystem: Ecosystem) -> &'static [&'static str] {
        keywords::class_keywords(ecosystem)
    }

    pub fn class_description(&self, ecosystem: Ecosystem) -> &'static str {
        keywords::class_description(ecosystem)
    }

    /// Directly related words for a seed word; empty for non-seeds.
    pub fn related(&self, word: &str) -> &'static [&'static str] {
        self.relations.get(word).copied().unwrap_or(&[])
    }

    pub fn is_habitat_trait(&self, word: &str) -> bool {
        self.habitat_traits.contains(word)
    }

    pub fn is_relationship_verb(&self, word: &str) -> bool {
        self.relationship_verbs.contains(word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_known_noun(&self, word: &str) -> bool {
        self.known_nouns.contains(word)
    }

    pub fn is_negation_cue(&self, word: &str) -> bool {
        self.negation_cues.contains(word)
    }

    pub fn negative_indicators(&self) -> &'static [&'static str] {
        sentiment::NEGATIVE_INDICATORS
    }

    pub fn positive_indicators(&self) -> &'static [&'static str] {
        sentiment::POSITIVE_INDICATORS
    }
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entity_selects_its_nouns() {
        let lexicon = Lexicon::standard();
        let nouns = lexicon.relevant_nouns("Bees");
        assert!(nouns.contains(&"nectar"));
        assert!(!nouns.contains(&"seals"));
    }

    #[test]
    fn unknown_entity_falls_back_to_union() {
        let lexicon = Lexicon::standard();
        let nouns = lexicon.relevant_nouns("unicorn");
        assert!(nouns.contains(&"nectar"));
        assert!(nouns.contains(&"seals"));
        assert!(nouns.contains(&"squid"));
    }

    #[test]
    fn entity_lookup_accepts_aliases_and_spacing() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.entity("  Polar   Bear ").map(|e| e.name), Some("polar bears"));
        assert_eq!(lexicon.entity("bee").map(|e| e.name), Some("bees"));
    }

    #[test]
    fn entity_tokens_cover_singular_and_plural() {
        let tokens = Lexicon::standard().entity_tokens("bees");
        assert!(tokens.contains("bees"));
        assert!(tokens.contains("bee"));
        assert!(tokens.contains("honeybee"));
    }

    #[test]
    fn relations_cover_every_theme() {
        let lexicon = Lexicon::standard();
        for seed in ["tree", "water", "grass", "snow", "desert"] {
            assert!(!lexicon.related(seed).is_empty(), "{seed} has no relations");
        }
        assert!(lexicon.related("marine").is_empty());
    }
}
