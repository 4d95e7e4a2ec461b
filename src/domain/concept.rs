//! Extracted concepts and their per-sentence polarity tags.

use serde::{Deserialize, Serialize};

/// Which lexicon list a token was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptCategory {
    /// A noun relevant to the target entity (food, shelter, predators...).
    Concept,
    /// A habitat or climate trait word ("cold", "sandy", "trees").
    HabitatTrait,
    /// A verb describing how the entity relates to something ("eat", "live").
    RelationshipVerb,
}

/// A single token pulled out of a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Lowercased surface form.
    pub word: String,
    pub category: ConceptCategory,
    /// 1.0 for an exact lexicon hit, lower for partial or fixed-category hits.
    pub confidence: f64,
    /// Token index in the source sentence.
    pub position: usize,
    /// The sentence this concept came from.
    pub source_text: String,
}

/// Abundance of a concept as implied by one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Abundance {
    High,
    Low,
}

/// Display colour of a concept chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptColor {
    /// Present or liked.
    Blue,
    /// Missing, scarce or disliked.
    Orange,
    /// The subject entity itself.
    Purple,
}

impl From<Abundance> for ConceptColor {
    fn from(abundance: Abundance) -> Self {
        match abundance {
            Abundance::High => ConceptColor::Blue,
            Abundance::Low => ConceptColor::Orange,
        }
    }
}

/// The cue that decided a concept's abundance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCue {
    Negative,
    Positive,
    /// No cue matched; abundance defaults to high.
    None,
}

impl SentimentCue {
    /// Negative cues give low abundance, anything else high.
    pub fn abundance(self) -> Abundance {
        match self {
            SentimentCue::Negative => Abundance::Low,
            SentimentCue::Positive | SentimentCue::None => Abundance::High,
        }
    }
}

/// A concept plus the polarity judgement of the sentence it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedConcept {
    #[serde(flatten)]
    pub concept: Concept,
    pub abundance: Abundance,
    pub color: ConceptColor,
    pub cue: SentimentCue,
}

impl TaggedConcept {
    /// Tag a concept from the cue found for it.
    pub fn new(concept: Concept, cue: SentimentCue) -> Self {
        let abundance = cue.abundance();
        Self {
            concept,
            abundance,
            color: abundance.into(),
            cue,
        }
    }

    /// Tag a token that names the subject entity.
    pub fn subject(concept: Concept) -> Self {
        Self {
            concept,
            abundance: Abundance::High,
            color: ConceptColor::Purple,
            cue: SentimentCue::None,
        }
    }

    pub fn word(&self) -> &str {
        &self.concept.word
    }
}
