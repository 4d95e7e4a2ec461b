//! The prediction result handed to the presentation layer.

use super::concept::TaggedConcept;
use super::ecosystem::Ecosystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which similarity path produced the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionMethod {
    /// Every sentence scored by embeddings alone.
    Embedding,
    /// Embeddings mixed with literal keyword bonuses or keyword fallback.
    Hybrid,
    /// No sentence was scored with embeddings.
    KeywordFallback,
}

impl fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PredictionMethod::Embedding => "embedding",
            PredictionMethod::Hybrid => "hybrid",
            PredictionMethod::KeywordFallback => "keyword-fallback",
        })
    }
}

/// One class row of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPrediction {
    pub ecosystem: Ecosystem,
    pub label: String,
    pub probability: f64,
    /// Sentences that gave this class a positive score, in input order.
    pub supporting_sentences: Vec<String>,
    /// Literal class keywords found in the sentences, first-seen order.
    pub matched_keywords: Vec<String>,
    /// Sentences with at least one literal keyword for this class.
    pub match_count: usize,
    /// Sentences that mentioned this class's keywords negatively.
    pub negative_associations: usize,
}

/// Output of [`crate::predictor::EcosystemPredictor::predict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// One entry per class, in [`Ecosystem::ALL`] order.
    pub classes: Vec<ClassPrediction>,
    pub top_class: Ecosystem,
    /// Probability of `top_class`; zero when there was no evidence.
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub method: PredictionMethod,
    /// Tagged concepts of every sentence, in input order.
    pub concepts: Vec<TaggedConcept>,
}

impl PredictionResult {
    /// Probability assigned to one class.
    pub fn probability(&self, ecosystem: Ecosystem) -> f64 {
        self.class(ecosystem).map_or(0.0, |c| c.probability)
    }

    pub fn class(&self, ecosystem: Ecosystem) -> Option<&ClassPrediction> {
        self.classes.iter().find(|c| c.ecosystem == ecosystem)
    }

    /// True when no class received any score.
    pub fn is_degenerate(&self) -> bool {
        self.classes.iter().all(|c| c.probability == 0.0)
    }
}
