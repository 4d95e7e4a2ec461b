//! Per-sentence scoring and cross-sentence aggregation.

pub mod aggregate;
pub mod sentence;

pub use aggregate::{Aggregate, aggregate, normalize, renormalize};
pub use sentence::{ClassSentenceScore, SentenceScorer, SentenceScores};

use serde::Deserialize;

/// Tunable constants of the scoring pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringSettings {
    /// Exponent of the power-law sharpening applied to score fractions.
    pub sharpening_exponent: f64,
    /// Added per literal keyword found in a sentence.
    pub keyword_bonus: f64,
    /// Sentiment multiplier for sentences with no cue and no keyword.
    pub neutral_multiplier: f64,
    /// Tokens after a negation cue that count as negated.
    pub negation_window: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            sharpening_exponent: 3.0,
            keyword_bonus: 0.1,
            neutral_multiplier: 0.5,
            negation_window: 3,
        }
    }
}
