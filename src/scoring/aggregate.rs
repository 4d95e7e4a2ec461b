//! Sums sentence votes and turns them into a sharpened distribution.

use super::SentenceScores;
use crate::domain::{ByEcosystem, ClassScoreVector};

/// Cross-sentence totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Element-wise sum of every sentence's score vector.
    pub raw: ClassScoreVector,
    /// Sharpened, normalized probabilities (all zero when `raw` is).
    pub probabilities: ClassScoreVector,
    /// Sentences with at least one literal keyword per class.
    pub match_counts: ByEcosystem<usize>,
    /// Sentences that mentioned a class's keywords negatively.
    pub negative_associations: ByEcosystem<usize>,
}

/// Aggregate per-sentence scores and normalize them.
pub fn aggregate(sentences: &[SentenceScores], sharpening_exponent: f64) -> Aggregate {
    let mut raw = ClassScoreVector::default();
    let mut match_counts = ByEcosystem::<usize>::default();
    let mut negative_associations = ByEcosystem::<usize>::default();

    for sentence in sentences {
        raw.add_assign(&sentence.score_vector());
        for (eco, class) in sentence.classes.iter() {
            if !class.matched_keywords.is_empty() {
                match_counts[eco] += 1;
            }
            if class.is_negative_association() {
                negative_associations[eco] += 1;
            }
        }
    }

    Aggregate {
        probabilities: normalize(&raw, sharpening_exponent),
        raw,
        match_counts,
        negative_associations,
    }
}

/// Turn raw scores into probabilities.
///
/// Scores become fractions of the total, each fraction is raised to
/// `exponent`, and the result is re-normalized to sum to 1. A zero total
/// yields the all-zero vector: no evidence is not the same as a uniform
/// guess.
pub fn normalize(raw: &ClassScoreVector, exponent: f64) -> ClassScoreVector {
    let total = raw.total();
    if total <= 0.0 || !total.is_finite() {
        return ClassScoreVector::default();
    }

    let fractions = raw.clone().map(|score| score.max(0.0) / total);
    let sharpened = fractions.clone().map(|p| p.powf(exponent));
    let sharpened_total = sharpened.total();
    if sharpened_total <= 0.0 || !sharpened_total.is_finite() {
        return fractions;
    }

    sharpened.map(|p| p / sharpened_total)
}

/// Rescale probabilities to sum to exactly 1; zero vectors stay zero.
pub fn renormalize(probabilities: &ClassScoreVector) -> ClassScoreVector {
    let total = probabilities.total();
    if total <= 0.0 {
        return ClassScoreVector::default();
    }
    probabilities.clone().map(|p| p / total)
}
