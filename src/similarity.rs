//! Graded word similarity over the curated relationship table.
//!
//! Used as the semantic fallback when no embedding model is available.

use crate::lexicon::Lexicon;

/// Score for identical words.
pub const EXACT: f64 = 1.0;
/// Score when one word is in the other's relationship list.
pub const DIRECT_RELATION: f64 = 0.8;
/// Score when the two relationship lists overlap.
pub const INDIRECT_RELATION: f64 = 0.6;
/// Score when one word contains the other.
pub const SUBSTRING: f64 = 0.4;

/// Both words need this many characters before substring matching applies.
pub const MIN_SUBSTRING_LEN: usize = 4;

/// Weight of the single best match in [`match_class_keywords`].
const MAX_WEIGHT: f64 = 0.6;
/// Weight of the average match in [`match_class_keywords`].
const AVERAGE_WEIGHT: f64 = 0.4;

/// Similarity of two words in `[0, 1]`, case-insensitive.
pub fn similarity(lexicon: &Lexicon, a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return EXACT;
    }

    let related_a = lexicon.related(&a);
    let related_b = lexicon.related(&b);
    if related_a.contains(&b.as_str()) || related_b.contains(&a.as_str()) {
        return DIRECT_RELATION;
    }
    if related_a.iter().any(|w| related_b.contains(w)) {
        return INDIRECT_RELATION;
    }

    if a.chars().count() >= MIN_SUBSTRING_LEN
        && b.chars().count() >= MIN_SUBSTRING_LEN
        && (a.contains(&b) || b.contains(&a))
    {
        return SUBSTRING;
    }

    0.0
}

/// Score how well a set of words matches a class's keywords.
///
/// Each user word contributes its best similarity against any keyword.
/// The result is `0.6 * max + 0.4 * mean` over the words that matched at
/// all, or 0 when none did.
pub fn match_class_keywords<S: AsRef<str>>(
    lexicon: &Lexicon,
    user_words: &[S],
    class_keywords: &[&str],
) -> f64 {
    let best: Vec<f64> = user_words
        .iter()
        .map(|word| {
            class_keywords
                .iter()
                .map(|kw| similarity(lexicon, word.as_ref(), kw))
                .fold(0.0, f64::max)
        })
        .filter(|score| *score > 0.0)
        .collect();

    if best.is_empty() {
        return 0.0;
    }

    let max = best.iter().copied().fold(0.0, f64::max);
    let mean = best.iter().sum::<f64>() / best.len() as f64;
    MAX_WEIGHT * max + AVERAGE_WEIGHT * mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ecosystem;

    fn lexicon() -> &'static Lexicon {
        Lexicon::standard()
    }

    #[test]
    fn exact_match_ignores_case() {
        assert_eq!(similarity(lexicon(), "Water", "water"), EXACT);
    }

    #[test]
    fn direct_relation_either_direction() {
        assert_eq!(similarity(lexicon(), "tree", "canopy"), DIRECT_RELATION);
        assert_eq!(similarity(lexicon(), "canopy", "tree"), DIRECT_RELATION);
    }

    #[test]
    fn shared_relation_is_indirect() {
        // both relate to "sea"
        assert_eq!(similarity(lexicon(), "fish", "waves"), INDIRECT_RELATION);
    }

    #[test]
    fn long_substring_matches() {
        assert_eq!(similarity(lexicon(), "rainforest", "forest"), SUBSTRING);
        assert_eq!(similarity(lexicon(), "seaweeds", "seaweed"), SUBSTRING);
    }

    #[test]
    fn short_words_never_substring_match() {
        assert_eq!(similarity(lexicon(), "in", "marine"), 0.0);
        assert_eq!(similarity(lexicon(), "sea", "seaweed"), 0.0);
    }

    #[test]
    fn unrelated_words_score_zero() {
        assert_eq!(similarity(lexicon(), "bees", "glacier"), 0.0);
    }

    #[test]
    fn class_match_blends_max_and_mean() {
        let words = ["trees", "canopy", "bees"];
        let score = match_class_keywords(lexicon(), &words, &["trees", "forest"]);
        // trees -> 1.0, canopy -> 0.8 (related to trees), bees -> none
        let expected = 0.6 * 1.0 + 0.4 * ((1.0 + 0.8) / 2.0);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn class_match_without_hits_is_zero() {
        let words = ["bees", "live"];
        let keywords = lexicon().class_keywords(Ecosystem::Ocean);
        assert_eq!(match_class_keywords(lexicon(), &words, keywords), 0.0);
    }

    #[test]
    fn in_does_not_reach_ocean_keywords() {
        let keywords = lexicon().class_keywords(Ecosystem::Ocean);
        assert_eq!(match_class_keywords(lexicon(), &["in"], keywords), 0.0);
    }
}
