//! Scores one sentence against every class.
//!
//! Each sentence is scored on its own so a negation only affects the
//! keywords of the sentence it appears in.

use super::ScoringSettings;
use crate::domain::{ByEcosystem, ClassScoreVector, Ecosystem};
use crate::extraction::{MIN_TOKEN_LEN, SentenceSentiment, analyze_sentence, tokenize};
use crate::lexicon::Lexicon;
use crate::similarity::match_class_keywords;

/// Sentiment multiplier for negative sentences or negated keywords.
const NEGATIVE_MULTIPLIER: f64 = -1.0;
/// Sentiment multiplier for positive sentences or keyword mentions.
const POSITIVE_MULTIPLIER: f64 = 1.0;

/// How one sentence scored for one class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassSentenceScore {
    /// Final non-negative score.
    pub score: f64,
    /// Semantic similarity between the sentence and the class.
    pub similarity: f64,
    /// Sentiment multiplier applied to `similarity`.
    pub sentiment: f64,
    /// Literal class keywords present in the sentence.
    pub matched_keywords: Vec<String>,
}

impl ClassSentenceScore {
    /// The class was mentioned, but negatively.
    pub fn is_negative_association(&self) -> bool {
        self.sentiment < 0.0 && !self.matched_keywords.is_empty()
    }
}

/// Scores of one sentence for every class.
#[derive(Debug, Clone)]
pub struct SentenceScores {
    pub sentence: String,
    pub classes: ByEcosystem<ClassSentenceScore>,
    pub sentiment: SentenceSentiment,
    /// Whether `similarity` came from embeddings rather than word matching.
    pub used_embedding: bool,
}

impl SentenceScores {
    pub fn score_vector(&self) -> ClassScoreVector {
        ByEcosystem::from_fn(|eco| self.classes[eco].score)
    }

    /// Whether any literal keyword bonus was applied.
    pub fn has_keyword_matches(&self) -> bool {
        self.classes.values().any(|c| !c.matched_keywords.is_empty())
    }
}

/// Combines similarity, sentiment and keyword bonus into class scores.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    lexicon: &'static Lexicon,
    settings: ScoringSettings,
}

impl SentenceScorer {
    pub fn new(lexicon: &'static Lexicon, settings: ScoringSettings) -> Self {
        Self { lexicon, settings }
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Score a sentence.
    ///
    /// `semantic` carries per-class embedding similarities when the
    /// embedding path succeeded for this sentence; otherwise similarity is
    /// computed from the word-similarity table. A sentence with no literal
    /// or related class word scores zero everywhere, embeddings or not.
    pub fn score(&self, sentence: &str, semantic: Option<&ByEcosystem<f64>>) -> SentenceScores {
        let sentiment = analyze_sentence(sentence, self.lexicon, self.settings.negation_window);
        let tokens: Vec<String> = tokenize(sentence, MIN_TOKEN_LEN)
            .into_iter()
            .map(|t| t.word)
            .collect();
        let content_words: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|w| !self.lexicon.is_stopword(w) && !self.lexicon.is_negation_cue(w))
            .collect();

        let lexical = ByEcosystem::from_fn(|eco| {
            match_class_keywords(self.lexicon, &content_words, self.lexicon.class_keywords(eco))
        });
        // Embedding similarity only counts once the words themselves point at some class.
        let has_evidence = lexical.values().any(|s| *s > 0.0);

        let classes = ByEcosystem::from_fn(|eco| {
            let similarity = match semantic {
                Some(similarities) if has_evidence => similarities[eco],
                Some(_) => 0.0,
                None => lexical[eco],
            };
            self.score_class(eco, &tokens, &sentiment, similarity)
        });

        SentenceScores {
            sentence: sentence.to_string(),
            classes,
            sentiment,
            used_embedding: semantic.is_some(),
        }
    }

    fn score_class(
        &self,
        eco: Ecosystem,
        tokens: &[String],
        sentiment: &SentenceSentiment,
        similarity: f64,
    ) -> ClassSentenceScore {
        let keywords = self.lexicon.class_keywords(eco);
        let mut matched_keywords: Vec<String> = Vec::new();
        for token in tokens {
            if keywords.contains(&token.as_str()) && !matched_keywords.contains(token) {
                matched_keywords.push(token.clone());
            }
        }

        let negated_overlap = matched_keywords.iter().any(|k| sentiment.is_negated(k));
        let multiplier = if sentiment.is_negative || negated_overlap {
            NEGATIVE_MULTIPLIER
        } else if sentiment.is_positive || !matched_keywords.is_empty() {
            POSITIVE_MULTIPLIER
        } else {
            self.settings.neutral_multiplier
        };

        let bonus = self.settings.keyword_bonus * matched_keywords.len() as f64;
        let score = (similarity * multiplier + bonus).max(0.0);

        tracing::trace!(
            class = %eco,
            similarity,
            multiplier,
            keywords = matched_keywords.len(),
            score,
            "Scored class"
        );

        ClassSentenceScore {
            score,
            similarity,
            sentiment: multiplier,
            matched_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentenceScorer {
        SentenceScorer::new(Lexicon::standard(), ScoringSettings::default())
    }

    #[test]
    fn habitation_sentence_scores_forest() {
        let scores = scorer().score("Bees live in trees", None);
        let forest = &scores.classes[Ecosystem::Forest];
        assert_eq!(forest.matched_keywords, vec!["trees"]);
        assert_eq!(forest.sentiment, 1.0);
        assert!((forest.score - 1.1).abs() < 1e-9);
        for eco in [Ecosystem::Arctic, Ecosystem::Desert, Ecosystem::Grassland, Ecosystem::Ocean] {
            assert_eq!(scores.classes[eco].score, 0.0, "{eco} should not score");
        }
        assert!(!scores.used_embedding);
    }

    #[test]
    fn negated_keyword_is_suppressed() {
        let scores = scorer().score("Bees don't like water", None);
        let ocean = &scores.classes[Ecosystem::Ocean];
        assert_eq!(ocean.sentiment, -1.0);
        assert_eq!(ocean.score, 0.0);
        assert!(ocean.is_negative_association());
    }

    #[test]
    fn negated_mention_scores_below_neutral_mention() {
        let negated = scorer().score("Bees don't like water", None);
        let neutral = scorer().score("Water", None);
        assert!(
            negated.classes[Ecosystem::Ocean].score < neutral.classes[Ecosystem::Ocean].score
        );
    }

    #[test]
    fn neutral_sentence_with_related_word_is_attenuated() {
        // "hive" is related to forest words but is not itself a keyword
        let semantic = ByEcosystem::from_fn(|_| 0.4);
        let scores = scorer().score("Bees build a hive", Some(&semantic));
        for (_, class) in scores.classes.iter() {
            assert_eq!(class.sentiment, 0.5);
            assert!((class.score - 0.2).abs() < 1e-9);
        }
        assert!(scores.used_embedding);
        assert!(!scores.has_keyword_matches());
    }

    #[test]
    fn embedding_similarity_needs_lexical_evidence() {
        let semantic = ByEcosystem::from_fn(|_| 0.9);
        let scores = scorer().score("Bees are small", Some(&semantic));
        assert_eq!(scores.score_vector().total(), 0.0);
        assert!(scores.classes.values().all(|c| c.similarity == 0.0));
        assert!(scores.used_embedding);
    }

    #[test]
    fn keyword_bonus_counts_distinct_keywords() {
        let scores = scorer().score("Camels love sand and sun in the desert", None);
        let desert = &scores.classes[Ecosystem::Desert];
        assert_eq!(desert.matched_keywords, vec!["camels", "sand", "sun", "desert"]);
        assert!(desert.score > 1.0);
    }

    #[test]
    fn negative_similarity_clamps_to_zero() {
        let semantic = ByEcosystem::from_fn(|_| -0.3);
        let scores = scorer().score("Bees like trees", Some(&semantic));
        assert!(scores.score_vector().values().all(|s| *s == 0.0));
    }

    #[test]
    fn sentence_without_keywords_scores_zero_on_keyword_path() {
        let scores = scorer().score("Bees buzz loudly", None);
        assert_eq!(scores.score_vector().total(), 0.0);
        assert!(!scores.has_keyword_matches());
    }
}
