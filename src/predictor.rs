//! Ecosystem prediction orchestrator.
//!
//! Drives the pipeline for one call:
//! 1. Make sure the embedding provider (if any) has been initialized
//! 2. Extract tagged concepts from every sentence
//! 3. Score every sentence against every class, one sentence at a time
//! 4. Aggregate and sharpen the scores into probabilities
//! 5. Assemble the [`PredictionResult`] with per-class evidence and reasoning
//!
//! # Example
//!
//! ```rust,ignore
//! use ecosense::predictor::EcosystemPredictor;
//! use ecosense::scoring::ScoringSettings;
//!
//! let predictor = EcosystemPredictor::new(ScoringSettings::default());
//! let result = predictor
//!     .predict(&["Bees live in trees", "Bees don't like water"], "bees")
//!     .await;
//! assert_eq!(result.top_class, ecosense::domain::Ecosystem::Forest);
//! ```

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::{
    ByEcosystem, ClassPrediction, ClassScoreVector, Ecosystem, PredictionMethod, PredictionResult,
    TaggedConcept,
};
use crate::embedding::{EmbeddingError, EmbeddingProvider, EmbeddingRuntime, EmbeddingState};
use crate::extraction::ConceptExtractor;
use crate::lexicon::Lexicon;
use crate::scoring::{Aggregate, ScoringSettings, SentenceScorer, SentenceScores, aggregate, renormalize};

/// Predicts which ecosystem a set of sentences describes.
///
/// Holds no per-call state. The only shared state is the embedding runtime
/// and the cached class-description vectors, both initialized at most once.
#[derive(Debug)]
pub struct EcosystemPredictor {
    lexicon: &'static Lexicon,
    scorer: SentenceScorer,
    extractor: ConceptExtractor,
    embeddings: Option<EmbeddingRuntime>,
    class_vectors: OnceCell<ByEcosystem<Vec<f32>>>,
}

impl EcosystemPredictor {
    /// Keyword-only predictor.
    pub fn new(settings: ScoringSettings) -> Self {
        let lexicon = Lexicon::standard();
        Self {
            lexicon,
            scorer: SentenceScorer::new(lexicon, settings),
            extractor: ConceptExtractor::new(lexicon),
            embeddings: None,
            class_vectors: OnceCell::new(),
        }
    }

    /// Predictor that prefers embeddings and falls back to keywords.
    pub fn with_embeddings(settings: ScoringSettings, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embeddings: Some(EmbeddingRuntime::new(provider)),
            ..Self::new(settings)
        }
    }

    /// State of the embedding provider, if one was configured.
    pub fn embedding_state(&self) -> Option<EmbeddingState> {
        self.embeddings.as_ref().map(EmbeddingRuntime::state)
    }

    /// Predict the ecosystem described by `sentences` about `target_entity`.
    ///
    /// Never fails: embedding errors degrade to keyword scoring, and an
    /// empty or unrecognizable input gives an all-zero result.
    pub async fn predict<S: AsRef<str>>(&self, sentences: &[S], target_entity: &str) -> PredictionResult {
        if let Some(runtime) = &self.embeddings {
            runtime.ensure_ready().await;
        }

        tracing::info!(
            entity = %target_entity,
            sentence_count = sentences.len(),
            embeddings = ?self.embedding_state(),
            "Starting ecosystem prediction"
        );

        let mut concepts: Vec<TaggedConcept> = Vec::new();
        let mut scored: Vec<SentenceScores> = Vec::with_capacity(sentences.len());

        // Sequential on purpose: one sentence in flight keeps log order stable.
        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            concepts.extend(self.extractor.extract_for_labeling(sentence, target_entity));

            let semantic = self.semantic_similarities(sentence).await;
            let scores = self.scorer.score(sentence, semantic.as_ref());

            tracing::debug!(
                sentence_index = idx,
                used_embedding = scores.used_embedding,
                negative = scores.sentiment.is_negative,
                positive = scores.sentiment.is_positive,
                scores = ?scores.score_vector(),
                "Scored sentence"
            );
            scored.push(scores);
        }

        let agg = aggregate(&scored, self.scorer.settings().sharpening_exponent);
        let method = Self::method(&scored);
        let result = self.build_result(&scored, &agg, method, concepts);

        tracing::info!(
            top_class = %result.top_class,
            confidence = result.confidence,
            method = %result.method,
            "Prediction complete"
        );

        result
    }

    /// Per-class cosine similarities for one sentence, or `None` when the
    /// embedding path is unavailable for it.
    async fn semantic_similarities(&self, sentence: &str) -> Option<ByEcosystem<f64>> {
        let runtime = self.embeddings.as_ref()?;
        if !runtime.ensure_ready().await {
            return None;
        }
        let provider = runtime.provider();

        let class_vectors = match self.class_vectors(provider).await {
            Ok(vectors) => vectors,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to embed class descriptions, using keyword matching");
                return None;
            }
        };

        let vector = match provider.embed(sentence).await {
            Ok(vector) => vector,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to embed sentence, using keyword matching");
                return None;
            }
        };

        Some(ByEcosystem::from_fn(|eco| {
            f64::from(provider.cosine_similarity(&vector, &class_vectors[eco]))
        }))
    }

    /// Class-description vectors, embedded once. Failures are not cached.
    async fn class_vectors(
        &self,
        provider: &dyn EmbeddingProvider,
    ) -> Result<&ByEcosystem<Vec<f32>>, EmbeddingError> {
        self.class_vectors
            .get_or_try_init(|| async {
                let mut vectors = Vec::with_capacity(Ecosystem::COUNT);
                for eco in Ecosystem::ALL {
                    vectors.push(provider.embed(self.lexicon.class_description(eco)).await?);
                }
                let mut vectors = vectors.into_iter();
                Ok::<_, EmbeddingError>(ByEcosystem::from_fn(|_| vectors.next().unwrap_or_default()))
            })
            .await
    }

    fn method(scored: &[SentenceScores]) -> PredictionMethod {
        let embedded = scored.iter().filter(|s| s.used_embedding).count();
        if embedded == 0 {
            PredictionMethod::KeywordFallback
        } else if embedded == scored.len() && !scored.iter().any(SentenceScores::has_keyword_matches) {
            PredictionMethod::Embedding
        } else {
            PredictionMethod::Hybrid
        }
    }

    fn build_result(
        &self,
        scored: &[SentenceScores],
        agg: &Aggregate,
        method: PredictionMethod,
        concepts: Vec<TaggedConcept>,
    ) -> PredictionResult {
        let mut classes: Vec<ClassPrediction> = Ecosystem::ALL
            .into_iter()
            .map(|eco| {
                let mut supporting_sentences: Vec<String> = Vec::new();
                let mut matched_keywords: Vec<String> = Vec::new();
                for sentence in scored {
                    let class = &sentence.classes[eco];
                    if class.score > 0.0 && !supporting_sentences.contains(&sentence.sentence) {
                        supporting_sentences.push(sentence.sentence.clone());
                    }
                    for keyword in &class.matched_keywords {
                        if !matched_keywords.contains(keyword) {
                            matched_keywords.push(keyword.clone());
                        }
                    }
                }

                ClassPrediction {
                    ecosystem: eco,
                    label: eco.title().to_string(),
                    probability: agg.probabilities[eco],
                    supporting_sentences,
                    matched_keywords,
                    match_count: agg.match_counts[eco],
                    negative_associations: agg.negative_associations[eco],
                }
            })
            .collect();

        // Final pass over the assembled rows so they sum to 1 exactly.
        let final_probabilities = renormalize(&ClassScoreVector::from_fn(|eco| {
            classes
                .iter()
                .find(|c| c.ecosystem == eco)
                .map_or(0.0, |c| c.probability)
        }));
        for class in &mut classes {
            class.probability = final_probabilities[class.ecosystem];
        }

        let (top_class, confidence) = final_probabilities.argmax();
        let reasoning = self.reasoning(scored, agg, method, &classes, top_class, confidence);

        PredictionResult {
            classes,
            top_class,
            confidence,
            reasoning,
            method,
            concepts,
        }
    }

    fn reasoning(
        &self,
        scored: &[SentenceScores],
        agg: &Aggregate,
        method: PredictionMethod,
        classes: &[ClassPrediction],
        top_class: Ecosystem,
        confidence: f64,
    ) -> Vec<String> {
        let provider = self
            .embeddings
            .as_ref()
            .map_or("no", |runtime| runtime.provider().name());
        let embedded = scored.iter().filter(|s| s.used_embedding).count();

        let mut notes = vec![match method {
            PredictionMethod::Embedding => format!(
                "Compared each sentence with the ecosystem descriptions using {provider} embeddings \
                 (lexicon {}).",
                Lexicon::VERSION
            ),
            PredictionMethod::Hybrid => format!(
                "Combined {provider} embeddings ({embedded} of {} sentences) with keyword matching \
                 (lexicon {}).",
                scored.len(),
                Lexicon::VERSION
            ),
            PredictionMethod::KeywordFallback if self.embeddings.is_some() => format!(
                "The embedding model was unavailable, so keywords and related words were matched \
                 instead (lexicon {}).",
                Lexicon::VERSION
            ),
            PredictionMethod::KeywordFallback => format!(
                "Matched keywords and related words (lexicon {}).",
                Lexicon::VERSION
            ),
        }];

        if scored.is_empty() {
            notes.push("No sentences were given, so there is no evidence for any ecosystem.".to_string());
            return notes;
        }
        if agg.raw.total() <= 0.0 {
            notes.push(
                "No ecosystem clues were recognised, so no ecosystem is favoured.".to_string(),
            );
            return notes;
        }

        notes.push(format!(
            "{} is the best match with {:.0}% confidence.",
            top_class.title(),
            confidence * 100.0
        ));

        if let Some(top) = classes.iter().find(|c| c.ecosystem == top_class) {
            if !top.matched_keywords.is_empty() {
                notes.push(format!("Clue words: {}.", top.matched_keywords.join(", ")));
            }
        }

        for class in classes.iter().filter(|c| c.negative_associations > 0) {
            notes.push(format!(
                "{} was mentioned negatively {} time(s), which lowered its score.",
                class.label, class.negative_associations
            ));
        }

        notes
    }
}
