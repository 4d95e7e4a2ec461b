use async_trait::async_trait;
use ecosense::domain::{Ecosystem, PredictionMethod, PredictionResult};
use ecosense::embedding::{EmbeddingError, EmbeddingProvider, EmbeddingState};
use ecosense::lexicon::Lexicon;
use ecosense::predictor::EcosystemPredictor;
use ecosense::scoring::ScoringSettings;
use ecosense::similarity::similarity;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider whose model never loads.
#[derive(Debug)]
struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn initialize(&self) -> Result<(), EmbeddingError> {
        Err(EmbeddingError::ModelLoad("model files missing".to_string()))
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::NotInitialized)
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Provider that loads fine but cannot embed anything.
#[derive(Debug)]
struct BrokenInferenceProvider;

#[async_trait]
impl EmbeddingProvider for BrokenInferenceProvider {
    async fn initialize(&self) -> Result<(), EmbeddingError> {
        Ok(())
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::Inference("tensor shape mismatch".to_string()))
    }

    fn name(&self) -> &'static str {
        "broken-inference"
    }
}

/// Counts calls and returns a constant vector.
#[derive(Debug, Default)]
struct CountingProvider {
    initializations: AtomicUsize,
    embeddings: AtomicUsize,
}

#[async_trait]
impl EmbeddingProvider for CountingProvider {
    async fn initialize(&self) -> Result<(), EmbeddingError> {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        self.initializations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embeddings.fetch_add(1, Ordering::SeqCst);
        Ok(vec![1.0, 0.0, 0.0])
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Deterministic embedding: one dimension per habitat theme, counting the
/// theme's words. "hive" sits with the forest words, as a model would put it.
#[derive(Debug)]
struct ThemeProvider;

const THEMES: &[&[&str]] = &[
    &["ice", "snow", "frozen", "cold"],
    &["sand", "dunes", "cactus", "dry", "hot"],
    &["trees", "leaves", "moss", "woods", "shady", "hive"],
    &["meadow", "prairie", "grass", "flowers"],
    &["water", "waves", "fish", "coral", "sea"],
];

#[async_trait]
impl EmbeddingProvider for ThemeProvider {
    async fn initialize(&self) -> Result<(), EmbeddingError> {
        Ok(())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
            .collect();
        Ok(THEMES
            .iter()
            .map(|theme| words.iter().filter(|w| theme.contains(*w)).count() as f32)
            .collect())
    }

    fn name(&self) -> &'static str {
        "themes"
    }
}

fn keyword_predictor() -> EcosystemPredictor {
    EcosystemPredictor::new(ScoringSettings::default())
}

fn assert_simplex(result: &PredictionResult) {
    assert_eq!(result.classes.len(), Ecosystem::COUNT);
    for class in &result.classes {
        assert!(
            (0.0..=1.0).contains(&class.probability),
            "{} out of range: {}",
            class.ecosystem,
            class.probability
        );
    }
    let total: f64 = result.classes.iter().map(|c| c.probability).sum();
    assert!(
        (total - 1.0).abs() < 1e-9 || total == 0.0,
        "probabilities sum to {total}"
    );
}

#[tokio::test]
async fn test_probabilities_form_a_simplex() {
    let predictor = keyword_predictor();
    let inputs: Vec<Vec<&str>> = vec![
        vec!["Bees live in trees"],
        vec!["Bees live in trees", "Bees love flowers and nectar"],
        vec!["Polar bears walk on the ice", "They swim in cold water"],
        vec!["Camels like sand", "The sun is hot"],
        vec!["Bees are small"],
        vec![],
    ];

    for sentences in inputs {
        let result = predictor.predict(&sentences, "bees").await;
        assert_simplex(&result);
    }
}

#[tokio::test]
async fn test_empty_input_is_degenerate() {
    let result = keyword_predictor().predict::<&str>(&[], "bees").await;

    assert!(result.is_degenerate());
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.method, PredictionMethod::KeywordFallback);
    assert!(result.concepts.is_empty());
}

#[tokio::test]
async fn test_sentences_without_clues_are_degenerate() {
    let result = keyword_predictor().predict(&["Bees are small"], "bees").await;

    assert!(result.is_degenerate());
    assert_eq!(result.confidence, 0.0);
    assert!(result.classes.iter().all(|c| c.supporting_sentences.is_empty()));
}

#[tokio::test]
async fn test_prediction_is_idempotent() {
    let predictor = keyword_predictor();
    let sentences = ["Bees live in trees", "Bees don't like water", "Bees love flowers"];

    let first = predictor.predict(&sentences, "bees").await;
    let second = predictor.predict(&sentences, "bees").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_negation_never_increases_probability() {
    let predictor = keyword_predictor();

    let positive = predictor.predict(&["Bees live near water"], "bees").await;
    let negated = predictor.predict(&["Bees don't live near water"], "bees").await;

    assert_eq!(positive.top_class, Ecosystem::Ocean);
    assert!(negated.probability(Ecosystem::Ocean) <= positive.probability(Ecosystem::Ocean));
    assert_eq!(negated.probability(Ecosystem::Ocean), 0.0);
}

#[tokio::test]
async fn test_negation_stays_in_its_sentence() {
    let predictor = keyword_predictor();

    let alone = predictor.predict(&["Bees live in trees"], "bees").await;
    let mixed = predictor
        .predict(&["Bees don't like water", "Bees live in trees"], "bees")
        .await;

    assert_eq!(mixed.top_class, Ecosystem::Forest);
    assert!((mixed.probability(Ecosystem::Forest) - alone.probability(Ecosystem::Forest)).abs() < 1e-9);

    let ocean = mixed.class(Ecosystem::Ocean).expect("ocean row");
    assert_eq!(ocean.negative_associations, 1);
    assert!(ocean.supporting_sentences.is_empty());
}

#[test]
fn test_short_words_do_not_substring_match() {
    let lexicon = Lexicon::standard();
    assert_eq!(similarity(lexicon, "in", "marine"), 0.0);
    assert_eq!(similarity(lexicon, "sea", "seaweed"), 0.0);
    assert_eq!(similarity(lexicon, "Trees", "trees"), 1.0);
}

#[tokio::test]
async fn test_failed_model_load_falls_back_to_keywords() {
    let sentences = ["Bees live in trees", "Bees don't like water"];
    let predictor = EcosystemPredictor::with_embeddings(ScoringSettings::default(), Arc::new(FailingProvider));

    let result = predictor.predict(&sentences, "bees").await;
    let baseline = keyword_predictor().predict(&sentences, "bees").await;

    assert_eq!(predictor.embedding_state(), Some(EmbeddingState::FallbackOnly));
    assert_eq!(result.method, PredictionMethod::KeywordFallback);
    assert_eq!(result.top_class, Ecosystem::Forest);
    assert_eq!(result.classes, baseline.classes);
}

#[tokio::test]
async fn test_failed_inference_falls_back_to_keywords() {
    let predictor =
        EcosystemPredictor::with_embeddings(ScoringSettings::default(), Arc::new(BrokenInferenceProvider));

    let result = predictor.predict(&["Bees live in trees"], "bees").await;

    assert_eq!(predictor.embedding_state(), Some(EmbeddingState::Ready));
    assert_eq!(result.method, PredictionMethod::KeywordFallback);
    assert_eq!(result.top_class, Ecosystem::Forest);
    assert!((result.confidence - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_provider_initializes_once_across_predictions() {
    let provider = Arc::new(CountingProvider::default());
    let predictor = Arc::new(EcosystemPredictor::with_embeddings(
        ScoringSettings::default(),
        Arc::clone(&provider) as Arc<dyn EmbeddingProvider>,
    ));

    let a = Arc::clone(&predictor);
    let b = Arc::clone(&predictor);
    let (first, second) = tokio::join!(
        async move { a.predict(&["Bees live in trees"], "bees").await },
        async move { b.predict(&["Bees love flowers"], "bees").await },
    );
    predictor.predict(&["Bees like the sun"], "bees").await;

    assert_eq!(provider.initializations.load(Ordering::SeqCst), 1);
    // five class descriptions, then one vector per sentence
    assert_eq!(provider.embeddings.load(Ordering::SeqCst), Ecosystem::COUNT + 3);
    assert_ne!(first.method, PredictionMethod::KeywordFallback);
    assert_ne!(second.method, PredictionMethod::KeywordFallback);
}

#[tokio::test]
async fn test_related_word_with_embeddings_is_tagged_embedding() {
    let predictor = EcosystemPredictor::with_embeddings(ScoringSettings::default(), Arc::new(ThemeProvider));

    // "hive" is no class keyword, only related to forest words
    let result = predictor.predict(&["Bees build a hive"], "bees").await;

    assert_eq!(result.method, PredictionMethod::Embedding);
    assert_eq!(result.top_class, Ecosystem::Forest);
    assert!(result.class(Ecosystem::Forest).is_some_and(|c| c.matched_keywords.is_empty()));
    assert_simplex(&result);
}

#[tokio::test]
async fn test_embeddings_without_lexical_evidence_are_degenerate() {
    let provider = Arc::new(CountingProvider::default());
    let predictor = EcosystemPredictor::with_embeddings(ScoringSettings::default(), provider);

    let result = predictor.predict(&["Bees are small"], "bees").await;

    assert!(result.is_degenerate());
    assert_eq!(result.confidence, 0.0);
    assert!(result.reasoning.iter().any(|r| r.starts_with("No ecosystem clues")));
    assert!(!result.reasoning.iter().any(|r| r.contains("best match")));
}

#[tokio::test]
async fn test_keyword_bonus_with_embeddings_is_tagged_hybrid() {
    let predictor = EcosystemPredictor::with_embeddings(ScoringSettings::default(), Arc::new(ThemeProvider));

    let result = predictor
        .predict(&["Bees live in trees", "Bees don't like water"], "bees")
        .await;

    assert_eq!(result.method, PredictionMethod::Hybrid);
    assert_eq!(result.top_class, Ecosystem::Forest);
    assert_eq!(result.probability(Ecosystem::Ocean), 0.0);
    assert_simplex(&result);
}

#[tokio::test]
async fn test_result_serializes_for_the_presentation_layer() {
    let result = keyword_predictor()
        .predict(&["Bees live in trees"], "bees")
        .await;
    let json = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(json["topClass"], "forest");
    assert_eq!(json["method"], "keyword-fallback");
    assert_eq!(json["classes"][0]["ecosystem"], "arctic");
    assert_eq!(json["classes"][2]["matchedKeywords"][0], "trees");
    assert!(json["reasoning"].as_array().is_some_and(|r| !r.is_empty()));

    let subject = json["concepts"]
        .as_array()
        .and_then(|concepts| concepts.iter().find(|c| c["word"] == "bees"))
        .expect("subject concept");
    assert_eq!(subject["color"], "purple");

    let back: PredictionResult = serde_json::from_value(json).expect("deserialize result");
    assert_eq!(back, result);
}
