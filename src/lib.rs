//! Ecosystem prediction from short free-text sentences about an animal.
//!
//! Children write a few sentences ("Bees live in trees", "Bees don't like
//! water") and the pipeline turns them into a probability distribution over
//! five ecosystems, together with the evidence behind it.
//!
//! # Architecture
//!
//! - **Extraction**: tokenizer, concept extraction and polarity tagging
//! - **Scoring**: per-sentence class scores from keywords or embeddings
//! - **Aggregation**: cross-sentence sums with power-law sharpening
//! - **Prediction**: the orchestrator that degrades to keywords when the
//!   embedding model is unavailable
//!
//! # Modules
//!
//! - [`domain`]: ecosystems, concepts and prediction results
//! - [`lexicon`]: the versioned word tables every stage reads
//! - [`extraction`]: tokens, concepts and sentiment
//! - [`similarity`]: lexical word similarity
//! - [`embedding`]: embedding provider abstraction and lazy runtime
//! - [`scoring`]: sentence scorer and aggregator
//! - [`predictor`]: [`EcosystemPredictor`]
//! - [`config`]: layered application configuration
//! - [`telemetry`]: tracing subscriber setup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod domain;
pub mod embedding;
pub mod extraction;
pub mod lexicon;
pub mod predictor;
pub mod scoring;
pub mod similarity;
pub mod telemetry;

pub use domain::{ClassPrediction, Ecosystem, PredictionMethod, PredictionResult};
pub use embedding::{EmbeddingError, EmbeddingProvider, FastEmbedProvider};
pub use predictor::EcosystemPredictor;
pub use scoring::ScoringSettings;
