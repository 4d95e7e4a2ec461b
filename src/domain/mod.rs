//! Domain types shared by the pipeline stages.

pub mod concept;
pub mod ecosystem;
pub mod prediction;

pub use concept::{Abundance, Concept, ConceptCategory, ConceptColor, SentimentCue, TaggedConcept};
pub use ecosystem::{ByEcosystem, ClassScoreVector, Ecosystem};
pub use prediction::{ClassPrediction, PredictionMethod, PredictionResult};
