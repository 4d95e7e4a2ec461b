//! Pluggable text embeddings.
//!
//! The predictor never requires an embedding model. It talks to an
//! [`EmbeddingProvider`] through an [`EmbeddingRuntime`], which initializes
//! the provider at most once and remembers whether that worked.

pub mod fastembed_provider;

pub use fastembed_provider::FastEmbedProvider;

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Errors raised by embedding providers.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    /// `embed` was called before `initialize` succeeded.
    #[error("Embedding provider not initialized")]
    NotInitialized,

    /// The model could not be loaded.
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// The model failed while embedding text.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The model returned no vector for the input.
    #[error("Model returned no embedding")]
    EmptyOutput,

    /// The blocking inference task panicked or was cancelled.
    #[error("Embedding task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// A source of dense text vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + std::fmt::Debug {
    /// Load the model. Must be safe to call more than once.
    async fn initialize(&self) -> Result<(), EmbeddingError>;

    /// Embed one piece of text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Similarity of two vectors produced by this provider.
    fn cosine_similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Provider name for logs and reasoning notes.
    fn name(&self) -> &'static str;
}

/// Cosine similarity; 0 for empty, mismatched or zero-length vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Lifecycle of the runtime's provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingState {
    Uninitialized,
    Initializing,
    Ready,
    /// Initialization failed; only the keyword path is available.
    FallbackOnly,
}

/// Marks an initialization in flight; lowered on drop, including when the
/// awaiting future is cancelled.
struct InitializingFlag<'a>(&'a AtomicBool);

impl<'a> InitializingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for InitializingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns a provider and initializes it once.
///
/// Concurrent callers of [`EmbeddingRuntime::ensure_ready`] share a single
/// in-flight initialization. A failed initialization is final for this
/// runtime: the provider is never loaded twice.
#[derive(Debug)]
pub struct EmbeddingRuntime {
    provider: Arc<dyn EmbeddingProvider>,
    ready: OnceCell<bool>,
    initializing: AtomicBool,
}

impl EmbeddingRuntime {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            ready: OnceCell::new(),
            initializing: AtomicBool::new(false),
        }
    }

    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    pub fn state(&self) -> EmbeddingState {
        match self.ready.get() {
            Some(true) => EmbeddingState::Ready,
            Some(false) => EmbeddingState::FallbackOnly,
            None if self.initializing.load(Ordering::Acquire) => EmbeddingState::Initializing,
            None => EmbeddingState::Uninitialized,
        }
    }

    /// Initialize the provider if needed; returns whether it is usable.
    pub async fn ensure_ready(&self) -> bool {
        *self
            .ready
            .get_or_init(|| async {
                let _initializing = InitializingFlag::raise(&self.initializing);
                info!(provider = self.provider.name(), "Initializing embedding provider");
                let ready = match self.provider.initialize().await {
                    Ok(()) => {
                        info!(provider = self.provider.name(), "Embedding provider ready");
                        true
                    }
                    Err(e) => {
                        warn!(
                            provider = self.provider.name(),
                            error = %e,
                            "Embedding provider unavailable, using keyword matching only"
                        );
                        false
                    }
                };
                ready
            })
            .await
    }
}
