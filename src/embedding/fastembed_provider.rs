use super::{EmbeddingError, EmbeddingProvider};
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Local ONNX sentence embeddings via `fastembed`.
pub struct FastEmbedProvider {
    model: Arc<Mutex<Option<TextEmbedding>>>,
    model_name: String,
    show_download_progress: bool,
    /// Set when an inference task died holding the model; the next `embed` reloads it.
    model_lost: AtomicBool,
}

impl std::fmt::Debug for FastEmbedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedProvider")
            .field("model_name", &self.model_name)
            .field("model_loaded", &"Dynamic")
            .finish()
    }
}

impl FastEmbedProvider {
    /// `model_name` is one of `bge-small-en-v1.5` or `all-minilm-l6-v2`.
    pub fn new(model_name: impl Into<String>, show_download_progress: bool) -> Self {
        Self {
            model: Arc::new(Mutex::new(None)),
            model_name: model_name.into(),
            show_download_progress,
            model_lost: AtomicBool::new(false),
        }
    }

    fn resolve_model(name: &str) -> Result<EmbeddingModel, EmbeddingError> {
        match name.to_ascii_lowercase().as_str() {
            "bge-small-en-v1.5" | "bge-small" => Ok(EmbeddingModel::BGESmallENV15),
            "all-minilm-l6-v2" | "minilm" => Ok(EmbeddingModel::AllMiniLML6V2),
            other => Err(EmbeddingError::ModelLoad(format!(
                "unknown embedding model '{other}'"
            ))),
        }
    }

    async fn load(&self) -> Result<TextEmbedding, EmbeddingError> {
        let model = Self::resolve_model(&self.model_name)?;
        info!(model = %self.model_name, "Loading fastembed model...");
        let mut options = InitOptions::new(model);
        options.show_download_progress = self.show_download_progress;

        tokio::task::spawn_blocking(move || TextEmbedding::try_new(options))
            .await?
            .map_err(|e| EmbeddingError::ModelLoad(e.to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn initialize(&self) -> Result<(), EmbeddingError> {
        let mut model_guard = self.model.lock().await;
        if model_guard.is_none() {
            *model_guard = Some(self.load().await?);
        }
        Ok(())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut model_guard = self.model.lock().await;
        if model_guard.is_none() && self.model_lost.load(Ordering::Acquire) {
            warn!(model = %self.model_name, "Reloading embedding model lost by a failed task");
            *model_guard = Some(self.load().await?);
            self.model_lost.store(false, Ordering::Release);
        }
        let mut owned_model = model_guard.take().ok_or(EmbeddingError::NotInitialized)?;
        let text_owned = text.to_string();

        debug!(chars = text.len(), "Embedding text");
        let joined = tokio::task::spawn_blocking(move || {
            let res = owned_model.embed(vec![text_owned], None);
            (res, owned_model)
        })
        .await;
        let (embeddings_res, returned_model) = match joined {
            Ok(pair) => pair,
            Err(e) => {
                self.model_lost.store(true, Ordering::Release);
                return Err(EmbeddingError::TaskJoin(e));
            }
        };

        // Put the model back before surfacing inference errors.
        *model_guard = Some(returned_model);

        embeddings_res
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyOutput)
    }

    fn name(&self) -> &'static str {
        "fastembed"
    }
}
