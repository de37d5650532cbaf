use std::sync::Arc;

use crate::errors::AppError;
use crate::screening::embedding::{MiniLmEmbedder, SentenceEmbedder};
use crate::screening::tagger::{BertPosTagger, PosTagger};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Sentence embedder for `/match/semantic`. Built once, never mutated.
    pub embedder: Arc<dyn SentenceEmbedder>,
    /// Part-of-speech tagger for `/skills`. Built once, never mutated.
    pub tagger: Arc<dyn PosTagger>,
}

impl AppState {
    pub fn new(embedder: Arc<dyn SentenceEmbedder>, tagger: Arc<dyn PosTagger>) -> Self {
        Self { embedder, tagger }
    }

    /// Loads the pretrained language models. Model construction blocks on
    /// file and network I/O, so it runs on the blocking pool.
    pub async fn load() -> Result<Self, AppError> {
        let embedder = tokio::task::spawn_blocking(MiniLmEmbedder::load)
            .await
            .map_err(|e| AppError::Model(format!("embedding model loader failed: {e}")))??;
        let tagger = tokio::task::spawn_blocking(BertPosTagger::load)
            .await
            .map_err(|e| AppError::Model(format!("POS model loader failed: {e}")))??;

        Ok(Self::new(Arc::new(embedder), Arc::new(tagger)))
    }
}
