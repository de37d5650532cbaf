//! Sentence embedding: trait-based encoder for dense text vectors.
//!
//! Production backend: `MiniLmEmbedder`, the pretrained all-MiniLM-L6-v2
//! sentence-transformer loaded through `rust_bert`. `AppState` holds it as an
//! `Arc<dyn SentenceEmbedder>`, built once at startup.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModel, SentenceEmbeddingsModelType,
};
use tracing::info;

use crate::errors::AppError;

/// Encodes a text into a dense vector. Implementations are shared
/// read-only across requests.
#[async_trait]
pub trait SentenceEmbedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// all-MiniLM-L6-v2 (384-dim, mean pooled, normalized).
///
/// Inference is CPU-bound and blocking, so every call runs on the blocking
/// pool. The mutex serializes forward passes over the single loaded model.
#[derive(Clone)]
pub struct MiniLmEmbedder {
    model: Arc<Mutex<SentenceEmbeddingsModel>>,
}

impl MiniLmEmbedder {
    /// Fetches the weights (or reads them from the rust-bert cache) and
    /// builds the model. Blocking: call from `spawn_blocking`.
    pub fn load() -> Result<Self, AppError> {
        let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
            .create_model()
            .map_err(|e| AppError::Model(format!("failed to load sentence embedding model: {e}")))?;

        info!("Loaded sentence embedding model all-MiniLM-L6-v2");
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

#[async_trait]
impl SentenceEmbedder for MiniLmEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let model = Arc::clone(&self.model);
        let input = text.to_string();

        let mut embeddings = tokio::task::spawn_blocking(move || {
            let model = model
                .lock()
                .map_err(|_| AppError::Model("sentence embedding model lock poisoned".to_string()))?;
            let embeddings = model
                .encode(&[input.as_str()])
                .map_err(|e| AppError::Model(format!("sentence embedding failed: {e}")))?;
            Ok::<_, AppError>(embeddings)
        })
        .await
        .map_err(|e| AppError::Model(format!("sentence embedding task failed: {e}")))??;

        embeddings
            .pop()
            .ok_or_else(|| AppError::Model("sentence embedding model returned no vector".to_string()))
    }

    fn backend(&self) -> &'static str {
        "all-MiniLM-L6-v2"
    }
}

/// Cosine similarity of two dense vectors; 0 when either is all zeros.
pub fn cosine_dense(a: &[f32], b: &[f32]) -> Result<f64, AppError> {
    if a.len() != b.len() {
        return Err(AppError::Model(format!(
            "embedding width mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
