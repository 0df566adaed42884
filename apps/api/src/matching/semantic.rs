//! Semantic similarity between a JD and a resume via sentence embeddings.
//!
//! `AppState` holds an `Arc<dyn Embedder>`. Production uses `FastEmbedder`
//! (all-MiniLM-L6-v2 through fastembed); tests swap in a deterministic fake.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::errors::AppError;
use crate::matching::round_to_hundredths;

/// Embedding backend. One output vector per input text, same order.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError>;
}

/// all-MiniLM-L6-v2 loaded once at startup.
///
/// fastembed needs `&mut` access to run its ONNX session, so inference calls
/// are serialized through the mutex. The model itself is never replaced.
pub struct FastEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
}

impl FastEmbedder {
    /// Loads (downloading on first run) the model weights. Blocking.
    pub fn load(cache_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(dir);
        }
        let model = TextEmbedding::try_new(options)
            .context("Failed to initialize all-MiniLM-L6-v2 embedding model")?;
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

#[async_trait]
impl Embedder for FastEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError> {
        let model = Arc::clone(&self.model);
        tokio::task::spawn_blocking(move || {
            let mut model = model
                .lock()
                .map_err(|_| AppError::Embedding("embedding model lock poisoned".to_string()))?;
            model
                .embed(texts, None)
                .map_err(|e| AppError::Embedding(format!("Failed to generate embeddings: {e:?}")))
        })
        .await
        .map_err(|e| AppError::Embedding(format!("Embedding task failed: {e}")))?
    }
}

/// Cosine similarity of two vectors. Zero-length or zero-norm input gives 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Cosine similarity of the two texts' embeddings as a percentage, two decimals.
///
/// Not clamped: opposite embeddings score down to -100.
pub async fn semantic_score(
    embedder: &dyn Embedder,
    jd_text: &str,
    resume_text: &str,
) -> Result<f64, AppError> {
    let vectors = embedder
        .embed(vec![jd_text.to_string(), resume_text.to_string()])
        .await?;
    let [jd_vector, resume_vector] = vectors.as_slice() else {
        return Err(AppError::Embedding(format!(
            "expected 2 embeddings, model returned {}",
            vectors.len()
        )));
    };
    Ok(round_to_hundredths(
        cosine_similarity(jd_vector, resume_vector) * 100.0,
    ))
}
