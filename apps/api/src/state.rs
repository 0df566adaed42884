use std::sync::Arc;

use crate::config::Config;
use crate::matching::semantic::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Sentence-embedding backend, loaded once in `main` and shared by reference.
    pub embedder: Arc<dyn Embedder>,
}
