mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::semantic::FastEmbedder;
use crate::matching::uploads::ensure_upload_dir;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume matcher v{}", env!("CARGO_PKG_VERSION"));

    ensure_upload_dir(&config.upload_dir).await?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Load the embedding model once; every request shares it read-only.
    let cache_dir = config.model_cache_dir.clone();
    let embedder = tokio::task::spawn_blocking(move || FastEmbedder::load(cache_dir)).await??;
    info!("Embedding model initialized (all-MiniLM-L6-v2)");

    let state = AppState {
        config: config.clone(),
        embedder: Arc::new(embedder),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
