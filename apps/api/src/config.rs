use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory uploaded resumes are written to before extraction.
    pub upload_dir: PathBuf,
    pub max_upload_mb: usize,
    /// Where fastembed keeps downloaded model weights. `None` uses its default.
    pub model_cache_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            max_upload_mb: env_or("MAX_UPLOAD_MB", "20")
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
            model_cache_dir: std::env::var("FASTEMBED_CACHE_DIR").ok().map(PathBuf::from),
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
