use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Everything has a sensible default for local use.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the site backend, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    /// Override for the credential file location (defaults to the platform
    /// config directory).
    pub credential_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            credential_file: std::env::var("ADMIN_CREDENTIAL_FILE")
                .ok()
                .map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
