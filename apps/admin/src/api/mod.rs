//! HTTP client for the site backend. This is the single point of entry for
//! all network calls; stores and CLI commands never touch `reqwest` directly.

pub mod admin;
pub mod careers;
pub mod content;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::content::model::SiteContent;
use crate::errors::AppError;

pub const API_KEY_HEADER: &str = "X-API-Key";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Server acknowledgment for a successful publish.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishAck {
    pub detail: String,
}

/// The content endpoints the stores depend on. Abstracted so tests can
/// inject a mock and stores can be instantiated in isolation.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// GET /api/content — raw, possibly partial payload; callers normalize.
    async fn fetch_content(&self) -> Result<Value, AppError>;

    /// PUT /api/content — replaces the published document.
    async fn put_content(
        &self,
        content: &SiteContent,
        api_key: &str,
    ) -> Result<PublishAck, AppError>;
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Rejects an empty credential before any request is built.
pub(crate) fn require_api_key(api_key: &str) -> Result<(), AppError> {
    if api_key.trim().is_empty() {
        Err(AppError::MissingCredential)
    } else {
        Ok(())
    }
}

pub(crate) fn network_error(e: reqwest::Error) -> AppError {
    AppError::Network(e.to_string())
}

/// Converts a non-success response into a user-facing error. Prefers the
/// server's structured `{ detail }` message, then a plain string body, then
/// the caller's generic fallback.
pub(crate) async fn server_error(response: Response, fallback: &str) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(map)) => map
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(Value::String(s)) => Some(s),
        _ => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    };

    AppError::Server {
        status,
        message: message.unwrap_or_else(|| fallback.to_string()),
    }
}
