//! Content store — owns the published document for the session.
//!
//! Loads through an injected [`ContentGateway`] and normalizes on receipt.
//! A failed load degrades to the default document rather than leaving
//! consumers with nothing to render.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::ContentGateway;
use crate::content::defaults::default_content;
use crate::content::model::SiteContent;
use crate::content::normalize::normalize;
use crate::errors::AppError;

pub struct ContentStore {
    gateway: Arc<dyn ContentGateway>,
    content: Option<SiteContent>,
    loading: bool,
    error: Option<String>,
}

impl ContentStore {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            content: None,
            loading: false,
            error: None,
        }
    }

    /// The published document, once a load has settled. Never reverts to
    /// `None` after the first load, even a failed one.
    pub fn content(&self) -> Option<&SiteContent> {
        self.content.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Human-readable message from the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the published document and replaces `content` wholesale.
    ///
    /// Taking `&mut self` means overlapping reloads cannot be issued from
    /// safe code, so the update is atomic from the caller's perspective.
    pub async fn reload(&mut self) {
        self.loading = true;
        self.error = None;

        match self.gateway.fetch_content().await {
            Ok(raw) => {
                self.content = Some(normalize(&raw));
                debug!("Loaded published content");
            }
            Err(e) => {
                warn!("Content load failed, falling back to defaults: {e}");
                self.error = Some(load_error_message(&e));
                // Still give callers something to render.
                self.content = Some(default_content());
            }
        }

        self.loading = false;
    }
}

fn load_error_message(e: &AppError) -> String {
    match e {
        AppError::Network(_) | AppError::Server { .. } => e.to_string(),
        _ => format!("Failed to load content: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::api::PublishAck;

    /// Mock gateway whose next fetch result can be swapped between calls.
    #[derive(Default)]
    struct ScriptedGateway {
        next: Mutex<Option<Result<Value, AppError>>>,
        fetches: AtomicUsize,
    }

    impl ScriptedGateway {
        fn respond_with(&self, result: Result<Value, AppError>) {
            *self.next.lock().unwrap() = Some(result);
        }
    }

    #[async_trait]
    impl ContentGateway for ScriptedGateway {
        async fn fetch_content(&self) -> Result<Value, AppError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.next
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(Value::Null))
        }

        async fn put_content(
            &self,
            _content: &SiteContent,
            _api_key: &str,
        ) -> Result<PublishAck, AppError> {
            unreachable!("content store never publishes");
        }
    }

    #[tokio::test]
    async fn test_reload_normalizes_payload() {
        let gateway = Arc::new(ScriptedGateway::default());
        gateway.respond_with(Ok(json!({ "hero": { "headline": "From server" } })));

        let mut store = ContentStore::new(gateway.clone());
        assert!(store.content().is_none());

        store.reload().await;

        assert!(!store.loading());
        assert!(store.error().is_none());
        let content = store.content().unwrap();
        assert_eq!(content.hero.headline, "From server");
        // Missing sections were filled in from defaults.
        assert!(!content.services.is_empty());
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_default_document() {
        let gateway = Arc::new(ScriptedGateway::default());
        gateway.respond_with(Err(AppError::Network("connection refused".to_string())));

        let mut store = ContentStore::new(gateway.clone());
        store.reload().await;

        assert!(!store.loading());
        assert!(store.error().unwrap().contains("Network error"));
        // Content is still renderable.
        assert_eq!(store.content().unwrap(), &default_content());
    }

    #[tokio::test]
    async fn test_successful_reload_clears_previous_error() {
        let gateway = Arc::new(ScriptedGateway::default());
        let mut store = ContentStore::new(gateway.clone());

        gateway.respond_with(Err(AppError::Network("down".to_string())));
        store.reload().await;
        assert!(store.error().is_some());

        gateway.respond_with(Ok(json!({ "hero": { "headline": "Back up" } })));
        store.reload().await;
        assert!(store.error().is_none());
        assert_eq!(store.content().unwrap().hero.headline, "Back up");
    }
}
