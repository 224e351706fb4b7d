//! Published-content endpoints: fetch and publish.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::api::{
    network_error, server_error, ContentGateway, HttpClient, PublishAck, API_KEY_HEADER,
};
use crate::content::model::SiteContent;
use crate::errors::AppError;

#[async_trait]
impl ContentGateway for HttpClient {
    async fn fetch_content(&self) -> Result<Value, AppError> {
        let response = self
            .client
            .get(self.url("/api/content"))
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to load content").await);
        }

        Ok(response.json().await?)
    }

    async fn put_content(
        &self,
        content: &SiteContent,
        api_key: &str,
    ) -> Result<PublishAck, AppError> {
        let response = self
            .client
            .put(self.url("/api/content"))
            .header(API_KEY_HEADER, api_key)
            .json(content)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to publish changes.").await);
        }

        let ack: PublishAck = response.json().await?;
        info!("Published content: {}", ack.detail);
        Ok(ack)
    }
}

/// Publish operation: sends the draft as the new published document.
///
/// Checks the credential before any transport call and never mutates a
/// store; callers reload the content store after a successful publish.
pub async fn publish_content(
    gateway: &dyn ContentGateway,
    draft: &SiteContent,
    api_key: &str,
) -> Result<PublishAck, AppError> {
    crate::api::require_api_key(api_key)?;
    gateway.put_content(draft, api_key).await
}
