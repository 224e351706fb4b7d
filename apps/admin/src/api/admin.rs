//! Authenticated admin endpoints: application review, resume download, and
//! the homepage layout toggle. Every call requires the stored API key.

use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{network_error, require_api_key, server_error, HttpClient, API_KEY_HEADER};
use crate::content::model::HomeLayoutVariant;
use crate::errors::AppError;

const DEFAULT_RESUME_FILENAME: &str = "resume.docx";

/// One submitted job application, as listed by the review screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub created_at: NaiveDateTime,
    pub resume_file_id: i64,
}

#[derive(Debug, Clone)]
pub struct ResumeDownload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLayoutResponse {
    pub layout_variant: HomeLayoutVariant,
}

impl HttpClient {
    /// GET /api/admin/applications — optionally filtered by role title.
    pub async fn list_applications(
        &self,
        api_key: &str,
        role: Option<&str>,
    ) -> Result<Vec<ApplicationRecord>, AppError> {
        require_api_key(api_key)?;

        let mut request = self
            .client
            .get(self.url("/api/admin/applications"))
            .header(API_KEY_HEADER, api_key);
        if let Some(role) = role {
            request = request.query(&[("role", role)]);
        }

        let response = request.send().await.map_err(network_error)?;
        if !response.status().is_success() {
            return Err(server_error(response, "Failed to load applications").await);
        }

        Ok(response.json().await?)
    }

    /// GET /api/admin/files/{id} — binary resume blob. The filename comes
    /// from Content-Disposition when the server supplies one.
    pub async fn download_resume(
        &self,
        api_key: &str,
        resume_file_id: i64,
    ) -> Result<ResumeDownload, AppError> {
        require_api_key(api_key)?;

        let response = self
            .client
            .get(self.url(&format!("/api/admin/files/{resume_file_id}")))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to download resume").await);
        }

        let file_name = response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| DEFAULT_RESUME_FILENAME.to_string());
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await?;

        info!("Downloaded resume {resume_file_id} ({} bytes)", bytes.len());
        Ok(ResumeDownload {
            file_name,
            content_type,
            bytes,
        })
    }

    /// GET /api/admin/home-layout
    pub async fn fetch_home_layout(&self, api_key: &str) -> Result<HomeLayoutResponse, AppError> {
        require_api_key(api_key)?;

        let response = self
            .client
            .get(self.url("/api/admin/home-layout"))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to load home layout").await);
        }

        Ok(response.json().await?)
    }

    /// PUT /api/admin/home-layout
    pub async fn update_home_layout(
        &self,
        api_key: &str,
        layout_variant: HomeLayoutVariant,
    ) -> Result<HomeLayoutResponse, AppError> {
        require_api_key(api_key)?;

        let response = self
            .client
            .put(self.url("/api/admin/home-layout"))
            .header(API_KEY_HEADER, api_key)
            .json(&HomeLayoutResponse { layout_variant })
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to update home layout").await);
        }

        Ok(response.json().await?)
    }
}

/// Extracts `filename` from a Content-Disposition header value, with or
/// without quotes: `attachment; filename="cv.pdf"` -> `cv.pdf`.
fn filename_from_disposition(header: &str) -> Option<String> {
    let idx = header.find("filename=")?;
    let rest = header[idx + "filename=".len()..].trim();

    let name = if let Some(stripped) = rest.strip_prefix('"') {
        stripped.split('"').next().unwrap_or("")
    } else {
        rest.split(';').next().unwrap_or("").trim()
    };

    (!name.is_empty()).then(|| name.to_string())
}
