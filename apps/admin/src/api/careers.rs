//! Public careers endpoint: multipart application submission with
//! client-side resume preconditions.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::info;

use crate::api::{network_error, server_error, HttpClient};
use crate::errors::AppError;

/// Checked client-side before any bytes go over the wire.
pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the backend accepts for resumes.
pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Free text; multiple selected role titles are joined with "; ".
    pub position: String,
    pub message: Option<String>,
    pub resume: ResumeFile,
}

/// Validates resume type and size. Failures surface immediately, before any
/// network call.
pub fn check_resume(resume: &ResumeFile) -> Result<(), AppError> {
    if !ALLOWED_RESUME_TYPES.contains(&resume.content_type.as_str()) {
        return Err(AppError::UnsupportedFileType(resume.content_type.clone()));
    }
    let size_bytes = resume.bytes.len() as u64;
    if size_bytes > MAX_RESUME_BYTES {
        return Err(AppError::FileTooLarge {
            size_bytes,
            limit_bytes: MAX_RESUME_BYTES,
        });
    }
    Ok(())
}

impl HttpClient {
    /// POST /api/careers/apply — returns the server's opaque success payload.
    pub async fn submit_application(
        &self,
        application: NewApplication,
    ) -> Result<Value, AppError> {
        check_resume(&application.resume)?;

        let resume_part = Part::bytes(application.resume.bytes)
            .file_name(application.resume.file_name)
            .mime_str(&application.resume.content_type)?;

        let mut form = Form::new()
            .text("full_name", application.full_name)
            .text("email", application.email.clone())
            .text("position", application.position);
        if let Some(phone) = application.phone {
            form = form.text("phone", phone);
        }
        if let Some(message) = application.message {
            form = form.text("message", message);
        }
        form = form.part("resume", resume_part);

        let response = self
            .client
            .post(self.url("/api/careers/apply"))
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Failed to submit application").await);
        }

        info!("Submitted application for {}", application.email);
        Ok(response.json().await?)
    }
}
