#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type. Every failure surfaced to the user is one
/// of these variants; nothing propagates as a panic past an operation
/// boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-side precondition: no credential stored. Surfaced before any
    /// network call is attempted.
    #[error("Missing admin API key; please log in again.")]
    MissingCredential,

    /// The server answered with a non-success status. `message` is the
    /// server's `detail` field verbatim when present, otherwise a generic
    /// fallback chosen by the caller.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never reached the server (connect/timeout failure).
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported file type '{0}'. Allowed: PDF, DOC, DOCX.")]
    UnsupportedFileType(String),

    #[error("Resume is too large: {size_bytes} bytes (limit {limit_bytes}).")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
