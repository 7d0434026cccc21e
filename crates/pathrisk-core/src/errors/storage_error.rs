//! Project store and vocabulary errors.

use super::analysis_error::ErrorPayload;
use super::error_code::{self, PathRiskErrorCode};

/// Errors raised by the file-backed project store and vocabulary loader.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Project name is invalid: {0:?}")]
    InvalidName(String),

    #[error("Document does not exist: {path}")]
    NotFound { path: String },

    #[error("I/O failure on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed JSON in {path}: {message}")]
    Json { path: String, message: String },
}

impl StorageError {
    /// Structured payload for reporting this error to a caller.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            code: self.error_code(),
        }
    }
}

impl PathRiskErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
