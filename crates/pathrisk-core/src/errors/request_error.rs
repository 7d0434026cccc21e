//! Malformed analysis requests.

use super::error_code::{self, PathRiskErrorCode};

/// Errors raised while decoding a risk-analysis request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid request body: {0}")]
    InvalidJson(String),

    #[error("No {0} events with a probability were supplied")]
    NoEvents(&'static str),

    #[error("Edge {edge_id} has a non-numeric {field}: {value}")]
    NotANumber {
        edge_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Edge {edge_id} into detection event {event} has no secondaryProbability")]
    MissingSecondaryProbability { edge_id: String, event: String },

    #[error("Edge {edge_id} into event {event} has no probability")]
    MissingProbability { edge_id: String, event: String },
}

impl PathRiskErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        error_code::REQUEST_ERROR
    }
}
