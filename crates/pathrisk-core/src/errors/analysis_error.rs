//! Aggregate error for a full risk-analysis request.

use serde::Serialize;

use super::error_code::PathRiskErrorCode;
use super::{ConfigError, GraphError, NumericError, RequestError};

/// Errors that can occur while serving a risk-analysis request.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    /// Whether the caller's payload caused the failure.
    ///
    /// Numeric errors count as client errors because every probability that reaches the
    /// numeric stage originates from the submitted graph.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }

    /// Structured payload for reporting this error to a caller.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            code: self.error_code(),
        }
    }
}

impl PathRiskErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Numeric(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Failure body returned in place of a risk report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub code: &'static str,
}
