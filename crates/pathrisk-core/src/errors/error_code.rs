//! Stable error codes surfaced to callers.

/// Maps an error to a stable, machine-readable code.
pub trait PathRiskErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const REQUEST_ERROR: &str = "REQUEST_ERROR";
pub const NUMERIC_DOMAIN: &str = "NUMERIC_DOMAIN";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
