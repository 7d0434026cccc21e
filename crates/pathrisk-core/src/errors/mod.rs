//! Error handling for PathRisk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod numeric_error;
pub mod request_error;
pub mod storage_error;

pub use analysis_error::{AnalysisError, ErrorPayload};
pub use config_error::ConfigError;
pub use error_code::PathRiskErrorCode;
pub use graph_error::GraphError;
pub use numeric_error::NumericError;
pub use request_error::RequestError;
pub use storage_error::StorageError;
