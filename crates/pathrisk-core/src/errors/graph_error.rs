//! Structural errors in a submitted transition graph.

use super::error_code::{self, PathRiskErrorCode};

/// Errors raised while building or validating the transition graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("No initial situation found")]
    MissingInitialSituation,

    #[error("Expected exactly one initial situation, found {count}: {labels:?}")]
    MultipleInitialSituations { count: usize, labels: Vec<String> },

    #[error("Edge {edge_id} references {endpoint}, which is not a situation")]
    UnknownSituation { edge_id: String, endpoint: String },

    #[error("Start situation {0} is not part of the graph")]
    UnknownStart(String),
}

impl PathRiskErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
