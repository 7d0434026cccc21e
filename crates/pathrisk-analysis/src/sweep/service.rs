//! Framework-independent risk-analysis request handler.

use tracing::{info, warn};

use pathrisk_core::config::PathRiskConfig;
use pathrisk_core::errors::{AnalysisError, ErrorPayload};

use crate::request::{parse_scenario, RiskRequest};

use super::orchestrator::SweepOrchestrator;
use super::types::{AnalysisMode, RiskReport};

/// Parses requests, runs the requested mode, and shapes the response.
///
/// Holds only configuration; every request rebuilds its own graph and tables.
#[derive(Debug, Clone)]
pub struct RiskAnalysisService {
    orchestrator: SweepOrchestrator,
}

impl RiskAnalysisService {
    pub fn new(config: &PathRiskConfig) -> Result<Self, AnalysisError> {
        PathRiskConfig::validate(config)?;
        Ok(Self {
            orchestrator: SweepOrchestrator::from_config(config)?,
        })
    }

    pub fn orchestrator(&self) -> &SweepOrchestrator {
        &self.orchestrator
    }

    /// Run one decoded request.
    pub fn analyze(&self, request: &RiskRequest) -> Result<RiskReport, AnalysisError> {
        let mode = AnalysisMode::from_request_type(request.mode.as_deref());
        let scenario = parse_scenario(request)?;

        info!(
            %mode,
            path_length = scenario.path_length(),
            threats = scenario.threat_labels.len(),
            "risk analysis requested"
        );

        self.orchestrator.run(&scenario, mode)
    }

    /// Decode a JSON body and run it, turning any failure into an [`ErrorPayload`].
    pub fn handle_json(&self, body: &str) -> Result<RiskReport, ErrorPayload> {
        let result = RiskRequest::from_json(body)
            .map_err(AnalysisError::from)
            .and_then(|request| self.analyze(&request));

        result.map_err(|e| {
            warn!(error = %e, client = e.is_client_error(), "risk analysis failed");
            e.to_payload()
        })
    }
}
