//! Analysis modes and the response document.

use serde::{Deserialize, Serialize};

/// Which sensitivity analysis accompanies the base risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Base,
    RiskVsAttack,
    RiskVsFpFn,
    RiskVsLength,
    VisualizeNodeNearThreat,
}

impl AnalysisMode {
    /// Map the request's `type` field; absent or unrecognized values run the base mode only.
    pub fn from_request_type(kind: Option<&str>) -> Self {
        match kind {
            Some("risk_vs_attack") => Self::RiskVsAttack,
            Some("risk_vs_fp_fn") => Self::RiskVsFpFn,
            Some("risk_vs_length") => Self::RiskVsLength,
            Some("visualize_node_near_threat") => Self::VisualizeNodeNearThreat,
            _ => Self::Base,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::RiskVsAttack => "risk_vs_attack",
            Self::RiskVsFpFn => "risk_vs_fp_fn",
            Self::RiskVsLength => "risk_vs_length",
            Self::VisualizeNodeNearThreat => "visualize_node_near_threat",
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One point of the risk-vs-attack curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPoint {
    #[serde(rename = "PA")]
    pub attack_probability: f64,
    #[serde(rename = "Risk")]
    pub risk: f64,
}

/// One point of the risk-vs-length curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthPoint {
    #[serde(rename = "P_Length")]
    pub length: usize,
    #[serde(rename = "Risk")]
    pub risk: f64,
}

/// Risk over false-negative (`p12`) × false-positive (`p21`) rates.
///
/// `risk[i][j]` is the risk at `p12_values[i]` and `p21_values[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRateMatrix {
    pub p12_values: Vec<f64>,
    pub p21_values: Vec<f64>,
    pub risk: Vec<Vec<f64>>,
}

/// Risk trajectory of one insertion strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementTrajectory {
    pub lengths: Vec<usize>,
    pub risks: Vec<f64>,
}

impl PlacementTrajectory {
    pub fn push(&mut self, length: usize, risk: f64) {
        self.lengths.push(length);
        self.risks.push(risk);
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Both node-placement strategies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementSweep {
    /// A safe step inserted before the first unsafe position.
    pub insert_before: PlacementTrajectory,
    /// A safe step appended at the end of the path.
    pub insert_end: PlacementTrajectory,
}

/// Response of one risk-analysis request.
///
/// The base fields are always present; the mode-specific ones only for their mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub risk: f64,
    pub transaction_length: usize,
    pub threat_node: String,

    #[serde(rename = "riskAttack", skip_serializing_if = "Option::is_none", default)]
    pub risk_attack: Option<Vec<AttackPoint>>,

    #[serde(rename = "riskMatrix", skip_serializing_if = "Option::is_none", default)]
    pub risk_matrix: Option<Vec<Vec<f64>>>,
    #[serde(rename = "p12Values", skip_serializing_if = "Option::is_none", default)]
    pub p12_values: Option<Vec<f64>>,
    #[serde(rename = "p21Values", skip_serializing_if = "Option::is_none", default)]
    pub p21_values: Option<Vec<f64>>,

    #[serde(rename = "riskVsLength", skip_serializing_if = "Option::is_none", default)]
    pub risk_vs_length: Option<Vec<LengthPoint>>,

    #[serde(rename = "lengthsInsertBefore", skip_serializing_if = "Option::is_none", default)]
    pub lengths_insert_before: Option<Vec<usize>>,
    #[serde(rename = "riskValuesInsertBefore", skip_serializing_if = "Option::is_none", default)]
    pub risk_values_insert_before: Option<Vec<f64>>,
    #[serde(rename = "lengthsInsertEnd", skip_serializing_if = "Option::is_none", default)]
    pub lengths_insert_end: Option<Vec<usize>>,
    #[serde(rename = "riskValuesInsertEnd", skip_serializing_if = "Option::is_none", default)]
    pub risk_values_insert_end: Option<Vec<f64>>,
}

impl RiskReport {
    pub fn base(risk: f64, transaction_length: usize, threat_node: String) -> Self {
        Self {
            risk,
            transaction_length,
            threat_node,
            risk_attack: None,
            risk_matrix: None,
            p12_values: None,
            p21_values: None,
            risk_vs_length: None,
            lengths_insert_before: None,
            risk_values_insert_before: None,
            lengths_insert_end: None,
            risk_values_insert_end: None,
        }
    }

    pub fn with_attack_curve(mut self, points: Vec<AttackPoint>) -> Self {
        self.risk_attack = Some(points);
        self
    }

    pub fn with_error_rate_matrix(mut self, matrix: ErrorRateMatrix) -> Self {
        self.risk_matrix = Some(matrix.risk);
        self.p12_values = Some(matrix.p12_values);
        self.p21_values = Some(matrix.p21_values);
        self
    }

    pub fn with_length_curve(mut self, points: Vec<LengthPoint>) -> Self {
        self.risk_vs_length = Some(points);
        self
    }

    pub fn with_placement(mut self, sweep: PlacementSweep) -> Self {
        self.lengths_insert_before = Some(sweep.insert_before.lengths);
        self.risk_values_insert_before = Some(sweep.insert_before.risks);
        self.lengths_insert_end = Some(sweep.insert_end.lengths);
        self.risk_values_insert_end = Some(sweep.insert_end.risks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_request_type() {
        assert_eq!(AnalysisMode::from_request_type(None), AnalysisMode::Base);
        assert_eq!(AnalysisMode::from_request_type(Some("bogus")), AnalysisMode::Base);
        assert_eq!(
            AnalysisMode::from_request_type(Some("risk_vs_fp_fn")),
            AnalysisMode::RiskVsFpFn
        );
        assert_eq!(
            AnalysisMode::from_request_type(Some("visualize_node_near_threat")).name(),
            "visualize_node_near_threat"
        );
    }

    #[test]
    fn test_base_report_omits_mode_fields() {
        let json = serde_json::to_value(RiskReport::base(0.25, 3, "Transfer".into())).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["transaction_length"], 3);
        assert_eq!(object["threat_node"], "Transfer");
    }

    #[test]
    fn test_attack_point_wire_names() {
        let report = RiskReport::base(0.1, 2, String::new()).with_attack_curve(vec![AttackPoint {
            attack_probability: 0.11,
            risk: 0.4,
        }]);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["riskAttack"][0]["PA"], 0.11);
        assert_eq!(json["riskAttack"][0]["Risk"], 0.4);
    }

    #[test]
    fn test_placement_wire_names() {
        let mut sweep = PlacementSweep::default();
        sweep.insert_before.push(3, 0.2);
        sweep.insert_end.push(3, 0.3);
        let json = serde_json::to_value(RiskReport::base(0.1, 3, String::new()).with_placement(sweep))
            .unwrap();
        assert_eq!(json["lengthsInsertBefore"][0], 3);
        assert_eq!(json["riskValuesInsertEnd"][0], 0.3);
    }
}
