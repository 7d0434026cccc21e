//! Model configuration: cost rule and probability-vector construction.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RISK_TOLERANCE, INSERTED_SAFE_PROBABILITY, NOMINAL_SAFE_PROBABILITY, READOUT_CAP,
};

/// Parameters of the per-step probability and cost model.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Risk tolerance α of the binomial-quantile cost rule. Default: 0.05.
    pub risk_tolerance: Option<f64>,
    /// Safe probability of a step with no known threat. Default: 0.95.
    pub nominal_safe_probability: Option<f64>,
    /// Safe probability of a step inserted by the placement sweep. Default: 0.99.
    pub inserted_safe_probability: Option<f64>,
    /// Cap on the first-step belief used for risk readout. Default: 0.99.
    pub readout_cap: Option<f64>,
    /// Probabilities assigned between consecutive threats when conditions are not
    /// perfect. Default: `[0.95]`.
    #[serde(default)]
    pub degraded_schedule: Vec<f64>,
}

impl ModelConfig {
    pub fn effective_risk_tolerance(&self) -> f64 {
        self.risk_tolerance.unwrap_or(DEFAULT_RISK_TOLERANCE)
    }

    pub fn effective_nominal_safe_probability(&self) -> f64 {
        self.nominal_safe_probability.unwrap_or(NOMINAL_SAFE_PROBABILITY)
    }

    pub fn effective_inserted_safe_probability(&self) -> f64 {
        self.inserted_safe_probability.unwrap_or(INSERTED_SAFE_PROBABILITY)
    }

    pub fn effective_readout_cap(&self) -> f64 {
        self.readout_cap.unwrap_or(READOUT_CAP)
    }

    /// Returns the degraded step schedule, defaulting to a single nominal value.
    pub fn effective_degraded_schedule(&self) -> Vec<f64> {
        if self.degraded_schedule.is_empty() {
            vec![NOMINAL_SAFE_PROBABILITY]
        } else {
            self.degraded_schedule.clone()
        }
    }
}
