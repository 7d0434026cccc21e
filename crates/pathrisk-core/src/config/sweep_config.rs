//! Sweep configuration for the sensitivity analyses.

use serde::{Deserialize, Serialize};

const DEFAULT_ERROR_RATES: [f64; 6] = [0.01, 0.10, 0.20, 0.30, 0.40, 0.50];

/// Sample points for the five analysis modes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SweepConfig {
    /// First attack probability of the risk-vs-attack sweep. Default: 0.01.
    pub attack_start: Option<f64>,
    /// Increment of the risk-vs-attack sweep. Default: 0.1.
    pub attack_step: Option<f64>,
    /// Exclusive upper bound of the risk-vs-attack sweep. Default: 1.0.
    pub attack_end: Option<f64>,
    /// False-positive and false-negative rates sampled by the fp/fn matrix.
    #[serde(default)]
    pub error_rate_samples: Vec<f64>,
    /// How many steps past the parsed length the risk-vs-length sweep extends. Default: 5.
    pub length_extension: Option<usize>,
    /// Longest path the node-placement sweep grows to. Default: 12.
    pub placement_max_length: Option<usize>,
    /// Dispatch independent sweep points across threads. Default: true.
    pub parallel: Option<bool>,
}

impl SweepConfig {
    pub fn effective_attack_start(&self) -> f64 {
        self.attack_start.unwrap_or(0.01)
    }

    pub fn effective_attack_step(&self) -> f64 {
        self.attack_step.unwrap_or(0.1)
    }

    pub fn effective_attack_end(&self) -> f64 {
        self.attack_end.unwrap_or(1.0)
    }

    pub fn effective_error_rate_samples(&self) -> Vec<f64> {
        if self.error_rate_samples.is_empty() {
            DEFAULT_ERROR_RATES.to_vec()
        } else {
            self.error_rate_samples.clone()
        }
    }

    pub fn effective_length_extension(&self) -> usize {
        self.length_extension.unwrap_or(5)
    }

    pub fn effective_placement_max_length(&self) -> usize {
        self.placement_max_length.unwrap_or(12)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Attack probabilities visited by the risk-vs-attack sweep, `start + k·step < end`.
    pub fn attack_samples(&self) -> Vec<f64> {
        let start = self.effective_attack_start();
        let step = self.effective_attack_step();
        let end = self.effective_attack_end();
        if step <= 0.0 || start >= end {
            return Vec::new();
        }
        let count = ((end - start) / step).ceil() as usize;
        (0..count)
            .map(|k| start + k as f64 * step)
            .filter(|value| *value < end)
            .collect()
    }
}
