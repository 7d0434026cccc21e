//! Per-step operating cost from a binomial quantile via `statrs`.
//!
//! For a path of `N` steps and a step whose attack probability is `q = 1 − p_i`, let `m`
//! be the `(1 − α)` quantile of `Binomial(N, q)`: the smallest `k` with
//! `P(X ≤ k) ≥ 1 − α`. The step cost is `1.0` when `m = 0` and otherwise the midpoint
//! of `1/(m + 1)` and `1/m`, so every cost lies in `(0, 1]`.

use statrs::distribution::{Binomial, DiscreteCDF};

use pathrisk_core::config::ModelConfig;
use pathrisk_core::constants::DEFAULT_RISK_TOLERANCE;
use pathrisk_core::errors::numeric_error::check_probabilities;
use pathrisk_core::errors::NumericError;

/// Binomial-quantile cost rule.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    risk_tolerance: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            risk_tolerance: DEFAULT_RISK_TOLERANCE,
        }
    }
}

impl CostModel {
    pub fn new(risk_tolerance: f64) -> Result<Self, NumericError> {
        if !(risk_tolerance > 0.0 && risk_tolerance < 1.0) {
            return Err(NumericError::InvalidTolerance(risk_tolerance));
        }
        Ok(Self { risk_tolerance })
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self, NumericError> {
        Self::new(config.effective_risk_tolerance())
    }

    pub fn risk_tolerance(&self) -> f64 {
        self.risk_tolerance
    }

    /// Smallest `k` with `P(Binomial(trials, attack_probability) ≤ k) ≥ 1 − α`.
    pub fn quantile(&self, trials: u64, attack_probability: f64) -> u64 {
        let target = 1.0 - self.risk_tolerance;
        let dist = match Binomial::new(attack_probability, trials) {
            Ok(dist) => dist,
            Err(_) => return trials,
        };
        (0..=trials)
            .find(|&k| dist.cdf(k) >= target)
            .unwrap_or(trials)
    }

    /// Cost attached to quantile `m`.
    pub fn cost_for_quantile(m: u64) -> f64 {
        if m == 0 {
            1.0
        } else {
            let m = m as f64;
            (1.0 / (m + 1.0) + 1.0 / m) / 2.0
        }
    }

    /// Cost vector for the probability vector `p`; same length, values in `(0, 1]`.
    pub fn costs(&self, p: &[f64]) -> Result<Vec<f64>, NumericError> {
        check_probabilities("p", p)?;
        let trials = p.len() as u64;
        Ok(p
            .iter()
            .map(|&p_i| Self::cost_for_quantile(self.quantile(trials, 1.0 - p_i)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_attack_probability_costs_one() {
        let model = CostModel::default();
        assert_eq!(model.quantile(5, 0.0), 0);
        assert_eq!(model.costs(&[1.0, 1.0]).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_certain_attack_quantile_is_trials() {
        let model = CostModel::default();
        assert_eq!(model.quantile(4, 1.0), 4);
    }

    #[test]
    fn test_cost_for_quantile_midpoint() {
        assert_eq!(CostModel::cost_for_quantile(0), 1.0);
        assert!((CostModel::cost_for_quantile(1) - 0.75).abs() < 1e-12);
        assert!((CostModel::cost_for_quantile(3) - (0.25 + 1.0 / 3.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_matches_manual_cdf() {
        // Binomial(4, 0.05): P(X=0) = 0.8145, P(X≤1) = 0.9860 → 95% quantile is 1.
        let model = CostModel::default();
        assert_eq!(model.quantile(4, 0.05), 1);
        // Binomial(4, 0.2): P(X≤1) = 0.8192, P(X≤2) = 0.9728 → 2.
        assert_eq!(model.quantile(4, 0.2), 2);
    }

    #[test]
    fn test_costs_for_typical_path() {
        let model = CostModel::default();
        let costs = model.costs(&[0.95, 0.95, 0.80, 0.95]).unwrap();
        assert!((costs[0] - 0.75).abs() < 1e-12);
        assert!((costs[2] - (1.0 / 3.0 + 0.5) / 2.0).abs() < 1e-12);
        assert!(costs.iter().all(|&c| c > 0.0 && c <= 1.0));
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let err = CostModel::default().costs(&[0.5, -0.1]).unwrap_err();
        assert!(matches!(err, NumericError::ProbabilityOutOfRange { index: 1, .. }));
    }

    #[test]
    fn test_rejects_invalid_tolerance() {
        assert!(CostModel::new(0.0).is_err());
        assert!(CostModel::new(1.0).is_err());
        assert!(CostModel::new(0.1).is_ok());
    }
}
