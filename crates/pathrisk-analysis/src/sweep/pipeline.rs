//! One sweep point: probability vector → cost → solve → risk readout.

use pathrisk_core::config::ModelConfig;
use pathrisk_core::errors::NumericError;

use crate::cost::CostModel;
use crate::grid::BeliefGrid;
use crate::risk::RiskEvaluator;
use crate::solver::{DetectionModel, Solution, ValueIterationSolver};

/// Stateless solve-and-read pipeline shared by every sweep point.
#[derive(Debug, Clone, Copy)]
pub struct RiskPipeline {
    cost_model: CostModel,
    readout_cap: f64,
}

impl RiskPipeline {
    pub fn new(cost_model: CostModel, readout_cap: f64) -> Self {
        Self {
            cost_model,
            readout_cap,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self, NumericError> {
        Ok(Self::new(
            CostModel::from_config(config)?,
            config.effective_readout_cap(),
        ))
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Solve `p` under `detection`, deriving the cost vector from `p`.
    pub fn solve(&self, p: &[f64], detection: DetectionModel) -> Result<Solution, NumericError> {
        let c = self.cost_model.costs(p)?;
        ValueIterationSolver::new(detection).solve(p, &c)
    }

    /// Risk at the path's first transition, read at the (capped) first-step belief.
    pub fn risk(&self, p: &[f64], detection: DetectionModel) -> Result<f64, NumericError> {
        let first = *p.first().ok_or(NumericError::Empty("p"))?;
        let solution = self.solve(p, detection)?;
        Ok(self.read(&solution, first, detection))
    }

    /// Same as [`risk`](Self::risk) with a precomputed cost vector.
    pub fn risk_with_costs(
        &self,
        p: &[f64],
        c: &[f64],
        detection: DetectionModel,
    ) -> Result<f64, NumericError> {
        let first = *p.first().ok_or(NumericError::Empty("p"))?;
        let solution = ValueIterationSolver::new(detection).solve(p, c)?;
        Ok(self.read(&solution, first, detection))
    }

    fn read(&self, solution: &Solution, first: f64, detection: DetectionModel) -> f64 {
        let value_function = &solution.value_function;
        let column = BeliefGrid::readout_index(first.min(self.readout_cap));
        RiskEvaluator::new(detection).risk_at(value_function, value_function.rows() - 1, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection() -> DetectionModel {
        DetectionModel::new(0.7, 0.8).unwrap()
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let pipeline = RiskPipeline::from_config(&ModelConfig::default()).unwrap();
        let err = pipeline.risk(&[], detection()).unwrap_err();
        assert!(matches!(err, NumericError::Empty("p")));
    }

    #[test]
    fn test_matches_full_surface_readout() {
        let pipeline = RiskPipeline::from_config(&ModelConfig::default()).unwrap();
        let p = vec![0.95, 0.8, 0.95];
        let solution = pipeline.solve(&p, detection()).unwrap();
        let surface = RiskEvaluator::new(detection()).evaluate(&solution.value_function);
        assert_eq!(pipeline.risk(&p, detection()).unwrap(), surface.readout(p[0], 0.99));
    }

    #[test]
    fn test_reference_risks() {
        let pipeline = RiskPipeline::from_config(&ModelConfig::default()).unwrap();
        let cases: [(&[f64], f64); 3] = [
            (&[0.95, 0.8], 0.095_599_000_000_000_21),
            (&[0.95, 0.95, 0.8, 0.95], 0.311_071_633_848_999_83),
            (&[0.8, 0.95, 0.6, 0.95, 0.95], 0.651_260_983_813_399_1),
        ];
        for (p, expected) in cases {
            let risk = pipeline.risk(p, detection()).unwrap();
            assert!((risk - expected).abs() < 1e-12, "{p:?}: got {risk}, want {expected}");
        }
    }

    #[test]
    fn test_precomputed_costs_agree() {
        let pipeline = RiskPipeline::from_config(&ModelConfig::default()).unwrap();
        let p = vec![0.95, 0.6, 0.95, 0.95];
        let c = pipeline.cost_model().costs(&p).unwrap();
        assert_eq!(
            pipeline.risk(&p, detection()).unwrap(),
            pipeline.risk_with_costs(&p, &c, detection()).unwrap()
        );
    }
}
