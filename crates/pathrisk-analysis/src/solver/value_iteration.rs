//! Finite-horizon value iteration with linear interpolation on the belief grid.

use tracing::debug;

use pathrisk_core::constants::GRID_POINTS;
use pathrisk_core::errors::numeric_error::check_probabilities;
use pathrisk_core::errors::NumericError;

use crate::grid::{posterior, BeliefGrid};

use super::thresholds::extract_thresholds;
use super::types::{DetectionModel, PolicyTable, Solution, ValueFunction};

/// Solves the two-state, two-action decision process by backward induction.
#[derive(Debug, Clone, Copy)]
pub struct ValueIterationSolver {
    detection: DetectionModel,
}

impl ValueIterationSolver {
    pub fn new(detection: DetectionModel) -> Self {
        Self { detection }
    }

    pub fn detection(&self) -> DetectionModel {
        self.detection
    }

    /// Solve for the value function, policy, and thresholds.
    ///
    /// Row 0 of the value function is the all-ones boundary. Row `i` (1..=N) is built
    /// from row `i − 1` using `p[N − i]` and `c[N − i]`, so the path is processed from its
    /// terminal end back to its first transition.
    pub fn solve(&self, p: &[f64], c: &[f64]) -> Result<Solution, NumericError> {
        validate_inputs(p, c)?;

        let steps = p.len();
        let _span = pathrisk_core::solve_span!(steps).entered();

        let p11 = self.detection.p11;
        let p22 = self.detection.p22;
        let p21 = self.detection.p21();
        let p12 = self.detection.p12();

        let mut values = Vec::with_capacity((steps + 1) * GRID_POINTS);
        values.resize(GRID_POINTS, 1.0);
        let mut flags = Vec::with_capacity(steps * GRID_POINTS);

        for i in 1..=steps {
            let pp = p[steps - i];
            let cost = c[steps - i];

            let f1 = pp * p21 + (1.0 - pp) * p22;
            let f2 = pp * p11 + (1.0 - pp) * p12;
            let g1 = posterior(pp * p21, f1);
            let g2 = posterior(pp * p11, f2);

            let previous = &values[(i - 1) * GRID_POINTS..i * GRID_POINTS];
            let continuation =
                f1 * BeliefGrid::interpolate(previous, g1) + f2 * BeliefGrid::interpolate(previous, g2);
            let intervene = -cost + continuation;

            for j in 0..GRID_POINTS {
                let trust = BeliefGrid::solver_belief(j) * continuation;
                // Ties favor trusting.
                let trusts = trust >= intervene;
                values.push(if trusts { trust } else { intervene });
                flags.push(trusts);
            }
        }

        let value_function = ValueFunction::from_flat(values, steps + 1);
        let policy = PolicyTable::from_flat(flags, steps);
        let thresholds = extract_thresholds(&policy);

        debug!(steps, thresholds = thresholds.len(), "value iteration complete");

        Ok(Solution {
            value_function,
            policy,
            thresholds,
        })
    }
}

fn validate_inputs(p: &[f64], c: &[f64]) -> Result<(), NumericError> {
    if p.len() != c.len() {
        return Err(NumericError::LengthMismatch {
            left: "p",
            left_len: p.len(),
            right: "c",
            right_len: c.len(),
        });
    }
    check_probabilities("p", p)?;
    for (index, &value) in c.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(NumericError::CostOutOfRange {
                name: "c",
                index,
                value,
            });
        }
    }
    Ok(())
}
