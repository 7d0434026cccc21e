//! Forward risk evaluation of a solved value function.
//!
//! For each row of the value function and each evaluator belief `x = j / GRID_SCALE`, the
//! posteriors are recomputed from `x` itself rather than from the path probabilities used
//! while solving:
//!
//! ```text
//! V(x) = (x·p21 + (1−x)·p22) · a[i](g1) + (x·p11 + (1−x)·p12) · a[i](g2)
//! risk = 1 − V(x)
//! ```

use serde::Serialize;
use tracing::debug;

use pathrisk_core::constants::GRID_POINTS;

use crate::grid::{posterior, BeliefGrid};
use crate::solver::{DetectionModel, ValueFunction};

/// Risk `1 − V(x)` over every (step, belief) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSurface {
    values: Vec<f64>,
    rows: usize,
}

impl RiskSurface {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * GRID_POINTS..(i + 1) * GRID_POINTS]
    }

    pub fn get(&self, step: usize, column: usize) -> f64 {
        self.values[step * GRID_POINTS + column]
    }

    /// Risk on the last step row at the column nearest `first_step_probability`,
    /// capped at `cap` before indexing.
    pub fn readout(&self, first_step_probability: f64, cap: f64) -> f64 {
        let column = BeliefGrid::readout_index(first_step_probability.min(cap));
        self.get(self.rows - 1, column)
    }
}

/// Evaluates risk surfaces under a fixed detection model.
#[derive(Debug, Clone, Copy)]
pub struct RiskEvaluator {
    detection: DetectionModel,
}

impl RiskEvaluator {
    pub fn new(detection: DetectionModel) -> Self {
        Self { detection }
    }

    /// Full risk surface for `value_function`.
    pub fn evaluate(&self, value_function: &ValueFunction) -> RiskSurface {
        let rows = value_function.rows();
        let _span = pathrisk_core::evaluate_span!(rows).entered();

        let mut values = Vec::with_capacity(rows * GRID_POINTS);
        for i in 0..rows {
            let row = value_function.row(i);
            values.extend((0..GRID_POINTS).map(|j| 1.0 - self.value_at(row, j)));
        }

        debug!(rows, "risk surface evaluated");
        RiskSurface { values, rows }
    }

    /// Risk at a single cell, without materializing the surface.
    pub fn risk_at(&self, value_function: &ValueFunction, step: usize, column: usize) -> f64 {
        1.0 - self.value_at(value_function.row(step), column)
    }

    fn value_at(&self, row: &[f64], column: usize) -> f64 {
        let p11 = self.detection.p11;
        let p22 = self.detection.p22;
        let p21 = self.detection.p21();
        let p12 = self.detection.p12();

        let x = BeliefGrid::evaluator_belief(column);
        let m1 = x * p21 + (1.0 - x) * p22;
        let m2 = x * p11 + (1.0 - x) * p12;
        let g1 = posterior(x * p21, m1);
        let g2 = posterior(x * p11, m2);

        m1 * BeliefGrid::interpolate(row, g1) + m2 * BeliefGrid::interpolate(row, g2)
    }
}
