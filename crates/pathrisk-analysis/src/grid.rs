//! Discretized belief grid shared by the solver and the risk evaluator.
//!
//! The grid holds `GRID_POINTS` columns. A belief `g` maps to the fractional coordinate
//! `g · GRID_SCALE`; lookups interpolate linearly between the floor and ceiling columns,
//! both clamped to `[0, MAX_GRID_INDEX]`.

use pathrisk_core::constants::{GRID_SCALE, MAX_GRID_INDEX};

/// Namespace for grid arithmetic.
pub struct BeliefGrid;

impl BeliefGrid {
    /// Belief represented by solver column `index`: `(index + 1) / GRID_SCALE`.
    ///
    /// The backward pass visits beliefs `0.001..=0.999`, storing belief `j / 1000` in
    /// column `j - 1`.
    #[inline]
    pub fn solver_belief(index: usize) -> f64 {
        (index + 1) as f64 / GRID_SCALE
    }

    /// Belief represented by evaluator column `index`: `index / GRID_SCALE`.
    #[inline]
    pub fn evaluator_belief(index: usize) -> f64 {
        index as f64 / GRID_SCALE
    }

    /// Clamp a raw grid coordinate into a valid column index.
    #[inline]
    pub fn clamp_index(coordinate: f64) -> usize {
        if coordinate.is_nan() || coordinate <= 0.0 {
            0
        } else {
            (coordinate as usize).min(MAX_GRID_INDEX)
        }
    }

    /// Linearly interpolate `row` at `belief`.
    #[inline]
    pub fn interpolate(row: &[f64], belief: f64) -> f64 {
        let coordinate = belief * GRID_SCALE;
        let floor = Self::clamp_index(coordinate.floor());
        let ceil = Self::clamp_index(coordinate.ceil());
        row[floor] + (coordinate - floor as f64) * (row[ceil] - row[floor])
    }

    /// Column used to read a risk surface at `belief`, truncating toward zero.
    #[inline]
    pub fn readout_index(belief: f64) -> usize {
        Self::clamp_index((belief * GRID_SCALE).trunc())
    }
}

/// Bayes posterior `numerator / mass`, or 0 when the branch carries no mass.
#[inline]
pub(crate) fn posterior(numerator: f64, mass: f64) -> f64 {
    if mass > 0.0 {
        numerator / mass
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathrisk_core::constants::GRID_POINTS;

    #[test]
    fn test_solver_and_evaluator_beliefs() {
        assert_eq!(BeliefGrid::solver_belief(0), 0.001);
        assert_eq!(BeliefGrid::solver_belief(998), 0.999);
        assert_eq!(BeliefGrid::evaluator_belief(0), 0.0);
        assert_eq!(BeliefGrid::evaluator_belief(998), 0.998);
    }

    #[test]
    fn test_clamp_index_bounds() {
        assert_eq!(BeliefGrid::clamp_index(-3.0), 0);
        assert_eq!(BeliefGrid::clamp_index(f64::NAN), 0);
        assert_eq!(BeliefGrid::clamp_index(500.0), 500);
        assert_eq!(BeliefGrid::clamp_index(999.0), MAX_GRID_INDEX);
        assert_eq!(BeliefGrid::clamp_index(1000.0), MAX_GRID_INDEX);
    }

    #[test]
    fn test_interpolate_between_columns() {
        let row: Vec<f64> = (0..GRID_POINTS).map(|i| i as f64).collect();
        let value = BeliefGrid::interpolate(&row, 0.2505);
        assert!((value - 250.5).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_saturates_past_last_column() {
        let row: Vec<f64> = (0..GRID_POINTS).map(|i| i as f64).collect();
        assert_eq!(BeliefGrid::interpolate(&row, 1.0), 998.0);
        assert_eq!(BeliefGrid::interpolate(&row, 0.9995), 998.0);
    }

    #[test]
    fn test_readout_index_truncates() {
        assert_eq!(BeliefGrid::readout_index(0.95), 950);
        assert_eq!(BeliefGrid::readout_index(0.8), 800);
        assert_eq!(BeliefGrid::readout_index(1.0), MAX_GRID_INDEX);
    }

    #[test]
    fn test_posterior_zero_mass() {
        assert_eq!(posterior(0.0, 0.0), 0.0);
        assert_eq!(posterior(0.25, 0.5), 0.5);
    }
}
