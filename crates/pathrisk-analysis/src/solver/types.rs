//! Solver types: detection model, value function, policy table, thresholds.

use serde::{Deserialize, Serialize};

use pathrisk_core::constants::GRID_POINTS;
use pathrisk_core::errors::numeric_error::check_probability;
use pathrisk_core::errors::NumericError;

/// Confusion parameters of the detector.
///
/// `p11` is the true-positive (rejection) rate and `p22` the true-negative (detection)
/// rate; their complements are `p21 = 1 − p11` and `p12 = 1 − p22`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionModel {
    pub p11: f64,
    pub p22: f64,
}

impl DetectionModel {
    pub fn new(p11: f64, p22: f64) -> Result<Self, NumericError> {
        check_probability("p11", 0, p11)?;
        check_probability("p22", 0, p22)?;
        Ok(Self { p11, p22 })
    }

    /// Build from a false-negative rate `p12` and a false-positive rate `p21`.
    pub fn from_error_rates(p12: f64, p21: f64) -> Result<Self, NumericError> {
        Self::new(1.0 - p12, 1.0 - p21)
    }

    #[inline]
    pub fn p21(&self) -> f64 {
        1.0 - self.p11
    }

    #[inline]
    pub fn p12(&self) -> f64 {
        1.0 - self.p22
    }
}

/// Expected continuation values, `(steps + 1) × GRID_POINTS`, row 0 the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFunction {
    values: Vec<f64>,
    rows: usize,
}

impl ValueFunction {
    pub(crate) fn from_flat(values: Vec<f64>, rows: usize) -> Self {
        debug_assert_eq!(values.len(), rows * GRID_POINTS);
        Self { values, rows }
    }

    /// Build from explicit rows, each of which must span the whole grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, NumericError> {
        let row_count = rows.len();
        if row_count == 0 {
            return Err(NumericError::Empty("value function"));
        }
        let mut values = Vec::with_capacity(row_count * GRID_POINTS);
        for row in rows {
            if row.len() != GRID_POINTS {
                return Err(NumericError::MalformedValueFunction {
                    rows: row_count,
                    columns: row.len(),
                    expected: GRID_POINTS,
                });
            }
            values.extend(row);
        }
        Ok(Self::from_flat(values, row_count))
    }

    /// Number of rows, including the boundary row.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * GRID_POINTS..(i + 1) * GRID_POINTS]
    }

    pub fn get(&self, step: usize, column: usize) -> f64 {
        self.values[step * GRID_POINTS + column]
    }
}

/// `steps × GRID_POINTS` decisions; `true` where trusting attains the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    flags: Vec<bool>,
    rows: usize,
}

impl PolicyTable {
    pub(crate) fn from_flat(flags: Vec<bool>, rows: usize) -> Self {
        debug_assert_eq!(flags.len(), rows * GRID_POINTS);
        Self { flags, rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.flags[i * GRID_POINTS..(i + 1) * GRID_POINTS]
    }

    pub fn trusts(&self, row: usize, column: usize) -> bool {
        self.flags[row * GRID_POINTS + column]
    }
}

/// A belief at which the optimal action switches within one policy row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyThreshold {
    /// Policy row (`row i` decides solver step `i + 1`).
    pub row: usize,
    /// Grid column of the switch; 0 for an all-trust row, `GRID_POINTS` for an
    /// all-intervene row.
    pub column: usize,
    /// `column / GRID_SCALE`.
    pub belief: f64,
}

/// Output of one backward-induction solve.
#[derive(Debug, Clone)]
pub struct Solution {
    pub value_function: ValueFunction,
    pub policy: PolicyTable,
    /// Switch points ordered by decreasing policy row.
    pub thresholds: Vec<PolicyThreshold>,
}
