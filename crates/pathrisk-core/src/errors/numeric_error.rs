//! Numeric-domain contract violations.

use super::error_code::{self, PathRiskErrorCode};

/// A value outside the domain a numeric component accepts.
#[derive(Debug, thiserror::Error)]
pub enum NumericError {
    #[error("{name}[{index}] = {value} is not a probability in [0, 1]")]
    ProbabilityOutOfRange {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{name}[{index}] = {value} is not a cost in (0, 1]")]
    CostOutOfRange {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Risk tolerance {0} must lie strictly between 0 and 1")]
    InvalidTolerance(f64),

    #[error("Length mismatch: {left} has {left_len} entries, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Value function has {rows} rows and {columns} columns, expected {expected} columns")]
    MalformedValueFunction {
        rows: usize,
        columns: usize,
        expected: usize,
    },
}

impl PathRiskErrorCode for NumericError {
    fn error_code(&self) -> &'static str {
        error_code::NUMERIC_DOMAIN
    }
}

/// Reject any entry that is not a finite probability in [0, 1].
pub fn check_probabilities(name: &'static str, values: &[f64]) -> Result<(), NumericError> {
    for (index, &value) in values.iter().enumerate() {
        check_probability(name, index, value)?;
    }
    Ok(())
}

/// Reject a single value that is not a finite probability in [0, 1].
pub fn check_probability(name: &'static str, index: usize, value: f64) -> Result<(), NumericError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(NumericError::ProbabilityOutOfRange { name, index, value });
    }
    Ok(())
}
