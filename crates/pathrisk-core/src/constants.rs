//! Belief-grid discretization shared by the solver and the risk evaluator.

/// Number of discrete belief points on the grid.
pub const GRID_POINTS: usize = 999;

/// Scale between a belief in (0, 1) and its grid coordinate.
pub const GRID_SCALE: f64 = 1000.0;

/// Largest valid grid index. Every computed index is clamped to this.
pub const MAX_GRID_INDEX: usize = GRID_POINTS - 1;

/// Default risk tolerance α for the binomial-quantile cost rule.
pub const DEFAULT_RISK_TOLERANCE: f64 = 0.05;

/// Nominal probability that a step without a known threat is safe.
pub const NOMINAL_SAFE_PROBABILITY: f64 = 0.95;

/// Safe probability of a step inserted by the node-placement sweep.
pub const INSERTED_SAFE_PROBABILITY: f64 = 0.99;

/// Upper bound on the first-step belief used to read a risk surface.
pub const READOUT_CAP: f64 = 0.99;
