//! Backward-induction value iteration over the discretized belief grid.
//!
//! Two hidden states, two actions ("intervene" pays the step cost and keeps the full
//! continuation value, "trust" keeps the continuation scaled by the current belief).
//! Steps are solved strictly in order; step `i` depends only on step `i − 1`.

pub mod thresholds;
pub mod types;
pub mod value_iteration;

pub use thresholds::extract_thresholds;
pub use types::{DetectionModel, PolicyTable, PolicyThreshold, Solution, ValueFunction};
pub use value_iteration::ValueIterationSolver;
