//! Risk-analysis request contract and its translation into an analysis scenario.

pub mod parse;
pub mod types;

pub use parse::{parse_scenario, Scenario};
pub use types::{EdgeData, GraphEdge, GraphNode, NodeData, ProbabilityValue, RiskRequest};
