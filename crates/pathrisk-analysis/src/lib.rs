//! PathRisk analysis engine.
//!
//! Data flows one way: transition graph → (path length, threat levels) → probability
//! vector → cost vector → value function and policy → risk surface → sweep results.

pub mod belief;
pub mod cost;
pub mod graph;
pub mod grid;
pub mod probability;
pub mod request;
pub mod risk;
pub mod solver;
pub mod sweep;

pub use cost::CostModel;
pub use graph::{PathProfile, TransitionGraph};
pub use probability::ProbabilityVectorBuilder;
pub use risk::{RiskEvaluator, RiskSurface};
pub use solver::{DetectionModel, Solution, ValueIterationSolver};
pub use sweep::{RiskAnalysisService, RiskReport};
