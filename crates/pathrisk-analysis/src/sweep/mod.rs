//! Sensitivity sweeps over the solve pipeline and the request handler built on them.
//!
//! Every sweep point re-runs the whole pipeline from its own probability vector; no solver
//! state is shared between points.

pub mod orchestrator;
pub mod pipeline;
pub mod report;
pub mod service;
pub mod types;

pub use orchestrator::SweepOrchestrator;
pub use pipeline::RiskPipeline;
pub use report::oxford_join;
pub use service::RiskAnalysisService;
pub use types::{
    AnalysisMode, AttackPoint, ErrorRateMatrix, LengthPoint, PlacementSweep, PlacementTrajectory,
    RiskReport,
};
