//! Configuration system for PathRisk.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod model_config;
pub mod pathrisk_config;
pub mod storage_config;
pub mod sweep_config;

pub use model_config::ModelConfig;
pub use pathrisk_config::{ConfigOverrides, PathRiskConfig};
pub use storage_config::StorageConfig;
pub use sweep_config::SweepConfig;
