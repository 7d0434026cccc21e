//! Top-level PathRisk configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ModelConfig, StorageConfig, SweepConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`PATHRISK_*`)
/// 3. Project config (`pathrisk.toml` in the given root)
/// 4. User config (`~/.pathrisk/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathRiskConfig {
    pub model: ModelConfig,
    pub sweep: SweepConfig,
    pub storage: StorageConfig,
}

/// Override arguments that take precedence over every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub risk_tolerance: Option<f64>,
    pub placement_max_length: Option<usize>,
    pub parallel: Option<bool>,
    pub data_dir: Option<PathBuf>,
}

impl PathRiskConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { message, .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message,
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("pathrisk.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PathRiskConfig) -> Result<(), ConfigError> {
        let model = &config.model;
        if let Some(alpha) = model.risk_tolerance {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(invalid("model.risk_tolerance", "must be strictly between 0.0 and 1.0"));
            }
        }
        for (field, value) in [
            ("model.nominal_safe_probability", model.nominal_safe_probability),
            ("model.inserted_safe_probability", model.inserted_safe_probability),
            ("model.readout_cap", model.readout_cap),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(field, "must be between 0.0 and 1.0"));
                }
            }
        }
        if model.degraded_schedule.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(invalid(
                "model.degraded_schedule",
                "every entry must be between 0.0 and 1.0",
            ));
        }

        let sweep = &config.sweep;
        if let Some(step) = sweep.attack_step {
            if step.is_nan() || step <= 0.0 {
                return Err(invalid("sweep.attack_step", "must be greater than 0"));
            }
        }
        for (field, value) in [
            ("sweep.attack_start", sweep.attack_start),
            ("sweep.attack_end", sweep.attack_end),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(field, "must be between 0.0 and 1.0"));
                }
            }
        }
        if sweep.error_rate_samples.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(invalid(
                "sweep.error_rate_samples",
                "every entry must be between 0.0 and 1.0",
            ));
        }
        if sweep.placement_max_length == Some(0) {
            return Err(invalid("sweep.placement_max_length", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.pathrisk/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".pathrisk").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PathRiskConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PathRiskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it carries a value.
    fn merge(base: &mut PathRiskConfig, other: &PathRiskConfig) {
        // Model
        if other.model.risk_tolerance.is_some() {
            base.model.risk_tolerance = other.model.risk_tolerance;
        }
        if other.model.nominal_safe_probability.is_some() {
            base.model.nominal_safe_probability = other.model.nominal_safe_probability;
        }
        if other.model.inserted_safe_probability.is_some() {
            base.model.inserted_safe_probability = other.model.inserted_safe_probability;
        }
        if other.model.readout_cap.is_some() {
            base.model.readout_cap = other.model.readout_cap;
        }
        if !other.model.degraded_schedule.is_empty() {
            base.model.degraded_schedule = other.model.degraded_schedule.clone();
        }

        // Sweep
        if other.sweep.attack_start.is_some() {
            base.sweep.attack_start = other.sweep.attack_start;
        }
        if other.sweep.attack_step.is_some() {
            base.sweep.attack_step = other.sweep.attack_step;
        }
        if other.sweep.attack_end.is_some() {
            base.sweep.attack_end = other.sweep.attack_end;
        }
        if !other.sweep.error_rate_samples.is_empty() {
            base.sweep.error_rate_samples = other.sweep.error_rate_samples.clone();
        }
        if other.sweep.length_extension.is_some() {
            base.sweep.length_extension = other.sweep.length_extension;
        }
        if other.sweep.placement_max_length.is_some() {
            base.sweep.placement_max_length = other.sweep.placement_max_length;
        }
        if other.sweep.parallel.is_some() {
            base.sweep.parallel = other.sweep.parallel;
        }

        // Storage
        if other.storage.data_dir.is_some() {
            base.storage.data_dir = other.storage.data_dir.clone();
        }
        if other.storage.projects_dir.is_some() {
            base.storage.projects_dir = other.storage.projects_dir.clone();
        }
        if other.storage.vocabulary_file.is_some() {
            base.storage.vocabulary_file = other.storage.vocabulary_file.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PATHRISK_MODEL_RISK_TOLERANCE`, `PATHRISK_SWEEP_PARALLEL`, etc.
    fn apply_env_overrides(config: &mut PathRiskConfig) {
        if let Ok(val) = std::env::var("PATHRISK_MODEL_RISK_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.model.risk_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PATHRISK_MODEL_NOMINAL_SAFE_PROBABILITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.model.nominal_safe_probability = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PATHRISK_SWEEP_PLACEMENT_MAX_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.sweep.placement_max_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PATHRISK_SWEEP_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.sweep.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PATHRISK_STORAGE_DATA_DIR") {
            config.storage.data_dir = Some(PathBuf::from(val));
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut PathRiskConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.risk_tolerance {
            config.model.risk_tolerance = Some(v);
        }
        if let Some(v) = overrides.placement_max_length {
            config.sweep.placement_max_length = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.sweep.parallel = Some(v);
        }
        if let Some(ref v) = overrides.data_dir {
            config.storage.data_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
