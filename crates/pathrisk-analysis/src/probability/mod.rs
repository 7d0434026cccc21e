//! Per-step probability-of-safe-transition vectors built from threat placement.

use pathrisk_core::config::ModelConfig;
use pathrisk_core::errors::numeric_error::{check_probabilities, check_probability};
use pathrisk_core::errors::NumericError;

use crate::graph::PathProfile;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Builds the vector `p` where `p[i]` is the probability that step `i` is safe.
#[derive(Debug, Clone)]
pub struct ProbabilityVectorBuilder {
    nominal: f64,
    degraded_schedule: Vec<f64>,
}

impl Default for ProbabilityVectorBuilder {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

impl ProbabilityVectorBuilder {
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            nominal: config.effective_nominal_safe_probability(),
            degraded_schedule: config.effective_degraded_schedule(),
        }
    }

    /// Replace the schedule applied between consecutive threats.
    pub fn with_degraded_schedule(mut self, schedule: Vec<f64>) -> Self {
        if !schedule.is_empty() {
            self.degraded_schedule = schedule;
        }
        self
    }

    pub fn degraded_schedule(&self) -> &[f64] {
        &self.degraded_schedule
    }

    /// Build `p` for a path of `path_length` steps.
    ///
    /// Every step defaults to the nominal probability. Each threat level inside
    /// `[0, path_length)` is set to `round(1 − threat_probability, 2)`. When
    /// `perfect_condition` is false, positions strictly between a threat and the next one
    /// (or the last step, for the final threat) take successive schedule entries, with the
    /// last entry repeating once the schedule runs out.
    pub fn build(
        &self,
        path_length: usize,
        threat_probability: f64,
        profile: &PathProfile,
        perfect_condition: bool,
    ) -> Result<Vec<f64>, NumericError> {
        check_probability("threat_probability", 0, threat_probability)?;
        check_probabilities("degraded_schedule", &self.degraded_schedule)?;

        let mut p = vec![self.nominal; path_length];
        let threat_value = round2(1.0 - threat_probability);
        let levels = profile.sorted_levels();

        for &level in &levels {
            if level < path_length {
                p[level] = threat_value;
            }
        }

        if !perfect_condition {
            for (seg, &start) in levels.iter().enumerate() {
                let end = match levels.get(seg + 1) {
                    Some(&next) => next,
                    None => path_length.saturating_sub(1),
                };
                let upper = end.min(path_length);
                for i in (start + 1)..upper {
                    let step_index = i - (start + 1);
                    p[i] = self.schedule_at(step_index);
                }
            }
        }

        Ok(p)
    }

    fn schedule_at(&self, step_index: usize) -> f64 {
        match self.degraded_schedule.get(step_index) {
            Some(&v) => v,
            None => self.degraded_schedule.last().copied().unwrap_or(self.nominal),
        }
    }
}
