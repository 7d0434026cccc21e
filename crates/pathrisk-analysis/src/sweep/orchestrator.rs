//! The five analysis modes, each a batch of independent pipeline solves.
//!
//! Sweep points share no mutable state, so a batch is dispatched through `rayon` when
//! `sweep.parallel` is set and sequentially otherwise. Both paths return results in
//! sample order.

use rayon::prelude::*;
use tracing::debug;

use pathrisk_core::config::{PathRiskConfig, SweepConfig};
use pathrisk_core::errors::{AnalysisError, NumericError};

use crate::probability::{round2, ProbabilityVectorBuilder};
use crate::request::Scenario;
use crate::solver::DetectionModel;

use super::pipeline::RiskPipeline;
use super::report::oxford_join;
use super::types::{
    AnalysisMode, AttackPoint, ErrorRateMatrix, LengthPoint, PlacementSweep, PlacementTrajectory,
    RiskReport,
};

/// Composes the probability builder and the solve pipeline into sensitivity sweeps.
#[derive(Debug, Clone)]
pub struct SweepOrchestrator {
    builder: ProbabilityVectorBuilder,
    pipeline: RiskPipeline,
    sweep: SweepConfig,
    inserted_safe_probability: f64,
}

impl SweepOrchestrator {
    pub fn from_config(config: &PathRiskConfig) -> Result<Self, NumericError> {
        Ok(Self {
            builder: ProbabilityVectorBuilder::from_config(&config.model),
            pipeline: RiskPipeline::from_config(&config.model)?,
            sweep: config.sweep.clone(),
            inserted_safe_probability: config.model.effective_inserted_safe_probability(),
        })
    }

    pub fn parallel(&self) -> bool {
        self.sweep.effective_parallel()
    }

    /// Base risk plus the mode-specific fields.
    pub fn run(&self, scenario: &Scenario, mode: AnalysisMode) -> Result<RiskReport, AnalysisError> {
        let report = RiskReport::base(
            self.base_risk(scenario)?,
            scenario.path_length(),
            oxford_join(&scenario.threat_labels),
        );

        let report = match mode {
            AnalysisMode::Base => report,
            AnalysisMode::RiskVsAttack => report.with_attack_curve(self.risk_vs_attack(scenario)?),
            AnalysisMode::RiskVsFpFn => report.with_error_rate_matrix(self.risk_vs_error_rates(scenario)?),
            AnalysisMode::RiskVsLength => report.with_length_curve(self.risk_vs_length(scenario)?),
            AnalysisMode::VisualizeNodeNearThreat => report.with_placement(self.node_placement(scenario)?),
        };
        Ok(report)
    }

    /// Single solve at the scenario's own probabilities (perfect condition).
    pub fn base_risk(&self, scenario: &Scenario) -> Result<f64, AnalysisError> {
        let p = self.builder.build(
            scenario.path_length(),
            scenario.threat_probability,
            &scenario.profile,
            true,
        )?;
        Ok(self.pipeline.risk(&p, scenario.detection_model()?)?)
    }

    /// One solve per sampled attack probability.
    pub fn risk_vs_attack(&self, scenario: &Scenario) -> Result<Vec<AttackPoint>, AnalysisError> {
        let samples = self.sweep.attack_samples();
        let _span = pathrisk_core::sweep_span!(AnalysisMode::RiskVsAttack, samples.len()).entered();
        let detection = scenario.detection_model()?;

        let points = self.dispatch(&samples, |&attack| -> Result<AttackPoint, NumericError> {
            let p = self.builder.build(scenario.path_length(), attack, &scenario.profile, true)?;
            Ok(AttackPoint {
                attack_probability: round2(attack),
                risk: self.pipeline.risk(&p, detection)?,
            })
        })?;
        debug!(points = points.len(), "attack sweep complete");
        Ok(points)
    }

    /// One solve per (false-negative, false-positive) pair on the degraded vector.
    pub fn risk_vs_error_rates(&self, scenario: &Scenario) -> Result<ErrorRateMatrix, AnalysisError> {
        let rates = self.sweep.effective_error_rate_samples();
        let _span =
            pathrisk_core::sweep_span!(AnalysisMode::RiskVsFpFn, rates.len() * rates.len()).entered();

        let p = self.builder.build(
            scenario.path_length(),
            scenario.threat_probability,
            &scenario.profile,
            false,
        )?;
        let c = self.pipeline.cost_model().costs(&p)?;

        let pairs: Vec<(f64, f64)> = rates
            .iter()
            .flat_map(|&p12| rates.iter().map(move |&p21| (p12, p21)))
            .collect();
        let flat = self.dispatch(&pairs, |&(p12, p21)| -> Result<f64, NumericError> {
            let detection = DetectionModel::from_error_rates(p12, p21)?;
            self.pipeline.risk_with_costs(&p, &c, detection)
        })?;

        let risk = flat.chunks(rates.len()).map(<[f64]>::to_vec).collect();
        Ok(ErrorRateMatrix {
            p12_values: rates.clone(),
            p21_values: rates,
            risk,
        })
    }

    /// One solve per path length from the parsed length through `length_extension` more.
    pub fn risk_vs_length(&self, scenario: &Scenario) -> Result<Vec<LengthPoint>, AnalysisError> {
        let start = scenario.path_length();
        let lengths: Vec<usize> = (start..=start + self.sweep.effective_length_extension()).collect();
        let _span = pathrisk_core::sweep_span!(AnalysisMode::RiskVsLength, lengths.len()).entered();
        let detection = scenario.detection_model()?;

        let points = self.dispatch(&lengths, |&length| -> Result<LengthPoint, NumericError> {
            let p = self.builder.build(
                length,
                scenario.threat_probability,
                &scenario.profile,
                false,
            )?;
            Ok(LengthPoint {
                length,
                risk: self.pipeline.risk(&p, detection)?,
            })
        })?;
        Ok(points)
    }

    /// Grow the degraded path one safe step at a time up to `placement_max_length`,
    /// once inserting before the first unsafe step and once appending at the end.
    pub fn node_placement(&self, scenario: &Scenario) -> Result<PlacementSweep, AnalysisError> {
        let max_length = self.sweep.effective_placement_max_length();
        let detection = scenario.detection_model()?;
        let p = self.builder.build(
            scenario.path_length(),
            scenario.threat_probability,
            &scenario.profile,
            false,
        )?;

        let before = self.placement_vectors(&p, max_length, true);
        let end = self.placement_vectors(&p, max_length, false);
        let _span = pathrisk_core::sweep_span!(
            AnalysisMode::VisualizeNodeNearThreat,
            before.len() + end.len()
        )
        .entered();

        let (insert_before, insert_end) = if self.parallel() {
            rayon::join(
                || self.trajectory(&before, detection),
                || self.trajectory(&end, detection),
            )
        } else {
            (self.trajectory(&before, detection), self.trajectory(&end, detection))
        };

        Ok(PlacementSweep {
            insert_before: insert_before?,
            insert_end: insert_end?,
        })
    }

    /// Successive vectors of the placement sweep, one per recorded length.
    fn placement_vectors(&self, initial: &[f64], max_length: usize, before_unsafe: bool) -> Vec<Vec<f64>> {
        let safe = self.inserted_safe_probability;
        let mut current = initial.to_vec();
        let mut vectors = Vec::new();
        for _ in initial.len()..=max_length {
            vectors.push(current.clone());
            let position = if before_unsafe {
                current.iter().position(|&v| v < safe)
            } else {
                None
            };
            match position {
                Some(i) => current.insert(i, safe),
                None => current.push(safe),
            }
        }
        vectors
    }

    fn trajectory(
        &self,
        vectors: &[Vec<f64>],
        detection: DetectionModel,
    ) -> Result<PlacementTrajectory, NumericError> {
        let risks = self.dispatch(vectors, |p| self.pipeline.risk(p, detection))?;
        let mut trajectory = PlacementTrajectory::default();
        for (p, risk) in vectors.iter().zip(risks) {
            trajectory.push(p.len(), risk);
        }
        Ok(trajectory)
    }

    /// Map `f` over `items`, in parallel when enabled, preserving order.
    fn dispatch<T, R, E, F>(&self, items: &[T], f: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(&T) -> Result<R, E> + Sync + Send,
    {
        if self.parallel() {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}
