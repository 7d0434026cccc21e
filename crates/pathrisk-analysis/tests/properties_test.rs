//! Property tests for the numeric components.

use pathrisk_analysis::belief::{BayesFilter, BeliefDistribution, ObservationModel, TransitionModel};
use pathrisk_analysis::grid::BeliefGrid;
use pathrisk_analysis::{CostModel, DetectionModel, RiskEvaluator, ValueIterationSolver};
use pathrisk_core::constants::{GRID_POINTS, MAX_GRID_INDEX};
use proptest::prelude::*;

fn probability() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn path(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.05f64..=0.99, 1..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cost_is_in_unit_interval(p in prop::collection::vec(probability(), 1..20)) {
        let costs = CostModel::default().costs(&p).unwrap();
        prop_assert_eq!(costs.len(), p.len());
        for c in costs {
            prop_assert!(c > 0.0 && c <= 1.0, "cost {}", c);
        }
    }

    #[test]
    fn certain_safety_costs_one(len in 1usize..30) {
        let costs = CostModel::default().costs(&vec![1.0; len]).unwrap();
        prop_assert!(costs.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn clamp_index_stays_on_grid(coordinate in -1e6f64..1e6) {
        prop_assert!(BeliefGrid::clamp_index(coordinate) <= MAX_GRID_INDEX);
    }

    #[test]
    fn solver_is_deterministic(p in path(6), p11 in probability(), p22 in probability()) {
        let detection = DetectionModel::new(p11, p22).unwrap();
        let c = CostModel::default().costs(&p).unwrap();
        let first = ValueIterationSolver::new(detection).solve(&p, &c).unwrap();
        let second = ValueIterationSolver::new(detection).solve(&p, &c).unwrap();
        prop_assert_eq!(&first.value_function, &second.value_function);
        prop_assert_eq!(&first.policy, &second.policy);
        prop_assert_eq!(first.thresholds, second.thresholds);
    }

    #[test]
    fn boundary_row_is_all_ones(p in path(5), p11 in probability(), p22 in probability()) {
        let detection = DetectionModel::new(p11, p22).unwrap();
        let c = CostModel::default().costs(&p).unwrap();
        let solution = ValueIterationSolver::new(detection).solve(&p, &c).unwrap();
        prop_assert_eq!(solution.value_function.rows(), p.len() + 1);
        prop_assert!(solution.value_function.row(0).iter().all(|&v| v == 1.0));
        prop_assert!(solution.value_function.row(p.len()).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn evaluated_risk_is_finite(p in path(5), p11 in probability(), p22 in probability()) {
        let detection = DetectionModel::new(p11, p22).unwrap();
        let c = CostModel::default().costs(&p).unwrap();
        let solution = ValueIterationSolver::new(detection).solve(&p, &c).unwrap();
        let surface = RiskEvaluator::new(detection).evaluate(&solution.value_function);
        prop_assert_eq!(surface.row(0).len(), GRID_POINTS);
        prop_assert!(surface.readout(p[0], 0.99).is_finite());
    }

    #[test]
    fn belief_update_sums_to_one_or_zero(
        prior in probability(),
        stay in probability(),
        alarm_benign in probability(),
        alarm_hostile in probability(),
        alarm in any::<bool>(),
    ) {
        let transitions = TransitionModel::new()
            .with(0u8, "step", 0u8, stay)
            .with(0u8, "step", 1u8, 1.0 - stay)
            .with(1u8, "step", 1u8, 1.0);
        let observations = ObservationModel::new()
            .with("step", 0u8, true, alarm_benign)
            .with("step", 0u8, false, 1.0 - alarm_benign)
            .with("step", 1u8, true, alarm_hostile)
            .with("step", 1u8, false, 1.0 - alarm_hostile);
        let filter = BayesFilter::new(vec![0u8, 1u8], transitions, observations);
        let belief = BeliefDistribution::from_pairs(vec![(0u8, prior), (1u8, 1.0 - prior)]);

        let update = filter.update(&belief, &"step", &alarm);
        let total = update.belief.total();
        if update.is_degenerate() {
            prop_assert_eq!(total, 0.0);
        } else {
            prop_assert!((total - 1.0).abs() < 1e-9, "total {}", total);
        }
    }
}
