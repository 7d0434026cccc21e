//! One-step discrete Bayes filter over an explicit finite state set.
//!
//! Independent of the grid solver. For every next state `s′`:
//!
//! ```text
//! b′(s′) ∝ O(o | a, s′) · Σ_s T(s′ | s, a) · b(s)
//! ```
//!
//! Missing model entries read as probability 0. When the normalizer η is 0 the masses are
//! returned unnormalized (all zeros) rather than raising an error.

use std::hash::Hash;

use serde::Serialize;

use pathrisk_core::types::collections::FxHashMap;

/// `T(s′ | s, a)`, keyed by state then action.
#[derive(Debug, Clone)]
pub struct TransitionModel<S, A> {
    table: FxHashMap<S, FxHashMap<A, FxHashMap<S, f64>>>,
}

impl<S: Eq + Hash + Clone, A: Eq + Hash + Clone> Default for TransitionModel<S, A> {
    fn default() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash + Clone, A: Eq + Hash + Clone> TransitionModel<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, from: S, action: A, to: S, probability: f64) {
        self.table
            .entry(from)
            .or_default()
            .entry(action)
            .or_default()
            .insert(to, probability);
    }

    pub fn with(mut self, from: S, action: A, to: S, probability: f64) -> Self {
        self.set(from, action, to, probability);
        self
    }

    pub fn probability(&self, from: &S, action: &A, to: &S) -> f64 {
        self.table
            .get(from)
            .and_then(|by_action| by_action.get(action))
            .and_then(|next| next.get(to))
            .copied()
            .unwrap_or(0.0)
    }
}

/// `O(o | a, s′)`, keyed by action then next state.
#[derive(Debug, Clone)]
pub struct ObservationModel<A, S, O> {
    table: FxHashMap<A, FxHashMap<S, FxHashMap<O, f64>>>,
}

impl<A: Eq + Hash + Clone, S: Eq + Hash + Clone, O: Eq + Hash + Clone> Default
    for ObservationModel<A, S, O>
{
    fn default() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }
}

impl<A: Eq + Hash + Clone, S: Eq + Hash + Clone, O: Eq + Hash + Clone> ObservationModel<A, S, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: A, state: S, observation: O, probability: f64) {
        self.table
            .entry(action)
            .or_default()
            .entry(state)
            .or_default()
            .insert(observation, probability);
    }

    pub fn with(mut self, action: A, state: S, observation: O, probability: f64) -> Self {
        self.set(action, state, observation, probability);
        self
    }

    pub fn probability(&self, action: &A, state: &S, observation: &O) -> f64 {
        self.table
            .get(action)
            .and_then(|by_state| by_state.get(state))
            .and_then(|dist| dist.get(observation))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Probability mass per state, in the order of the filter's state set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeliefDistribution<S> {
    entries: Vec<(S, f64)>,
}

impl<S: Eq + Clone> BeliefDistribution<S> {
    pub fn from_pairs(entries: Vec<(S, f64)>) -> Self {
        Self { entries }
    }

    /// Mass on `state`, 0 when absent.
    pub fn probability(&self, state: &S) -> f64 {
        self.entries
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(S, f64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of one filter step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeliefUpdate<S> {
    pub belief: BeliefDistribution<S>,
    /// Total evidence mass η before normalization.
    pub normalizer: f64,
}

impl<S> BeliefUpdate<S> {
    /// The observation had zero probability under every next state.
    pub fn is_degenerate(&self) -> bool {
        self.normalizer <= 0.0
    }
}

/// Discrete Bayes filter bound to a state set and its models.
#[derive(Debug, Clone)]
pub struct BayesFilter<S, A, O> {
    states: Vec<S>,
    transitions: TransitionModel<S, A>,
    observations: ObservationModel<A, S, O>,
}

impl<S, A, O> BayesFilter<S, A, O>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    O: Eq + Hash + Clone,
{
    pub fn new(
        states: Vec<S>,
        transitions: TransitionModel<S, A>,
        observations: ObservationModel<A, S, O>,
    ) -> Self {
        Self {
            states,
            transitions,
            observations,
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Advance `prior` by one `action` and condition on `observation`.
    pub fn update(
        &self,
        prior: &BeliefDistribution<S>,
        action: &A,
        observation: &O,
    ) -> BeliefUpdate<S> {
        let mut entries = Vec::with_capacity(self.states.len());
        let mut normalizer = 0.0;

        for next in &self.states {
            let predicted: f64 = self
                .states
                .iter()
                .map(|s| self.transitions.probability(s, action, next) * prior.probability(s))
                .sum();
            let mass = self.observations.probability(action, next, observation) * predicted;
            normalizer += mass;
            entries.push((next.clone(), mass));
        }

        if normalizer > 0.0 {
            for (_, mass) in &mut entries {
                *mass /= normalizer;
            }
        }

        BeliefUpdate {
            belief: BeliefDistribution::from_pairs(entries),
            normalizer,
        }
    }
}
