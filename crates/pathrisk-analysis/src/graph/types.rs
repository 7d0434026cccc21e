//! Transition graph types: petgraph `DiGraph` keyed by situation name.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use pathrisk_core::types::collections::FxHashMap;

/// How one situation leads to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Action,
    Crash,
}

impl TransitionKind {
    /// Parse an edge type; only `action` and `crash` edges form transitions.
    pub fn from_edge_type(edge_type: &str) -> Option<Self> {
        match edge_type {
            "action" => Some(Self::Action),
            "crash" => Some(Self::Crash),
            _ => None,
        }
    }
}

/// Directed graph of situations. Read-only once built.
///
/// Parallel transitions between the same pair collapse into one edge and self-loops are
/// dropped, so the graph behaves as an adjacency mapping name → set of names.
#[derive(Debug, Default)]
pub struct TransitionGraph {
    pub graph: DiGraph<String, TransitionKind>,
    node_index: FxHashMap<String, NodeIndex>,
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a situation, returning its existing index if already present.
    pub fn add_situation(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Add a transition. Self-loops are ignored; returns whether an edge now exists.
    pub fn add_transition(&mut self, source: &str, target: &str, kind: TransitionKind) -> bool {
        if source == target {
            return false;
        }
        let from = self.add_situation(source);
        let to = self.add_situation(target);
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, kind);
        }
        true
    }

    /// Look up a situation by name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    pub fn situation_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn transition_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Names reachable in one transition from `name`.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        match self.get_node(name) {
            Some(idx) => self
                .graph
                .neighbors(idx)
                .map(|n| self.graph[n].as_str())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Result of a breadth-first walk from the start situation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathProfile {
    /// Number of BFS levels traversed; the nominal path length.
    pub path_length: usize,
    /// Dangerous situation name → BFS level at which it was first reached.
    pub threat_levels: FxHashMap<String, usize>,
}

impl PathProfile {
    /// Threat levels in ascending order, duplicates kept.
    pub fn sorted_levels(&self) -> Vec<usize> {
        let mut levels: Vec<usize> = self.threat_levels.values().copied().collect();
        levels.sort_unstable();
        levels
    }
}
