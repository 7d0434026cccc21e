//! Level-synchronous BFS from the start situation.

use petgraph::graph::NodeIndex;
use tracing::debug;

use pathrisk_core::errors::GraphError;
use pathrisk_core::types::collections::{FxHashMap, FxHashSet};

use super::types::{PathProfile, TransitionGraph};

/// Walk the graph level by level from `start`.
///
/// Every node reachable in `k` hops is processed before any node at `k + 1`. A dangerous
/// node first reached at level `k` records `k` (the start itself may be level 0). Nodes
/// unreachable from `start` never appear, and nodes without successors simply end their
/// branch. The returned path length is the number of levels visited.
pub fn path_profile(
    graph: &TransitionGraph,
    start: &str,
    threats: &FxHashSet<String>,
) -> Result<PathProfile, GraphError> {
    let _span = pathrisk_core::graph_span!(graph.situation_count(), graph.transition_count()).entered();

    let start_idx = graph
        .get_node(start)
        .ok_or_else(|| GraphError::UnknownStart(start.to_string()))?;

    let mut seen: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut threat_levels: FxHashMap<String, usize> = FxHashMap::default();
    let mut frontier = vec![start_idx];
    let mut level = 0usize;
    seen.insert(start_idx);

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &node in &frontier {
            let name = &graph.graph[node];
            if threats.contains(name) {
                threat_levels.entry(name.clone()).or_insert(level);
            }
            for neighbor in graph.graph.neighbors(node) {
                if seen.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
        level += 1;
    }

    debug!(path_length = level, threats = threat_levels.len(), "path profile computed");

    Ok(PathProfile {
        path_length: level,
        threat_levels,
    })
}
