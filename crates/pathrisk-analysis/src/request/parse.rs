//! Request → scenario: situation names, transition graph, event probabilities, BFS profile.
//!
//! All structural preconditions are checked here so the numeric stages never see a
//! missing start node, an empty probability set, or a dangling edge.

use tracing::debug;

use pathrisk_core::errors::numeric_error::check_probability;
use pathrisk_core::errors::{AnalysisError, GraphError, RequestError};
use pathrisk_core::types::collections::{fx_map_with_capacity, FxHashMap, FxHashSet};

use crate::graph::{path_profile, PathProfile, TransitionGraph, TransitionKind};
use crate::solver::DetectionModel;

use super::types::{GraphEdge, GraphNode, ProbabilityValue, RiskRequest};

/// Everything the sweeps need from one request.
#[derive(Debug)]
pub struct Scenario {
    pub graph: TransitionGraph,
    /// Name (`"<label> (<id>)"`) of the single initial situation.
    pub start: String,
    /// Labels of dangerous situations, in request order.
    pub threat_labels: Vec<String>,
    /// Mean attack probability θ over threat events.
    pub threat_probability: f64,
    /// Mean detection rate (p22) over detection events.
    pub detection_probability: f64,
    /// Mean rejection rate (p11) over detection events.
    pub rejection_probability: f64,
    pub profile: PathProfile,
}

impl Scenario {
    pub fn path_length(&self) -> usize {
        self.profile.path_length
    }

    pub fn detection_model(&self) -> Result<DetectionModel, AnalysisError> {
        Ok(DetectionModel::new(
            self.rejection_probability,
            self.detection_probability,
        )?)
    }
}

/// Display name of a situation, unique per node id.
pub fn situation_name(node: &GraphNode) -> String {
    format!("{} ({})", node.label, node.id)
}

/// Decode and validate a request into a [`Scenario`].
pub fn parse_scenario(request: &RiskRequest) -> Result<Scenario, AnalysisError> {
    let situations: Vec<&GraphNode> = request.nodes.iter().filter(|n| n.is_situation()).collect();
    let mut names: FxHashMap<&str, String> = fx_map_with_capacity(situations.len());
    for node in &situations {
        names.insert(node.id.as_str(), situation_name(node));
    }

    let threat_probability = mean_threat_probability(request)?;
    let (detection_probability, rejection_probability) = mean_detection_rates(request)?;

    let mut graph = TransitionGraph::new();
    for name in names.values() {
        graph.add_situation(name);
    }
    for edge in &request.edges {
        let Some(kind) = edge.kind.as_deref().and_then(TransitionKind::from_edge_type) else {
            continue;
        };
        let source = names.get(edge.source.as_str()).ok_or_else(|| GraphError::UnknownSituation {
            edge_id: edge.id.clone(),
            endpoint: edge.source.clone(),
        })?;
        let target = names.get(edge.target.as_str()).ok_or_else(|| GraphError::UnknownSituation {
            edge_id: edge.id.clone(),
            endpoint: edge.target.clone(),
        })?;
        graph.add_transition(source, target, kind);
    }

    let initial: Vec<&GraphNode> = situations
        .iter()
        .copied()
        .filter(|n| n.node_type() == "initial")
        .collect();
    let start = match initial.as_slice() {
        [] => return Err(GraphError::MissingInitialSituation.into()),
        [only] => situation_name(only),
        many => {
            return Err(GraphError::MultipleInitialSituations {
                count: many.len(),
                labels: many.iter().map(|n| n.label.clone()).collect(),
            }
            .into())
        }
    };

    let dangerous: Vec<&GraphNode> = situations
        .iter()
        .copied()
        .filter(|n| n.node_type() == "dangerous")
        .collect();
    let threat_names: FxHashSet<String> = dangerous.iter().map(|n| situation_name(n)).collect();
    let threat_labels = dangerous.iter().map(|n| n.label.clone()).collect();

    let profile = path_profile(&graph, &start, &threat_names)?;

    debug!(
        situations = graph.situation_count(),
        transitions = graph.transition_count(),
        path_length = profile.path_length,
        threat_probability,
        "scenario parsed"
    );

    Ok(Scenario {
        graph,
        start,
        threat_labels,
        threat_probability,
        detection_probability,
        rejection_probability,
        profile,
    })
}

/// Edges pointing at `node`.
fn incoming<'a>(request: &'a RiskRequest, node: &'a GraphNode) -> impl Iterator<Item = &'a GraphEdge> {
    request.edges.iter().filter(move |e| e.target == node.id)
}

fn events<'a>(request: &'a RiskRequest, event_type: &'a str) -> impl Iterator<Item = &'a GraphNode> {
    request
        .nodes
        .iter()
        .filter(move |n| n.is_event() && n.node_type() == event_type)
}

fn required_value(
    value: Option<&ProbabilityValue>,
    edge: &GraphEdge,
    event: &GraphNode,
    field: &'static str,
) -> Result<f64, RequestError> {
    let value = match value {
        Some(v) => v,
        None if field == "secondaryProbability" => {
            return Err(RequestError::MissingSecondaryProbability {
                edge_id: edge.id.clone(),
                event: event.label.clone(),
            })
        }
        None => {
            return Err(RequestError::MissingProbability {
                edge_id: edge.id.clone(),
                event: event.label.clone(),
            })
        }
    };
    value.as_f64().ok_or_else(|| RequestError::NotANumber {
        edge_id: edge.id.clone(),
        field,
        value: value.raw(),
    })
}

/// A required edge probability, range-checked before it is averaged.
fn event_probability(
    value: Option<&ProbabilityValue>,
    edge: &GraphEdge,
    event: &GraphNode,
    field: &'static str,
    index: usize,
) -> Result<f64, AnalysisError> {
    let value = required_value(value, edge, event, field)?;
    check_probability(field, index, value)?;
    Ok(value)
}

/// Mean threat probability, one value per distinct threat label (later edges win).
fn mean_threat_probability(request: &RiskRequest) -> Result<f64, AnalysisError> {
    let mut by_label: FxHashMap<&str, f64> = FxHashMap::default();
    for event in events(request, "threat") {
        for (index, edge) in incoming(request, event).enumerate() {
            let value =
                event_probability(edge.data.probability.as_ref(), edge, event, "probability", index)?;
            by_label.insert(event.label.as_str(), value);
        }
    }
    if by_label.is_empty() {
        return Err(RequestError::NoEvents("threat").into());
    }
    Ok(by_label.values().sum::<f64>() / by_label.len() as f64)
}

/// Mean `(detection, rejection)` rates, one pair per distinct detection label.
fn mean_detection_rates(request: &RiskRequest) -> Result<(f64, f64), AnalysisError> {
    let mut by_label: FxHashMap<&str, (f64, f64)> = FxHashMap::default();
    for event in events(request, "detection") {
        for (index, edge) in incoming(request, event).enumerate() {
            let detection =
                event_probability(edge.data.probability.as_ref(), edge, event, "probability", index)?;
            let rejection = event_probability(
                edge.data.secondary_probability.as_ref(),
                edge,
                event,
                "secondaryProbability",
                index,
            )?;
            by_label.insert(event.label.as_str(), (detection, rejection));
        }
    }
    if by_label.is_empty() {
        return Err(RequestError::NoEvents("detection").into());
    }
    let count = by_label.len() as f64;
    let detection = by_label.values().map(|(d, _)| d).sum::<f64>() / count;
    let rejection = by_label.values().map(|(_, r)| r).sum::<f64>() / count;
    Ok((detection, rejection))
}
