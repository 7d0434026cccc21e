//! Wire types of the risk-analysis request body.

use serde::{Deserialize, Deserializer, Serialize};

/// `{ nodes, edges, type }` as posted by the graph editor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RiskRequest {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    /// Analysis mode; absent or unrecognized means base risk only.
    #[serde(rename = "type", default)]
    pub mode: Option<String>,
}

impl RiskRequest {
    pub fn from_json(body: &str) -> Result<Self, pathrisk_core::errors::RequestError> {
        serde_json::from_str(body)
            .map_err(|e| pathrisk_core::errors::RequestError::InvalidJson(e.to_string()))
    }
}

/// A situation or event node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// `"situation"` or `"event"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: NodeData,
}

impl GraphNode {
    pub fn is_situation(&self) -> bool {
        self.kind == "situation"
    }

    pub fn is_event(&self) -> bool {
        self.kind == "event"
    }

    /// Situation subtype (`initial`, `dangerous`, ...) or event subtype
    /// (`threat`, `detection`).
    pub fn node_type(&self) -> &str {
        self.data.node_type.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NodeData {
    #[serde(rename = "nodeType", default)]
    pub node_type: Option<String>,
}

/// A transition (`action`/`crash`) or an annotation edge into an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub source: String,
    #[serde(deserialize_with = "string_or_number")]
    pub target: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: EdgeData,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EdgeData {
    #[serde(default)]
    pub probability: Option<ProbabilityValue>,
    #[serde(rename = "secondaryProbability", default)]
    pub secondary_probability: Option<ProbabilityValue>,
}

/// A probability sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbabilityValue {
    Number(f64),
    Text(String),
}

impl ProbabilityValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn raw(&self) -> String {
        match self {
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Integer(n) => n.to_string(),
        Id::Float(f) => f.to_string(),
    })
}
