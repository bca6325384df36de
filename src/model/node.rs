//! Node (risk factor) in the correlation graph.

use serde::{Deserialize, Serialize};

use super::Stage;

/// Stable numeric node identifier, unique within a graph. Edge endpoints
/// reference nodes by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Presentation category of a risk factor. Closed enumeration — an
/// unrecognized value in input is a schema error, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Central,
    Biological,
    Comorbidity,
    Coinfection,
    Socioeconomic,
    Environmental,
    Immunological,
    Genomic,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Central => "Central",
            NodeType::Biological => "Biological",
            NodeType::Comorbidity => "Comorbidity",
            NodeType::Coinfection => "Coinfection",
            NodeType::Socioeconomic => "Socioeconomic",
            NodeType::Environmental => "Environmental",
            NodeType::Immunological => "Immunological",
            NodeType::Genomic => "Genomic",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk factor in the correlation network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Serialized as `numeric_id` per the document schema.
    #[serde(rename = "numeric_id")]
    pub id: NodeId,
    pub label: String,
    pub node_type: NodeType,
    /// Scalar importance score, conventionally in `0.0..=1.0`.
    pub quantum_weight: f64,
    pub stage: Stage,
    #[serde(default)]
    pub description: String,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        node_type: NodeType,
        stage: Stage,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
            quantum_weight: 0.5,
            stage,
            description: String::new(),
        }
    }

    pub fn with_quantum_weight(mut self, weight: f64) -> Self {
        self.quantum_weight = weight;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}
