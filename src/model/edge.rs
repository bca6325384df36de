//! Edge (weighted correlation) in the correlation graph.

use serde::{Deserialize, Serialize};

use super::{NodeId, Stage};

/// A directed, weighted correlation between two risk factors.
///
/// `correlation_type` is deliberately an open string set — the source data
/// fixes `node_type` and `stage` but not the correlation vocabulary, and
/// closing it here would reject valid documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Degree of statistical correlation, conventionally in `0.0..=1.0`.
    pub correlation_strength: f64,
    /// Secondary weighting dimension, distinct from correlation strength.
    pub quantum_entanglement: f64,
    pub correlation_type: String,
    pub stage: Stage,
    #[serde(default)]
    pub description: String,
}

impl Edge {
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        correlation_strength: f64,
        correlation_type: impl Into<String>,
        stage: Stage,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            correlation_strength,
            quantum_entanglement: 0.0,
            correlation_type: correlation_type.into(),
            stage,
            description: String::new(),
        }
    }

    pub fn with_quantum_entanglement(mut self, entanglement: f64) -> Self {
        self.quantum_entanglement = entanglement;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}
