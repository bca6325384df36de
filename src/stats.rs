//! Aggregate statistics over a correlation graph document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Document, NodeType, Stage};
use crate::{Error, Result};

/// A mean over a possibly-empty collection.
///
/// An empty collection has no mean; that is reported as `NoData`, never as
/// `0.0` or `NaN`. Callers must check before using the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Mean {
    NoData,
    Value(f64),
}

impl Mean {
    fn of(sum: f64, count: usize) -> Mean {
        if count == 0 {
            Mean::NoData
        } else {
            Mean::Value(sum / count as f64)
        }
    }

    /// The numeric mean, or [`Error::NoData`] naming the requested `field`.
    pub fn value(&self, field: &'static str) -> Result<f64> {
        match self {
            Mean::Value(v) => Ok(*v),
            Mean::NoData => Err(Error::NoData(field)),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Mean::NoData)
    }
}

/// Aggregate counts, means, and frequency tables for a document.
///
/// A pure, deterministic function of the document. Frequency tables are
/// ordered maps so serialized reports render in a stable order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub avg_quantum_weight: Mean,
    pub avg_correlation: Mean,
    pub avg_entanglement: Mean,
    pub node_types: BTreeMap<NodeType, usize>,
    pub stages: BTreeMap<Stage, usize>,
    pub correlation_types: BTreeMap<String, usize>,
}

impl Statistics {
    /// Compute the full summary for a document.
    pub fn summarize(document: &Document) -> Statistics {
        let mut weight_sum = 0.0;
        let mut node_types: BTreeMap<NodeType, usize> = BTreeMap::new();
        let mut stages: BTreeMap<Stage, usize> = BTreeMap::new();

        for node in document.nodes() {
            weight_sum += node.quantum_weight;
            *node_types.entry(node.node_type).or_default() += 1;
            *stages.entry(node.stage).or_default() += 1;
        }

        let mut correlation_sum = 0.0;
        let mut entanglement_sum = 0.0;
        let mut correlation_types: BTreeMap<String, usize> = BTreeMap::new();

        for edge in document.edges() {
            correlation_sum += edge.correlation_strength;
            entanglement_sum += edge.quantum_entanglement;
            *correlation_types.entry(edge.correlation_type.clone()).or_default() += 1;
        }

        let total_nodes = document.node_count();
        let total_edges = document.edge_count();

        Statistics {
            total_nodes,
            total_edges,
            avg_quantum_weight: Mean::of(weight_sum, total_nodes),
            avg_correlation: Mean::of(correlation_sum, total_edges),
            avg_entanglement: Mean::of(entanglement_sum, total_edges),
            node_types,
            stages,
            correlation_types,
        }
    }
}
