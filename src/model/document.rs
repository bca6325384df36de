//! The validated graph document: ordered nodes and edges.

use hashbrown::HashSet;
use serde::Serialize;

use crate::{Error, Result};
use super::{Edge, Node, NodeId};

/// An immutable correlation graph document.
///
/// Construction is the single integrity checkpoint: node ids must be unique
/// and every edge endpoint must resolve to a node. A `Document` that exists
/// is valid — downstream views re-check defensively but never repair.
///
/// Node and edge order is the insertion order of the source and is preserved
/// for deterministic iteration; it carries no semantic weight. There is no
/// mutation API: a reload replaces the document wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Document {
    /// Validate and assemble a document.
    ///
    /// Fails with [`Error::Integrity`] on a duplicate node id or an edge
    /// referencing a node that does not exist. No partially valid document
    /// is ever produced.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(Error::Integrity(format!(
                    "duplicate node id {} (label {:?})",
                    node.id, node.label
                )));
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            for endpoint in [edge.source, edge.target] {
                if !seen.contains(&endpoint) {
                    return Err(Error::Integrity(format!(
                        "edge #{i} ({} → {}) references missing node {endpoint}",
                        edge.source, edge.target
                    )));
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    /// An empty document. Valid: statistics over it report `NoData` means.
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeType, Stage};

    fn node(id: u64) -> Node {
        Node::new(id, format!("factor-{id}"), NodeType::Biological, Stage::Stage1Direct)
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let result = Document::new(vec![node(1), node(1)], vec![]);
        assert!(matches!(result, Err(Error::Integrity(_))));
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let edges = vec![Edge::new(1u64, 99u64, 0.5, "Causal", Stage::Stage1Direct)];
        let result = Document::new(vec![node(1)], edges);
        assert!(matches!(result, Err(Error::Integrity(_))));
    }

    #[test]
    fn test_valid_document() {
        let edges = vec![Edge::new(1u64, 2u64, 0.5, "Causal", Stage::Stage1Direct)];
        let doc = Document::new(vec![node(1), node(2)], edges).unwrap();
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.edge_count(), 1);
        assert!(doc.contains_node(NodeId(2)));
        assert!(!doc.contains_node(NodeId(3)));
    }

    #[test]
    fn test_self_loop_is_valid() {
        let edges = vec![Edge::new(1u64, 1u64, 0.3, "Probabilistic", Stage::Stage5Quantum)];
        assert!(Document::new(vec![node(1)], edges).is_ok());
    }
}
