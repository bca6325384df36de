//! Adjacency-indexed directed view of a correlation graph document.
//!
//! The index is a pure, read-only projection: it copies the document's nodes
//! and edges into id-keyed maps plus a forward-adjacency table, enabling
//! O(1) attribute lookup and outgoing-edge traversal. Building it twice from
//! the same document yields structurally identical results, and iteration
//! always follows the document's insertion order.

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::model::{Document, Edge, Node, NodeId, Stage};
use crate::{Error, Result};

/// Edge indices per node; most risk factors have only a handful of outgoing
/// correlations, so the list stays inline.
type AdjacencyList = SmallVec<[u32; 4]>;

/// Directed-graph index keyed by node id.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    nodes: HashMap<NodeId, Node>,
    /// Node ids in document insertion order, for deterministic iteration.
    order: Vec<NodeId>,
    /// Edges in document insertion order.
    edges: Vec<Edge>,
    /// node id → indices into `edges` of its outgoing edges.
    adjacency: HashMap<NodeId, AdjacencyList>,
}

impl GraphIndex {
    /// Build the index from a document.
    ///
    /// The document was validated at load time; the build re-validates
    /// defensively and fails with [`Error::Integrity`] rather than indexing
    /// an inconsistent graph.
    pub fn build(document: &Document) -> Result<Self> {
        let mut nodes = HashMap::with_capacity(document.node_count());
        let mut order = Vec::with_capacity(document.node_count());

        for node in document.nodes() {
            if nodes.insert(node.id, node.clone()).is_some() {
                return Err(Error::Integrity(format!(
                    "duplicate node id {} while building index",
                    node.id
                )));
            }
            order.push(node.id);
        }

        let mut adjacency: HashMap<NodeId, AdjacencyList> = HashMap::with_capacity(nodes.len());
        let mut edges = Vec::with_capacity(document.edge_count());

        for edge in document.edges() {
            for endpoint in [edge.source, edge.target] {
                if !nodes.contains_key(&endpoint) {
                    return Err(Error::Integrity(format!(
                        "edge {} → {} references missing node {endpoint}",
                        edge.source, edge.target
                    )));
                }
            }
            let idx = edges.len() as u32;
            edges.push(edge.clone());
            adjacency.entry(edge.source).or_default().push(idx);
        }

        debug!(nodes = order.len(), edges = edges.len(), "built graph index");
        Ok(Self { nodes, order, edges, adjacency })
    }

    /// Attribute record for a node id.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(Error::Lookup(id))
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn edges_from(&self, id: NodeId) -> Result<impl Iterator<Item = &Edge>> {
        if !self.nodes.contains_key(&id) {
            return Err(Error::Lookup(id));
        }
        static EMPTY: &[u32] = &[];
        let indices = self.adjacency.get(&id).map_or(EMPTY, |a| a.as_slice());
        Ok(indices.iter().map(|&i| &self.edges[i as usize]))
    }

    /// All nodes in document insertion order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().map(|id| &self.nodes[id])
    }

    /// All edges with their endpoints, in document insertion order.
    pub fn all_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &Edge)> {
        self.edges.iter().map(|e| (e.source, e.target, e))
    }

    /// Induced subgraph of the nodes introduced at `stage`: matching nodes
    /// survive, and an edge survives only if both its endpoints do.
    pub fn subgraph_by_stage(&self, stage: Stage) -> GraphIndex {
        let mut nodes = HashMap::new();
        let mut order = Vec::new();
        for id in &self.order {
            let node = &self.nodes[id];
            if node.stage == stage {
                nodes.insert(*id, node.clone());
                order.push(*id);
            }
        }

        let mut adjacency: HashMap<NodeId, AdjacencyList> = HashMap::new();
        let mut edges = Vec::new();
        for edge in &self.edges {
            if nodes.contains_key(&edge.source) && nodes.contains_key(&edge.target) {
                let idx = edges.len() as u32;
                edges.push(edge.clone());
                adjacency.entry(edge.source).or_default().push(idx);
            }
        }

        GraphIndex { nodes, order, edges, adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }
}
