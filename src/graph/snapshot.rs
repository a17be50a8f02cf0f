//! Graph snapshot: the (node set, edge set) pair handed to the renderer
//!
//! Invariants, enforced by every constructor and mutator:
//! - node ids are unique, edge ids are unique
//! - every edge's source and target are present in the same snapshot
//!
//! Nodes and edges keep insertion order, lookup by id is O(1).

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or growing a snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("Edge {0} already exists")]
    EdgeAlreadyExists(EdgeId),

    #[error("Invalid edge {edge}: source node {node} does not exist")]
    InvalidEdgeSource { edge: EdgeId, node: NodeId },

    #[error("Invalid edge {edge}: target node {node} does not exist")]
    InvalidEdgeTarget { edge: EdgeId, node: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Serialized form: two plain lists
#[derive(Serialize, Deserialize)]
struct SnapshotRepr {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// A self-consistent set of nodes and edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "SnapshotRepr", try_from = "SnapshotRepr")]
pub struct GraphSnapshot {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
}

impl GraphSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from lists, rejecting duplicates and dangling edges
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut snapshot = GraphSnapshot::new();
        for node in nodes {
            snapshot.insert_node(node)?;
        }
        for edge in edges {
            snapshot.insert_edge(edge)?;
        }
        Ok(snapshot)
    }

    /// Induced subgraph: the given nodes plus every edge whose endpoints are
    /// both among them. Repeated node ids keep their first occurrence.
    pub fn induced<'a>(
        nodes: impl IntoIterator<Item = &'a Node>,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Self {
        let mut snapshot = GraphSnapshot::new();
        for node in nodes {
            if !snapshot.nodes.contains_key(&node.id) {
                snapshot.nodes.insert(node.id.clone(), node.clone());
            }
        }
        for edge in edges {
            if snapshot.contains_node(edge.source.as_str())
                && snapshot.contains_node(edge.target.as_str())
                && !snapshot.edges.contains_key(&edge.id)
            {
                snapshot.edges.insert(edge.id.clone(), edge.clone());
            }
        }
        snapshot
    }

    /// Add a node. An existing node with the same id is never overwritten.
    pub fn insert_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::NodeAlreadyExists(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Add an edge whose endpoints are already present
    pub fn insert_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(GraphError::EdgeAlreadyExists(edge.id));
        }
        if !self.contains_node(edge.source.as_str()) {
            return Err(GraphError::InvalidEdgeSource { edge: edge.id, node: edge.source });
        }
        if !self.contains_node(edge.target.as_str()) {
            return Err(GraphError::InvalidEdgeTarget { edge: edge.id, node: edge.target });
        }
        self.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = &EdgeId> {
        self.edges.keys()
    }

    /// Edges leaving `id`
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.values().filter(move |e| e.starts_from(id))
    }

    /// Edges touching `id` in either direction
    pub fn incident<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.values().filter(move |e| e.touches(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Re-check every invariant from scratch
    pub fn check_invariants(&self) -> GraphResult<()> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (id, node) in &self.nodes {
            if id != &node.id || !seen.insert(id.as_str()) {
                return Err(GraphError::NodeAlreadyExists(node.id.clone()));
            }
        }
        for (id, edge) in &self.edges {
            if id != &edge.id {
                return Err(GraphError::EdgeAlreadyExists(edge.id.clone()));
            }
            if !seen.contains(edge.source.as_str()) {
                return Err(GraphError::InvalidEdgeSource {
                    edge: edge.id.clone(),
                    node: edge.source.clone(),
                });
            }
            if !seen.contains(edge.target.as_str()) {
                return Err(GraphError::InvalidEdgeTarget {
                    edge: edge.id.clone(),
                    node: edge.target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Consume the snapshot into plain lists
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes.into_values().collect(), self.edges.into_values().collect())
    }
}

impl From<GraphSnapshot> for SnapshotRepr {
    fn from(snapshot: GraphSnapshot) -> Self {
        let (nodes, edges) = snapshot.into_parts();
        SnapshotRepr { nodes, edges }
    }
}

impl TryFrom<SnapshotRepr> for GraphSnapshot {
    type Error = GraphError;

    fn try_from(repr: SnapshotRepr) -> Result<Self, Self::Error> {
        GraphSnapshot::from_parts(repr.nodes, repr.edges)
    }
}
