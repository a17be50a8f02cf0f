//! Edge implementation for the entity graph
//!
//! Edges are directed and carry a relationship verb phrase
//! (`COMMANDS`, `WORKS_AT`, `FUNDED`). Several edges may join the same pair
//! of nodes.

use super::types::{EdgeId, NodeId, RelationKind};
use serde::{Deserialize, Serialize};

/// A directed, labeled edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Relationship verb phrase
    pub label: String,

    /// Display-only relationship classification
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationKind>,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: RelationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Relationship kind, `Standard` when unclassified
    pub fn relation(&self) -> RelationKind {
        self.kind.unwrap_or_default()
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &str) -> bool {
        self.source.as_str() == node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &str) -> bool {
        self.target.as_str() == node
    }

    /// Check if either endpoint is `node`
    pub fn touches(&self, node: &str) -> bool {
        self.starts_from(node) || self.ends_at(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("e1", "T-1001", "P-002", "COMMANDS");

        assert_eq!(edge.id, EdgeId::new("e1"));
        assert_eq!(edge.source, NodeId::new("T-1001"));
        assert_eq!(edge.target, NodeId::new("P-002"));
        assert_eq!(edge.label, "COMMANDS");
        assert_eq!(edge.relation(), RelationKind::Standard);
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new("e5", "T-1001", "L-001", "STATIONED_AT");

        assert!(edge.starts_from("T-1001"));
        assert!(edge.ends_at("L-001"));
        assert!(!edge.starts_from("L-001"));
        assert!(!edge.ends_at("T-1001"));
        assert!(edge.touches("L-001"));
        assert!(!edge.touches("P-002"));
    }

    #[test]
    fn test_edge_relation() {
        let edge = Edge::new("e6", "T-1001", "F-001", "FUNDS").with_kind(RelationKind::Financial);

        assert_eq!(edge.relation(), RelationKind::Financial);
    }

    #[test]
    fn test_wire_format() {
        let plain = serde_json::to_value(Edge::new("e1", "a", "b", "LINKED")).unwrap();
        assert!(plain.get("type").is_none());

        let typed = serde_json::to_value(Edge::new("e2", "a", "b", "FUNDED").with_kind(RelationKind::Financial)).unwrap();
        assert_eq!(typed["type"], "financial");
        assert_eq!(typed["source"], "a");
    }
}
