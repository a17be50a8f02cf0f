//! Node implementation for the entity graph
//!
//! A node is a typed entity (person, organization, location, financial
//! instrument, communication event or weapon) with display attributes and
//! an optional dossier.

use super::document::Document;
use super::types::{EntityKind, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered attribute name -> attribute value, for display
pub type Details = IndexMap<String, String>;

/// A node in the entity graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Display name
    pub label: String,

    /// Entity category
    #[serde(rename = "type")]
    pub kind: EntityKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Severity score 0..=100, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub details: Details,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dossier: Vec<Document>,
}

impl Node {
    /// Create a bare node with no role, threat, description, details or dossier
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, kind: EntityKind) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            kind,
            role: None,
            threat: None,
            description: None,
            details: Details::new(),
            dossier: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Scores above 100 are clamped
    pub fn with_threat(mut self, threat: u8) -> Self {
        self.threat = Some(threat.min(100));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a detail; re-using a name overwrites the value in place
    pub fn with_detail(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(name.into(), value.into());
        self
    }

    pub fn with_dossier(mut self, dossier: Vec<Document>) -> Self {
        self.dossier = dossier;
        self
    }

    /// Get a detail value
    pub fn detail(&self, name: &str) -> Option<&str> {
        self.details.get(name).map(String::as_str)
    }

    /// Case-insensitive substring match over label, description and role.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        let hit = |text: &str| text.to_lowercase().contains(needle);
        hit(&self.label)
            || self.description.as_deref().is_some_and(hit)
            || self.role.as_deref().is_some_and(hit)
    }

    /// Get number of dossier documents
    pub fn document_count(&self) -> usize {
        self.dossier.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hawala() -> Node {
        Node::new("F-001", "Dubai Hawala", EntityKind::Finance)
            .with_role("Laundering")
            .with_threat(70)
            .with_description("Hawala network operating out of Deira, Dubai.")
            .with_detail("Hub", "Deira")
            .with_detail("Volume", "$4M/mo")
    }

    #[test]
    fn test_builder() {
        let node = hawala();
        assert_eq!(node.id, NodeId::new("F-001"));
        assert_eq!(node.kind, EntityKind::Finance);
        assert_eq!(node.role.as_deref(), Some("Laundering"));
        assert_eq!(node.threat, Some(70));
        assert_eq!(node.detail("Hub"), Some("Deira"));
        assert_eq!(node.document_count(), 0);
    }

    #[test]
    fn test_details_keep_insertion_order() {
        let node = hawala().with_detail("Front", "Al-Jadeed Jewelers");
        let names: Vec<&str> = node.details.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Hub", "Volume", "Front"]);
    }

    #[test]
    fn test_threat_is_clamped() {
        let node = Node::new("X", "X", EntityKind::Weapon).with_threat(250);
        assert_eq!(node.threat, Some(100));
    }

    #[test]
    fn test_matches_text() {
        let node = hawala();
        assert!(node.matches_text("dubai"));
        assert!(node.matches_text("deira"));
        assert!(node.matches_text("launder"));
        assert!(!node.matches_text("jewelers")); // details are not searched
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_value(Node::new("C-1", "Signal 7", EntityKind::Comms)).unwrap();
        assert_eq!(json["type"], "COMMS");
        assert!(json.get("role").is_none());
        assert!(json.get("details").is_none());
        assert!(json.get("dossier").is_none());
    }
}
