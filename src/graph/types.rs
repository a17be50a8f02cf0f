//! Core type definitions for the entity graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a node
///
/// Catalog ids are hand-assigned (`T-1001`, `ORG-MOFA-001`); synthesized ids
/// come from the expansion id allocator. Stable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        EdgeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        EdgeId(id)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        EdgeId(id.to_string())
    }
}

impl Borrow<str> for EdgeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Entity category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Person,
    Org,
    Loc,
    Finance,
    Comms,
    Weapon,
}

impl EntityKind {
    /// Every entity kind, in declaration order
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Person,
        EntityKind::Org,
        EntityKind::Loc,
        EntityKind::Finance,
        EntityKind::Comms,
        EntityKind::Weapon,
    ];

    /// Kinds the expansion generator may synthesize. Weapons never appear
    /// as discovered entities.
    pub const EXPANDABLE: [EntityKind; 5] = [
        EntityKind::Person,
        EntityKind::Finance,
        EntityKind::Comms,
        EntityKind::Loc,
        EntityKind::Org,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::Org => "ORG",
            EntityKind::Loc => "LOC",
            EntityKind::Finance => "FINANCE",
            EntityKind::Comms => "COMMS",
            EntityKind::Weapon => "WEAPON",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown entity kind: {}", s))
    }
}

/// Display-only classification of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    #[default]
    Standard,
    Comms,
    Financial,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Standard => f.pad("standard"),
            RelationKind::Comms => f.pad("comms"),
            RelationKind::Financial => f.pad("financial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("T-1001");
        assert_eq!(id.as_str(), "T-1001");
        assert_eq!(format!("{}", id), "T-1001");

        let id2: NodeId = "P-002".into();
        assert_eq!(id2.as_str(), "P-002");
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new("e11");
        assert_eq!(id.as_str(), "e11");
        assert_eq!(format!("{}", id), "e11");
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut ids = std::collections::HashSet::new();
        ids.insert(NodeId::new("L-001"));
        assert!(ids.contains("L-001"));
        assert!(!ids.contains("L-002"));
    }

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(serde_json::to_string(&EntityKind::Finance).unwrap(), "\"FINANCE\"");
        let kind: EntityKind = serde_json::from_str("\"LOC\"").unwrap();
        assert_eq!(kind, EntityKind::Loc);
        assert_eq!("comms".parse::<EntityKind>().unwrap(), EntityKind::Comms);
        assert!("vehicle".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_expandable_excludes_weapon() {
        assert_eq!(EntityKind::EXPANDABLE.len(), 5);
        assert!(!EntityKind::EXPANDABLE.contains(&EntityKind::Weapon));
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:<8}]", EntityKind::Loc), "[LOC     ]");
        assert_eq!(format!("[{:>6}]", NodeId::new("P-002")), "[ P-002]");
        assert_eq!(format!("[{:<10}]", RelationKind::Comms), "[comms     ]");
    }

    #[test]
    fn test_relation_kind() {
        assert_eq!(RelationKind::default(), RelationKind::Standard);
        assert_eq!(serde_json::to_string(&RelationKind::Financial).unwrap(), "\"financial\"");
        assert_eq!(format!("{}", RelationKind::Comms), "comms");
    }
}
