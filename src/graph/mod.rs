//! Entity graph data model
//!
//! This module implements the graph the session engine works on:
//! - Typed nodes with display attributes and dossiers
//! - Directed, labeled edges
//! - Snapshots that never expose a dangling edge or a duplicate id
//! - Redraw events describing how a snapshot changed

pub mod document;
pub mod edge;
pub mod event;
pub mod node;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use document::{Document, DocumentKind};
pub use edge::Edge;
pub use event::RedrawEvent;
pub use node::{Details, Node};
pub use snapshot::{GraphError, GraphResult, GraphSnapshot};
pub use types::{EdgeId, EntityKind, NodeId, RelationKind};
