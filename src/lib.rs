//! Garud Graph Session Engine
//!
//! An interactive investigation graph: a fixed catalog of entities and
//! relationships, a free-text search that carves a subgraph out of it, and
//! on-demand expansion that grows the active subgraph with synthesized
//! neighbors.
//!
//! # Architecture
//!
//! - `graph`: data model (nodes, edges, dossier documents) and the
//!   self-consistent [`GraphSnapshot`]
//! - `catalog`: the built-in corpus, topic table and dossier generator
//! - `query`: maps a query string to a catalog subgraph
//! - `expansion`: synthesizes new neighbors for a node
//! - `session`: owns the active snapshot, selection and redraw events
//! - `random`: the injectable choice source behind all randomness
//!
//! ## Example Usage
//!
//! ```rust
//! use garud::{SessionConfig, SessionController};
//!
//! let mut session = SessionController::new(&SessionConfig::default().with_seed(7)).unwrap();
//!
//! // Carve out the ministry subgraph
//! let snapshot = session.start_search("MOFA");
//! assert_eq!(snapshot.node_count(), 9);
//!
//! // Grow it around one node
//! session.select(Some("ORG-MOFA-001"));
//! let report = session.expand_selection().unwrap();
//! assert!(report.added() >= 1);
//! assert!(session.active().check_invariants().is_ok());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod expansion;
pub mod graph;
pub mod query;
pub mod random;
pub mod session;

// Re-export main types for convenience
pub use graph::{
    Document, DocumentKind, Edge, EdgeId, EntityKind, GraphError, GraphResult, GraphSnapshot,
    Node, NodeId, RedrawEvent, RelationKind,
};

pub use catalog::{Catalog, CatalogError, CatalogResult, DossierGenerator, TopicTable};

pub use config::{ConfigError, ConfigResult, DossierConfig, ExpansionConfig, SessionConfig};

pub use query::{MatchStrategy, QueryResolver, SearchResult, SearchSummary};

pub use expansion::{Expansion, ExpansionError, ExpansionGenerator, ExpansionResult, IdAllocator};

pub use random::{ChoiceSource, RngChoice, ScriptedChoice};

pub use session::{MergeReport, SessionController};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
