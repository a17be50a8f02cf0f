//! Entity catalog: the immutable seed corpus
//!
//! The catalog is built once per process, attaching a freshly generated
//! dossier to every node that arrives without one, and is read-only from
//! then on. Besides the built-in corpus an alternative corpus can be loaded
//! from JSON:
//!
//! ```json
//! {
//!   "nodes":  [{"id": "A", "label": "Alpha", "type": "PERSON"}],
//!   "edges":  [],
//!   "topics": {"alpha": ["A"]}
//! }
//! ```

pub mod dossier;
pub mod seed;
pub mod topics;

pub use dossier::{DossierGenerator, DocumentTemplate, CLASSIFICATION_LEVELS, OFFICIAL_TRIGGERS};
pub use topics::TopicTable;

use crate::graph::{Edge, GraphError, GraphSnapshot, Node};
use crate::random::ChoiceSource;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Inconsistent catalog: {0}")]
    Invalid(#[from] GraphError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// On-disk catalog layout
#[derive(Deserialize)]
struct CatalogFile {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    topics: TopicTable,
}

/// Immutable reference corpus
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Full corpus, validated at construction
    snapshot: GraphSnapshot,
    topics: TopicTable,
}

impl Catalog {
    /// The built-in corpus with generated dossiers
    pub fn builtin<C: ChoiceSource>(dossiers: &DossierGenerator, rng: &mut C) -> Self {
        let nodes = attach_dossiers(seed::seed_nodes(), dossiers, rng);
        let snapshot = GraphSnapshot::induced(&nodes, &seed::seed_edges());
        info!(
            "Loaded built-in catalog: {} nodes, {} edges",
            snapshot.node_count(),
            snapshot.edge_count()
        );
        Catalog { snapshot, topics: seed::seed_topics() }
    }

    /// Build a catalog from parts, rejecting duplicate ids and dangling edges
    pub fn from_parts<C: ChoiceSource>(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        topics: TopicTable,
        dossiers: &DossierGenerator,
        rng: &mut C,
    ) -> CatalogResult<Self> {
        let nodes = attach_dossiers(nodes, dossiers, rng);
        let snapshot = GraphSnapshot::from_parts(nodes, edges)?;

        for (phrase, ids) in topics.iter() {
            for id in ids.iter().filter(|id| !snapshot.contains_node(id.as_str())) {
                warn!("Topic '{}' names unknown node {}", phrase, id);
            }
        }

        info!(
            "Loaded catalog: {} nodes, {} edges, {} topics",
            snapshot.node_count(),
            snapshot.edge_count(),
            topics.len()
        );
        Ok(Catalog { snapshot, topics })
    }

    pub fn from_json_str<C: ChoiceSource>(
        json: &str,
        dossiers: &DossierGenerator,
        rng: &mut C,
    ) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_parts(file.nodes, file.edges, file.topics, dossiers, rng)
    }

    pub fn from_path<C: ChoiceSource>(
        path: impl AsRef<Path>,
        dossiers: &DossierGenerator,
        rng: &mut C,
    ) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!("Reading catalog from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, dossiers, rng)
    }

    /// Every node, in corpus order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.snapshot.nodes()
    }

    /// Every edge, in corpus order
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.snapshot.edges()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.snapshot.node(id)
    }

    pub fn topics(&self) -> &TopicTable {
        &self.topics
    }

    /// The whole corpus as a snapshot
    pub fn snapshot(&self) -> &GraphSnapshot {
        &self.snapshot
    }

    pub fn node_count(&self) -> usize {
        self.snapshot.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.snapshot.edge_count()
    }
}

fn attach_dossiers<C: ChoiceSource>(
    nodes: Vec<Node>,
    dossiers: &DossierGenerator,
    rng: &mut C,
) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if node.dossier.is_empty() {
                node.dossier = dossiers.generate(node.kind, &node.label, rng);
            }
            node
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DossierConfig;
    use crate::random::RngChoice;

    fn generator() -> DossierGenerator {
        DossierGenerator::new(DossierConfig::default())
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin(&generator(), &mut RngChoice::from_seed(3));
        assert_eq!(catalog.node_count(), 16);
        assert_eq!(catalog.edge_count(), 16);
        assert!(catalog.snapshot().check_invariants().is_ok());
        assert!(catalog.all_nodes().all(|n| !n.dossier.is_empty()));
        assert_eq!(catalog.all_nodes().next().unwrap().id.as_str(), "T-1001");
    }

    #[test]
    fn test_json_catalog_keeps_given_dossiers() {
        let json = r#"{
            "nodes": [
                {"id": "A", "label": "Alpha", "type": "PERSON", "dossier": [{
                    "id": "X-1", "title": "T", "type": "MEMO", "date": "2024-05-05",
                    "classification": "SECRET", "summary": "s", "content": "c", "tags": ["k"]
                }]},
                {"id": "B", "label": "Bravo", "type": "LOC"}
            ],
            "edges": [{"id": "ab", "source": "A", "target": "B", "label": "VISITED"}],
            "topics": {"Alpha": ["A", "GHOST"]}
        }"#;
        let catalog = Catalog::from_json_str(json, &generator(), &mut RngChoice::from_seed(1)).unwrap();
        assert_eq!(catalog.node("A").unwrap().dossier.len(), 1);
        assert!((6..=10).contains(&catalog.node("B").unwrap().dossier.len()));
        assert_eq!(catalog.topics().group("alpha").unwrap().len(), 2);
    }

    #[test]
    fn test_json_catalog_rejects_dangling_edge() {
        let json = r#"{"nodes": [{"id": "A", "label": "Alpha", "type": "ORG"}],
                       "edges": [{"id": "e", "source": "A", "target": "Z", "label": "LINKED"}]}"#;
        let err = Catalog::from_json_str(json, &generator(), &mut RngChoice::from_seed(1)).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(GraphError::InvalidEdgeTarget { .. })));
    }

    #[test]
    fn test_json_catalog_rejects_malformed_input() {
        let err = Catalog::from_json_str("{\"nodes\": 3}", &generator(), &mut RngChoice::from_seed(1)).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
