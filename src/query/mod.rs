//! Query resolution
//!
//! Turns a free-text search into a catalog subgraph:
//! 1. An empty (or whitespace-only) query selects the whole catalog.
//! 2. Otherwise the trimmed, lower-cased query is checked against the topic
//!    table; every group whose trigger phrase occurs in the query
//!    contributes its node ids.
//! 3. With no topic hit, nodes whose label, description or role contain the
//!    query are selected.
//!
//! The edge set is always induced from the selected nodes, so a result can
//! never contain a dangling edge. Matching nothing is a valid, empty result.

use crate::catalog::Catalog;
use crate::graph::{GraphSnapshot, Node};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// How a query was matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Empty query: the unfiltered catalog
    All,
    /// One or more topic phrases occurred in the query
    Topic { phrases: Vec<String> },
    /// Substring scan over label, description and role
    Substring,
}

/// Metadata describing a resolved search, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    /// Trimmed, lower-cased query
    pub query: String,
    /// Number of nodes in the result
    pub match_count: usize,
    #[serde(flatten)]
    pub strategy: MatchStrategy,
}

/// A resolved search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub snapshot: GraphSnapshot,
    pub summary: SearchSummary,
}

impl SearchResult {
    pub fn match_count(&self) -> usize {
        self.summary.match_count
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

/// Normalize a raw search box value
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Maps queries to catalog subgraphs
#[derive(Debug, Clone, Default)]
pub struct QueryResolver {}

impl QueryResolver {
    pub fn new() -> Self {
        Self {}
    }

    /// Resolve `query` against `catalog`
    pub fn resolve(&self, query: &str, catalog: &Catalog) -> SearchResult {
        let term = normalize_query(query);

        if term.is_empty() {
            let snapshot = catalog.snapshot().clone();
            debug!("Empty query, returning full catalog ({} nodes)", snapshot.node_count());
            return SearchResult {
                summary: SearchSummary {
                    query: term,
                    match_count: snapshot.node_count(),
                    strategy: MatchStrategy::All,
                },
                snapshot,
            };
        }

        let mut phrases = Vec::new();
        let mut candidates: FxHashSet<&str> = FxHashSet::default();
        for (phrase, ids) in catalog.topics().matching(&term) {
            phrases.push(phrase.to_string());
            candidates.extend(ids.iter().map(|id| id.as_str()));
        }

        let (selected, strategy): (Vec<&Node>, MatchStrategy) = if phrases.is_empty() {
            let selected = catalog.all_nodes().filter(|n| n.matches_text(&term)).collect();
            (selected, MatchStrategy::Substring)
        } else {
            let selected = catalog
                .all_nodes()
                .filter(|n| candidates.contains(n.id.as_str()))
                .collect();
            (selected, MatchStrategy::Topic { phrases })
        };

        let snapshot = GraphSnapshot::induced(selected, catalog.all_edges());
        debug!(
            "Resolved query '{}' via {:?}: {} nodes, {} edges",
            term,
            strategy,
            snapshot.node_count(),
            snapshot.edge_count()
        );

        SearchResult {
            summary: SearchSummary {
                query: term,
                match_count: snapshot.node_count(),
                strategy,
            },
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DossierGenerator;
    use crate::config::DossierConfig;
    use crate::random::RngChoice;

    fn catalog() -> Catalog {
        Catalog::builtin(&DossierGenerator::new(DossierConfig::default()), &mut RngChoice::from_seed(5))
    }

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.snapshot.node_ids().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  MoFA Visit \t"), "mofa visit");
        assert_eq!(normalize_query(" \n "), "");
    }

    #[test]
    fn test_whitespace_query_returns_everything() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("   ", &catalog);
        assert_eq!(result.summary.strategy, MatchStrategy::All);
        assert_eq!(result.match_count(), 16);
        assert_eq!(result.snapshot.edge_count(), 16);
    }

    #[test]
    fn test_topic_match_is_case_insensitive() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("  RUSSIA ", &catalog);
        assert_eq!(ids(&result), vec!["ORG-MOFA-001", "MOFA-JS-001"]);
        let edges: Vec<&str> = result.snapshot.edge_ids().map(|e| e.as_str()).collect();
        assert_eq!(edges, vec!["e8"]);
        assert_eq!(result.summary.query, "russia");
    }

    #[test]
    fn test_multiple_topics_union() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("iran russia", &catalog);
        assert_eq!(
            result.summary.strategy,
            MatchStrategy::Topic { phrases: vec!["iran".to_string(), "russia".to_string()] }
        );
        assert_eq!(result.match_count(), 4);
    }

    #[test]
    fn test_substring_fallback() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("Kotli", &catalog);
        assert_eq!(result.summary.strategy, MatchStrategy::Substring);
        assert_eq!(ids(&result), vec!["P-003"]);
        assert_eq!(result.snapshot.edge_count(), 0);
    }

    #[test]
    fn test_substring_fallback_induces_edges() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("commander", &catalog);
        assert_eq!(ids(&result), vec!["T-1001", "P-003", "F-001"]);
        let edges: Vec<&str> = result.snapshot.edge_ids().map(|e| e.as_str()).collect();
        assert_eq!(edges, vec!["e2", "e6"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = catalog();
        let result = QueryResolver::new().resolve("nonexistent-xyz", &catalog);
        assert!(result.is_empty());
        assert_eq!(result.match_count(), 0);
        assert_eq!(result.snapshot.edge_count(), 0);
    }
}
