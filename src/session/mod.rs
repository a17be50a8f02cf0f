//! Session controller
//!
//! Owns the single active snapshot and is its only writer. Searches replace
//! the snapshot wholesale, expansions are merged into it, selection is a
//! plain read. Every change is announced to subscribers as a
//! [`RedrawEvent`].
//!
//! The controller is single-threaded: callers that share it must serialize
//! access (one mutation in flight at a time).

use crate::catalog::{Catalog, DossierGenerator};
use crate::config::{ConfigResult, SessionConfig};
use crate::expansion::{Expansion, ExpansionError, ExpansionGenerator};
use crate::graph::{Edge, EdgeId, GraphSnapshot, Node, NodeId, RedrawEvent};
use crate::query::{QueryResolver, SearchSummary};
use crate::random::{ChoiceSource, RngChoice};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Outcome of merging an expansion into the active snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeReport {
    pub source: Option<NodeId>,
    pub added_nodes: Vec<NodeId>,
    pub added_edges: Vec<EdgeId>,
    /// Nodes refused because their id was taken or they had no usable
    /// attaching edge
    pub rejected_nodes: Vec<NodeId>,
    /// Edges refused with their node, for a taken id, or for attaching no
    /// new node to the source
    pub rejected_edges: Vec<EdgeId>,
}

impl MergeReport {
    pub fn is_clean(&self) -> bool {
        self.rejected_nodes.is_empty() && self.rejected_edges.is_empty()
    }

    pub fn added(&self) -> usize {
        self.added_nodes.len()
    }
}

/// A single user session over the graph
pub struct SessionController<C: ChoiceSource = RngChoice> {
    catalog: Catalog,
    resolver: QueryResolver,
    expander: ExpansionGenerator,
    dossiers: DossierGenerator,
    rng: C,
    active: GraphSnapshot,
    last_search: SearchSummary,
    selection: Option<NodeId>,
    subscribers: Vec<UnboundedSender<RedrawEvent>>,
}

impl SessionController<RngChoice> {
    /// Session over the built-in catalog. Fails when `config` does not
    /// validate.
    pub fn new(config: &SessionConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => RngChoice::from_seed(seed),
            None => RngChoice::from_entropy(),
        };
        let dossiers = DossierGenerator::new(config.dossier.clone());
        let catalog = Catalog::builtin(&dossiers, &mut rng);
        let expander = ExpansionGenerator::new(config.expansion.clone());
        Ok(Self::with_parts(catalog, dossiers, expander, rng))
    }
}

impl<C: ChoiceSource> SessionController<C> {
    /// Assemble a session from explicit parts. The session opens on the
    /// full catalog.
    pub fn with_parts(
        catalog: Catalog,
        dossiers: DossierGenerator,
        expander: ExpansionGenerator,
        rng: C,
    ) -> Self {
        let resolver = QueryResolver::new();
        let initial = resolver.resolve("", &catalog);
        info!(
            "Session started: {} nodes, {} edges, id salt {}",
            initial.snapshot.node_count(),
            initial.snapshot.edge_count(),
            expander.ids().salt()
        );
        SessionController {
            catalog,
            resolver,
            expander,
            dossiers,
            rng,
            active: initial.snapshot,
            last_search: initial.summary,
            selection: None,
            subscribers: Vec::new(),
        }
    }

    /// Receive a [`RedrawEvent`] for every future change of the active
    /// snapshot. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<RedrawEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Resolve `query`, replace the active snapshot with the result and
    /// clear the selection.
    pub fn start_search(&mut self, query: &str) -> &GraphSnapshot {
        let result = self.resolver.resolve(query, &self.catalog);
        info!(
            "Search '{}' matched {} nodes",
            result.summary.query, result.summary.match_count
        );

        self.active = result.snapshot;
        self.last_search = result.summary;
        self.selection = None;

        self.notify(RedrawEvent::Full {
            nodes: self.active.node_count(),
            edges: self.active.edge_count(),
        });
        &self.active
    }

    /// Select a node of the active snapshot. `None`, or an id that is not
    /// present, clears the selection and returns `None`.
    pub fn select(&mut self, node_id: Option<&str>) -> Option<&Node> {
        let found = node_id.and_then(|id| self.active.node(id));
        if found.is_none() {
            if let Some(id) = node_id {
                debug!("Select: node {} not in active snapshot", id);
            }
        }
        self.selection = found.map(|n| n.id.clone());
        found
    }

    /// Currently selected node
    pub fn selected(&self) -> Option<&Node> {
        self.selection.as_ref().and_then(|id| self.active.node(id.as_str()))
    }

    /// Expand `node_id` and merge the batch into the active snapshot.
    ///
    /// Returns `None`, leaving the snapshot untouched, when the node is not
    /// in the active snapshot.
    pub fn expand_selected(&mut self, node_id: &str) -> Option<MergeReport> {
        let batch = match self.expander.expand(node_id, &self.active, &self.dossiers, &mut self.rng) {
            Ok(batch) => batch,
            Err(ExpansionError::UnknownSource(id)) => {
                debug!("Expand: node {} not in active snapshot, ignoring", id);
                return None;
            }
        };
        Some(self.merge_expansion(batch))
    }

    /// Expand whatever node is currently selected
    pub fn expand_selection(&mut self) -> Option<MergeReport> {
        let id = self.selection.clone()?;
        self.expand_selected(id.as_str())
    }

    /// Append a batch to the active snapshot.
    ///
    /// A node is merged only together with an edge attaching it to the
    /// batch source, and both are rejected together otherwise: when the node
    /// id is already present, or when every attaching edge has a taken id.
    /// Existing nodes are never overwritten. Edges that attach no batch node
    /// to the source are rejected. A batch whose source is not in the
    /// snapshot is rejected as a whole.
    pub fn merge_expansion(&mut self, batch: Expansion) -> MergeReport {
        let mut report = MergeReport {
            source: Some(batch.source.clone()),
            ..MergeReport::default()
        };

        if !self.active.contains_node(batch.source.as_str()) {
            warn!("Merge: source {} not in active snapshot, dropping batch", batch.source);
            report.rejected_nodes = batch.nodes.into_iter().map(|n| n.id).collect();
            report.rejected_edges = batch.edges.into_iter().map(|e| e.id).collect();
            return report;
        }

        let source = batch.source.as_str();
        let mut pending: Vec<Edge> = batch.edges;
        let mut claimed: FxHashSet<EdgeId> = FxHashSet::default();

        for node in batch.nodes {
            let id = node.id.clone();
            let (attaching, rest): (Vec<Edge>, Vec<Edge>) = pending
                .into_iter()
                .partition(|e| e.starts_from(source) && e.ends_at(id.as_str()));
            pending = rest;

            if self.active.contains_node(id.as_str()) {
                warn!("Merge: rejected node {}: id already present", id);
                report.rejected_nodes.push(id);
                report.rejected_edges.extend(attaching.into_iter().map(|e| e.id));
                continue;
            }

            let mut usable = Vec::with_capacity(attaching.len());
            for edge in attaching {
                if self.active.contains_edge(edge.id.as_str()) || !claimed.insert(edge.id.clone()) {
                    warn!("Merge: rejected edge {}: id already present", edge.id);
                    report.rejected_edges.push(edge.id);
                } else {
                    usable.push(edge);
                }
            }

            if usable.is_empty() {
                warn!("Merge: rejected node {}: no usable edge from {}", id, source);
                report.rejected_nodes.push(id);
                continue;
            }

            if let Err(err) = self.active.insert_node(node) {
                warn!("Merge: rejected node: {}", err);
                report.rejected_nodes.push(id);
                report.rejected_edges.extend(usable.into_iter().map(|e| e.id));
                continue;
            }
            report.added_nodes.push(id);

            for edge in usable {
                let edge_id = edge.id.clone();
                match self.active.insert_edge(edge) {
                    Ok(()) => report.added_edges.push(edge_id),
                    Err(err) => {
                        warn!("Merge: rejected edge: {}", err);
                        report.rejected_edges.push(edge_id);
                    }
                }
            }
        }

        for edge in pending {
            warn!("Merge: rejected edge {}: attaches no new node to {}", edge.id, source);
            report.rejected_edges.push(edge.id);
        }

        info!(
            "Merged expansion of {}: +{} nodes, +{} edges ({} rejected)",
            batch.source,
            report.added_nodes.len(),
            report.added_edges.len(),
            report.rejected_nodes.len() + report.rejected_edges.len()
        );

        if !report.added_nodes.is_empty() || !report.added_edges.is_empty() {
            self.notify(RedrawEvent::Incremental {
                from: batch.source,
                nodes: report.added_nodes.clone(),
                edges: report.added_edges.clone(),
            });
        }
        report
    }

    /// The active snapshot
    pub fn active(&self) -> &GraphSnapshot {
        &self.active
    }

    /// Metadata of the search that produced the active snapshot
    pub fn last_search(&self) -> &SearchSummary {
        &self.last_search
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn notify(&mut self, event: RedrawEvent) {
        debug!("Redraw: {}", event);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
