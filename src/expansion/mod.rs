//! Expansion: on-demand synthesis of entities attached to an existing node
//!
//! An expansion of node `S` produces a batch of new nodes of random
//! expandable kind, each with a generated dossier, and exactly one new edge
//! `S -> new` per node. The generator only checks that `S` exists; merging
//! the batch into the active snapshot is the session controller's job.

pub mod ids;
pub mod pools;

pub use ids::{expansion_edge_id, IdAllocator};

use crate::catalog::DossierGenerator;
use crate::config::ExpansionConfig;
use crate::graph::{Edge, EntityKind, GraphSnapshot, Node, NodeId, RelationKind};
use crate::random::ChoiceSource;
use pools::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpansionError {
    #[error("Source node {0} is not in the active snapshot")]
    UnknownSource(NodeId),
}

pub type ExpansionResult<T> = Result<T, ExpansionError>;

/// A proposed batch of new nodes and edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expansion {
    pub source: NodeId,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Expansion {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Display classification implied by an expansion verb
pub fn relation_for_verb(verb: &str) -> RelationKind {
    match verb {
        "FUNDED" => RelationKind::Financial,
        "CONTACTED" => RelationKind::Comms,
        _ => RelationKind::Standard,
    }
}

/// Synthesizes expansion batches
#[derive(Debug)]
pub struct ExpansionGenerator {
    config: ExpansionConfig,
    ids: IdAllocator,
}

impl ExpansionGenerator {
    pub fn new(config: ExpansionConfig) -> Self {
        Self::with_ids(config, IdAllocator::new())
    }

    pub fn with_ids(config: ExpansionConfig, ids: IdAllocator) -> Self {
        ExpansionGenerator { config, ids }
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Propose a batch attached to `source`.
    ///
    /// Fails with [`ExpansionError::UnknownSource`] when `source` is not in
    /// `active`; `active` itself is never modified.
    pub fn expand<C: ChoiceSource>(
        &mut self,
        source: &str,
        active: &GraphSnapshot,
        dossiers: &DossierGenerator,
        rng: &mut C,
    ) -> ExpansionResult<Expansion> {
        let source = match active.node(source) {
            Some(node) => node.id.clone(),
            None => return Err(ExpansionError::UnknownSource(NodeId::new(source))),
        };

        // A batch always holds at least one node
        let min = self.config.min_batch.max(1);
        let count = rng.range_inclusive(min, self.config.max_batch.max(min));
        let mut nodes = Vec::with_capacity(count as usize);
        let mut edges = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let mut node = self.synthesize(rng);
            node.dossier = dossiers.generate(node.kind, &node.label, rng);
            node.id = self.ids.next_node_id(|candidate| active.contains_node(candidate));

            let verb = *rng.pick(&VERBS);
            let edge = Edge::new(expansion_edge_id(&source, &node.id), source.clone(), node.id.clone(), verb)
                .with_kind(relation_for_verb(verb));

            nodes.push(node);
            edges.push(edge);
        }

        debug!("Expanded {} with {} new nodes", source, nodes.len());
        Ok(Expansion { source, nodes, edges })
    }

    /// A new node with kind, label, role, description, threat and details.
    /// The id is assigned by the caller.
    fn synthesize<C: ChoiceSource>(&self, rng: &mut C) -> Node {
        let kind = *rng.pick(&EntityKind::EXPANDABLE);

        let mut node = match kind {
            EntityKind::Person => {
                let label = format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES));
                let role = *rng.pick(&PERSON_ROLES);
                Node::new("", label, kind)
                    .with_role(role)
                    .with_description(format!(
                        "Suspected {} linked to the target network. Frequent travel to border \
                         regions detected.",
                        role.to_lowercase()
                    ))
                    .with_detail("Origin", *rng.pick(&REGIONS))
                    .with_detail("Status", "Under Surveillance")
            }
            EntityKind::Loc => Node::new("", format!("Safe House {}", rng.pick(&SAFE_HOUSE_LETTERS)), kind)
                .with_role("Hideout")
                .with_description(
                    "Residential compound used for temporary lodging of operatives. High footfall \
                     during night hours.",
                )
                .with_detail("Region", *rng.pick(&REGIONS))
                .with_detail("Owner", "Unknown"),
            EntityKind::Finance => {
                let account = rng.next_index(10_000);
                let amount = rng.next_index(50);
                Node::new("", format!("Account #{}", account), kind)
                    .with_role("Transaction")
                    .with_description(
                        "Suspicious financial transfer flagged by monitoring algorithms. \
                         Consistent with funding patterns.",
                    )
                    .with_detail("Bank", "Habib Bank")
                    .with_detail("Amount", format!("${}k", amount))
            }
            EntityKind::Org => Node::new("", *rng.pick(&FRONT_ORGS), kind)
                .with_role("Front")
                .with_description("NGO or commercial entity suspected of diverting funds to militants.")
                .with_detail("Reg", "Punjab")
                .with_detail("Activity", "Suspicious"),
            // Weapons are never drawn; anything else is a comms intercept
            EntityKind::Comms | EntityKind::Weapon => {
                Node::new("", format!("Signal {}", rng.next_index(999)), EntityKind::Comms)
                    .with_role("Intercept")
                    .with_description("Encrypted communication burst intercepted from target location.")
                    .with_detail("Type", "GSM")
                    .with_detail("Duration", "45s")
            }
        };

        let threat = rng.range_inclusive(self.config.min_threat, self.config.max_threat);
        node.threat = Some(u8::try_from(threat.min(100)).unwrap_or(100));
        node.details.insert(
            "Discovered".to_string(),
            chrono::Utc::now().format("%H:%M:%S").to_string(),
        );
        node.details.insert("Confidence".to_string(), rng.pick(&CONFIDENCE).to_string());
        node
    }
}
