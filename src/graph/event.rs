//! Redraw notifications for the rendering surface
//!
//! Emitted by the session controller after every change to the active
//! snapshot so the renderer can choose between a global and a localized
//! layout pass.

use super::types::{EdgeId, NodeId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RedrawEvent {
    /// The active snapshot was replaced wholesale
    Full {
        nodes: usize,
        edges: usize,
    },
    /// New nodes and edges were appended around `from`
    Incremental {
        from: NodeId,
        nodes: Vec<NodeId>,
        edges: Vec<EdgeId>,
    },
}

impl RedrawEvent {
    pub fn is_full(&self) -> bool {
        matches!(self, RedrawEvent::Full { .. })
    }
}

impl fmt::Display for RedrawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedrawEvent::Full { .. } => write!(f, "full-redraw"),
            RedrawEvent::Incremental { from, .. } => write!(f, "incremental-redraw-from:{}", from),
        }
    }
}
