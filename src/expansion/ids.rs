//! Session-unique ids for synthesized nodes
//!
//! Ids look like `N-<salt>-<counter>`. The salt is drawn once per session,
//! the counter only moves forward, so an allocator never hands out the same
//! id twice.

use crate::graph::{EdgeId, NodeId};
use std::fmt;

pub struct IdAllocator {
    salt: String,
    next: u64,
}

impl IdAllocator {
    /// Allocator salted with a random UUID fragment
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self::with_salt(&uuid[..8])
    }

    pub fn with_salt(salt: &str) -> Self {
        IdAllocator { salt: salt.to_string(), next: 1 }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Next node id for which `taken` is false
    pub fn next_node_id(&mut self, taken: impl Fn(&str) -> bool) -> NodeId {
        loop {
            let candidate = format!("N-{}-{}", self.salt, self.next);
            self.next += 1;
            if !taken(&candidate) {
                return NodeId::new(candidate);
            }
        }
    }

    /// Number of ids issued (or skipped) so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("salt", &self.salt)
            .field("issued", &self.issued())
            .finish()
    }
}

/// Id of the edge joining `source` to a synthesized `target`
pub fn expansion_edge_id(source: &NodeId, target: &NodeId) -> EdgeId {
    EdgeId::new(format!("{}-{}", source, target))
}
