//! Dense node sets.

use admit_core::NodeId;

use crate::error::{try_reserve, GraphResult};

/// A set of nodes of one structure, stored as a bitmap over the node arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    bits: Vec<bool>,
    len: usize,
}

impl NodeSet {
    /// Create an empty set able to hold `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> GraphResult<Self> {
        let mut bits = Vec::new();
        try_reserve(&mut bits, capacity, "node set")?;
        bits.resize(capacity, false);
        Ok(Self { bits, len: 0 })
    }

    /// Insert a node, returning true if it was not present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        match self.bits.get_mut(node.index()) {
            Some(bit) if !*bit => {
                *bit = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.bits.get(node.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(i, _)| NodeId::new(i as u32))
    }
}
