//! Identity types for structure entities.
//!
//! Identifiers are dense arena indices:
//! - Unique within the structure that issued them
//! - Immutable once assigned
//! - Meaningless outside that structure

use std::fmt;

/// Index of a node in its structure's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Position in the owning arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of a relation in its structure's relation arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationId(pub u32);

impl RelationId {
    /// Create a new RelationId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Position in the owning arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
