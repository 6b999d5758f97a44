//! Entity structures.
//!
//! Nodes and relations are the two fundamental entity types of a structure.

use std::fmt;

use serde::Serialize;

use crate::{NodeId, RelationId};

/// A node in a structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Arena index of this node.
    pub id: NodeId,
    /// Label, unique within the structure.
    pub label: String,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// The closed set of relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    /// `member-of(x, y)`: x is a member of y.
    MemberOf,
    /// `bounds(b, s)`: b bounds s.
    Bounds,
    /// `inverts(x, y)`: atomic pairwise exchange between x and y.
    Inverts,
}

impl RelationKind {
    /// All kinds, in declaration order.
    pub const ALL: [RelationKind; 3] = [
        RelationKind::MemberOf,
        RelationKind::Bounds,
        RelationKind::Inverts,
    ];

    /// The keyword used for this kind in a description.
    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::MemberOf => "member-of",
            RelationKind::Bounds => "bounds",
            RelationKind::Inverts => "inverts",
        }
    }

    /// Look up a kind by keyword (case-insensitive).
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(word))
    }

    /// Number of endpoints the grammar fixes for this kind, if any.
    ///
    /// `inverts` takes a free endpoint list; its arity is checked by the engine.
    pub fn fixed_arity(&self) -> Option<usize> {
        match self {
            RelationKind::MemberOf | RelationKind::Bounds => Some(2),
            RelationKind::Inverts => None,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A relation between nodes.
///
/// `member-of` and `bounds` are directed: endpoint 0 is the source and
/// endpoint 1 the target. `inverts` carries its declared endpoint list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Arena index of this relation.
    pub id: RelationId,
    /// Kind of this relation.
    pub kind: RelationKind,
    /// Ordered endpoints.
    pub endpoints: Vec<NodeId>,
    /// Source line of the declaration (diagnostics only).
    pub line: usize,
}

impl Relation {
    /// Create a new relation.
    pub fn new(id: RelationId, kind: RelationKind, endpoints: Vec<NodeId>, line: usize) -> Self {
        Self {
            id,
            kind,
            endpoints,
            line,
        }
    }

    /// Get the arity (number of endpoints) of this relation.
    pub fn arity(&self) -> usize {
        self.endpoints.len()
    }

    /// Get the endpoint at a specific position.
    pub fn endpoint(&self, position: usize) -> Option<NodeId> {
        self.endpoints.get(position).copied()
    }

    /// First endpoint (the member, or the boundary).
    pub fn source(&self) -> Option<NodeId> {
        self.endpoint(0)
    }

    /// Second endpoint (the container, or the bounded node).
    pub fn target(&self) -> Option<NodeId> {
        self.endpoint(1)
    }
}
