//! Common error types.

use crate::{NodeId, RelationKind};
use thiserror::Error;

/// Errors that can occur while building a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A label was declared twice.
    #[error("node '{label}' is already declared")]
    DuplicateLabel { label: String },

    /// A label was empty.
    #[error("node label must not be empty")]
    EmptyLabel,

    /// A relation referenced an id this builder never issued.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// A fixed-arity relation got the wrong number of endpoints.
    #[error("{kind} takes {expected} endpoints, found {found}")]
    ArityMismatch {
        kind: RelationKind,
        expected: usize,
        found: usize,
    },

    /// A relation without endpoints.
    #[error("{kind} requires at least one endpoint")]
    NoEndpoints { kind: RelationKind },

    /// The arena ran out of 32-bit indices.
    #[error("structure exceeds {0} entities")]
    CapacityExceeded(u32),
}

/// Result type for structure construction.
pub type StructureResult<T> = Result<T, StructureError>;
