//! Engine error types.

use std::fmt;

use admit_graph::GraphError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The resource a validation ran out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Nodes,
    Relations,
    ClosureSteps,
    Memory,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Nodes => "nodes",
            Resource::Relations => "relations",
            Resource::ClosureSteps => "closure steps",
            Resource::Memory => "memory",
        })
    }
}

/// Errors that can occur during validation.
///
/// An inadmissible structure is a verdict, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("resource exhausted: {resource} (limit {limit})")]
    ResourceExhausted { resource: Resource, limit: u64 },
}

impl EngineError {
    pub fn exhausted(resource: Resource, limit: u64) -> Self {
        Self::ResourceExhausted { resource, limit }
    }
}

impl From<GraphError> for EngineError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::BudgetExceeded { limit } => Self::exhausted(Resource::ClosureSteps, limit),
            GraphError::AllocationFailed { requested, .. } => {
                Self::exhausted(Resource::Memory, requested as u64)
            }
        }
    }
}
