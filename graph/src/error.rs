//! Graph error types.

use thiserror::Error;

/// Errors that can occur while traversing a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Traversal needed more steps than the budget allows.
    #[error("closure step budget of {limit} exhausted")]
    BudgetExceeded { limit: u64 },

    /// An allocation could not be reserved.
    #[error("could not allocate {what} for {requested} entries")]
    AllocationFailed { what: &'static str, requested: usize },
}

impl GraphError {
    pub fn allocation(what: &'static str, requested: usize) -> Self {
        Self::AllocationFailed { what, requested }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Reserve `additional` slots or report the allocation failure.
pub(crate) fn try_reserve<T>(
    vec: &mut Vec<T>,
    additional: usize,
    what: &'static str,
) -> GraphResult<()> {
    vec.try_reserve(additional)
        .map_err(|_| GraphError::allocation(what, additional))
}
