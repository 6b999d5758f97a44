//! Traversal step budget.

use crate::{GraphError, GraphResult};

/// Counts traversal steps against a fixed limit.
///
/// One budget is shared by every traversal of a single validation run.
#[derive(Debug, Clone)]
pub struct Budget {
    limit: u64,
    spent: u64,
}

impl Budget {
    pub fn new(limit: u64) -> Self {
        Self { limit, spent: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(u64::MAX)
    }

    /// Charge `steps`, failing once the total passes the limit.
    pub fn charge(&mut self, steps: u64) -> GraphResult<()> {
        self.spent = self.spent.saturating_add(steps);
        if self.spent > self.limit {
            return Err(GraphError::BudgetExceeded { limit: self.limit });
        }
        Ok(())
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
