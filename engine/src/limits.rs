//! Resource limits for a validation run.

/// Upper bounds a validation may consume before it fails with
/// [`EngineError::ResourceExhausted`](crate::EngineError::ResourceExhausted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_nodes: usize,
    pub max_relations: usize,
    /// Traversal steps shared by every closure of one run.
    pub max_closure_steps: u64,
}

impl Limits {
    pub const DEFAULT_MAX_NODES: usize = 1_000_000;
    pub const DEFAULT_MAX_RELATIONS: usize = 4_000_000;
    pub const DEFAULT_MAX_CLOSURE_STEPS: u64 = 64_000_000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }

    pub fn with_max_relations(mut self, max: usize) -> Self {
        self.max_relations = max;
        self
    }

    pub fn with_max_closure_steps(mut self, max: u64) -> Self {
        self.max_closure_steps = max;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_relations: Self::DEFAULT_MAX_RELATIONS,
            max_closure_steps: Self::DEFAULT_MAX_CLOSURE_STEPS,
        }
    }
}
