//! Common messages used across components.
//!
//! These constants keep parser diagnostics and verdict wording consistent
//! between the library crates, the command and the scenario framework.

/// Verdict string for a structure that violates nothing.
pub const VERDICT_ADMISSIBLE: &str = "admissible";

/// Verdict string for a structure with at least one violation.
pub const VERDICT_INADMISSIBLE: &str = "inadmissible";

/// Error: a relation names a label that was not declared before it.
pub const ERR_UNDECLARED_LABEL: &str = "undeclared node";

/// Error: a label was declared twice.
pub const ERR_DUPLICATE_LABEL: &str = "duplicate node declaration";

/// Error: a relation kind outside member-of, bounds, inverts.
pub const ERR_UNKNOWN_RELATION: &str = "unknown relation kind";

/// Error: a procedural word appeared in a description.
pub const ERR_PROCEDURAL_WORD: &str = "is not permitted in a structure description";

/// Error: `bounds(b, {})`.
pub const ERR_EMPTY_BOUNDED_SET: &str = "bounded set must not be empty";
