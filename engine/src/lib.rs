//! Admit Engine
//!
//! Decide whether a structure is admissible.
//!
//! Responsibilities:
//! - Check boundary exclusion over the full transitive `member-of` closure
//! - Check that every inversion is a single atomic pairing
//! - Pick the same reported violation for the same structure, whatever the
//!   declaration order
//! - Surface resource exhaustion as an error, never as a verdict

mod checker;
mod error;
mod limits;
mod violation;
mod witness;

pub use checker::{validate, Engine};
pub use error::{EngineError, EngineResult, Resource};
pub use limits::Limits;
pub use violation::{ConstraintClass, OrderKey, RelationRecord, Violation, Violations};
pub use witness::{Checked, Evidence, Verdict, Witness};
