//! Admit Graph
//!
//! Arena-indexed views over a [`Structure`](admit_core::Structure):
//! - Membership and inversion indexes
//! - Dense node sets
//! - Full transitive `member-of` closure and chain reconstruction
//! - A step budget that turns runaway traversal into an error

mod budget;
mod closure;
mod error;
mod index;
mod set;

pub use budget::Budget;
pub use closure::{member_closure, membership_chain};
pub use error::{GraphError, GraphResult};
pub use index::{InversionIndex, MembershipIndex};
pub use set::NodeSet;
