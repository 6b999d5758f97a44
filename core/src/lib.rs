//! Admit Core Types
//!
//! This crate provides the data model shared by every stage of the pipeline:
//! - Arena identifiers (NodeId, RelationId)
//! - Entity structures (Node, Relation, RelationKind)
//! - The immutable Structure and its one-pass StructureBuilder
//! - Common error types and messages

mod entity;
mod error;
mod id;
pub mod messages;
mod structure;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use structure::*;
