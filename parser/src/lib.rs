//! Admit Parser
//!
//! This crate turns Structure Description Language text into a
//! [`Structure`](admit_core::Structure):
//! - Lexing, with procedural words rejected outright
//! - Parsing of node declarations and `member-of`, `bounds`, `inverts` relations
//! - Lowering, which resolves labels in declaration order
//! - Error handling with location information
//!
//! The parser is the only gate for well-formedness. Undeclared labels,
//! duplicate labels, unknown relation kinds and wrong-arity `member-of` or
//! `bounds` relations never reach the engine.

mod ast;
mod error;
mod lexer;
mod lower;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{decode, Lexer, Token, TokenKind, PROCEDURAL_WORDS};
pub use lower::lower;
pub use parser::{parse_description, parse_structure, Parser};
