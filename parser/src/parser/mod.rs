//! Parser for structure descriptions.
//!
//! This module holds parser state and token helpers; item parsing lives in
//! `decl`.

mod decl;

use admit_core::Structure;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from source text.
    pub fn new(input: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    /// Consume the token if it matches.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    pub(crate) fn expect_label(&mut self) -> ParseResult<Label> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                let token = self.advance();
                Ok(Label::new(name, token.span))
            }
            _ => Err(self.unexpected("label")),
        }
    }

    /// Error for the current token, given what was expected instead.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => ParseError::unexpected_eof(token.span, expected),
            _ => ParseError::unexpected_token(token.span, expected, token.kind.name()),
        }
    }

    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end_token = if self.pos > 0 {
            &self.tokens[self.pos - 1]
        } else {
            self.peek()
        };
        Span::new(start.start, end_token.span.end, start.line, start.column)
    }
}

// ==================== PUBLIC API ====================

/// Parse a description into its syntax tree.
pub fn parse_description(input: &str) -> ParseResult<Description> {
    Parser::new(input)?.parse_description()
}

/// Parse a description and lower it into a structure.
pub fn parse_structure(input: &str) -> ParseResult<Structure> {
    crate::lower(&parse_description(input)?)
}

// ==================== TESTS ====================
