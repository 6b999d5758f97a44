//! Item parsing.
//!
//! Handles the two item forms of a description:
//! - Node declarations: `node A, B;`
//! - Relations: `member-of(A, B);`, `bounds(B, S);`, `bounds(B, {S1, S2});`,
//!   `inverts(X, Y);`

use admit_core::messages::{ERR_EMPTY_BOUNDED_SET, ERR_UNKNOWN_RELATION};
use admit_core::RelationKind;

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse a whole description.
    pub fn parse_description(&mut self) -> ParseResult<Description> {
        let mut items = Vec::new();

        while !self.check(&TokenKind::Eof) {
            items.push(self.parse_item()?);
            // Terminators are optional
            while self.eat(&TokenKind::Semicolon) {}
        }

        Ok(Description { items })
    }

    /// Parse a single item.
    fn parse_item(&mut self) -> ParseResult<Item> {
        let token = self.peek().clone();
        if let Some(kind) = token.kind.relation_kind() {
            return self.parse_relation_decl(kind).map(Item::Relation);
        }

        match &token.kind {
            TokenKind::Node => self.parse_node_decl().map(Item::Nodes),
            TokenKind::Ident(name)
                if matches!(
                    self.tokens.get(self.pos + 1).map(|t| &t.kind),
                    Some(TokenKind::LParen)
                ) =>
            {
                Err(ParseError::grammar(
                    format!(
                        "{} '{}', expected member-of, bounds or inverts",
                        ERR_UNKNOWN_RELATION, name
                    ),
                    token.span,
                )
                .with_found(name.clone()))
            }
            _ => Err(self.unexpected("node, member-of, bounds, or inverts")),
        }
    }

    // ==================== NODE DECLARATION ====================

    /// Parse a node declaration.
    /// Syntax: node Label [, Label]*
    fn parse_node_decl(&mut self) -> ParseResult<NodeDecl> {
        let start = self.expect(&TokenKind::Node)?.span;

        let mut labels = vec![self.expect_label()?];
        while self.eat(&TokenKind::Comma) {
            labels.push(self.expect_label()?);
        }

        let span = self.span_from(start);
        Ok(NodeDecl { labels, span })
    }

    // ==================== RELATION ====================

    /// Parse a relation.
    /// Syntax: kind ( Endpoint [, Endpoint]* )
    fn parse_relation_decl(&mut self, kind: RelationKind) -> ParseResult<RelationDecl> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen)?;

        let mut endpoints = vec![self.parse_endpoint()?];
        while self.eat(&TokenKind::Comma) {
            endpoints.push(self.parse_endpoint()?);
        }
        self.expect(&TokenKind::RParen)?;

        let decl = RelationDecl {
            kind,
            endpoints,
            span: self.span_from(start),
        };
        check_shape(&decl)?;
        Ok(decl)
    }

    /// Parse a label or a braced label set.
    fn parse_endpoint(&mut self) -> ParseResult<Endpoint> {
        if !self.check(&TokenKind::LBrace) {
            return self.expect_label().map(Endpoint::Label);
        }

        let start = self.advance().span;
        if self.check(&TokenKind::RBrace) {
            self.advance();
            return Err(ParseError::grammar(
                ERR_EMPTY_BOUNDED_SET,
                self.span_from(start),
            ));
        }

        let mut labels = vec![self.expect_label()?];
        while self.eat(&TokenKind::Comma) {
            labels.push(self.expect_label()?);
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(Endpoint::Set(labels, self.span_from(start)))
    }
}

/// Reject relation forms the structure model cannot represent.
fn check_shape(decl: &RelationDecl) -> ParseResult<()> {
    if let Some(expected) = decl.kind.fixed_arity() {
        if decl.endpoints.len() != expected {
            return Err(ParseError::grammar(
                format!(
                    "{} takes {} endpoints, found {}",
                    decl.kind,
                    expected,
                    decl.endpoints.len()
                ),
                decl.span,
            ));
        }
    }

    for (position, endpoint) in decl.endpoints.iter().enumerate() {
        let set_allowed = decl.kind == RelationKind::Bounds && position == 1;
        if let Endpoint::Set(_, span) = endpoint {
            if !set_allowed {
                return Err(ParseError::grammar(
                    "a node set is only allowed as the bounded side of bounds",
                    *span,
                ));
            }
        }
    }

    Ok(())
}
