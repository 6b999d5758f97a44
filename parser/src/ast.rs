//! Abstract Syntax Tree types for structure descriptions.

use admit_core::RelationKind;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// A whole description, items in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Description {
    pub items: Vec<Item>,
}

impl Description {
    /// Node declarations, in source order.
    pub fn node_decls(&self) -> impl Iterator<Item = &NodeDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Nodes(decl) => Some(decl),
            Item::Relation(_) => None,
        })
    }

    /// Relation declarations, in source order.
    pub fn relation_decls(&self) -> impl Iterator<Item = &RelationDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Relation(decl) => Some(decl),
            Item::Nodes(_) => None,
        })
    }
}

/// A top-level item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Nodes(NodeDecl),
    Relation(RelationDecl),
}

/// A label occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub name: String,
    pub span: Span,
}

impl Label {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// `node A, B, C;`
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecl {
    pub labels: Vec<Label>,
    pub span: Span,
}

/// One argument of a relation.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// A single label.
    Label(Label),
    /// `{A, B}`, only valid as the bounded side of `bounds`.
    Set(Vec<Label>, Span),
}

impl Endpoint {
    pub fn span(&self) -> Span {
        match self {
            Endpoint::Label(label) => label.span,
            Endpoint::Set(_, span) => *span,
        }
    }

    /// Labels named by this endpoint, in source order.
    pub fn labels(&self) -> &[Label] {
        match self {
            Endpoint::Label(label) => std::slice::from_ref(label),
            Endpoint::Set(labels, _) => labels,
        }
    }
}

/// `member-of(A, S);`, `bounds(B, {S1, S2});`, `inverts(X, Y);`
#[derive(Debug, Clone, PartialEq)]
pub struct RelationDecl {
    pub kind: RelationKind,
    pub endpoints: Vec<Endpoint>,
    pub span: Span,
}
