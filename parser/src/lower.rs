//! Lowering from syntax tree to structure.
//!
//! Items are lowered in source order, so a relation can only name labels
//! declared above it.

use admit_core::messages::{ERR_DUPLICATE_LABEL, ERR_UNDECLARED_LABEL};
use admit_core::{NodeId, RelationKind, Structure, StructureBuilder, StructureError};

use crate::ast::*;
use crate::error::{ParseError, ParseResult};

/// Lower a parsed description into an immutable structure.
pub fn lower(description: &Description) -> ParseResult<Structure> {
    let mut builder = Structure::builder();

    for item in &description.items {
        match item {
            Item::Nodes(decl) => declare_nodes(&mut builder, decl)?,
            Item::Relation(decl) => add_relation(&mut builder, decl)?,
        }
    }

    let structure = builder.build();
    tracing::trace!(
        nodes = structure.node_count(),
        relations = structure.relation_count(),
        "lowered description"
    );
    Ok(structure)
}

fn declare_nodes(builder: &mut StructureBuilder, decl: &NodeDecl) -> ParseResult<()> {
    for label in &decl.labels {
        builder
            .declare_node(label.name.as_str())
            .map_err(|e| match e {
                StructureError::DuplicateLabel { label: name } => ParseError::grammar(
                    format!("{} '{}'", ERR_DUPLICATE_LABEL, name),
                    label.span,
                )
                .with_found(name),
                other => ParseError::grammar(other.to_string(), label.span),
            })?;
    }
    Ok(())
}

fn add_relation(builder: &mut StructureBuilder, decl: &RelationDecl) -> ParseResult<()> {
    let line = decl.span.line;
    let mut resolved: Vec<Vec<NodeId>> = Vec::with_capacity(decl.endpoints.len());
    for endpoint in &decl.endpoints {
        let ids = endpoint
            .labels()
            .iter()
            .map(|label| resolve(builder, label))
            .collect::<ParseResult<Vec<_>>>()?;
        resolved.push(ids);
    }

    let relate = |builder: &mut StructureBuilder, endpoints: Vec<NodeId>| {
        builder
            .relate(decl.kind, endpoints, line)
            .map(|_| ())
            .map_err(|e| ParseError::grammar(e.to_string(), decl.span))
    };

    // `bounds(B, {S1, S2})` is one relation per bounded node
    if decl.kind == RelationKind::Bounds {
        if let [boundary, bounded] = resolved.as_slice() {
            for &target in bounded {
                for &source in boundary {
                    relate(builder, vec![source, target])?;
                }
            }
            return Ok(());
        }
    }

    relate(builder, resolved.into_iter().flatten().collect())
}

fn resolve(builder: &StructureBuilder, label: &Label) -> ParseResult<NodeId> {
    builder.lookup(&label.name).ok_or_else(|| {
        ParseError::grammar(
            format!("{} '{}'", ERR_UNDECLARED_LABEL, label.name),
            label.span,
        )
        .with_found(label.name.clone())
    })
}
