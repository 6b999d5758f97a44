//! The immutable structure and its builder.
//!
//! A structure is assembled in one pass by [`StructureBuilder`] and frozen by
//! [`StructureBuilder::build`]. Nothing on [`Structure`] takes `&mut self`;
//! validating a changed description means building a fresh structure.

use std::collections::HashMap;

use crate::{Node, NodeId, Relation, RelationId, RelationKind, StructureError, StructureResult};

/// An immutable set of nodes and the relations among them.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    nodes: Vec<Node>,
    relations: Vec<Relation>,
    labels: HashMap<String, NodeId>,
}

impl Structure {
    /// Start building a structure.
    pub fn builder() -> StructureBuilder {
        StructureBuilder::new()
    }

    /// Get a node by id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a relation by id.
    pub fn get_relation(&self, id: RelationId) -> Option<&Relation> {
        self.relations.get(id.index())
    }

    /// Label of a node issued by this structure.
    ///
    /// Ids from another structure may resolve to an unrelated node or to `"?"`.
    pub fn label(&self, id: NodeId) -> &str {
        self.get_node(id).map(|n| n.label.as_str()).unwrap_or("?")
    }

    /// Look up a node by label.
    pub fn lookup(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// All nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All relations, in declaration order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Relations of one kind, in declaration order.
    pub fn relations_of_kind(&self, kind: RelationKind) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter().filter(move |r| r.kind == kind)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One-pass builder for a [`Structure`].
///
/// Labels must be declared before any relation refers to them.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    nodes: Vec<Node>,
    relations: Vec<Relation>,
    labels: HashMap<String, NodeId>,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, returning its id.
    pub fn declare_node(&mut self, label: impl Into<String>) -> StructureResult<NodeId> {
        let label = label.into();
        if label.is_empty() {
            return Err(StructureError::EmptyLabel);
        }
        if self.labels.contains_key(&label) {
            return Err(StructureError::DuplicateLabel { label });
        }

        let id = NodeId::new(next_index(self.nodes.len())?);
        self.labels.insert(label.clone(), id);
        self.nodes.push(Node::new(id, label));
        Ok(id)
    }

    /// Look up a node declared so far.
    pub fn lookup(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// Add a relation between previously declared nodes.
    pub fn relate(
        &mut self,
        kind: RelationKind,
        endpoints: Vec<NodeId>,
        line: usize,
    ) -> StructureResult<RelationId> {
        if let Some(unknown) = endpoints
            .iter()
            .find(|id| id.index() >= self.nodes.len())
        {
            return Err(StructureError::UnknownNode(*unknown));
        }

        match kind.fixed_arity() {
            Some(expected) if endpoints.len() != expected => {
                return Err(StructureError::ArityMismatch {
                    kind,
                    expected,
                    found: endpoints.len(),
                });
            }
            None if endpoints.is_empty() => {
                return Err(StructureError::NoEndpoints { kind });
            }
            _ => {}
        }

        let id = RelationId::new(next_index(self.relations.len())?);
        self.relations.push(Relation::new(id, kind, endpoints, line));
        Ok(id)
    }

    /// Freeze the structure.
    pub fn build(self) -> Structure {
        Structure {
            nodes: self.nodes,
            relations: self.relations,
            labels: self.labels,
        }
    }
}

fn next_index(len: usize) -> StructureResult<u32> {
    u32::try_from(len).map_err(|_| StructureError::CapacityExceeded(u32::MAX))
}
