//! Indexes for global lookups over a structure.

use admit_core::{NodeId, RelationId, RelationKind, Structure};

use crate::error::{try_reserve, GraphResult};

/// Membership index: NodeId -> containers (outbound) and members (inbound).
///
/// Adjacency lists are deduplicated and sorted by label, so every traversal
/// over this index visits neighbours in the same order for the same labels.
#[derive(Debug, Default)]
pub struct MembershipIndex {
    /// `containers[x]` = every y with `member-of(x, y)`.
    containers: Vec<Vec<NodeId>>,
    /// `members[y]` = every x with `member-of(x, y)`.
    members: Vec<Vec<NodeId>>,
}

impl MembershipIndex {
    /// Build the index from every `member-of` relation of a structure.
    pub fn build(structure: &Structure) -> GraphResult<Self> {
        let node_count = structure.node_count();
        let mut containers = empty_lists(node_count, "membership index")?;
        let mut members = empty_lists(node_count, "membership index")?;

        for relation in structure.relations_of_kind(RelationKind::MemberOf) {
            let (Some(member), Some(container)) = (relation.source(), relation.target()) else {
                continue;
            };
            if let Some(list) = containers.get_mut(member.index()) {
                list.push(container);
            }
            if let Some(list) = members.get_mut(container.index()) {
                list.push(member);
            }
        }

        for list in containers.iter_mut().chain(members.iter_mut()) {
            list.sort_by(|a, b| structure.label(*a).cmp(structure.label(*b)));
            list.dedup();
        }

        Ok(Self {
            containers,
            members,
        })
    }

    /// Nodes that `node` is directly a member of.
    pub fn containers_of(&self, node: NodeId) -> &[NodeId] {
        self.containers
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct members of `node`.
    pub fn members_of(&self, node: NodeId) -> &[NodeId] {
        self.members
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.containers.len()
    }
}

/// Inversion index: NodeId -> every `inverts` relation the node takes part in.
#[derive(Debug, Default)]
pub struct InversionIndex {
    participation: Vec<Vec<RelationId>>,
}

impl InversionIndex {
    /// Build the index from every `inverts` relation of a structure.
    ///
    /// A node listed twice in one relation participates in it once.
    pub fn build(structure: &Structure) -> GraphResult<Self> {
        let mut participation = empty_lists(structure.node_count(), "inversion index")?;

        for relation in structure.relations_of_kind(RelationKind::Inverts) {
            for node in &relation.endpoints {
                if let Some(list) = participation.get_mut(node.index()) {
                    if list.last() != Some(&relation.id) {
                        list.push(relation.id);
                    }
                }
            }
        }

        Ok(Self { participation })
    }

    /// Inversions that `node` takes part in, in declaration order.
    pub fn relations_of(&self, node: NodeId) -> &[RelationId] {
        self.participation
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nodes that take part in more than one inversion, in id order.
    pub fn shared_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.participation
            .iter()
            .enumerate()
            .filter(|(_, rels)| rels.len() > 1)
            .map(|(i, _)| NodeId::new(i as u32))
    }
}

fn empty_lists<T>(len: usize, what: &'static str) -> GraphResult<Vec<Vec<T>>> {
    let mut lists = Vec::new();
    try_reserve(&mut lists, len, what)?;
    lists.resize_with(len, Vec::new);
    Ok(lists)
}
