//! Transitive `member-of` closure.
//!
//! Both traversals are breadth-first over label-sorted adjacency. The set a
//! closure returns does not depend on traversal order; the chain a search
//! returns is the shortest one, ties broken by comparing label sequences.

use std::collections::VecDeque;

use admit_core::NodeId;

use crate::error::{try_reserve, GraphResult};
use crate::{Budget, MembershipIndex, NodeSet};

/// Every node whose `member-of` chains reach one of `seeds`, plus the seeds.
pub fn member_closure(
    index: &MembershipIndex,
    seeds: &[NodeId],
    budget: &mut Budget,
) -> GraphResult<NodeSet> {
    let mut closure = NodeSet::with_capacity(index.node_count())?;
    let mut queue = VecDeque::new();
    queue
        .try_reserve(seeds.len())
        .map_err(|_| crate::GraphError::allocation("closure queue", seeds.len()))?;

    for &seed in seeds {
        if closure.insert(seed) {
            queue.push_back(seed);
        }
    }

    while let Some(node) = queue.pop_front() {
        let members = index.members_of(node);
        budget.charge(1 + members.len() as u64)?;
        for &member in members {
            if closure.insert(member) {
                queue.push_back(member);
            }
        }
    }

    Ok(closure)
}

/// Shortest `member-of` chain from `from` to any node in `targets`.
///
/// The chain starts with `from` and ends with the target reached. When `from`
/// is itself a target the chain is `[from]`.
pub fn membership_chain(
    index: &MembershipIndex,
    from: NodeId,
    targets: &NodeSet,
    budget: &mut Budget,
) -> GraphResult<Option<Vec<NodeId>>> {
    if targets.contains(from) {
        return Ok(Some(vec![from]));
    }

    let node_count = index.node_count();
    let mut parent: Vec<Option<NodeId>> = Vec::new();
    try_reserve(&mut parent, node_count, "chain parents")?;
    parent.resize(node_count, None);

    let mut visited = NodeSet::with_capacity(node_count)?;
    visited.insert(from);
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        let containers = index.containers_of(node);
        budget.charge(1 + containers.len() as u64)?;
        for &container in containers {
            if !visited.insert(container) {
                continue;
            }
            if let Some(slot) = parent.get_mut(container.index()) {
                *slot = Some(node);
            }
            if targets.contains(container) {
                return Ok(Some(unwind(&parent, from, container)));
            }
            queue.push_back(container);
        }
    }

    Ok(None)
}

fn unwind(parent: &[Option<NodeId>], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut chain = vec![to];
    let mut current = to;
    while current != from {
        match parent.get(current.index()).copied().flatten() {
            Some(prev) => {
                chain.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    chain.reverse();
    chain
}
