//! Admissibility checking.

use std::collections::BTreeMap;

use admit_core::{NodeId, Relation, RelationKind, Structure};
use admit_graph::{
    member_closure, membership_chain, Budget, InversionIndex, MembershipIndex, NodeSet,
};

use crate::error::{EngineError, EngineResult, Resource};
use crate::violation::{RelationRecord, Violation, Violations};
use crate::witness::{Checked, Witness};
use crate::Limits;

/// Validate a structure with default limits.
pub fn validate(structure: &Structure) -> EngineResult<Witness> {
    Engine::default().validate(structure)
}

/// Admissibility engine.
///
/// Holds only its limits; every call to [`Engine::validate`] is independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    limits: Limits,
}

impl Engine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Evaluate every constraint class and return the witness.
    pub fn validate(&self, structure: &Structure) -> EngineResult<Witness> {
        self.check_size(structure)?;
        tracing::debug!(
            nodes = structure.node_count(),
            relations = structure.relation_count(),
            "validating structure"
        );

        let mut checker = Checker {
            structure,
            budget: Budget::new(self.limits.max_closure_steps),
            violations: Violations::new(),
        };
        let boundaries = checker.check_boundaries()?;
        let inversions = checker.check_inversions()?;

        let found = checker.violations.len();
        let witness = match checker.violations.into_first() {
            Some(violation) => Witness::inadmissible(violation),
            None => Witness::admissible(Checked {
                boundaries,
                inversions,
            }),
        };
        tracing::debug!(
            verdict = %witness.verdict(),
            violations = found,
            "validation finished"
        );
        Ok(witness)
    }

    fn check_size(&self, structure: &Structure) -> EngineResult<()> {
        if structure.node_count() > self.limits.max_nodes {
            return Err(EngineError::exhausted(
                Resource::Nodes,
                self.limits.max_nodes as u64,
            ));
        }
        if structure.relation_count() > self.limits.max_relations {
            return Err(EngineError::exhausted(
                Resource::Relations,
                self.limits.max_relations as u64,
            ));
        }
        Ok(())
    }
}

/// State of one validation run.
struct Checker<'s> {
    structure: &'s Structure,
    budget: Budget,
    violations: Violations,
}

impl Checker<'_> {
    // ==================== BOUNDARY EXCLUSION ====================

    /// Returns the number of distinct boundaries checked.
    fn check_boundaries(&mut self) -> EngineResult<usize> {
        let structure = self.structure;

        let mut boundaries: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for relation in structure.relations_of_kind(RelationKind::Bounds) {
            if let (Some(boundary), Some(bounded)) = (relation.source(), relation.target()) {
                boundaries.entry(boundary).or_default().push(bounded);
            }
        }
        if boundaries.is_empty() {
            return Ok(0);
        }

        let index = MembershipIndex::build(structure)?;
        for (&boundary, bounded) in boundaries.iter_mut() {
            bounded.sort_by(|a, b| structure.label(*a).cmp(structure.label(*b)));
            bounded.dedup();

            let closure = member_closure(&index, bounded, &mut self.budget)?;
            if !closure.contains(boundary) {
                continue;
            }

            let mut targets = NodeSet::with_capacity(structure.node_count())?;
            for &node in bounded.iter() {
                targets.insert(node);
            }
            if let Some(chain) = membership_chain(&index, boundary, &targets, &mut self.budget)? {
                let violation = self.boundary_violation(boundary, bounded, &chain);
                self.violations.push(violation);
            }
        }

        Ok(boundaries.len())
    }

    fn boundary_violation(&self, boundary: NodeId, bounded: &[NodeId], chain: &[NodeId]) -> Violation {
        let label = |id: NodeId| self.structure.label(id).to_string();

        let reached = chain.last().copied().unwrap_or(boundary);
        let mut relations = vec![RelationRecord::new(
            RelationKind::Bounds,
            vec![label(boundary), label(reached)],
        )];
        relations.extend(chain.windows(2).map(|pair| {
            RelationRecord::new(RelationKind::MemberOf, vec![label(pair[0]), label(pair[1])])
        }));

        Violation::BoundaryMembership {
            boundary: label(boundary),
            bounded: bounded.iter().map(|&id| label(id)).collect(),
            chain: chain.iter().map(|&id| label(id)).collect(),
            relations,
        }
    }

    // ==================== INVERSION ATOMICITY ====================

    /// Returns the number of `inverts` relations checked.
    fn check_inversions(&mut self) -> EngineResult<usize> {
        let structure = self.structure;
        let mut checked = 0;

        for relation in structure.relations_of_kind(RelationKind::Inverts) {
            checked += 1;
            let distinct_pair = matches!(relation.endpoints.as_slice(), [x, y] if x != y);
            if !distinct_pair {
                let record = self.record(relation);
                self.violations.push(Violation::InversionArity {
                    endpoints: record.endpoints.clone(),
                    relation: record,
                });
            }
        }
        if checked == 0 {
            return Ok(0);
        }

        // Participation is counted across the whole structure
        let index = InversionIndex::build(structure)?;
        for node in index.shared_nodes() {
            let mut records = index
                .relations_of(node)
                .iter()
                .filter_map(|&id| structure.get_relation(id))
                .map(|relation| self.record(relation))
                .collect::<Vec<_>>();
            records.sort_by_cached_key(|r| (r.signature(), r.endpoints.clone()));

            let mut records = records.into_iter();
            if let (Some(first), Some(second)) = (records.next(), records.next()) {
                self.violations.push(Violation::InversionOverlap {
                    node: structure.label(node).to_string(),
                    relations: [first, second],
                });
            }
        }

        Ok(checked)
    }

    fn record(&self, relation: &Relation) -> RelationRecord {
        RelationRecord::new(
            relation.kind,
            relation
                .endpoints
                .iter()
                .map(|&id| self.structure.label(id).to_string())
                .collect(),
        )
    }
}
