//! Constraint violation types.

use std::fmt;

use admit_core::RelationKind;

/// The constraint class a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintClass {
    /// A boundary is transitively a member of the set it bounds.
    BoundaryExclusion,
    /// An inversion is not a single pairing of two distinct nodes.
    InversionAtomicity,
}

impl ConstraintClass {
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintClass::BoundaryExclusion => "boundary-exclusion",
            ConstraintClass::InversionAtomicity => "inversion-atomicity",
        }
    }
}

impl fmt::Display for ConstraintClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A relation as it appears in a witness: kind and endpoint labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationRecord {
    pub kind: RelationKind,
    pub endpoints: Vec<String>,
}

impl RelationRecord {
    pub fn new(kind: RelationKind, endpoints: Vec<String>) -> Self {
        Self { kind, endpoints }
    }

    /// Endpoint labels, sorted and comma-joined.
    pub fn signature(&self) -> String {
        signature(self.endpoints.iter().map(String::as_str))
    }
}

impl fmt::Display for RelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.endpoints.join(", "))
    }
}

/// A single constraint violation.
///
/// Every field is label-based, so two isomorphic structures with the same
/// labels produce equal violations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Violation {
    /// `boundary` is reachable by `member-of` chains into its own bounded set.
    BoundaryMembership {
        boundary: String,
        /// The whole bounded set, sorted.
        bounded: Vec<String>,
        /// Shortest chain from the boundary to the bounded node it reaches.
        chain: Vec<String>,
        /// The `bounds` relation followed by the chain's `member-of` edges.
        relations: Vec<RelationRecord>,
    },
    /// An inversion without exactly two distinct endpoints.
    InversionArity {
        endpoints: Vec<String>,
        relation: RelationRecord,
    },
    /// A node taking part in two inversions.
    InversionOverlap {
        node: String,
        relations: [RelationRecord; 2],
    },
}

/// Total order used to pick the reported violation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey {
    pub primary: String,
    pub signature: String,
    pub rank: u8,
}

impl Violation {
    pub fn class(&self) -> ConstraintClass {
        match self {
            Violation::BoundaryMembership { .. } => ConstraintClass::BoundaryExclusion,
            Violation::InversionArity { .. } | Violation::InversionOverlap { .. } => {
                ConstraintClass::InversionAtomicity
            }
        }
    }

    /// The offending relations, in report order.
    pub fn relations(&self) -> &[RelationRecord] {
        match self {
            Violation::BoundaryMembership { relations, .. } => relations,
            Violation::InversionArity { relation, .. } => std::slice::from_ref(relation),
            Violation::InversionOverlap { relations, .. } => relations,
        }
    }

    /// Every node label involved, sorted and deduplicated.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .relations()
            .iter()
            .flat_map(|r| r.endpoints.iter().cloned())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }

    pub fn order_key(&self) -> OrderKey {
        match self {
            Violation::BoundaryMembership {
                boundary, bounded, ..
            } => OrderKey {
                primary: boundary.clone(),
                signature: signature(bounded.iter().map(String::as_str)),
                rank: 0,
            },
            Violation::InversionArity { endpoints, .. } => OrderKey {
                primary: endpoints.iter().min().cloned().unwrap_or_default(),
                signature: signature(endpoints.iter().map(String::as_str)),
                rank: 1,
            },
            Violation::InversionOverlap { node, relations } => {
                let mut signatures = [relations[0].signature(), relations[1].signature()];
                signatures.sort();
                OrderKey {
                    primary: node.clone(),
                    signature: signatures.join(";"),
                    rank: 2,
                }
            }
        }
    }
}

fn signature<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let mut labels: Vec<&str> = labels.collect();
    labels.sort_unstable();
    labels.join(",")
}

/// Collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// The violation with the smallest order key.
    ///
    /// Equal keys fall back to comparing the violations themselves, so the
    /// choice never depends on discovery order.
    pub fn first(&self) -> Option<&Violation> {
        self.violations
            .iter()
            .min_by(|a, b| a.order_key().cmp(&b.order_key()).then_with(|| a.cmp(b)))
    }

    /// Consume the collection, keeping only [`first`](Self::first).
    pub fn into_first(self) -> Option<Violation> {
        self.violations
            .into_iter()
            .min_by(|a, b| a.order_key().cmp(&b.order_key()).then_with(|| a.cmp(b)))
    }
}
