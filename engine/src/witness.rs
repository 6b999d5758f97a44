//! The verdict and the evidence that accompanies it.

use std::fmt;

use crate::{ConstraintClass, Violation};

/// Exactly one of two outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Admissible,
    Inadmissible,
}

impl Verdict {
    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Admissible => admit_core::messages::VERDICT_ADMISSIBLE,
            Verdict::Inadmissible => admit_core::messages::VERDICT_INADMISSIBLE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an admissible run checked and found satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checked {
    /// Distinct boundary nodes.
    pub boundaries: usize,
    /// `inverts` relations.
    pub inversions: usize,
}

/// Evidence behind a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Satisfied(Checked),
    Violated(Violation),
}

/// The result of validating a structure.
///
/// The verdict is derived from the evidence, so an inadmissible witness
/// always names its violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    evidence: Evidence,
}

impl Witness {
    pub fn admissible(checked: Checked) -> Self {
        Self {
            evidence: Evidence::Satisfied(checked),
        }
    }

    pub fn inadmissible(violation: Violation) -> Self {
        Self {
            evidence: Evidence::Violated(violation),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self.evidence {
            Evidence::Satisfied(_) => Verdict::Admissible,
            Evidence::Violated(_) => Verdict::Inadmissible,
        }
    }

    pub fn is_admissible(&self) -> bool {
        self.verdict() == Verdict::Admissible
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    pub fn violation(&self) -> Option<&Violation> {
        match &self.evidence {
            Evidence::Violated(v) => Some(v),
            Evidence::Satisfied(_) => None,
        }
    }

    pub fn checked(&self) -> Option<Checked> {
        match self.evidence {
            Evidence::Satisfied(checked) => Some(checked),
            Evidence::Violated(_) => None,
        }
    }

    /// The violated class, if any.
    pub fn class(&self) -> Option<ConstraintClass> {
        self.violation().map(Violation::class)
    }
}
