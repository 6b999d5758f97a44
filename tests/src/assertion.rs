//! Assertion types and builders for verifying case outcomes.

use std::fmt::Debug;

use admit_engine::{Checked, ConstraintClass, EngineError, Resource, Verdict, Violation, Witness};
use admit_parser::ParseErrorKind;

use crate::error::{ScenarioError, ScenarioResult};
use crate::runner::{CaseFailure, Outcome};

/// A complete assertion for a case outcome.
#[derive(Debug, Default)]
pub struct Assertion {
    // Verdict assertions
    pub verdict: Option<Verdict>,
    pub class: Option<ConstraintClass>,
    pub checked: Option<Checked>,

    // Evidence assertions
    pub boundary: Option<String>,
    pub chain: Option<Vec<String>>,
    pub shared: Option<String>,
    pub relations: Option<Vec<String>>,
    pub labels: Option<Vec<String>>,

    // Report assertions
    pub report: Option<String>,
    pub report_contains: Vec<String>,

    // Failure assertions
    pub grammar_error: Option<String>,
    pub syntax_error: Option<String>,
    pub error_at: Option<(usize, usize)>,
    pub error_pattern: Option<String>,
    pub exhausted: Option<Resource>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    fn expects_failure(&self) -> bool {
        self.grammar_error.is_some()
            || self.syntax_error.is_some()
            || self.error_at.is_some()
            || self.error_pattern.is_some()
            || self.exhausted.is_some()
    }

    /// Verify the assertion against an outcome.
    pub fn verify(&self, case: &str, outcome: &Outcome) -> ScenarioResult<()> {
        if self.expects_failure() {
            return match outcome {
                Ok(witness) => Err(ScenarioError::assertion_failed(
                    case,
                    format!(
                        "expected failure, but case was {}",
                        witness.verdict()
                    ),
                )),
                Err(failure) => self.verify_failure(case, failure),
            };
        }

        let witness = outcome
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(case, format!("case failed: {}", e)))?;
        self.verify_witness(case, witness)
    }

    fn verify_failure(&self, case: &str, failure: &CaseFailure) -> ScenarioResult<()> {
        let message = failure.to_string();

        for (expected, kind) in [
            (&self.grammar_error, ParseErrorKind::Grammar),
            (&self.syntax_error, ParseErrorKind::Syntax),
        ] {
            let Some(expected) = expected else { continue };
            match failure {
                CaseFailure::Parse(e) if e.kind == kind && e.message.contains(expected) => {}
                _ => {
                    return Err(ScenarioError::assertion_failed(
                        case,
                        format!(
                            "expected {} containing '{}', got: {}",
                            kind.name(),
                            expected,
                            message
                        ),
                    ))
                }
            }
        }

        if let Some((line, column)) = self.error_at {
            match failure {
                CaseFailure::Parse(e) if e.line() == line && e.column() == column => {}
                _ => {
                    return Err(ScenarioError::assertion_failed(
                        case,
                        format!(
                            "expected error at line {}, column {}, got: {}",
                            line, column, message
                        ),
                    ))
                }
            }
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(case, format!("invalid regex pattern: {}", e))
            })?;
            if !re.is_match(&message) {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected error matching '{}', got: {}", pattern, message),
                ));
            }
        }

        if let Some(expected) = self.exhausted {
            match failure {
                CaseFailure::Engine(EngineError::ResourceExhausted { resource, .. })
                    if *resource == expected => {}
                _ => {
                    return Err(ScenarioError::assertion_failed(
                        case,
                        format!("expected {} to be exhausted, got: {}", expected, message),
                    ))
                }
            }
        }

        Ok(())
    }

    fn verify_witness(&self, case: &str, witness: &Witness) -> ScenarioResult<()> {
        expect(case, "verdict", &self.verdict, witness.verdict())?;
        expect(case, "class", &self.class.map(Some), witness.class())?;
        expect(case, "checked", &self.checked.map(Some), witness.checked())?;

        let violation = witness.violation();
        expect(
            case,
            "boundary",
            &self.boundary.clone().map(Some),
            match violation {
                Some(Violation::BoundaryMembership { boundary, .. }) => Some(boundary.clone()),
                _ => None,
            },
        )?;
        expect(
            case,
            "chain",
            &self.chain.clone().map(Some),
            match violation {
                Some(Violation::BoundaryMembership { chain, .. }) => Some(chain.clone()),
                _ => None,
            },
        )?;
        expect(
            case,
            "shared node",
            &self.shared.clone().map(Some),
            match violation {
                Some(Violation::InversionOverlap { node, .. }) => Some(node.clone()),
                _ => None,
            },
        )?;
        expect(
            case,
            "relations",
            &self.relations,
            violation
                .map(|v| v.relations().iter().map(|r| r.to_string()).collect::<Vec<_>>())
                .unwrap_or_default(),
        )?;
        expect(
            case,
            "labels",
            &self.labels,
            violation.map(Violation::labels).unwrap_or_default(),
        )?;

        if self.report.is_some() || !self.report_contains.is_empty() {
            let text = admit_report::render_text(witness);
            expect(case, "report", &self.report, text.clone())?;
            for fragment in &self.report_contains {
                if !text.contains(fragment.as_str()) {
                    return Err(ScenarioError::assertion_failed(
                        case,
                        format!("expected report containing '{}', got:\n{}", fragment, text),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Compare an optional expectation against the actual value.
fn expect<T: PartialEq + Debug>(
    case: &str,
    what: &str,
    expected: &Option<T>,
    actual: T,
) -> ScenarioResult<()> {
    match expected {
        Some(expected) if *expected != actual => Err(ScenarioError::assertion_failed(
            case,
            format!("expected {} {:?}, got {:?}", what, expected, actual),
        )),
        _ => Ok(()),
    }
}

/// Builder for creating assertions.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Verdict ==========

    pub fn admissible(mut self) -> Self {
        self.assertion.verdict = Some(Verdict::Admissible);
        self
    }

    /// Assert an inadmissible verdict for the given class.
    pub fn inadmissible(mut self, class: ConstraintClass) -> Self {
        self.assertion.verdict = Some(Verdict::Inadmissible);
        self.assertion.class = Some(class);
        self
    }

    /// Assert an inadmissible verdict of any class.
    pub fn inadmissible_any(mut self) -> Self {
        self.assertion.verdict = Some(Verdict::Inadmissible);
        self
    }

    /// Assert the evidence of an admissible verdict.
    pub fn checked(mut self, boundaries: usize, inversions: usize) -> Self {
        self.assertion.checked = Some(Checked {
            boundaries,
            inversions,
        });
        self
    }

    // ========== Evidence ==========

    pub fn boundary(mut self, label: &str) -> Self {
        self.assertion.boundary = Some(label.to_string());
        self
    }

    /// Assert the membership chain, boundary first.
    pub fn chain(mut self, labels: &[&str]) -> Self {
        self.assertion.chain = Some(labels.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Assert the node shared by two inversions.
    pub fn shared(mut self, label: &str) -> Self {
        self.assertion.shared = Some(label.to_string());
        self
    }

    /// Assert the offending relations, in `kind(a, b)` form and report order.
    pub fn relations(mut self, relations: &[&str]) -> Self {
        self.assertion.relations = Some(relations.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.assertion.labels = Some(labels.iter().map(|s| s.to_string()).collect());
        self
    }

    // ========== Report ==========

    /// Assert the exact text report.
    pub fn report(mut self, text: &str) -> Self {
        self.assertion.report = Some(text.to_string());
        self
    }

    pub fn report_contains(mut self, fragment: &str) -> Self {
        self.assertion.report_contains.push(fragment.to_string());
        self
    }

    // ========== Failures ==========

    /// Assert a grammar violation whose message contains `fragment`.
    pub fn grammar_error(mut self, fragment: &str) -> Self {
        self.assertion.grammar_error = Some(fragment.to_string());
        self
    }

    /// Assert a syntax error whose message contains `fragment`.
    pub fn syntax_error(mut self, fragment: &str) -> Self {
        self.assertion.syntax_error = Some(fragment.to_string());
        self
    }

    /// Assert the position of a parse error.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.assertion.error_at = Some((line, column));
        self
    }

    /// Assert that the failure message matches a regex.
    pub fn error_pattern(mut self, pattern: &str) -> Self {
        self.assertion.error_pattern = Some(pattern.to_string());
        self
    }

    pub fn exhausted(mut self, resource: Resource) -> Self {
        self.assertion.exhausted = Some(resource);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::evaluate;
    use admit_engine::Limits;

    fn outcome(source: &str) -> Outcome {
        evaluate(source, Limits::default())
    }

    #[test]
    fn test_verdict_mismatch_fails() {
        // GIVEN
        let assertion = AssertionBuilder::new().admissible().build();

        // WHEN
        let result = assertion.verify("case", &outcome("node A; bounds(A, A);"));

        // THEN
        let err = result.unwrap_err().to_string();
        assert!(err.contains("expected verdict Admissible"), "error was: {}", err);
    }

    #[test]
    fn test_expected_failure_but_succeeded() {
        let assertion = AssertionBuilder::new().grammar_error("undeclared").build();

        assert!(assertion.verify("case", &outcome("node A;")).is_err());
    }

    #[test]
    fn test_grammar_error_kind_is_checked() {
        // GIVEN - a syntax error, not a grammar violation
        let assertion = AssertionBuilder::new().grammar_error("expected").build();

        // THEN
        assert!(assertion.verify("case", &outcome("node A; bounds(A")).is_err());
    }

    #[test]
    fn test_error_pattern() {
        let assertion = AssertionBuilder::new()
            .error_pattern(r"line \d+, column \d+")
            .build();

        assert!(assertion
            .verify("case", &outcome("node A;\nmember-of(A, B);"))
            .is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let assertion = AssertionBuilder::new().error_pattern("(unclosed").build();

        let err = assertion
            .verify("case", &outcome("node A; node A;"))
            .unwrap_err();
        assert!(err.to_string().contains("invalid regex pattern"));
    }

    #[test]
    fn test_evidence_on_wrong_class_fails() {
        // GIVEN - an inversion violation has no boundary
        let assertion = AssertionBuilder::new().boundary("X").build();

        // THEN
        assert!(assertion
            .verify("case", &outcome("node X, Y, Z; inverts(X, Y, Z);"))
            .is_err());
    }
}
