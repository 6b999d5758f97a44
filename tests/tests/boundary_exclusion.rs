//! Boundary exclusion scenarios.

use admit_tests::prelude::*;

const BOUNDARY: ConstraintClass = ConstraintClass::BoundaryExclusion;

mod transitive {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("transitive")
            .fixture("boundaries.adm")
            .case("example", |a| {
                a.inadmissible(BOUNDARY)
                    .boundary("A")
                    .chain(&["A", "S1", "S2"])
                    .relations(&["bounds(A, S2)", "member-of(A, S1)", "member-of(S1, S2)"])
                    .labels(&["A", "S1", "S2"])
            })
            .case("example_without_membership", |a| a.admissible().checked(1, 0))
            .case("direct", |a| {
                a.inadmissible(BOUNDARY)
                    .chain(&["A", "S"])
                    .relations(&["bounds(A, S)", "member-of(A, S)"])
            })
            .case("self_bound", |a| {
                a.inadmissible(BOUNDARY)
                    .boundary("A")
                    .chain(&["A"])
                    .relations(&["bounds(A, A)"])
            })
            .case("deep", |a| {
                a.inadmissible(BOUNDARY)
                    .chain(&["B", "L1", "L2", "L3", "L4", "L5", "S"])
            })
            .case("member_of_bounded_member", |a| {
                a.inadmissible(BOUNDARY).chain(&["B", "T", "S"])
            })
            .case("bounded_contains_boundary_reverse", |a| {
                a.admissible().checked(1, 0)
            })
    }

    #[test]
    fn test_membership_is_followed_transitively() {
        scenario().run().unwrap();
    }
}

mod cycles {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("cycles")
            .fixture("boundaries.adm")
            .case("cycle_outside", |a| a.admissible().checked(1, 0))
            .case("cycle_inside", |a| {
                a.inadmissible(BOUNDARY).boundary("A").chain(&["A", "B", "C"])
            })
    }

    #[test]
    fn test_membership_cycles_terminate() {
        scenario().run().unwrap();
    }
}

mod bounded_sets {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("bounded_sets")
            .fixture("boundaries.adm")
            .case("set_target", |a| {
                a.inadmissible(BOUNDARY)
                    .chain(&["B", "S3"])
                    .relations(&["bounds(B, S3)", "member-of(B, S3)"])
                    .report_contains("bounded: S1, S2, S3\n")
            })
            .case("set_admissible", |a| a.admissible().checked(1, 0))
    }

    #[test]
    fn test_any_bounded_member_counts() {
        scenario().run().unwrap();
    }
}

mod chains {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("chains")
            .fixture("boundaries.adm")
            .case("tie_break", |a| a.chain(&["B", "Alpha", "S"]))
            .case("shortest_wins", |a| a.chain(&["B", "Z", "S"]))
    }

    #[test]
    fn test_chain_is_shortest_then_smallest() {
        scenario().run().unwrap();
    }
}

mod limits {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("limits")
            .fixture("boundaries.adm")
            .limits_of(Limits::default().with_max_closure_steps(4))
            .case("deep", |a| a.exhausted(Resource::ClosureSteps))
            .case("self_bound", |a| a.inadmissible(BOUNDARY))
    }

    #[test]
    fn test_closure_budget_is_an_error_not_a_verdict() {
        scenario().run().unwrap();
    }
}
