//! Descriptions rejected before validation.

use admit_tests::prelude::*;

mod grammar_violations {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("grammar_violations")
            .fixture("grammar.adm")
            .case("undeclared", |a| a.grammar_error("undeclared node 'Ghost'").at(2, 14))
            .case("use_before_declaration", |a| {
                a.grammar_error("undeclared node 'A'").at(1, 11)
            })
            .case("duplicate", |a| {
                a.grammar_error("duplicate node declaration 'A'").at(2, 9)
            })
            .case("unknown_kind", |a| {
                a.grammar_error("unknown relation kind 'contains'").at(2, 1)
            })
            .case("member_of_arity", |a| {
                a.grammar_error("member-of takes 2 endpoints, found 3")
            })
            .case("bounds_arity", |a| a.grammar_error("bounds takes 2 endpoints, found 1"))
            .case("empty_set", |a| a.grammar_error("bounded set must not be empty"))
            .case("set_as_member", |a| a.grammar_error("bounded side of bounds"))
            .case("procedural_loop", |a| {
                a.grammar_error("procedural word 'for'").at(2, 1)
            })
            .case("procedural_time", |a| {
                a.grammar_error("is not permitted in a structure description")
            })
    }

    #[test]
    fn test_ill_formed_descriptions_never_reach_the_engine() {
        scenario().run().unwrap();
    }
}

mod syntax_errors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("syntax_errors")
            .fixture("grammar.adm")
            .case("stray_character", |a| a.syntax_error("unexpected character").at(1, 8))
            .case("unclosed", |a| {
                a.syntax_error("unexpected end of input, expected )")
            })
            .case("missing_comma", |a| {
                a.syntax_error("expected node, member-of, bounds, or inverts").at(1, 8)
            })
            .case("keyword_as_label", |a| {
                a.syntax_error("expected label, found bounds")
                    .error_pattern(r"^syntax error at line 1, column 6: ")
            })
    }

    #[test]
    fn test_malformed_text_is_a_syntax_error() {
        scenario().run().unwrap();
    }
}

mod lexical {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("lexical")
            .fixture("grammar.adm")
            .case("comments_and_case", |a| {
                a.inadmissible(ConstraintClass::BoundaryExclusion)
                    .boundary("a")
                    .chain(&["a", "A"])
            })
    }

    #[test]
    fn test_keywords_ignore_case_labels_do_not() {
        scenario().run().unwrap();
    }
}
