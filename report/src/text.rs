//! Plain-text witness reports.

use admit_engine::{Checked, Evidence, Violation, Witness};

/// Render a witness as text, one fact per line.
pub fn render_text(witness: &Witness) -> String {
    let mut lines = vec![witness.verdict().to_string()];

    match witness.evidence() {
        Evidence::Satisfied(checked) => lines.push(format_checked(checked)),
        Evidence::Violated(violation) => {
            lines.push(format!("violation: {}", violation.class()));
            match violation {
                Violation::BoundaryMembership {
                    boundary,
                    bounded,
                    chain,
                    ..
                } => {
                    lines.push(format!("boundary: {}", boundary));
                    lines.push(format!("bounded: {}", bounded.join(", ")));
                    lines.push(format!("chain: {}", chain.join(" -> ")));
                }
                Violation::InversionArity { endpoints, .. } => {
                    lines.push(format!(
                        "inversion: {} endpoints, expected 2 distinct",
                        endpoints.len()
                    ));
                }
                Violation::InversionOverlap { node, .. } => {
                    lines.push(format!("shared: {}", node));
                }
            }
            lines.push("relations:".to_string());
            for relation in violation.relations() {
                lines.push(format!("  {}", relation));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_checked(checked: &Checked) -> String {
    format!(
        "checked: {} {}, {} {}",
        checked.boundaries,
        plural(checked.boundaries, "boundary", "boundaries"),
        checked.inversions,
        plural(checked.inversions, "inversion", "inversions"),
    )
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
