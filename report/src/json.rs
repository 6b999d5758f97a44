//! JSON witness reports.

use admit_core::RelationKind;
use admit_engine::{Evidence, Witness};
use serde::Serialize;

use crate::ReportResult;

/// Serializable view of a witness.
#[derive(Debug, Clone, Serialize)]
pub struct WitnessReport {
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<CheckedData>,
    pub relations: Vec<RelationData>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckedData {
    pub boundaries: usize,
    pub inversions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationData {
    pub kind: RelationKind,
    pub endpoints: Vec<String>,
}

impl From<&Witness> for WitnessReport {
    fn from(witness: &Witness) -> Self {
        let verdict = witness.verdict().name();
        match witness.evidence() {
            Evidence::Satisfied(checked) => Self {
                verdict,
                class: None,
                checked: Some(CheckedData {
                    boundaries: checked.boundaries,
                    inversions: checked.inversions,
                }),
                relations: Vec::new(),
                labels: Vec::new(),
            },
            Evidence::Violated(violation) => Self {
                verdict,
                class: Some(violation.class().name()),
                checked: None,
                relations: violation
                    .relations()
                    .iter()
                    .map(|r| RelationData {
                        kind: r.kind,
                        endpoints: r.endpoints.clone(),
                    })
                    .collect(),
                labels: violation.labels(),
            },
        }
    }
}

/// Render a witness as pretty-printed JSON.
pub fn render_json(witness: &Witness) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(&WitnessReport::from(witness))?)
}
