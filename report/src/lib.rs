//! Admit Report
//!
//! Witness rendering. A report exposes the verdict, the violated class, the
//! offending relations and the labels involved, and nothing else.

mod json;
mod text;

use std::fmt;

use admit_engine::Witness;
use thiserror::Error;

pub use json::{render_json, WitnessReport};
pub use text::render_text;

/// Errors that can occur while rendering a witness.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize witness: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for rendering.
pub type ReportResult<T> = Result<T, ReportError>;

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a witness in the given format.
pub fn render(witness: &Witness, format: Format) -> ReportResult<String> {
    match format {
        Format::Text => Ok(render_text(witness)),
        Format::Json => render_json(witness),
    }
}
