//! Error types for the scenario framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a fixture file.
    #[error("failed to parse fixture '{path}': {message}")]
    FixtureParse { path: PathBuf, message: String },

    /// Assertion failed.
    #[error("assertion failed for case '{case}': {message}")]
    AssertionFailed { case: String, message: String },

    /// Case not found in the fixture.
    #[error("case '{case}' not found in fixture")]
    CaseNotFound { case: String },

    /// No fixture given.
    #[error("fixture not specified for scenario '{scenario}'")]
    MissingFixture { scenario: String },
}

impl ScenarioError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn fixture_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FixtureParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            case: case.into(),
            message: message.into(),
        }
    }

    pub fn case_not_found(case: impl Into<String>) -> Self {
        Self::CaseNotFound { case: case.into() }
    }

    pub fn missing_fixture(scenario: impl Into<String>) -> Self {
        Self::MissingFixture {
            scenario: scenario.into(),
        }
    }
}
