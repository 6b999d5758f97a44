//! # admit command
//!
//! Reads one description from a file or stdin, validates it and prints the
//! witness report. The exit code carries the verdict.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use admit_engine::{Engine, Limits, Verdict};
use admit_parser::{decode, parse_structure};
use admit_report::{render, Format};

/// Exit codes, following the BSD `sysexits` values where one fits.
pub mod exit {
    pub const ADMISSIBLE: u8 = 0;
    pub const INADMISSIBLE: u8 = 1;
    /// Syntax error or grammar violation.
    pub const DATA_ERR: u8 = 65;
    /// Input could not be read.
    pub const NO_INPUT: u8 = 66;
    /// Resource exhausted, or the report could not be rendered.
    pub const SOFTWARE: u8 = 70;
    /// The report could not be written.
    pub const IO_ERR: u8 = 74;
}

/// Decide whether a structure description is admissible.
///
/// Prints the witness on stdout and exits 0 when admissible, 1 when not.
#[derive(Parser, Debug)]
#[command(name = "admit", version, about, long_about = None)]
pub struct Cli {
    /// Description file. Omit or pass `-` to read stdin.
    pub input: Option<PathBuf>,

    /// Witness rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Largest number of nodes to accept.
    #[arg(long, env = "ADMIT_MAX_NODES", default_value_t = Limits::DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Largest number of relations to accept.
    #[arg(long, env = "ADMIT_MAX_RELATIONS", default_value_t = Limits::DEFAULT_MAX_RELATIONS)]
    pub max_relations: usize,

    /// Traversal steps allowed for transitive closure.
    #[arg(
        long,
        env = "ADMIT_MAX_CLOSURE_STEPS",
        default_value_t = Limits::DEFAULT_MAX_CLOSURE_STEPS
    )]
    pub max_closure_steps: u64,

    /// Enable verbose logging on stderr. Repeat for more (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        }
    }
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits::new()
            .with_max_nodes(self.max_nodes)
            .with_max_relations(self.max_relations)
            .with_max_closure_steps(self.max_closure_steps)
    }

    /// The input path, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Run one validation and return the process exit code.
///
/// The report goes to `out`; diagnostics go to `err`.
pub fn run<R: Read, W: Write, E: Write>(cli: &Cli, stdin: R, out: &mut W, err: &mut E) -> u8 {
    let (name, bytes) = match read_input(cli.input_path(), stdin) {
        Ok(input) => input,
        Err(e) => {
            let _ = writeln!(err, "error: {:#}", e);
            return exit::NO_INPUT;
        }
    };
    let format = Format::from(cli.format);
    tracing::debug!(input = %name, bytes = bytes.len(), %format, "read description");

    let structure = match decode(&bytes).and_then(parse_structure) {
        Ok(structure) => structure,
        Err(e) => {
            let _ = writeln!(err, "{}: {}", name, e);
            return exit::DATA_ERR;
        }
    };

    let witness = match Engine::new(cli.limits()).validate(&structure) {
        Ok(witness) => witness,
        Err(e) => {
            let _ = writeln!(err, "{}: {}", name, e);
            return exit::SOFTWARE;
        }
    };

    let report = match render(&witness, format) {
        Ok(report) => report,
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            return exit::SOFTWARE;
        }
    };
    if let Err(e) = out.write_all(report.as_bytes()).and_then(|_| out.flush()) {
        let _ = writeln!(err, "error: failed to write report: {}", e);
        return exit::IO_ERR;
    }

    match witness.verdict() {
        Verdict::Admissible => exit::ADMISSIBLE,
        Verdict::Inadmissible => exit::INADMISSIBLE,
    }
}

/// Read the whole description, returning a display name and the raw bytes.
///
/// Decoding is left to the parser so bad text is a syntax error, not a read
/// failure.
fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> anyhow::Result<(String, Vec<u8>)> {
    match path {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), bytes))
        }
        None => {
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            Ok(("<stdin>".to_string(), bytes))
        }
    }
}
