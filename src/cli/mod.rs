//! CLI argument parsing for overlint.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! check is implemented in the `check` module.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Overlint: finds redundant overrides in Spring-style layered YAML configuration.
///
/// Walks a directory tree and, in every folder that contains a base
/// `application.yml`/`application.yaml`, compares each sibling
/// `application-<profile>.yml` overlay against the base. Overlay keys that
/// restate the base value unchanged are reported as findings.
#[derive(Parser, Debug)]
#[command(name = "overlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root folder to scan. Defaults to the current directory.
    pub root: Option<PathBuf>,

    /// Glob patterns for directories to skip (matched against the directory
    /// name and its path relative to the root, e.g. `target,**/node_modules`).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How diagnostics are rendered on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines with per-folder headers and a final summary.
    Text,
    /// One JSON object per diagnostic, newline-delimited, no summary.
    Ndjson,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Ndjson => f.write_str("ndjson"),
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
