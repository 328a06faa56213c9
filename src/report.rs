//! Diagnostic emission for overlint.
//!
//! Every finding and recoverable error flows through the [`Reporter`], which
//! renders it to the output stream in the selected format and keeps the
//! running counts that decide the process exit status.
//!
//! Text format is line-oriented and human-readable; NDJSON format emits one
//! `kind`-tagged JSON object per diagnostic for machine consumption.

use crate::cli::OutputFormat;
use crate::error::{LintError, Result};
use crate::scan::ComparisonGroup;
use serde::Serialize;
use std::io::Write;

/// Rendered values longer than this are truncated in text output.
const MAX_VALUE_DISPLAY_CHARS: usize = 80;

/// One reportable observation from the walk.
///
/// Diagnostics are transient: rendered immediately, never retained.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An overlay key restates the base value unchanged.
    Duplicate {
        file: String,
        key: String,
        value: String,
    },
    /// A file exists but could not be read or parsed.
    ParseError { file: String, message: String },
    /// A directory could not be enumerated.
    Unreadable { path: String, message: String },
    /// Both base spellings exist in one directory; one was ignored.
    AmbiguousBase {
        dir: String,
        chosen: String,
        ignored: String,
    },
}

impl Diagnostic {
    /// Whether this diagnostic counts toward the failure exit status.
    ///
    /// The ambiguous-base warning is advisory only.
    fn is_failure(&self) -> bool {
        !matches!(self, Diagnostic::AmbiguousBase { .. })
    }
}

/// Aggregate counts for one complete run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of duplicate-value findings.
    pub duplicates: usize,
    /// Number of parse errors and unreadable paths.
    pub errors: usize,
}

impl RunSummary {
    /// True when nothing counted toward the failure exit status.
    pub fn is_clean(&self) -> bool {
        self.duplicates == 0 && self.errors == 0
    }
}

/// Writes diagnostics to an output stream and tracks the run summary.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    summary: RunSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: RunSummary::default(),
        }
    }

    /// Print the per-group header.
    ///
    /// Callers only invoke this for groups with at least one overlay, so
    /// directories with nothing to compare stay silent. NDJSON output has no
    /// headers; every record is self-contained.
    pub fn group_header(&mut self, group: &ComparisonGroup) -> Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }
        writeln!(self.out).map_err(output_error)?;
        writeln!(self.out, "Folder: {}", group.dir.display()).map_err(output_error)?;
        writeln!(self.out, "Base: {}", group.base.display()).map_err(output_error)?;
        Ok(())
    }

    /// Render one diagnostic and update the summary counts.
    pub fn emit(&mut self, diagnostic: Diagnostic) -> Result<()> {
        match &diagnostic {
            Diagnostic::Duplicate { .. } => self.summary.duplicates += 1,
            _ if diagnostic.is_failure() => self.summary.errors += 1,
            _ => {}
        }

        match self.format {
            OutputFormat::Text => self.emit_text(&diagnostic),
            OutputFormat::Ndjson => self.emit_ndjson(&diagnostic),
        }
    }

    fn emit_text(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        let line = match diagnostic {
            Diagnostic::Duplicate { file, key, value } => format!(
                "ERROR: {}: key '{}' duplicates base value '{}'",
                file,
                key,
                truncate_value(value)
            ),
            Diagnostic::ParseError { file, message } => format!("ERROR: {}: {}", file, message),
            Diagnostic::Unreadable { path, message } => format!("ERROR: {}: {}", path, message),
            Diagnostic::AmbiguousBase { dir, chosen, .. } => format!(
                "WARNING: {}: both application.yml and application.yaml exist; using {}",
                dir, chosen
            ),
        };
        writeln!(self.out, "{}", line).map_err(output_error)
    }

    fn emit_ndjson(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        let json = serde_json::to_string(diagnostic)
            .map_err(|e| LintError::OutputError(e.to_string()))?;
        writeln!(self.out, "{}", json).map_err(output_error)
    }

    /// Print the final summary line (text format only) and return the counts.
    pub fn finish(&mut self) -> Result<RunSummary> {
        if self.format == OutputFormat::Text {
            writeln!(self.out).map_err(output_error)?;
            if self.summary.duplicates > 0 {
                writeln!(
                    self.out,
                    "Completed with {} duplicated key value(s) found.",
                    self.summary.duplicates
                )
                .map_err(output_error)?;
            } else {
                writeln!(self.out, "Completed with no duplicated key values found.")
                    .map_err(output_error)?;
            }
            if self.summary.errors > 0 {
                writeln!(
                    self.out,
                    "Encountered {} error(s) while reading configuration files.",
                    self.summary.errors
                )
                .map_err(output_error)?;
            }
        }
        Ok(self.summary)
    }
}

fn output_error(e: std::io::Error) -> LintError {
    LintError::OutputError(e.to_string())
}

/// Compact long values for display, keeping output single-line friendly.
fn truncate_value(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_DISPLAY_CHARS {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(MAX_VALUE_DISPLAY_CHARS - 3).collect();
    truncated.push_str("...");
    truncated
}
