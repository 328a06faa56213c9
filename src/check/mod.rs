//! The check runner: walk, compare, report.
//!
//! Groups are processed one at a time, each to completion, before the walk
//! advances. A base file that fails to load aborts its whole group (nothing
//! can be compared without a base); an overlay that fails to load aborts only
//! that overlay, and its siblings are still compared.


use crate::cli::Cli;
use crate::compare::duplicate_keys;
use crate::document::{flatten, load_document};
use crate::error::{LintError, Result};
use crate::report::{Diagnostic, Reporter, RunSummary};
use crate::scan::{ComparisonGroup, WalkEvent, Walker};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Run the full check as configured on the command line, writing diagnostics
/// to stdout.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let root = resolve_root(cli.root.as_deref())?;
    let exclude = build_exclude_set(&cli.exclude)?;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), cli.format);
    run_with(root, exclude, &mut reporter)
}

/// Drive the walk against an arbitrary reporter. Separated from [`run`] so
/// tests can capture output.
pub(crate) fn run_with<W: Write>(
    root: PathBuf,
    exclude: GlobSet,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    for event in Walker::new(root, exclude) {
        match event {
            WalkEvent::Unreadable { path, message } => {
                reporter.emit(Diagnostic::Unreadable {
                    path: path.display().to_string(),
                    message,
                })?;
            }
            WalkEvent::Group(group) => process_group(&group, reporter)?,
        }
    }

    reporter.finish()
}

/// Compare one directory's overlays against its base.
fn process_group<W: Write>(group: &ComparisonGroup, reporter: &mut Reporter<W>) -> Result<()> {
    // A base with no overlays has nothing to compare; stay silent.
    if group.overlays.is_empty() {
        return Ok(());
    }

    reporter.group_header(group)?;

    if let Some(ignored) = &group.ignored_base {
        reporter.emit(Diagnostic::AmbiguousBase {
            dir: group.dir.display().to_string(),
            chosen: group.base.display().to_string(),
            ignored: ignored.display().to_string(),
        })?;
    }

    let base_document = match load_document(&group.base) {
        Ok(document) => document,
        Err(e) => {
            reporter.emit(Diagnostic::ParseError {
                file: group.base.display().to_string(),
                message: e.to_string(),
            })?;
            return Ok(());
        }
    };
    let base_table = flatten(&base_document);

    for overlay in &group.overlays {
        let document = match load_document(&overlay.path) {
            Ok(document) => document,
            Err(e) => {
                reporter.emit(Diagnostic::ParseError {
                    file: overlay.path.display().to_string(),
                    message: e.to_string(),
                })?;
                continue;
            }
        };

        let overlay_table = flatten(&document);
        for finding in duplicate_keys(&base_table, &overlay_table) {
            reporter.emit(Diagnostic::Duplicate {
                file: overlay.path.display().to_string(),
                key: finding.key,
                value: finding.value.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Resolve and validate the start directory.
///
/// A missing or non-directory start path is fatal: no partial walk is
/// attempted.
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| {
            LintError::UserError(format!("failed to resolve current directory: {}", e))
        })?,
    };

    if !root.is_dir() {
        return Err(LintError::UserError(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// Compile `--exclude` patterns into a glob set.
fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim().replace('\\', "/");
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(&normalized).map_err(|e| {
            LintError::UserError(format!("invalid exclude pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| LintError::UserError(format!("failed to build exclude set: {}", e)))
}
