//! Error types for the overlint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Duplicate findings and per-file parse errors are not errors in this sense:
//! they are diagnostics emitted to the output stream and only affect the
//! process exit code. `LintError` covers conditions that abort the run before
//! or during the walk.

use crate::exit_codes;
use thiserror::Error;

/// Fatal error for overlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// User provided invalid arguments (missing start directory, bad glob).
    #[error("{0}")]
    UserError(String),

    /// The diagnostic output stream could not be written.
    #[error("failed to write diagnostics: {0}")]
    OutputError(String),
}

impl LintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::UserError(_) => exit_codes::USER_ERROR,
            LintError::OutputError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for overlint operations.
pub type Result<T> = std::result::Result<T, LintError>;
