//! Overlint: finds redundant overrides in Spring-style layered YAML configuration.
//!
//! This is the main entry point for the `overlint` CLI. It parses arguments,
//! runs the check, and maps the outcome to an exit code: 0 for a clean tree,
//! 1 when any duplicate or file error was found, 2 for a fatal user error.

mod check;
mod cli;
pub mod compare;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod report;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match check::run(&cli) {
        Ok(summary) if summary.is_clean() => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(_) => ExitCode::from(exit_codes::FINDINGS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
