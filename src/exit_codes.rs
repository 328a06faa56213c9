//! Exit code constants for the overlint CLI.
//!
//! - 0: Success (no findings, no file errors)
//! - 1: Findings (duplicate values or file errors anywhere in the walk)
//! - 2: User error (bad arguments, missing start directory)

/// Successful execution: nothing to report.
pub const SUCCESS: i32 = 0;

/// Findings: at least one duplicate value, parse error, or unreadable path.
pub const FINDINGS: i32 = 1;

/// User error: invalid arguments or a start directory that does not exist.
pub const USER_ERROR: i32 = 2;
