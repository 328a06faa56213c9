//! Directory tree walking and base/overlay pairing.
//!
//! The walker visits every directory reachable from the start path in
//! deterministic lexicographic depth-first order and yields one comparison
//! group per directory that contains a base `application.yml`/`.yaml`,
//! together with the sibling `application-<profile>.yml` overlays found
//! there. Directories that cannot be read are surfaced as events rather
//! than aborting the walk.

mod types;
mod walker;

#[cfg(test)]
mod tests;

// Re-export public API
pub use types::{ComparisonGroup, OverlayFile, WalkEvent};
pub use walker::Walker;
