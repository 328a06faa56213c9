//! Types produced by the directory walk.

use std::path::PathBuf;

/// A profile-specific overlay file found next to a base file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFile {
    /// Full path to the overlay file.
    pub path: PathBuf,
    /// The `<profile>` part of `application-<profile>.yml`. Captured for
    /// reporting; never validated or interpreted.
    pub profile: String,
}

/// One directory's base file plus its sibling overlays.
///
/// Groups are constructed per visited directory and discarded after their
/// diagnostics are emitted; nothing persists across groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonGroup {
    /// The directory containing the files.
    pub dir: PathBuf,
    /// The chosen base file (`application.yml` preferred over `.yaml`).
    pub base: PathBuf,
    /// The base spelling that was ignored when both exist in one directory.
    pub ignored_base: Option<PathBuf>,
    /// Overlay files, sorted by file name.
    pub overlays: Vec<OverlayFile>,
}

/// One step of the directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A directory with a base file and its collected overlays.
    Group(ComparisonGroup),
    /// A directory that could not be enumerated; the walk continues.
    Unreadable { path: PathBuf, message: String },
}
