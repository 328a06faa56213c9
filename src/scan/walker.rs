//! Iterative depth-first directory walker.

use super::types::{ComparisonGroup, OverlayFile, WalkEvent};
use globset::GlobSet;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Canonical base file name, preferred spelling first.
pub const BASE_YML: &str = "application.yml";
/// Canonical base file name, alternate spelling.
pub const BASE_YAML: &str = "application.yaml";

/// Matches `application-<profile>.yml|.yaml` and captures the profile name.
static OVERLAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^application-(.+)\.ya?ml$").expect("Invalid overlay regex"));

/// Lazy walk over a directory tree, yielding one event per directory that
/// has something to say.
///
/// The walk is finite and deterministic: directory entries are sorted by
/// name, subdirectories are visited depth-first in lexicographic order, and
/// symlinked directories are not followed. The iterator holds no ambient
/// state; the root is passed in explicitly.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    stack: Vec<PathBuf>,
    exclude: GlobSet,
}

impl Walker {
    /// Create a walker rooted at `root`.
    ///
    /// Directories matching `exclude` (by name or by root-relative path) are
    /// pruned from the walk entirely. The root itself is never pruned.
    pub fn new(root: impl Into<PathBuf>, exclude: GlobSet) -> Self {
        let root = root.into();
        Self {
            stack: vec![root.clone()],
            root,
            exclude,
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        if self.exclude.is_match(&relative) {
            return true;
        }

        path.file_name()
            .is_some_and(|name| self.exclude.is_match(name.to_string_lossy().as_ref()))
    }

    /// Visit one directory: schedule its subdirectories and build a group if
    /// a base file is present.
    fn visit(&mut self, dir: PathBuf) -> Result<Option<ComparisonGroup>, WalkEvent> {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                return Err(WalkEvent::Unreadable {
                    path: dir,
                    message: e.to_string(),
                });
            }
        };

        let mut file_names: Vec<String> = Vec::new();
        let mut subdirs: Vec<PathBuf> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return Err(WalkEvent::Unreadable {
                        path: dir,
                        message: e.to_string(),
                    });
                }
            };

            // file_type() does not follow symlinks, so symlinked directories
            // are treated as plain entries and never descended into.
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if is_dir {
                let path = entry.path();
                if !self.is_excluded(&path) {
                    subdirs.push(path);
                }
            } else {
                file_names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        // Depth-first, lexicographic: push in reverse so the smallest name
        // pops first.
        subdirs.sort();
        for subdir in subdirs.into_iter().rev() {
            self.stack.push(subdir);
        }

        file_names.sort();
        Ok(build_group(&dir, &file_names))
    }
}

impl Iterator for Walker {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        while let Some(dir) = self.stack.pop() {
            match self.visit(dir) {
                Ok(Some(group)) => return Some(WalkEvent::Group(group)),
                Ok(None) => continue,
                Err(event) => return Some(event),
            }
        }
        None
    }
}

/// Pair a directory's sorted file names into a comparison group, if it has a
/// base file.
fn build_group(dir: &Path, file_names: &[String]) -> Option<ComparisonGroup> {
    let has_yml = file_names.iter().any(|name| name == BASE_YML);
    let has_yaml = file_names.iter().any(|name| name == BASE_YAML);

    let (base_name, ignored_name) = match (has_yml, has_yaml) {
        (true, true) => (BASE_YML, Some(BASE_YAML)),
        (true, false) => (BASE_YML, None),
        (false, true) => (BASE_YAML, None),
        (false, false) => return None,
    };

    let overlays = file_names
        .iter()
        .filter_map(|name| {
            let captures = OVERLAY_REGEX.captures(name)?;
            Some(OverlayFile {
                path: dir.join(name),
                profile: captures[1].to_string(),
            })
        })
        .collect();

    Some(ComparisonGroup {
        dir: dir.to_path_buf(),
        base: dir.join(base_name),
        ignored_base: ignored_name.map(|name| dir.join(name)),
        overlays,
    })
}
