use super::*;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn no_excludes() -> GlobSet {
    GlobSet::empty()
}

fn excludes(patterns: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).unwrap());
    }
    builder.build().unwrap()
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "key: value\n").unwrap();
}

fn groups(root: &Path, exclude: GlobSet) -> Vec<ComparisonGroup> {
    Walker::new(root, exclude)
        .map(|event| match event {
            WalkEvent::Group(group) => group,
            WalkEvent::Unreadable { path, message } => {
                panic!("unexpected unreadable event for {}: {}", path.display(), message)
            }
        })
        .collect()
}

#[test]
fn directories_without_a_base_file_are_invisible() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a/application-dev.yml"));
    touch(&temp.path().join("b/settings.yml"));

    assert!(groups(temp.path(), no_excludes()).is_empty());
}

#[test]
fn base_file_without_overlays_yields_an_empty_group() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("svc/application.yml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].dir, temp.path().join("svc"));
    assert_eq!(found[0].base, temp.path().join("svc/application.yml"));
    assert!(found[0].overlays.is_empty());
    assert!(found[0].ignored_base.is_none());
}

#[test]
fn overlays_are_collected_and_sorted_by_file_name() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("svc");
    touch(&dir.join("application.yml"));
    touch(&dir.join("application-prod.yaml"));
    touch(&dir.join("application-aws.yml"));
    touch(&dir.join("application-dev.yml"));
    touch(&dir.join("logback.xml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found.len(), 1);

    let profiles: Vec<&str> = found[0]
        .overlays
        .iter()
        .map(|overlay| overlay.profile.as_str())
        .collect();
    assert_eq!(profiles, vec!["aws", "dev", "prod"]);
    assert_eq!(found[0].overlays[0].path, dir.join("application-aws.yml"));
}

#[test]
fn overlay_pattern_requires_a_non_empty_profile() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("svc");
    touch(&dir.join("application.yml"));
    touch(&dir.join("application-.yml"));
    touch(&dir.join("application.test.yml"));
    touch(&dir.join("app-dev.yml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found.len(), 1);
    assert!(found[0].overlays.is_empty());
}

#[test]
fn compound_profile_names_are_captured_whole() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("svc");
    touch(&dir.join("application.yml"));
    touch(&dir.join("application-dev-us.yaml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found[0].overlays.len(), 1);
    assert_eq!(found[0].overlays[0].profile, "dev-us");
}

#[test]
fn yml_spelling_is_preferred_when_both_bases_exist() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("svc");
    touch(&dir.join("application.yml"));
    touch(&dir.join("application.yaml"));
    touch(&dir.join("application-dev.yml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found[0].base, dir.join("application.yml"));
    assert_eq!(found[0].ignored_base, Some(dir.join("application.yaml")));
}

#[test]
fn yaml_spelling_is_used_when_alone() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("svc");
    touch(&dir.join("application.yaml"));

    let found = groups(temp.path(), no_excludes());
    assert_eq!(found[0].base, dir.join("application.yaml"));
    assert!(found[0].ignored_base.is_none());
}

#[test]
fn walk_order_is_deterministic_lexicographic_depth_first() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("b/application.yml"));
    touch(&temp.path().join("a/application.yml"));
    touch(&temp.path().join("a/inner/application.yml"));
    touch(&temp.path().join("c/application.yml"));

    let dirs: Vec<_> = groups(temp.path(), no_excludes())
        .into_iter()
        .map(|group| group.dir)
        .collect();
    assert_eq!(
        dirs,
        vec![
            temp.path().join("a"),
            temp.path().join("a/inner"),
            temp.path().join("b"),
            temp.path().join("c"),
        ]
    );

    // A second walk over the unchanged tree sees the identical sequence.
    let again: Vec<_> = groups(temp.path(), no_excludes())
        .into_iter()
        .map(|group| group.dir)
        .collect();
    assert_eq!(dirs, again);
}

#[test]
fn excluded_directories_are_pruned_with_their_subtrees() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("svc/application.yml"));
    touch(&temp.path().join("target/application.yml"));
    touch(&temp.path().join("target/deep/application.yml"));

    let dirs: Vec<_> = groups(temp.path(), excludes(&["target"]))
        .into_iter()
        .map(|group| group.dir)
        .collect();
    assert_eq!(dirs, vec![temp.path().join("svc")]);
}

#[test]
fn exclude_globs_match_nested_directory_names() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("svc/application.yml"));
    touch(&temp.path().join("svc/build/application.yml"));
    touch(&temp.path().join("other/build/application.yml"));

    let dirs: Vec<_> = groups(temp.path(), excludes(&["**/build"]))
        .into_iter()
        .map(|group| group.dir)
        .collect();
    assert_eq!(dirs, vec![temp.path().join("svc")]);
}

#[test]
fn unreadable_roots_are_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-directory");
    touch(&file);

    let events: Vec<_> = Walker::new(&file, no_excludes()).collect();
    assert_eq!(events.len(), 1);
    match &events[0] {
        WalkEvent::Unreadable { path, message } => {
            assert_eq!(path, &file);
            assert!(!message.is_empty());
        }
        other => panic!("expected Unreadable, got {:?}", other),
    }
}
