//! Flattening of nested documents into dotted-path tables.

use super::value::{FlatValue, canonical};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// A flattened document: dotted path to resolved leaf value.
///
/// `BTreeMap` keeps paths unique and iteration deterministic (sorted by
/// path), so diagnostic emission order never depends on hash state.
pub type FlatTable = BTreeMap<String, FlatValue>;

/// Flatten a parsed document into a dotted-path table.
///
/// Only mapping roots carry configuration; any other root shape (including
/// the null of an empty file) flattens to an empty table. Nested mappings
/// extend the path with `.`; everything else is recorded as a leaf. A literal
/// `.` inside a key name is not escaped, so such keys are indistinguishable
/// from nesting in the resulting paths (known limitation).
pub fn flatten(document: &Value) -> FlatTable {
    let mut table = FlatTable::new();
    if let Value::Mapping(mapping) = untag(document) {
        flatten_mapping(mapping, "", &mut table);
    }
    table
}

fn flatten_mapping(mapping: &Mapping, prefix: &str, table: &mut FlatTable) {
    for (key, value) in mapping {
        let segment = key_segment(key);
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };

        match untag(value) {
            Value::Mapping(child) => flatten_mapping(child, &path, table),
            leaf => {
                table.insert(path, FlatValue::from_yaml(leaf));
            }
        }
    }
}

/// Render a mapping key as a path segment.
///
/// YAML allows non-string keys; they are rendered through the same scalar
/// forms used for display so the paths stay deterministic.
fn key_segment(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => canonical(other),
    }
}

/// Strip YAML tags, which carry no comparison semantics here.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}
