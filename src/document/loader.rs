//! Loading of YAML configuration files.
//!
//! Files are read as UTF-8 and may contain multiple YAML documents separated
//! by `---`. Documents are deep-merged in order, later documents overriding
//! earlier ones. Anchor and alias resolution is delegated to the parser.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use thiserror::Error;

/// Why a configuration file could not be loaded.
///
/// Load errors are recoverable: they become a single diagnostic for the
/// offending file and the file is excluded from comparison.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load one configuration file into a single merged YAML value.
///
/// Empty files and empty documents yield `Value::Null`, which flattens to an
/// empty table downstream.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_documents(&content)
}

/// Parse every document in a YAML stream and merge them in order.
pub fn parse_documents(content: &str) -> Result<Value, LoadError> {
    let mut merged = Value::Null;

    for document in serde_yaml::Deserializer::from_str(content) {
        let mut value = Value::deserialize(document)?;
        // Empty documents (bare `---`) parse as null; they override nothing.
        if value.is_null() {
            continue;
        }
        // Resolve `<<:` merge keys; plain anchors/aliases are resolved by the
        // parser itself.
        value.apply_merge()?;
        merged = deep_merge(merged, value);
    }

    Ok(merged)
}

/// Merge `overlay` into `base` recursively.
///
/// Mappings merge key by key; any other pairing lets the overlay value win
/// outright.
fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut merged), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                if let Some(slot) = merged.get_mut(&key) {
                    let existing = std::mem::take(slot);
                    *slot = deep_merge(existing, value);
                } else {
                    merged.insert(key, value);
                }
            }
            Value::Mapping(merged)
        }
        (_, overlay) => overlay,
    }
}
