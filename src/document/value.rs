//! Leaf value model with type-preserving equality.

use serde_yaml::Value;
use std::fmt;

/// A resolved leaf value from a flattened configuration document.
///
/// Equality is deliberately type-preserving: the boolean `true` and the
/// string `"true"` are never equal, and null only equals null. The one
/// cross-variant rule is numeric: integers and floats compare by parsed
/// numeric value, so `8080` and `8080.0` are the same leaf.
#[derive(Debug, Clone)]
pub enum FlatValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A whole sequence (or other composite leaf), carried as its canonical
    /// one-line rendering. Sequences are compared as entire values; partial
    /// sequence overrides have no duplicate semantics.
    Seq(String),
}

impl FlatValue {
    /// Convert a parsed YAML value into a leaf value.
    ///
    /// Mappings never reach this point during flattening (they extend the
    /// path instead); composite inputs become their canonical rendering.
    pub fn from_yaml(value: &Value) -> Self {
        match value {
            Value::Null => FlatValue::Null,
            Value::Bool(b) => FlatValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FlatValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    // Out of i64 range; compare numerically as a float.
                    FlatValue::Float(u as f64)
                } else {
                    FlatValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FlatValue::Str(s.clone()),
            Value::Sequence(_) | Value::Mapping(_) => FlatValue::Seq(canonical(value)),
            Value::Tagged(tagged) => FlatValue::from_yaml(&tagged.value),
        }
    }
}

impl PartialEq for FlatValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FlatValue::Null, FlatValue::Null) => true,
            (FlatValue::Bool(a), FlatValue::Bool(b)) => a == b,
            (FlatValue::Int(a), FlatValue::Int(b)) => a == b,
            (FlatValue::Float(a), FlatValue::Float(b)) => a == b,
            (FlatValue::Int(a), FlatValue::Float(b)) | (FlatValue::Float(b), FlatValue::Int(a)) => {
                *a as f64 == *b
            }
            (FlatValue::Str(a), FlatValue::Str(b)) => a == b,
            (FlatValue::Seq(a), FlatValue::Seq(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatValue::Null => f.write_str("null"),
            FlatValue::Bool(b) => write!(f, "{b}"),
            FlatValue::Int(i) => write!(f, "{i}"),
            FlatValue::Float(x) => write!(f, "{x}"),
            FlatValue::Str(s) => f.write_str(s),
            FlatValue::Seq(s) => f.write_str(s),
        }
    }
}

/// Render a composite value as a stable one-line string.
///
/// JSON is used as the canonical form; values that JSON cannot represent
/// (non-string mapping keys, for example) fall back to the debug rendering,
/// which is equally deterministic.
pub(super) fn canonical(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
