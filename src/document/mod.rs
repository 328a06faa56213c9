//! YAML document loading and flattening.
//!
//! This module turns configuration files into flattened dotted-path tables:
//! - Loading: read a file, parse every YAML document in the stream, and
//!   deep-merge them in order (later documents override earlier ones)
//! - Value model: a closed variant with type-preserving equality rules
//! - Flattening: nested mappings become `a.b.c` paths; sequences are opaque
//!   leaf values

mod flatten;
mod loader;
mod value;


// Re-export public API
pub use flatten::{FlatTable, flatten};
pub use loader::{LoadError, load_document};
pub use value::FlatValue;
