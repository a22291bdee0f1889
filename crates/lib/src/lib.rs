//!
//! Nested: path-addressable maps of maps.
//! This library provides a container for tree-shaped data, such as configuration, that is
//! read and written by key path instead of by walking each level by hand.
//!
//! ## Core Concepts
//!
//! * **Containers (`container::Nested`)**: The root of every tree. A map from string keys to values, where a value may itself be a container.
//! * **Values (`container::Value`)**: Either a leaf (null, bool, integer, text, list, opaque JSON) or a nested container. Only containers are descended into by paths.
//! * **Paths (`container::KeyPath`)**: Ordered sequences of keys, one per level. Any `&[impl AsRef<str>]` is a path; separator-delimited strings are accepted by the `*_by_str` operations.
//! * **Walks (`Nested::walk`)**: A deterministic pre-order traversal in lexicographic key order, where the visitor can prune subtrees (`container::Visit::SkipSubtree`) or abort with its own error.
//!
//! ```
//! use nested::{Nested, Visit};
//!
//! let mut config = Nested::new();
//! config.set_by_str("server.http.port", ".", 8080)?;
//! config.set(&["server", "http", "host"], "localhost")?;
//! config.set(&["log", "level"], "info")?;
//!
//! let mut lines = Vec::new();
//! config.walk(|path, value| {
//!     if value.is_leaf() {
//!         lines.push(format!("{}={value}", path.join(".")));
//!     }
//!     Ok::<_, nested::NestedError>(Visit::Continue)
//! })?;
//!
//! assert_eq!(
//!     lines,
//!     ["log.level=info", "server.http.host=localhost", "server.http.port=8080"]
//! );
//! # Ok::<(), nested::NestedError>(())
//! ```

pub mod container;

pub use container::{KeyPath, Nested, NestedError, Value, Visit, split_path};

/// Result type used throughout the Nested library.
pub type Result<T> = std::result::Result<T, NestedError>;
