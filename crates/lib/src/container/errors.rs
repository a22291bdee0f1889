//! Error types for nested container operations.
//!
//! Lookups and removals report a missing path as [`NestedError::NoSuchKey`];
//! typed accessors report a present value of the wrong variant as
//! [`NestedError::TypeMismatch`], so callers can tell the two apart.

use thiserror::Error;

/// Structured error types for path resolution and typed access.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NestedError {
    /// A path segment is absent, or an intermediate segment is not a container
    #[error("no such key: {path}")]
    NoSuchKey { path: String },

    /// The value at a path is not of the requested type
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A write was attempted with a path that has no segments
    #[error("empty path (not allowed for setting values)")]
    EmptyPath,
}

impl NestedError {
    /// Check if this error indicates a missing path
    pub fn is_not_found(&self) -> bool {
        matches!(self, NestedError::NoSuchKey { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, NestedError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            NestedError::NoSuchKey { path } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn no_such_key<S: AsRef<str>>(path: &[S]) -> Self {
        NestedError::NoSuchKey {
            path: super::path::join(path, "."),
        }
    }
}
