//! Key paths for addressing values inside a [`Nested`](super::Nested).
//!
//! A path is an ordered sequence of string keys, one per level of nesting.
//! Every container operation takes a borrowed slice (`&[S]` where
//! `S: AsRef<str>`), so plain arrays of literals, `Vec<String>`, and the owned
//! [`KeyPath`] all work as paths.
//!
//! # Usage
//!
//! ```rust
//! use nested::{KeyPath, Nested, path};
//!
//! // Parse from a separator-delimited string (empty segments are dropped)
//! let parsed = KeyPath::parse("/server/http/port", "/");
//! assert_eq!(parsed.as_slice(), ["server", "http", "port"]);
//!
//! // Build incrementally
//! let built = KeyPath::new().push("server").push("http").push("port");
//! assert_eq!(parsed, built);
//!
//! // Or with the macro
//! let port = "port";
//! assert_eq!(path!("server", "http", port), built);
//!
//! let mut config = Nested::new();
//! config.set(&built, 8080)?;
//! assert_eq!(config.get_int(&["server", "http", "port"])?, 8080);
//! # Ok::<(), nested::NestedError>(())
//! ```

use std::{convert::Infallible, fmt, ops::Deref, str::FromStr};

/// Splits a separator-delimited string into path segments.
///
/// Empty segments are discarded, so leading, trailing and repeated
/// separators are tolerated. An empty separator does not split: the whole
/// input becomes a single segment.
///
/// ```rust
/// # use nested::split_path;
/// assert_eq!(split_path("a.b.c", "."), vec!["a", "b", "c"]);
/// assert_eq!(split_path("/a//d/", "/"), vec!["a", "d"]);
/// assert_eq!(split_path("", "."), Vec::<String>::new());
/// assert_eq!(split_path("a.b", ""), vec!["a.b"]);
/// ```
pub fn split_path(input: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return if input.is_empty() {
            Vec::new()
        } else {
            vec![input.to_string()]
        };
    }

    input
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins path segments with `separator`.
pub(crate) fn join<S: AsRef<str>>(segments: &[S], separator: &str) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}

/// An owned sequence of keys addressing a value at some depth.
///
/// `KeyPath` dereferences to `[String]`, so it can be passed anywhere a path
/// slice is expected. Segments pushed directly are kept verbatim; only
/// [`KeyPath::parse`] drops empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a separator-delimited string, see [`split_path`].
    pub fn parse(input: &str, separator: &str) -> Self {
        Self {
            segments: split_path(input, separator),
        }
    }

    /// Adds a key to the end of this path.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Joins this path with another path.
    pub fn join<S: AsRef<str>>(mut self, other: &[S]) -> Self {
        self.segments
            .extend(other.iter().map(|segment| segment.as_ref().to_string()));
        self
    }

    /// Returns the parent path, or `None` for the empty path.
    pub fn parent(&self) -> Option<KeyPath> {
        let (_, parent) = self.segments.split_last()?;
        Some(KeyPath {
            segments: parent.to_vec(),
        })
    }

    /// Returns the last key of the path, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the number of keys in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no keys.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Renders the path with `separator` between keys.
    pub fn to_string_with(&self, separator: &str) -> String {
        join(&self.segments, separator)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.segments
    }
}

impl Deref for KeyPath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl AsRef<[String]> for KeyPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        segments.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses a dot-separated path.
impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, "."))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.to_string_with("."))
        }
    }
}

/// Constructs a [`KeyPath`] from its keys.
///
/// - `path!()` - Empty path
/// - `path!("server", "http", "port")` - One argument per key
/// - `path!(base, "port")` - Mix runtime values and literals (anything `Display`)
///
/// Arguments are taken as whole keys; they are never split on a separator.
#[macro_export]
macro_rules! path {
    () => {
        $crate::KeyPath::new()
    };

    ($($segment:expr),+ $(,)?) => {{
        $crate::KeyPath::new()$(.push($segment.to_string()))+
    }};
}
