//! Path-addressable nested containers.
//!
//! [`Nested`] is a map from string keys to [`Value`]s where a value may itself
//! be a `Nested`. Every operation addresses a value by its path, an ordered
//! sequence of keys, so callers never have to walk intermediate levels by
//! hand.
//!
//! # Path resolution
//!
//! - **Writes** ([`Nested::set`]) create missing intermediate containers. A
//!   leaf sitting where an intermediate container is needed is replaced by an
//!   empty container.
//! - **Reads and deletes** ([`Nested::get`], [`Nested::delete`]) never create
//!   anything. An absent key, or a leaf where a container is needed, fails
//!   with [`NestedError::NoSuchKey`] and leaves the container untouched.
//! - Deleting the last child of a container leaves that container in place,
//!   empty.
//!
//! Each operation has a `*_by_str` variant taking a separator-delimited
//! string, split with [`split_path`].
//!
//! # Usage
//!
//! ```
//! use nested::Nested;
//!
//! let mut config = Nested::new();
//! config.set(&["a", "b"], 1)?;
//! config.set_by_str("a.c.d", ".", "test")?;
//! config.set_by_str("/e/f", "/", true)?;
//!
//! assert_eq!(*config.get(&["a", "c", "d"])?, "test");
//! assert_eq!(*config.get_by_str("e/f", "/")?, true);
//! assert_eq!(config.get_int(&["a", "b"])?, 1);
//!
//! config.delete(&["a", "c", "d"])?;
//! assert!(config.get_nested(&["a", "c"])?.is_empty());
//! # Ok::<(), nested::NestedError>(())
//! ```

use std::{collections::HashMap, fmt};

use tracing::{debug, trace};

pub mod errors;
pub mod path;
pub mod value;
pub mod walk;

pub use errors::NestedError;
pub use path::{KeyPath, split_path};
pub use value::Value;
pub use walk::Visit;

use crate::Result;

/// A mapping from string keys to values that may themselves be containers.
///
/// The root of every tree is a `Nested`. Storage order is unspecified;
/// [`Nested::keys`], [`Nested::iter`], [`Display`](fmt::Display) and
/// [`Nested::walk`] always present keys in ascending lexicographic order.
///
/// # Examples
///
/// ```
/// # use nested::Nested;
/// let mut doc = Nested::new();
/// doc.set(&["user", "name"], "Alice")?;
/// doc.set(&["user", "age"], 30)?;
///
/// assert_eq!(doc.get_str(&["user", "name"])?, "Alice");
/// assert_eq!(doc.get_int(&["user", "age"])?, 30);
/// assert_eq!(doc.to_string(), "{user: {age: 30, name: Alice}}");
/// # Ok::<(), nested::NestedError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nested {
    /// Child values indexed by key
    children: HashMap<String, Value>,
}

impl Nested {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Returns true if this container has no direct children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if a value exists at `path`
    pub fn contains(&self, path: &[impl AsRef<str>]) -> bool {
        self.get(path).is_ok()
    }

    /// Sets a value at `path`, creating intermediate containers as needed.
    ///
    /// Returns the value previously stored at `path`, if any. A leaf found
    /// where an intermediate container is needed is replaced by an empty
    /// container, so the write always lands.
    ///
    /// # Errors
    ///
    /// Returns [`NestedError::EmptyPath`] if `path` has no segments.
    pub fn set(
        &mut self,
        path: &[impl AsRef<str>],
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        let Some((last, parents)) = path.split_last() else {
            return Err(NestedError::EmptyPath);
        };

        let mut current = self;
        for segment in parents {
            current = current.child_container_mut(segment.as_ref());
        }

        Ok(current
            .children
            .insert(last.as_ref().to_string(), value.into()))
    }

    /// Returns the container under `key`, creating or replacing it as needed
    fn child_container_mut(&mut self, key: &str) -> &mut Nested {
        let entry = self
            .children
            .entry(key.to_string())
            .or_insert_with(|| Value::Nested(Nested::new()));

        if !entry.is_nested() {
            debug!(
                key,
                replaced = entry.type_name(),
                "Replacing leaf with container to continue path"
            );
            *entry = Value::Nested(Nested::new());
        }

        match entry {
            Value::Nested(child) => child,
            _ => unreachable!("entry was just made a container"),
        }
    }

    /// Resolves `segments` to a container without creating anything
    fn resolve(&self, segments: &[impl AsRef<str>]) -> Option<&Nested> {
        segments.iter().try_fold(self, |current, segment| {
            current.children.get(segment.as_ref())?.as_nested()
        })
    }

    fn resolve_mut(&mut self, segments: &[impl AsRef<str>]) -> Option<&mut Nested> {
        let mut current = self;
        for segment in segments {
            current = current.children.get_mut(segment.as_ref())?.as_nested_mut()?;
        }
        Some(current)
    }

    /// Gets the value at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NestedError::NoSuchKey`] if any segment is absent, an
    /// intermediate segment is not a container, or `path` is empty.
    pub fn get(&self, path: &[impl AsRef<str>]) -> Result<&Value> {
        let found = path.split_last().and_then(|(last, parents)| {
            self.resolve(parents)?.children.get(last.as_ref())
        });

        found.ok_or_else(|| {
            let err = NestedError::no_such_key(path);
            trace!(%err, "Path not found");
            err
        })
    }

    /// Gets a mutable reference to the value at `path`.
    ///
    /// Fails exactly like [`Nested::get`].
    pub fn get_mut(&mut self, path: &[impl AsRef<str>]) -> Result<&mut Value> {
        let found = match path.split_last() {
            Some((last, parents)) => self
                .resolve_mut(parents)
                .and_then(|parent| parent.children.get_mut(last.as_ref())),
            None => None,
        };

        found.ok_or_else(|| NestedError::no_such_key(path))
    }

    /// Gets the value at `path` with type conversion using `TryFrom`.
    ///
    /// # Errors
    ///
    /// [`NestedError::NoSuchKey`] if nothing is stored at `path`,
    /// [`NestedError::TypeMismatch`] if the stored value has another type.
    ///
    /// ```
    /// # use nested::Nested;
    /// let mut doc = Nested::new();
    /// doc.set(&["name"], "Alice")?;
    ///
    /// assert_eq!(doc.get_as::<&str>(&["name"])?, "Alice");
    /// assert!(doc.get_as::<i64>(&["name"]).unwrap_err().is_type_error());
    /// assert!(doc.get_as::<i64>(&["missing"]).unwrap_err().is_not_found());
    ///
    /// // The zero value on any failure
    /// assert_eq!(doc.get_as::<i64>(&["name"]).unwrap_or_default(), 0);
    /// # Ok::<(), nested::NestedError>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: &[impl AsRef<str>]) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = NestedError>,
    {
        T::try_from(self.get(path)?)
    }

    pub fn get_int(&self, path: &[impl AsRef<str>]) -> Result<i64> {
        self.get_as(path)
    }

    pub fn get_string(&self, path: &[impl AsRef<str>]) -> Result<String> {
        self.get_as(path)
    }

    /// Like [`Nested::get_string`], borrowing instead of cloning
    pub fn get_str(&self, path: &[impl AsRef<str>]) -> Result<&str> {
        self.get_as(path)
    }

    pub fn get_bool(&self, path: &[impl AsRef<str>]) -> Result<bool> {
        self.get_as(path)
    }

    /// Gets the nested container at `path`
    pub fn get_nested(&self, path: &[impl AsRef<str>]) -> Result<&Nested> {
        self.get_as(path)
    }

    /// Removes the value at `path` and returns it.
    ///
    /// Only the terminal key is removed; a parent left empty stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`NestedError::NoSuchKey`] under the same conditions as
    /// [`Nested::get`]. The container is unchanged on failure.
    pub fn delete(&mut self, path: &[impl AsRef<str>]) -> Result<Value> {
        let removed = match path.split_last() {
            Some((last, parents)) => self
                .resolve_mut(parents)
                .and_then(|parent| parent.children.remove(last.as_ref())),
            None => None,
        };

        removed.ok_or_else(|| {
            let err = NestedError::no_such_key(path);
            trace!(%err, "Nothing to delete");
            err
        })
    }

    /// [`Nested::set`] with a separator-delimited path string
    pub fn set_by_str(
        &mut self,
        path: &str,
        separator: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        self.set(&split_path(path, separator), value)
    }

    /// [`Nested::get`] with a separator-delimited path string
    pub fn get_by_str(&self, path: &str, separator: &str) -> Result<&Value> {
        self.get(&split_path(path, separator))
    }

    /// [`Nested::delete`] with a separator-delimited path string
    pub fn delete_by_str(&mut self, path: &str, separator: &str) -> Result<Value> {
        self.delete(&split_path(path, separator))
    }

    /// Inserts a direct child, returning the previous value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Builder method to insert a direct child and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Direct children sorted by key
    pub(crate) fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Returns an iterator over the direct keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sorted_entries()
            .into_iter()
            .map(|(key, _)| key.as_str())
    }

    /// Returns an iterator over the direct children in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sorted_entries()
            .into_iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Removes all children
    pub fn clear(&mut self) {
        self.children.clear();
    }
}

impl fmt::Display for Nested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Nested {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut nested = Nested::new();
        for (key, value) in iter {
            nested.insert(key, value);
        }
        nested
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Nested {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
