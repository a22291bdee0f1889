//! Depth-first traversal of a [`Nested`] tree.
//!
//! # Traversal order
//!
//! - **Pre-order.** A key is visited before anything beneath it, and a
//!   container's whole subtree is visited before its next sibling.
//! - **Lexicographic.** Keys at each level are visited in ascending `str`
//!   order, independent of storage order.
//!
//! # Traversal control
//!
//! The visitor returns `Result<Visit, E>`:
//!
//! | Return                   | Effect                                          |
//! |--------------------------|-------------------------------------------------|
//! | `Ok(Visit::Continue)`    | Descend into the value if it is a container.    |
//! | `Ok(Visit::SkipSubtree)` | Do not descend; continue with the next sibling. |
//! | `Err(e)`                 | Stop immediately; `walk` returns `Err(e)`.      |

use std::collections::BTreeMap;

use tracing::trace;

use super::{Nested, Value, path};

/// Decision returned by a walk visitor to control descent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the visited value if it is a container
    #[default]
    Continue,
    /// Skip the visited value's descendants
    SkipSubtree,
}

impl Nested {
    /// Walks every key at every depth, calling `visit` with the full path and
    /// value of each.
    ///
    /// See the [module docs](crate::container::walk) for ordering and control.
    ///
    /// ```
    /// # use nested::{Nested, Visit};
    /// # use std::convert::Infallible;
    /// let mut doc = Nested::new();
    /// doc.set(&["a", "b", "c"], 1)?;
    /// doc.set(&["d", "e"], 2)?;
    /// doc.set(&["f", "g", "h"], false)?;
    ///
    /// let mut visited = Vec::new();
    /// doc.walk(|path, _| {
    ///     visited.push(path.join("."));
    ///     if path == ["f"] {
    ///         return Ok::<_, Infallible>(Visit::SkipSubtree);
    ///     }
    ///     Ok(Visit::Continue)
    /// })?;
    ///
    /// assert_eq!(visited, ["a", "a.b", "a.b.c", "d", "d.e", "f"]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn walk<'a, E, F>(&'a self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&[String], &'a Value) -> Result<Visit, E>,
    {
        let mut keys = Vec::new();
        walk_recursive(self, &mut visit, &mut keys)
    }

    /// Lists every path in the tree, joined with `separator`, with its value.
    ///
    /// Containers appear alongside their descendants, as [`Nested::walk`]
    /// visits them.
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, &Value> {
        let mut flat = BTreeMap::new();
        let Ok(()) = self.walk(|keys, value| {
            flat.insert(path::join(keys, separator), value);
            Ok::<_, std::convert::Infallible>(Visit::Continue)
        });
        flat
    }
}

fn walk_recursive<'a, E, F>(
    nested: &'a Nested,
    visit: &mut F,
    keys: &mut Vec<String>,
) -> Result<(), E>
where
    F: FnMut(&[String], &'a Value) -> Result<Visit, E>,
{
    for (key, value) in nested.sorted_entries() {
        keys.push(key.clone());

        let result = match visit(keys.as_slice(), value) {
            Ok(Visit::Continue) => match value {
                Value::Nested(child) => walk_recursive(child, visit, keys),
                _ => Ok(()),
            },
            Ok(Visit::SkipSubtree) => {
                trace!(path = %path::join(keys.as_slice(), "."), "Skipping subtree");
                Ok(())
            }
            Err(e) => Err(e),
        };

        keys.pop();
        result?;
    }
    Ok(())
}
