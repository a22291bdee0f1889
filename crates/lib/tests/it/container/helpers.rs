//! Shared fixtures for the container tests

use nested::{Nested, Visit};

/// `{a: {c: 1}, b: "test"}`
pub fn two_level() -> Nested {
    Nested::new()
        .with("a", Nested::new().with("c", 1))
        .with("b", "test")
}

/// `{a: {c: 1, d: true}, b: "test", e: {f: {g: [1, 2]}}}`
pub fn three_level() -> Nested {
    Nested::new()
        .with("a", Nested::new().with("c", 1).with("d", true))
        .with("b", "test")
        .with("e", Nested::new().with("f", Nested::new().with("g", vec![1, 2])))
}

/// A JSON object stored as an opaque leaf
#[cfg(feature = "json")]
pub fn json_leaf() -> nested::Value {
    nested::Value::from(serde_json::json!({ "i": 100 }))
}

/// Collects every walked path joined with "." in visit order
pub fn walk_order(container: &Nested) -> Vec<String> {
    let mut visited = Vec::new();
    container
        .walk(|path, _| {
            visited.push(path.join("."));
            Ok::<_, std::convert::Infallible>(Visit::Continue)
        })
        .unwrap();
    visited
}
