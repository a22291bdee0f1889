//! Value types stored in a [`Nested`] container.
//!
//! A [`Value`] is either a leaf or a nested container. Only
//! [`Value::Nested`] has path semantics: lists and JSON values are opaque
//! leaves even when they hold structured data, so a path never descends
//! into them.

use std::fmt;

use super::{Nested, NestedError};

/// Values that can be stored in a [`Nested`] container.
///
/// ## Leaf Values
/// - [`Value::Null`] - Represents null/empty values
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Text`] - UTF-8 text strings
/// - [`Value::List`] - Ordered values, opaque to path resolution
/// - [`Value::Json`] - Any JSON value, opaque to path resolution (`json` feature)
///
/// ## Container Value
/// - [`Value::Nested`] - A nested container, traversed by paths and walks
///
/// # Direct Comparisons
///
/// ```
/// # use nested::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
/// let flag = Value::Bool(true);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(flag == true);
///
/// // Type mismatches return false
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),
    /// Ordered collection of values
    List(Vec<Value>),
    /// Foreign JSON value, stored as-is
    #[cfg(feature = "json")]
    Json(serde_json::Value),

    /// Sub-tree containing other values
    Nested(Nested),
}

impl Value {
    /// Returns true if this is a leaf value (anything but a container)
    pub fn is_leaf(&self) -> bool {
        !self.is_nested()
    }

    /// Returns true if this is a nested container
    pub fn is_nested(&self) -> bool {
        matches!(self, Value::Nested(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            #[cfg(feature = "json")]
            Value::Json(_) => "json",
            Value::Nested(_) => "nested",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a nested container
    pub fn as_nested(&self) -> Option<&Nested> {
        match self {
            Value::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested container
    pub fn as_nested_mut(&mut self) -> Option<&mut Nested> {
        match self {
            Value::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    fn mismatch(&self, expected: &str) -> NestedError {
        NestedError::TypeMismatch {
            expected: expected.to_string(),
            actual: self.type_name().to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            #[cfg(feature = "json")]
            Value::Json(json) => write!(f, "{json}"),
            Value::Nested(nested) => write!(f, "{nested}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Nested> for Value {
    fn from(value: Nested) -> Self {
        Value::Nested(value)
    }
}

/// JSON values are stored opaquely; objects do not become nested containers.
#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Json(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// Typed extraction used by `Nested::get_as` and the typed getters
impl TryFrom<&Value> for String {
    type Error = NestedError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(value.mismatch("text")),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = NestedError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(value.mismatch("text")),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = NestedError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| value.mismatch("int"))
    }
}

impl TryFrom<&Value> for bool {
    type Error = NestedError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| value.mismatch("bool"))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Nested {
    type Error = NestedError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_nested().ok_or_else(|| value.mismatch("nested"))
    }
}

impl<'a> TryFrom<&'a Value> for &'a [Value] {
    type Error = NestedError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_list().ok_or_else(|| value.mismatch("list"))
    }
}

#[cfg(feature = "json")]
impl<'a> TryFrom<&'a Value> for &'a serde_json::Value {
    type Error = NestedError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Json(json) => Ok(json),
            _ => Err(value.mismatch("json")),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
