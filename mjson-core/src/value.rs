//! Borrowed view over a single document entry.

use crate::document::Document;

/// The value stored under a key: a string or a nested object.
///
/// The lifetime `'a` refers to the owning [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// String value: `"text"`
    String(&'a str),

    /// Nested object: `{ ... }`
    Object(&'a Document),
}

impl<'a> Value<'a> {
    /// Check if this is a string value.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this is a nested object.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Try to get as a string.
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(_) => None,
        }
    }

    /// Try to get as a nested object.
    #[inline]
    pub fn as_object(&self) -> Option<&'a Document> {
        match self {
            Value::Object(doc) => Some(doc),
            Value::String(_) => None,
        }
    }
}
