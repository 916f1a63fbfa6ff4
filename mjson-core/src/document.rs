//! Document storage.
//!
//! A [`Document`] maps keys to either a string or a nested `Document`.
//! The two kinds share one key space: writing a key as one kind removes any
//! entry of the other kind, so a key never holds both.
//!
//! Children are owned outright. The parser builds each nested object
//! completely before attaching it, so a tree never shares or cycles.
//!
//! # Example
//!
//! ```
//! use mjson_core::{Document, JsonObject};
//!
//! let mut name = Document::new();
//! name.set_string("first", "sam").set_string("last", "doe");
//!
//! let mut doc = Document::new();
//! doc.set_object("name", name);
//! assert_eq!(doc.get_object("name").and_then(|n| n.get_string("last")), Some("doe"));
//!
//! doc.set_string("name", "sam doe");
//! assert!(doc.get_object("name").is_none());
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::FormatError;
use crate::parser::Parser;
use crate::value::Value;

/// Named string and object storage.
///
/// Implemented by [`Document`]; the parser is generic over it so another
/// storage (ordered, validating, ...) can be plugged in without touching
/// callers.
pub trait JsonObject {
    /// Get the string stored under `key`, or `None` if the key is unset or
    /// holds an object.
    fn get_string(&self, key: &str) -> Option<&str>;

    /// Store a string, replacing whatever `key` held before.
    fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self;

    /// Get the object stored under `key`, or `None` if the key is unset or
    /// holds a string.
    fn get_object(&self, key: &str) -> Option<&Self>;

    /// Store a nested object, replacing whatever `key` held before.
    fn set_object(&mut self, key: impl Into<String>, value: Self) -> &mut Self;

    /// Keys currently holding strings, in no particular order.
    fn string_keys(&self) -> impl Iterator<Item = &str> + '_;

    /// Keys currently holding objects, in no particular order.
    fn object_keys(&self) -> impl Iterator<Item = &str> + '_;
}

/// A parsed object as an owned tree.
///
/// Equality is structural: same keys, same strings, equal children.
///
/// Not synchronized; share across threads behind your own lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    strings: HashMap<String, String>,
    objects: HashMap<String, Document>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse text into a document with default options.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        Parser::new().parse(input)
    }

    /// Get the value stored under `key`, whichever kind it is.
    pub fn get(&self, key: &str) -> Option<Value<'_>> {
        if let Some(s) = self.strings.get(key) {
            return Some(Value::String(s));
        }
        self.objects.get(key).map(Value::Object)
    }

    /// Get a mutable nested object.
    pub fn get_object_mut(&mut self, key: &str) -> Option<&mut Document> {
        self.objects.get_mut(key)
    }

    /// Check if `key` holds a value of either kind.
    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key) || self.objects.contains_key(key)
    }

    /// Remove `key`, whichever kind it holds. Returns true if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.strings.remove(key).is_some() | self.objects.remove(key).is_some()
    }

    /// Number of keys of both kinds.
    pub fn len(&self) -> usize {
        self.strings.len() + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.objects.is_empty()
    }

    /// Iterate over all entries, strings first, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Value<'_>)> + '_ {
        let strings = self
            .strings
            .iter()
            .map(|(k, v)| (k.as_str(), Value::String(v.as_str())));
        let objects = self
            .objects
            .iter()
            .map(|(k, v)| (k.as_str(), Value::Object(v)));
        strings.chain(objects)
    }
}

impl JsonObject for Document {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        self.objects.remove(&key);
        self.strings.insert(key, value.into());
        self
    }

    fn get_object(&self, key: &str) -> Option<&Self> {
        self.objects.get(key)
    }

    fn set_object(&mut self, key: impl Into<String>, value: Self) -> &mut Self {
        let key = key.into();
        self.strings.remove(&key);
        self.objects.insert(key, value);
        self
    }

    fn string_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.strings.keys().map(String::as_str)
    }

    fn object_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.keys().map(String::as_str)
    }
}

/// Children are torn down from a work list, so dropping a deeply nested
/// tree does not recurse once per level.
impl Drop for Document {
    fn drop(&mut self) {
        let mut pending: Vec<Document> = self.objects.drain().map(|(_, child)| child).collect();
        while let Some(mut doc) = pending.pop() {
            pending.extend(doc.objects.drain().map(|(_, child)| child));
        }
    }
}

impl FromStr for Document {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
