//! Ordered map type for ATON dicts.
//!
//! This module provides [`AtonMap`], a wrapper around [`IndexMap`] that keeps
//! dict entries in the order they were written. The writer emits entries in
//! that order, so a decode/encode cycle reproduces the same text.
//!
//! Equality ignores order: two maps are equal when they hold the same keys
//! with equal values.
//!
//! ## Examples
//!
//! ```rust
//! use serde_aton::{AtonMap, Value};
//!
//! let mut map = AtonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to ATON values.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{AtonMap, Value};
///
/// let mut map = AtonMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtonMap(IndexMap<String, Value>);

impl AtonMap {
    /// Creates an empty `AtonMap`.
    #[must_use]
    pub fn new() -> Self {
        AtonMap(IndexMap::new())
    }

    /// Creates an empty `AtonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AtonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Replacing an existing key keeps the key's original position and
    /// returns the old value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_aton::{AtonMap, Value};
    ///
    /// let mut map = AtonMap::new();
    /// map.insert("x".to_string(), Value::from(1));
    /// map.insert("y".to_string(), Value::from(2));
    /// assert_eq!(map.insert("x".to_string(), Value::from(3)), Some(Value::from(1)));
    ///
    /// let keys: Vec<_> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, ["x", "y"]);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, Value>> for AtonMap {
    fn from(map: HashMap<String, Value>) -> Self {
        AtonMap(map.into_iter().collect())
    }
}

impl From<AtonMap> for HashMap<String, Value> {
    fn from(map: AtonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for AtonMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AtonMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for AtonMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        AtonMap(IndexMap::from_iter(iter))
    }
}
