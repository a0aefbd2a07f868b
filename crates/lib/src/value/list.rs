//! Positional sequence of values that may contain holes.

use serde::{Serialize, Serializer};

use super::Value;

/// An ordered, 0-based sequence of [`Value`]s.
///
/// A hole is a [`Value::Null`] slot. Holes appear when a slot past the end is
/// assigned (the gap is padded) or when an element is punched out; neither
/// operation shifts later elements.
///
/// ```
/// # use keypath::{List, Value};
/// let mut list = List::new();
/// *list.slot(2) = Value::from("c");
///
/// assert_eq!(list.len(), 3);
/// assert!(list.get(0).unwrap().is_null());
/// assert_eq!(list.holes(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of slots, holes included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value and returns its index
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Returns the slot at `index`, padding the list with holes when it is
    /// shorter than that.
    pub fn slot(&mut self, index: usize) -> &mut Value {
        if index >= self.items.len() {
            self.items.resize(index + 1, Value::Null);
        }
        &mut self.items[index]
    }

    /// Replaces the element at `index` with a hole and returns the old value.
    ///
    /// Out of range indices leave the list untouched.
    pub fn punch(&mut self, index: usize) -> Option<Value> {
        self.items.get_mut(index).map(Value::take)
    }

    /// Counts the null slots
    pub fn holes(&self) -> usize {
        self.items.iter().filter(|v| v.is_null()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
