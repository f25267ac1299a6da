//! Tagged-union source abstraction over sequences and associative containers.

use super::pair::Pair;
use super::shape::Shape;
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "json")]
use super::shape::not_a_container;
#[cfg(feature = "json")]
use crate::error::Result;
#[cfg(feature = "json")]
use serde_json::Value;

/// Boxed iterator of owned elements
pub type Elements<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Input of every iterating operation.
///
/// The variant is chosen once, when the source is built, so operations never
/// re-inspect the container. Associative variants yield [`Pair`]s; the
/// container itself is never modified.
pub enum Source<'a, T> {
    /// Elements in ascending index order
    Sequence(Elements<'a, T>),
    /// One element per entry, in the container's own iteration order
    Associative(Elements<'a, T>),
}

impl<'a, T> Source<'a, T> {
    /// Shape of the container this source was built from
    pub fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) => Shape::Sequence,
            Self::Associative(_) => Shape::Associative,
        }
    }

    /// Number of elements still to be yielded, when known exactly
    pub fn len_hint(&self) -> Option<usize> {
        match self.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }

    fn elements_mut(&mut self) -> &mut Elements<'a, T> {
        match self {
            Self::Sequence(elements) | Self::Associative(elements) => elements,
        }
    }
}

impl<'a, T: Clone + 'a> Source<'a, T> {
    /// Borrow a slice as a sequence source
    pub fn sequence(items: &'a [T]) -> Self {
        Self::Sequence(Box::new(items.iter().cloned()))
    }
}

impl<'a, K: Clone + 'a, V: Clone + 'a> Source<'a, Pair<K, V>> {
    /// Borrow a hash map as an associative source
    pub fn associative<S>(map: &'a HashMap<K, V, S>) -> Self {
        Self::Associative(Box::new(
            map.iter().map(|(key, value)| Pair::new(key.clone(), value.clone())),
        ))
    }

    /// Borrow an ordered map as an associative source (key order)
    pub fn ordered(map: &'a BTreeMap<K, V>) -> Self {
        Self::Associative(Box::new(
            map.iter().map(|(key, value)| Pair::new(key.clone(), value.clone())),
        ))
    }
}

#[cfg(feature = "json")]
impl<'a> Source<'a, Value> {
    /// Build a source from a dynamic value.
    ///
    /// Arrays become sequences. Objects become associative sources whose
    /// elements are `{"key": .., "value": ..}` objects. Scalars are a shape
    /// violation.
    pub fn from_json(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::Associative(Box::new(
                fields
                    .iter()
                    .map(|(key, value)| Pair::new(key.clone(), value.clone()).into_value()),
            ))),
            Value::Array(items) => Ok(Self::sequence(items)),
            other => Err(not_a_container(other)),
        }
    }
}

impl<'a, T> Iterator for Source<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elements_mut().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(elements) | Self::Associative(elements) => elements.size_hint(),
        }
    }
}

impl<'a, T> std::fmt::Debug for Source<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("shape", &self.shape())
            .field("len_hint", &self.len_hint())
            .finish()
    }
}

impl<'a, T: Clone + 'a> From<&'a [T]> for Source<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::sequence(items)
    }
}

impl<'a, T: Clone + 'a, const N: usize> From<&'a [T; N]> for Source<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::sequence(items)
    }
}

impl<'a, T: Clone + 'a> From<&'a Vec<T>> for Source<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::sequence(items)
    }
}

impl<'a, T: 'a> From<Vec<T>> for Source<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(Box::new(items.into_iter()))
    }
}

impl<'a, K: Clone + 'a, V: Clone + 'a, S> From<&'a HashMap<K, V, S>> for Source<'a, Pair<K, V>> {
    fn from(map: &'a HashMap<K, V, S>) -> Self {
        Self::associative(map)
    }
}

impl<'a, K: 'a, V: 'a, S> From<HashMap<K, V, S>> for Source<'a, Pair<K, V>> {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::Associative(Box::new(map.into_iter().map(Pair::from)))
    }
}

impl<'a, K: Clone + 'a, V: Clone + 'a> From<&'a BTreeMap<K, V>> for Source<'a, Pair<K, V>> {
    fn from(map: &'a BTreeMap<K, V>) -> Self {
        Self::ordered(map)
    }
}

impl<'a, K: 'a, V: 'a> From<BTreeMap<K, V>> for Source<'a, Pair<K, V>> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Associative(Box::new(map.into_iter().map(Pair::from)))
    }
}
