//! Key/value pairs used to move entries in and out of associative containers.

use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use super::shape::value_kind;
#[cfg(feature = "json")]
use crate::error::{CollectionError, Result};
#[cfg(feature = "json")]
use serde_json::{Map, Value};

/// A single associative entry.
///
/// Associative sources yield one `Pair` per entry while they are traversed,
/// and associative destinations expect `Pair`s: `key` selects the slot,
/// `value` is written into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_tuple()
    }
}

#[cfg(feature = "json")]
impl Pair<String, Value> {
    /// Render as the object `{"key": .., "value": ..}`
    pub fn into_value(self) -> Value {
        let mut fields = Map::with_capacity(2);
        fields.insert("key".to_string(), Value::String(self.key));
        fields.insert("value".to_string(), self.value);
        Value::Object(fields)
    }

    /// Parse a pair-shaped object.
    ///
    /// The object must hold exactly a string `key` and a `value`.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(CollectionError::shape_violation(format!(
                    "expected a key/value pair, found {}",
                    value_kind(&other)
                )))
            }
        };

        let key = match fields.remove("key") {
            Some(Value::String(key)) => key,
            Some(other) => {
                return Err(CollectionError::shape_violation(format!(
                    "pair key must be a string, found {}",
                    value_kind(&other)
                )))
            }
            None => return Err(CollectionError::shape_violation("pair is missing its key")),
        };

        let value = fields
            .remove("value")
            .ok_or_else(|| CollectionError::shape_violation("pair is missing its value"))?;

        if !fields.is_empty() {
            let extra: Vec<&str> = fields.keys().map(String::as_str).collect();
            return Err(CollectionError::shape_violation(format!(
                "pair has unexpected fields: {}",
                extra.join(", ")
            )));
        }

        Ok(Self { key, value })
    }
}
