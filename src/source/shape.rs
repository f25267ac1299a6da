//! Shape inspection for sources and destinations.

use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::error::{CollectionError, Result};
#[cfg(feature = "json")]
use serde_json::Value;

/// Runtime shape of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Ordered, index-addressable container
    Sequence,
    /// Key to value mapping with unique keys
    Associative,
}

impl Shape {
    /// Check if the shape is a key/value mapping
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Associative)
    }

    /// Check if the shape is an ordered sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence)
    }

    /// Inspect a dynamic value.
    ///
    /// Arrays are sequences and objects are associative. Scalars are neither
    /// and are rejected with [`CollectionError::ShapeViolation`].
    #[cfg(feature = "json")]
    pub fn of_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(_) => Ok(Self::Sequence),
            Value::Object(_) => Ok(Self::Associative),
            other => Err(not_a_container(other)),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence => write!(f, "sequence"),
            Self::Associative => write!(f, "associative"),
        }
    }
}

/// Check if a dynamic value is an associative container
#[cfg(feature = "json")]
pub fn is_associative(value: &Value) -> Result<bool> {
    Shape::of_value(value).map(|shape| shape.is_associative())
}

/// Shape violation for a value that is neither an array nor an object
#[cfg(feature = "json")]
pub(crate) fn not_a_container(value: &Value) -> CollectionError {
    CollectionError::shape_violation(format!(
        "expected a sequence or an associative container, found {}",
        value_kind(value)
    ))
}

/// Name of a value's JSON type, for error messages
#[cfg(feature = "json")]
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
