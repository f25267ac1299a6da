//! Error types for the collection utilities.

use std::sync::Arc;
use thiserror::Error;

/// Result type alias for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Boxed error accepted from caller-supplied callbacks
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for collection operations
#[derive(Error, Debug, Clone)]
pub enum CollectionError {
    #[error("Shape violation: {message}")]
    ShapeViolation { message: String },

    #[error("Length mismatch: keys and values must have the same length (keys={keys}, values={values})")]
    LengthMismatch { keys: usize, values: usize },

    #[error("Callback error: {cause}")]
    Callback {
        #[source]
        cause: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Callback panicked: {message}")]
    Panicked { message: String },

    #[error("{message}")]
    Custom { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CollectionError {
    pub fn shape_violation(msg: impl Into<String>) -> Self {
        Self::ShapeViolation {
            message: msg.into(),
        }
    }

    pub fn length_mismatch(keys: usize, values: usize) -> Self {
        Self::LengthMismatch { keys, values }
    }

    pub fn callback(err: impl Into<BoxError>) -> Self {
        Self::Callback {
            cause: Arc::from(err.into()),
        }
    }

    pub fn panicked(msg: impl Into<String>) -> Self {
        Self::Panicked {
            message: msg.into(),
        }
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom {
            message: msg.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
        }
    }

    /// The error a callback returned, if this is a callback fault.
    ///
    /// Unlike [`std::error::Error::source`], this hands back the caller's
    /// error itself so it can be downcast to its concrete type.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Callback { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }

    /// Check if this error came from a caller-supplied callback
    pub fn is_callback_fault(&self) -> bool {
        matches!(self, Self::Callback { .. } | Self::Panicked { .. })
    }
}

impl From<String> for CollectionError {
    fn from(message: String) -> Self {
        Self::custom(message)
    }
}

impl From<&str> for CollectionError {
    fn from(message: &str) -> Self {
        Self::custom(message)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
