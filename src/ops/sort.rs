//! In-place sorting with comparator callbacks.

use std::cmp::Ordering;

#[cfg(feature = "json")]
use crate::error::{CollectionError, Result};
#[cfg(feature = "json")]
use crate::source::value_kind;
#[cfg(feature = "json")]
use serde_json::Value;

/// Result of comparing two elements.
///
/// Integers follow the usual convention: negative sorts `a` before `b`,
/// zero ranks them equal, positive sorts `a` after `b`.
pub trait Comparison {
    fn into_ordering(self) -> Ordering;
}

impl Comparison for Ordering {
    fn into_ordering(self) -> Ordering {
        self
    }
}

macro_rules! impl_signed_comparison {
    ($($ty:ty),*) => {
        $(
            impl Comparison for $ty {
                fn into_ordering(self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

impl_signed_comparison!(i8, i16, i32, i64, isize);

/// Stable in-place sort of `items` using `comparator`.
///
/// The comparator is not guarded: if it panics, the panic propagates and the
/// slice is left in an unspecified order.
pub fn sort_by<T, F, C>(mut comparator: F, items: &mut [T])
where
    F: FnMut(&T, &T) -> C,
    C: Comparison,
{
    items.sort_by(|a, b| comparator(a, b).into_ordering());
}

/// Stable in-place sort of a dynamic array.
///
/// Anything other than an array is rejected and left untouched.
#[cfg(feature = "json")]
pub fn sort_json_by<F, C>(comparator: F, value: &mut Value) -> Result<()>
where
    F: FnMut(&Value, &Value) -> C,
    C: Comparison,
{
    match value {
        Value::Array(items) => {
            sort_by(comparator, items);
            Ok(())
        }
        other => Err(CollectionError::shape_violation(format!(
            "sorting requires a sequence, found {}",
            value_kind(other)
        ))),
    }
}
