//! Collection operations.
//!
//! Every function here runs with [`ProcessOptions::default`](crate::ProcessOptions):
//! element-wise operations stop at the first fault, zip attempts every pair,
//! and callback panics are captured. Use a [`Processor`] for other options.

mod processor;
mod sort;

pub use processor::{CallbackResult, Processor};
#[cfg(feature = "json")]
pub use sort::sort_json_by;
pub use sort::{sort_by, Comparison};

use crate::error::{CollectionError, Result};
use crate::report::ProcessResult;
use crate::source::{Pair, Source};
use crate::store::{Accumulator, GroupAccumulator};

/// Call `action` for every element of `source`
pub fn for_each<'a, T, A>(action: A, source: impl Into<Source<'a, T>>) -> ProcessResult<T>
where
    A: FnMut(usize, &T) -> CallbackResult<()>,
{
    Processor::default().for_each(action, source)
}

/// Store `mapper(element)` into `dest` for every element of `source`
pub fn map<'a, T, U, F, D>(
    mapper: F,
    source: impl Into<Source<'a, T>>,
    dest: &mut D,
) -> ProcessResult<T>
where
    F: FnMut(&T) -> CallbackResult<U>,
    D: Accumulator<U> + ?Sized,
{
    Processor::default().map(mapper, source, dest)
}

/// Store `mapper(index, element)` into `dest` for every element of `source`
pub fn map_indexed<'a, T, U, F, D>(
    mapper: F,
    source: impl Into<Source<'a, T>>,
    dest: &mut D,
) -> ProcessResult<T>
where
    F: FnMut(usize, &T) -> CallbackResult<U>,
    D: Accumulator<U> + ?Sized,
{
    Processor::default().map_indexed(mapper, source, dest)
}

/// Store the elements of `source` that satisfy `predicate` into `dest`
pub fn filter<'a, T, F, D>(
    predicate: F,
    source: impl Into<Source<'a, T>>,
    dest: &mut D,
) -> ProcessResult<T>
where
    T: Clone,
    F: FnMut(&T) -> CallbackResult<bool>,
    D: Accumulator<T> + ?Sized,
{
    Processor::default().filter(predicate, source, dest)
}

/// Group the elements of `source` into `dest` by `key_selector`
pub fn group_by<'a, T, K, F, D>(
    key_selector: F,
    source: impl Into<Source<'a, T>>,
    dest: &mut D,
) -> ProcessResult<T>
where
    T: Clone,
    F: FnMut(&T) -> CallbackResult<K>,
    D: GroupAccumulator<K, T> + ?Sized,
{
    Processor::default().group_by(key_selector, source, dest)
}

/// Write `keys[i] -> values[i]` into `dest`
pub fn zip<K, V, D>(keys: &[K], values: &[V], dest: &mut D) -> ProcessResult<K>
where
    K: Clone,
    V: Clone,
    D: Accumulator<Pair<K, V>> + ?Sized,
{
    Processor::default().zip(keys, values, dest)
}

/// Pair up `keys` and `values` position by position
pub fn zip_pairs<K, V>(keys: Vec<K>, values: Vec<V>) -> Result<Vec<Pair<K, V>>> {
    if keys.len() != values.len() {
        return Err(CollectionError::length_mismatch(keys.len(), values.len()));
    }
    Ok(keys.into_iter().zip(values).map(Pair::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_pairs() {
        let pairs = zip_pairs(vec!["a", "b"], vec![1, 2]).unwrap();
        assert_eq!(pairs, vec![Pair::new("a", 1), Pair::new("b", 2)]);

        let err = zip_pairs(vec!["a"], Vec::<i32>::new()).unwrap_err();
        assert!(matches!(err, CollectionError::LengthMismatch { keys: 1, values: 0 }));
    }
}
