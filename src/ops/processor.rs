//! Element-wise operations driven by configurable options.

use crate::engine::{capture, guarded, iterate};
use crate::error::{BoxError, CollectionError};
use crate::options::ProcessOptions;
use crate::report::{ErrorReport, ProcessResult};
use crate::source::{Pair, Source};
use crate::store::{Accumulator, GroupAccumulator};
use tracing::{debug, warn};

/// Return type of caller-supplied callbacks
pub type CallbackResult<U> = std::result::Result<U, BoxError>;

/// Runs collection operations under a fixed set of [`ProcessOptions`].
///
/// The free functions in [`crate::ops`] use `Processor::default()`.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    options: ProcessOptions,
}

impl Processor {
    pub fn new(options: ProcessOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Call `action` with the index and element of every source element
    pub fn for_each<'a, T, A>(
        &self,
        mut action: A,
        source: impl Into<Source<'a, T>>,
    ) -> ProcessResult<T>
    where
        A: FnMut(usize, &T) -> CallbackResult<()>,
    {
        let source = source.into();
        debug!("for_each over {} source", source.shape());
        iterate(&self.options, source, |index, item| {
            action(index, item).map_err(CollectionError::callback)
        })
    }

    /// Store `mapper(element)` into `dest` for every source element.
    ///
    /// An associative destination needs the mapper to produce [`Pair`]s; an
    /// existing key is overwritten.
    pub fn map<'a, T, U, F, D>(
        &self,
        mut mapper: F,
        source: impl Into<Source<'a, T>>,
        dest: &mut D,
    ) -> ProcessResult<T>
    where
        F: FnMut(&T) -> CallbackResult<U>,
        D: Accumulator<U> + ?Sized,
    {
        let source = source.into();
        debug!("map over {} source", source.shape());
        iterate(&self.options, source, |_, item| {
            let mapped = mapper(item).map_err(CollectionError::callback)?;
            dest.store(mapped)
        })
    }

    /// Like [`map`](Self::map), with the element index passed to the mapper
    pub fn map_indexed<'a, T, U, F, D>(
        &self,
        mut mapper: F,
        source: impl Into<Source<'a, T>>,
        dest: &mut D,
    ) -> ProcessResult<T>
    where
        F: FnMut(usize, &T) -> CallbackResult<U>,
        D: Accumulator<U> + ?Sized,
    {
        let source = source.into();
        debug!("map_indexed over {} source", source.shape());
        iterate(&self.options, source, |index, item| {
            let mapped = mapper(index, item).map_err(CollectionError::callback)?;
            dest.store(mapped)
        })
    }

    /// Store every element for which `predicate` holds into `dest`, in
    /// traversal order
    pub fn filter<'a, T, F, D>(
        &self,
        mut predicate: F,
        source: impl Into<Source<'a, T>>,
        dest: &mut D,
    ) -> ProcessResult<T>
    where
        T: Clone,
        F: FnMut(&T) -> CallbackResult<bool>,
        D: Accumulator<T> + ?Sized,
    {
        let source = source.into();
        debug!("filter over {} source", source.shape());
        iterate(&self.options, source, |_, item| {
            if predicate(item).map_err(CollectionError::callback)? {
                dest.store(item.clone())?;
            }
            Ok(())
        })
    }

    /// Group elements under the key chosen by `key_selector`.
    ///
    /// Each element is appended to its key's group, so groups keep the order
    /// in which their elements were encountered.
    pub fn group_by<'a, T, K, F, D>(
        &self,
        mut key_selector: F,
        source: impl Into<Source<'a, T>>,
        dest: &mut D,
    ) -> ProcessResult<T>
    where
        T: Clone,
        F: FnMut(&T) -> CallbackResult<K>,
        D: GroupAccumulator<K, T> + ?Sized,
    {
        let source = source.into();
        debug!("group_by over {} source", source.shape());
        iterate(&self.options, source, |_, item| {
            let key = key_selector(item).map_err(CollectionError::callback)?;
            dest.append_group(key, vec![item.clone()])
        })
    }

    /// Write `keys[i] -> values[i]` into `dest` for every `i`.
    ///
    /// Mismatched lengths fail before anything is written. Store faults are
    /// reported with the offending key as the item and handled according to
    /// [`ProcessOptions::zip_policy`].
    pub fn zip<K, V, D>(&self, keys: &[K], values: &[V], dest: &mut D) -> ProcessResult<K>
    where
        K: Clone,
        V: Clone,
        D: Accumulator<Pair<K, V>> + ?Sized,
    {
        if keys.len() != values.len() {
            warn!(
                "zip length mismatch: keys={}, values={}",
                keys.len(),
                values.len()
            );
            return Err(ErrorReport::without_item(CollectionError::length_mismatch(
                keys.len(),
                values.len(),
            )));
        }

        let policy = self.options.zip_policy;
        debug!("zip of {} pairs: policy={}", keys.len(), policy);

        let mut report = None;
        for (index, (key, value)) in keys.iter().zip(values).enumerate() {
            let stored = guarded(self.options.catch_panics, || {
                dest.store(Pair::new(key.clone(), value.clone()))
            });
            if let Err(error) = stored {
                capture(&mut report, error, key.clone(), index);
                if policy.is_fail_fast() {
                    debug!("Halting zip after fault at index {}", index);
                    break;
                }
            }
        }

        report.map_or(Ok(()), Err)
    }
}
