//! Iteration engine shared by the element-wise operations.

use super::invoker::guarded;
use crate::error::{CollectionError, Result};
use crate::options::ProcessOptions;
use crate::report::{ErrorReport, ProcessResult};
use crate::source::Source;
use tracing::{debug, warn};

/// Drive `action` over every element of `source`.
///
/// Elements get sequential indices in traversal order. Each step runs
/// through the guarded invoker; a failing step is recorded in the returned
/// report. Under [`FaultPolicy::FailFast`](crate::FaultPolicy::FailFast) no
/// element after the first fault is processed.
pub fn iterate<'a, T, A>(
    options: &ProcessOptions,
    source: Source<'a, T>,
    mut action: A,
) -> ProcessResult<T>
where
    A: FnMut(usize, &T) -> Result<()>,
{
    let shape = source.shape();
    debug!(
        "Iterating {} source: policy={}, len={:?}",
        shape,
        options.fault_policy,
        source.len_hint()
    );

    let mut report = None;
    for (index, item) in source.enumerate() {
        if let Err(error) = guarded(options.catch_panics, || action(index, &item)) {
            capture(&mut report, error, item, index);
            if options.fault_policy.is_fail_fast() {
                debug!("Halting {} iteration after fault at index {}", shape, index);
                break;
            }
        }
    }

    report.map_or(Ok(()), Err)
}

/// Record a fault in the report slot, creating the report on the first one
pub(crate) fn capture<T>(
    report: &mut Option<ErrorReport<T>>,
    error: CollectionError,
    item: T,
    index: usize,
) {
    warn!("Fault at index {}: {}", index, error);
    match report {
        Some(existing) => existing.supersede(error, item, index),
        None => *report = Some(ErrorReport::new(error, item, index)),
    }
}
