//! Guarded invocation of caller-supplied callbacks.

use crate::error::{BoxError, CollectionError, Result};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Message used when a panic carries no readable payload
pub const UNKNOWN_FAULT: &str = "unknown fault";

/// Run a single callback step.
///
/// With `catch_panics` set, a panic raised by the step is intercepted and
/// returned as an error instead of unwinding into the caller.
pub fn guarded<R>(catch_panics: bool, step: impl FnOnce() -> Result<R>) -> Result<R> {
    if !catch_panics {
        return step();
    }

    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(result) => result,
        Err(payload) => Err(fault_from_panic(payload)),
    }
}

/// Convert a panic payload into an error.
///
/// Payloads that already are errors are kept as they are; string payloads
/// become the panic message; anything else is an unknown fault.
pub fn fault_from_panic(payload: Box<dyn Any + Send>) -> CollectionError {
    let payload = match payload.downcast::<CollectionError>() {
        Ok(err) => return *err,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<BoxError>() {
        Ok(err) => return CollectionError::callback(*err),
        Err(payload) => payload,
    };

    if let Some(message) = payload.downcast_ref::<&'static str>() {
        CollectionError::panicked(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        CollectionError::panicked(message.clone())
    } else {
        CollectionError::panicked(UNKNOWN_FAULT)
    }
}
