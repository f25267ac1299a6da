//! Iteration engine and guarded callback invocation.

mod invoker;
mod iterate;

pub use invoker::{fault_from_panic, guarded, UNKNOWN_FAULT};
pub use iterate::iterate;

pub(crate) use iterate::capture;
