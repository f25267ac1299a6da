//! Accumulators: writing produced values into caller-owned destinations.

mod accumulator;
#[cfg(feature = "json")]
mod json;

pub use accumulator::{Accumulator, GroupAccumulator, MergePolicy};
#[cfg(feature = "json")]
pub use json::store_with;
