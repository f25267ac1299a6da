//! # Collection Utils
//!
//! Generic `for_each` / `map` / `filter` / `group_by` / `zip` / `sort_by`
//! operations over ordered sequences and associative containers.
//!
//! ## Features
//!
//! - One code path for sequences (`Vec`, slices, arrays) and associative
//!   containers (`HashMap`, `BTreeMap`), whose entries are traversed as
//!   [`Pair`]s
//! - Results accumulated into caller-owned destinations of either shape
//! - Explicit upsert vs. group-append semantics for associative destinations
//! - Callback failures and panics captured as per-item [`ErrorReport`]s
//! - Configurable fail-fast / continue fault policy
//! - Dynamic `serde_json::Value` sources and destinations (`json` feature)
//!
//! ## Example
//!
//! ```ignore
//! use collection_utils::{filter, group_by, map, ReportExt};
//! use std::collections::HashMap;
//!
//! let ages = vec![10, 43, 43, 7];
//!
//! let mut labels = Vec::new();
//! map(|age: &i32| Ok(format!("{} years", age)), &ages, &mut labels)?;
//!
//! let mut adults = Vec::new();
//! filter(|age: &i32| Ok(*age >= 18), &ages, &mut adults)?;
//!
//! let mut by_decade: HashMap<i32, Vec<i32>> = HashMap::new();
//! group_by(|age: &i32| Ok(age / 10), &ages, &mut by_decade)
//!     .with_error_message(|age| format!("cannot group age {}", age))?;
//! ```

// Module declarations
pub mod engine;
pub mod ops;
pub mod source;
pub mod store;

mod error;
mod options;
mod report;

// Re-exports
pub use engine::UNKNOWN_FAULT;
pub use error::{BoxError, CollectionError, Result};
#[cfg(feature = "json")]
pub use ops::sort_json_by;
pub use ops::{
    filter, for_each, group_by, map, map_indexed, sort_by, zip, zip_pairs, CallbackResult,
    Comparison, Processor,
};
pub use options::{FaultPolicy, ProcessOptions};
pub use report::{ErrorReport, ProcessResult, ReportExt};
#[cfg(feature = "json")]
pub use source::is_associative;
pub use source::{Pair, Shape, Source};
#[cfg(feature = "json")]
pub use store::store_with;
pub use store::{Accumulator, GroupAccumulator, MergePolicy};
