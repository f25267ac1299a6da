//! Sources: shape inspection and element normalization.

mod pair;
mod shape;
mod source;

pub use pair::Pair;
#[cfg(feature = "json")]
pub use shape::is_associative;
pub use shape::Shape;
pub use source::{Elements, Source};

#[cfg(feature = "json")]
pub(crate) use shape::{not_a_container, value_kind};
