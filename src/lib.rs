//! Collections that are guaranteed to hold at least one element.
//!
//! Every collection is stored as a distinguished `head` plus an ordinary,
//! possibly-empty `rest`. Because the head slot always exists, operations
//! such as [`NonEmptyList::last`] or [`NonEmptySet::last`] are total, and
//! only operations that can actually remove elements return an `Option`.

pub mod error;
pub mod types;

#[cfg(feature = "serde")]
mod codec;

pub use error::EmptyError;
pub use types::{
    NonEmptyArray, NonEmptyList, NonEmptyMap, NonEmptySet, NonEmptyString, Partition,
};
