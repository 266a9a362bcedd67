//! # Flagsort
//!
//! `flagsort` is an in-place, allocation-free quicksort built on a three-way ("Dutch national
//! flag") partition. It is designed for data with many duplicate keys: elements equal to the
//! pivot are gathered into their final position in the same pass that classifies them and are
//! never looked at again, so an input consisting of a single repeated key is sorted in one
//! linear pass.
//!
//! ## Key Features
//!
//! - **One engine, four orderings**: natural order ([`sort`]), a derived key ([`sort_by_key`]),
//!   an external comparer ([`sort_by`]), or a derived key with an external comparer
//!   ([`sort_by_key_with`]). All four reduce to a single three-way comparison.
//! - **One engine, any buffer**: the [`SortBuffer`] trait abstracts indexed read, write and swap.
//!   Slices, arrays, `Vec`s, `VecDeque`s and raw memory ([`RawBuffer`]) are supported out of the
//!   box, and other collections can implement the trait themselves.
//! - **Validated sub-ranges**: the `sort_range*` functions accept std ranges or `(offset, count)`
//!   pairs, reject anything outside the buffer before touching it, and never read or write
//!   elements outside the selected range.
//! - **Iterators too**: the `sorted*` functions collect any `IntoIterator` into a `Vec` and sort
//!   it with the same four orderings.
//! - **No allocation**: the engine works with a handful of indices per partition. Only the
//!   `sorted*` helpers allocate, for the `Vec` they return.
//!
//! ## Usage
//!
//! ```rust
//! use flagsort::prelude::*;
//!
//! let mut data = vec![3, 1, 2, 3, 1];
//! sort(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 3, 3]);
//!
//! let mut words = vec!["bb", "a", "ccc"];
//! sort_by_key(&mut words, |w| w.len());
//! assert_eq!(words, vec!["a", "bb", "ccc"]);
//!
//! let mut framed = vec![9, 3, 2, 1, 9];
//! sort_range(&mut framed, (1, 3)).unwrap();
//! assert_eq!(framed, vec![9, 1, 2, 3, 9]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Duplicates**: each distinct key is used as a pivot at most once; `n` equal keys cost
//!   `n - 1` comparisons.
//! - **Worst Case**: O(N²) comparisons. The pivot is always the first element of the active range,
//!   so already ordered input is the worst case. Stack depth stays O(log N) regardless.
//! - **Stability**: none. Equal elements may be reordered.
//! - **Memory Overhead**: none beyond the recursion.
//!
//! ## Verification
//!
//! Enabling the `verify` feature re-checks the partition invariant after every scan step and the
//! final order after every call, raising an [`InvariantViolation`] panic on failure. It is meant
//! for debugging and makes sorting quadratic.

pub mod algo;
pub mod compare;
pub mod core;
pub mod error;
pub mod range;
#[cfg(any(test, feature = "verify"))]
mod verify;

pub use crate::algo::{
    sort, sort_by, sort_by_key, sort_by_key_with, sort_range, sort_range_by, sort_range_by_key,
    sort_range_by_key_with, sort_raw_parts, sorted, sorted_by, sorted_by_key, sorted_by_key_with,
};
pub use crate::compare::Comparer;
pub use crate::core::{RawBuffer, SortBuffer};
pub use crate::error::{InvariantViolation, SortError};

pub mod prelude {
    pub use crate::algo::{
        sort, sort_by, sort_by_key, sort_by_key_with, sort_range, sort_range_by,
        sort_range_by_key, sort_range_by_key_with, sorted, sorted_by, sorted_by_key,
        sorted_by_key_with,
    };
    pub use crate::compare::{Comparer, NaturalOrder, Reversed};
    pub use crate::core::{RawBuffer, SortBuffer};
    pub use crate::error::SortError;
}
