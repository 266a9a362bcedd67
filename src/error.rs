//! Error types reported by Flagsort.

use std::error::Error;
use std::fmt;

/// A caller error detected while validating a sort request.
///
/// Every variant is raised before the buffer is touched, so a failed call leaves the buffer
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The offset is negative or not representable as `usize`.
    InvalidOffset,
    /// The count is negative or not representable as `usize`.
    InvalidCount,
    /// `offset + count` overflows `usize`.
    Overflow { offset: usize, count: usize },
    /// `offset + count` runs past the end of the buffer.
    OutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },
    /// A range whose start lies past its end, or whose end lies past the buffer.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidOffset => write!(f, "offset must be a non-negative index"),
            SortError::InvalidCount => write!(f, "count must be a non-negative length"),
            SortError::Overflow { offset, count } => {
                write!(f, "offset {} + count {} overflows usize", offset, count)
            }
            SortError::OutOfBounds { offset, count, len } => write!(
                f,
                "the specified range (offset {}, count {}) is not within a buffer of length {}",
                offset, count, len
            ),
            SortError::InvalidRange { start, end, len } => write!(
                f,
                "range {}..{} is not valid for a buffer of length {}",
                start, end, len
            ),
        }
    }
}

impl Error for SortError {}

/// Panic payload raised when the partition engine breaks its own region invariant.
///
/// This signals a bug in the engine (or a comparator that contradicts itself), never a caller
/// error, which is why it travels as a panic rather than through [`SortError`]. It is only ever
/// raised by the invariant checker, compiled in unit tests and under the `verify` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Which check failed.
    pub region: &'static str,
    /// Index of the offending element.
    pub index: usize,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "detected internal logical error: {} violated at index {}",
            self.region, self.index
        )
    }
}

impl Error for InvariantViolation {}
