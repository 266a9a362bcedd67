//! Sub-range selection for the `sort_range*` entry points.

use crate::error::SortError;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A description of which part of a buffer to sort.
///
/// Implemented for every std range over `usize`, and for `(offset, count)` tuples of any integer
/// types. Resolution is all-or-nothing: either a half-open index range inside the buffer comes
/// back, or an error does and nothing gets sorted.
///
/// # Examples
///
/// ```
/// use flagsort::range::SortRange;
/// use flagsort::SortError;
///
/// assert_eq!((1..4).resolve(5), Ok(1..4));
/// assert_eq!((2, 3).resolve(5), Ok(2..5));
/// assert_eq!((-1, 2).resolve(5), Err(SortError::InvalidOffset));
/// ```
pub trait SortRange {
    /// Resolves `self` against a buffer of `len` elements.
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError>;
}

fn checked(start: usize, end: usize, len: usize) -> Result<Range<usize>, SortError> {
    if start > end || end > len {
        return Err(SortError::InvalidRange { start, end, len });
    }
    Ok(start..end)
}

impl SortRange for Range<usize> {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        checked(self.start, self.end, len)
    }
}

impl SortRange for RangeInclusive<usize> {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        let (start, end) = self.into_inner();
        // An inclusive end of `usize::MAX` can never lie inside a buffer.
        let end = end
            .checked_add(1)
            .ok_or(SortError::InvalidRange { start, end, len })?;
        checked(start, end, len)
    }
}

impl SortRange for RangeFrom<usize> {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        checked(self.start, len, len)
    }
}

impl SortRange for RangeTo<usize> {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        checked(0, self.end, len)
    }
}

impl SortRange for RangeToInclusive<usize> {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        (0..=self.end).resolve(len)
    }
}

impl SortRange for RangeFull {
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        Ok(0..len)
    }
}

/// `(offset, count)`: sort `count` elements starting at `offset`.
impl<O, C> SortRange for (O, C)
where
    O: TryInto<usize>,
    C: TryInto<usize>,
{
    fn resolve(self, len: usize) -> Result<Range<usize>, SortError> {
        let offset = self.0.try_into().map_err(|_| SortError::InvalidOffset)?;
        let count = self.1.try_into().map_err(|_| SortError::InvalidCount)?;
        let end = offset
            .checked_add(count)
            .ok_or(SortError::Overflow { offset, count })?;
        if end > len {
            return Err(SortError::OutOfBounds { offset, count, len });
        }
        Ok(offset..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_ranges() {
        assert_eq!((..).resolve(4), Ok(0..4));
        assert_eq!((1..).resolve(4), Ok(1..4));
        assert_eq!((..2).resolve(4), Ok(0..2));
        assert_eq!((..=2).resolve(4), Ok(0..3));
        assert_eq!((1..=3).resolve(4), Ok(1..4));
        assert_eq!((4..4).resolve(4), Ok(4..4));
    }

    #[test]
    fn test_std_ranges_rejected() {
        assert_eq!(
            (1..5).resolve(4),
            Err(SortError::InvalidRange {
                start: 1,
                end: 5,
                len: 4
            })
        );
        assert_eq!(
            (5..).resolve(4),
            Err(SortError::InvalidRange {
                start: 5,
                end: 4,
                len: 4
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 3..1;
        assert!(backwards.resolve(4).is_err());
        assert_eq!(
            (0..=usize::MAX).resolve(4),
            Err(SortError::InvalidRange {
                start: 0,
                end: usize::MAX,
                len: 4
            })
        );
        assert_eq!(
            (7..=usize::MAX).resolve(4),
            Err(SortError::InvalidRange {
                start: 7,
                end: usize::MAX,
                len: 4
            })
        );
    }

    #[test]
    fn test_offset_count() {
        assert_eq!((0u32, 0u32).resolve(0), Ok(0..0));
        assert_eq!((1i64, 3i64).resolve(4), Ok(1..4));
        assert_eq!((0, -1).resolve(4), Err(SortError::InvalidCount));
        assert_eq!((-7i8, 1u8).resolve(4), Err(SortError::InvalidOffset));
        assert_eq!(
            (2usize, 3usize).resolve(4),
            Err(SortError::OutOfBounds {
                offset: 2,
                count: 3,
                len: 4
            })
        );
        assert_eq!(
            (usize::MAX, 1usize).resolve(4),
            Err(SortError::Overflow {
                offset: usize::MAX,
                count: 1
            })
        );
    }
}
