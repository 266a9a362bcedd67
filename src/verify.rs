//! Invariant checker for the partition engine.
//!
//! Only compiled for unit tests and under the `verify` feature. Every check re-scans the buffer,
//! so enabling it turns each partition quadratic.

use crate::core::SortBuffer;
use crate::error::InvariantViolation;
use std::cmp::Ordering;
use std::panic::panic_any;

#[cfg(test)]
thread_local! {
    static CHECKER_COMPARISONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Comparisons the checker has made on this thread, so tests can tell them apart from the
/// engine's own.
#[cfg(test)]
pub(crate) fn checker_comparisons() -> usize {
    CHECKER_COMPARISONS.with(|c| c.get())
}

#[inline]
fn compare_at<B, F>(buffer: &B, a: usize, b: usize, compare: &mut F) -> Ordering
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    #[cfg(test)]
    CHECKER_COMPARISONS.with(|c| c.set(c.get() + 1));
    compare(buffer.element(a), buffer.element(b))
}

fn expect<B, F>(
    buffer: &B,
    indices: impl Iterator<Item = usize>,
    pivot: usize,
    expected: Ordering,
    region: &'static str,
    compare: &mut F,
) where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    for index in indices {
        if compare_at(buffer, index, pivot, compare) != expected {
            panic_any(InvariantViolation { region, index });
        }
    }
}

/// Checks the scan-loop layout: `[start, end_of_pivot_keys)` equal to the pivot at `start`,
/// `[end_of_pivot_keys, lower)` less, `(upper, end]` greater.
pub(crate) fn assert_regions<B, F>(
    buffer: &B,
    start: usize,
    end: usize,
    end_of_pivot_keys: usize,
    lower: usize,
    upper: usize,
    compare: &mut F,
) where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    if !(start < end_of_pivot_keys && end_of_pivot_keys <= lower && lower <= upper + 1) {
        panic_any(InvariantViolation {
            region: "boundary order",
            index: lower,
        });
    }
    expect(buffer, start..end_of_pivot_keys, start, Ordering::Equal, "region-a", compare);
    expect(buffer, end_of_pivot_keys..lower, start, Ordering::Less, "region-b", compare);
    expect(buffer, upper + 1..=end, start, Ordering::Greater, "region-c", compare);
}

/// Checks the reordered layout: `[start, less_end)` less, `[less_end, greater_start)` equal,
/// `[greater_start, end]` greater, all measured against the first element of the equal block.
pub(crate) fn assert_blocks<B, F>(
    buffer: &B,
    start: usize,
    less_end: usize,
    greater_start: usize,
    end: usize,
    compare: &mut F,
) where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    if !(start <= less_end && less_end < greater_start) {
        panic_any(InvariantViolation {
            region: "equal block",
            index: less_end,
        });
    }
    let pivot = less_end;
    expect(buffer, start..less_end, pivot, Ordering::Less, "less block", compare);
    expect(buffer, less_end..greater_start, pivot, Ordering::Equal, "equal block", compare);
    expect(buffer, greater_start..=end, pivot, Ordering::Greater, "greater block", compare);
}

/// Checks `[start, end)` is non-decreasing.
pub(crate) fn assert_sorted<B, F>(buffer: &B, start: usize, end: usize, compare: &mut F)
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    for index in start + 1..end {
        if compare_at(buffer, index - 1, index, compare) == Ordering::Greater {
            panic_any(InvariantViolation {
                region: "sorted order",
                index,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn violation(f: impl FnOnce()) -> InvariantViolation {
        let payload = catch_unwind(AssertUnwindSafe(f)).expect_err("check should have failed");
        *payload
            .downcast::<InvariantViolation>()
            .expect("payload should be an InvariantViolation")
    }

    #[test]
    fn test_regions_accept_valid_layout() {
        // a = [5, 5], b = [1, 2], w = [9], c = [7, 8]
        let data = [5, 5, 1, 2, 9, 7, 8];
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_regions(&data[..], 0, 6, 2, 4, 4, &mut cmp);
    }

    #[test]
    fn test_regions_reject_misplaced_element() {
        let data = [5, 5, 1, 6, 9, 7, 8];
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        let fault = violation(|| assert_regions(&data[..], 0, 6, 2, 4, 4, &mut cmp));
        assert_eq!(
            fault,
            InvariantViolation {
                region: "region-b",
                index: 3
            }
        );
    }

    #[test]
    fn test_blocks_reject_equal_in_greater() {
        let data = [1, 3, 3, 3, 4];
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_blocks(&data[..], 0, 1, 4, 4, &mut cmp);

        let fault = violation(|| assert_blocks(&data[..], 0, 1, 3, 4, &mut cmp));
        assert_eq!(fault.region, "greater block");
        assert_eq!(fault.index, 3);
    }

    #[test]
    fn test_sorted_reports_first_descent() {
        let data = [1, 2, 2, 1, 0];
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_sorted(&data[..], 0, 3, &mut cmp);

        let fault = violation(|| assert_sorted(&data[..], 0, 5, &mut cmp));
        assert_eq!(fault.index, 3);
        assert!(fault.to_string().contains("sorted order"));
    }
}
