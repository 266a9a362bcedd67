//! Three-way partitioning quicksort.
//!
//! The engine partitions the active range around its first element into three blocks, less,
//! equal and greater, with a single bidirectional scan, then recurses into the less and greater
//! blocks only. Elements equal to the pivot are settled in the pass that finds them, so an input
//! made of one repeated key is sorted in a single linear pass.
//!
//! The pivot is always the first element of the active range. That keeps the partition step
//! simple and duplicate-tolerant, at the price of quadratic time on already ordered input.
//!
//! The public entry points are [`sort`], [`sort_by_key`], [`sort_by`], [`sort_by_key_with`],
//! their `sort_range*` counterparts, and the collecting `sorted*` variants for iterators.

use crate::compare::{self, Comparer};
use crate::core::{RawBuffer, SortBuffer};
use crate::error::SortError;
use crate::range::SortRange;
use log::{debug, trace};
use std::cmp::Ordering;
use std::ops::Range;

/// Sorts the whole buffer by the natural order of its elements.
///
/// Returns the same buffer so calls can be chained.
///
/// # Examples
///
/// ```
/// use flagsort::sort;
///
/// let mut data = vec![3, 1, 2, 3, 1];
/// sort(&mut data);
///
/// assert_eq!(data, vec![1, 1, 2, 3, 3]);
/// ```
pub fn sort<B>(buffer: &mut B) -> &mut B
where
    B: SortBuffer + ?Sized,
    B::Item: Ord,
{
    let len = buffer.len();
    sort_with(buffer, 0..len, &mut compare::natural())
}

/// Sorts the whole buffer by the natural order of a key derived from each element.
///
/// `key` is called on both sides of every comparison, the pivot included: the pivot's key is
/// recomputed rather than cached, so `n` equal elements cost `2 * (n - 1)` key calls. Keep it
/// cheap, or precompute keys and use [`sort_by`].
///
/// # Examples
///
/// ```
/// use flagsort::sort_by_key;
///
/// let mut data = vec!["bb", "a", "ccc"];
/// sort_by_key(&mut data, |s| s.len());
///
/// assert_eq!(data, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by_key<B, K, F>(buffer: &mut B, key: F) -> &mut B
where
    B: SortBuffer + ?Sized,
    K: Ord,
    F: FnMut(&B::Item) -> K,
{
    let len = buffer.len();
    sort_with(buffer, 0..len, &mut compare::by_key(key))
}

/// Sorts the whole buffer with an externally supplied comparer.
///
/// # Examples
///
/// ```
/// use flagsort::compare::{NaturalOrder, Reversed};
/// use flagsort::sort_by;
///
/// let mut data = vec![1, 3, 2];
/// sort_by(&mut data, Reversed(NaturalOrder));
///
/// assert_eq!(data, vec![3, 2, 1]);
/// ```
pub fn sort_by<B, C>(buffer: &mut B, comparer: C) -> &mut B
where
    B: SortBuffer + ?Sized,
    C: Comparer<B::Item>,
{
    let len = buffer.len();
    sort_with(buffer, 0..len, &mut compare::by_comparer(comparer))
}

/// Sorts the whole buffer by a derived key, ordering the keys with an external comparer.
///
/// # Examples
///
/// ```
/// use flagsort::sort_by_key_with;
///
/// let mut data = vec![(1, 'c'), (2, 'a'), (3, 'b')];
/// sort_by_key_with(&mut data, |pair| pair.1, |a: &char, b: &char| b.cmp(a));
///
/// assert_eq!(data, vec![(1, 'c'), (3, 'b'), (2, 'a')]);
/// ```
pub fn sort_by_key_with<B, K, F, C>(buffer: &mut B, key: F, comparer: C) -> &mut B
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item) -> K,
    C: Comparer<K>,
{
    let len = buffer.len();
    sort_with(buffer, 0..len, &mut compare::by_key_with(key, comparer))
}

/// Sorts the elements selected by `range` by their natural order.
///
/// `range` is any std range over `usize`, or an `(offset, count)` tuple. It is validated before
/// the buffer is touched; elements outside it are never read or written.
///
/// # Errors
///
/// Returns a [`SortError`] when `range` does not describe a part of the buffer. The buffer is
/// left unchanged in that case.
///
/// # Examples
///
/// ```
/// use flagsort::sort_range;
///
/// let mut data = vec![9, 3, 2, 1, 9];
/// sort_range(&mut data, 1..4).unwrap();
/// assert_eq!(data, vec![9, 1, 2, 3, 9]);
///
/// assert!(sort_range(&mut data, (-1, 2)).is_err());
/// ```
pub fn sort_range<B, R>(buffer: &mut B, range: R) -> Result<&mut B, SortError>
where
    B: SortBuffer + ?Sized,
    B::Item: Ord,
    R: SortRange,
{
    let range = resolve(buffer, range)?;
    Ok(sort_with(buffer, range, &mut compare::natural()))
}

/// Sorts the elements selected by `range` by a derived key. See [`sort_range`].
///
/// # Errors
///
/// Returns a [`SortError`] when `range` does not describe a part of the buffer.
pub fn sort_range_by_key<B, R, K, F>(buffer: &mut B, range: R, key: F) -> Result<&mut B, SortError>
where
    B: SortBuffer + ?Sized,
    R: SortRange,
    K: Ord,
    F: FnMut(&B::Item) -> K,
{
    let range = resolve(buffer, range)?;
    Ok(sort_with(buffer, range, &mut compare::by_key(key)))
}

/// Sorts the elements selected by `range` with an external comparer. See [`sort_range`].
///
/// # Errors
///
/// Returns a [`SortError`] when `range` does not describe a part of the buffer.
pub fn sort_range_by<B, R, C>(buffer: &mut B, range: R, comparer: C) -> Result<&mut B, SortError>
where
    B: SortBuffer + ?Sized,
    R: SortRange,
    C: Comparer<B::Item>,
{
    let range = resolve(buffer, range)?;
    Ok(sort_with(buffer, range, &mut compare::by_comparer(comparer)))
}

/// Sorts the elements selected by `range` by a derived key ordered with an external comparer.
/// See [`sort_range`].
///
/// # Errors
///
/// Returns a [`SortError`] when `range` does not describe a part of the buffer.
pub fn sort_range_by_key_with<B, R, K, F, C>(
    buffer: &mut B,
    range: R,
    key: F,
    comparer: C,
) -> Result<&mut B, SortError>
where
    B: SortBuffer + ?Sized,
    R: SortRange,
    F: FnMut(&B::Item) -> K,
    C: Comparer<K>,
{
    let range = resolve(buffer, range)?;
    Ok(sort_with(
        buffer,
        range,
        &mut compare::by_key_with(key, comparer),
    ))
}

/// Collects `iter` into a `Vec` and sorts it by natural order.
///
/// # Examples
///
/// ```
/// use flagsort::sorted;
///
/// let words = sorted("way three flag sort".split(' '));
/// assert_eq!(words, vec!["flag", "sort", "three", "way"]);
/// ```
pub fn sorted<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut buffer: Vec<I::Item> = iter.into_iter().collect();
    let len = buffer.len();
    sort_with(&mut buffer, 0..len, &mut compare::natural());
    buffer
}

/// Collects `iter` into a `Vec` and sorts it by a derived key. See [`sort_by_key`].
pub fn sorted_by_key<I, K, F>(iter: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut buffer: Vec<I::Item> = iter.into_iter().collect();
    let len = buffer.len();
    sort_with(&mut buffer, 0..len, &mut compare::by_key(key));
    buffer
}

/// Collects `iter` into a `Vec` and sorts it with an external comparer.
///
/// # Examples
///
/// ```
/// use flagsort::compare::{NaturalOrder, Reversed};
/// use flagsort::sorted_by;
///
/// let top = sorted_by([3, 9, 1].into_iter().map(|x| x * 2), Reversed(NaturalOrder));
/// assert_eq!(top, vec![18, 6, 2]);
/// ```
pub fn sorted_by<I, C>(iter: I, comparer: C) -> Vec<I::Item>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    let mut buffer: Vec<I::Item> = iter.into_iter().collect();
    let len = buffer.len();
    sort_with(&mut buffer, 0..len, &mut compare::by_comparer(comparer));
    buffer
}

/// Collects `iter` into a `Vec` and sorts it by a derived key ordered with an external comparer.
pub fn sorted_by_key_with<I, K, F, C>(iter: I, key: F, comparer: C) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    let mut buffer: Vec<I::Item> = iter.into_iter().collect();
    let len = buffer.len();
    sort_with(
        &mut buffer,
        0..len,
        &mut compare::by_key_with(key, comparer),
    );
    buffer
}

/// Sorts `len` elements starting at `start` in place, by their natural order.
///
/// With `len <= 1` this returns without dereferencing `start`, so a null or dangling pointer is
/// fine for an empty range.
///
/// # Safety
///
/// When `len > 1`, the requirements of [`RawBuffer::from_raw_parts`] apply for the duration of
/// the call.
///
/// # Examples
///
/// ```
/// let mut storage = [4u64, 2, 4, 1];
/// unsafe { flagsort::sort_raw_parts(storage.as_mut_ptr(), storage.len()) };
///
/// assert_eq!(storage, [1, 2, 4, 4]);
/// ```
pub unsafe fn sort_raw_parts<T: Ord>(start: *mut T, len: usize) {
    if len <= 1 {
        return;
    }
    // Safety: forwarded from the caller.
    let mut buffer = unsafe { RawBuffer::from_raw_parts(start, len) };
    sort(&mut buffer);
}

fn resolve<B, R>(buffer: &B, range: R) -> Result<Range<usize>, SortError>
where
    B: SortBuffer + ?Sized,
    R: SortRange,
{
    let len = buffer.len();
    range.resolve(len).inspect_err(|err| {
        debug!("rejected sort request on buffer of length {}: {}", len, err);
    })
}

/// Every entry point funnels into this one instantiation point of the engine.
fn sort_with<'b, B, F>(buffer: &'b mut B, range: Range<usize>, compare: &mut F) -> &'b mut B
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    quicksort(buffer, range.clone(), compare);

    #[cfg(any(test, feature = "verify"))]
    crate::verify::assert_sorted(buffer, range.start, range.end, compare);

    buffer
}

/// Recursive driver.
///
/// Sorts `range` of `buffer`. After each partition it recurses into the smaller of the less and
/// greater blocks and loops on the larger one, which keeps stack depth logarithmic even when the
/// first-element pivot degrades the running time to quadratic.
fn quicksort<B, F>(buffer: &mut B, mut range: Range<usize>, compare: &mut F)
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    loop {
        match range.len() {
            0 | 1 => return,
            2 => {
                let (a, b) = (range.start, range.start + 1);
                if compare(buffer.element(a), buffer.element(b)) == Ordering::Greater {
                    buffer.swap(a, b);
                }
                return;
            }
            _ => {}
        }

        trace!(
            "enter partition [{}, {}] ({} elements)",
            range.start,
            range.end - 1,
            range.len()
        );
        let (less, greater) = partition(buffer, range.start, range.end - 1, compare);
        trace!(
            "leave partition [{}, {}]: less {:?}, greater {:?}",
            range.start,
            range.end - 1,
            less,
            greater
        );

        if less.len() < greater.len() {
            quicksort(buffer, less, compare);
            range = greater;
        } else {
            quicksort(buffer, greater, compare);
            range = less;
        }
    }
}

/// Partitions `[start, end]` (inclusive, at least three elements) around the element at `start`.
///
/// Returns the less block and the greater block as half-open ranges; the equal block lies
/// between them and needs no further work.
///
/// During the scan the range is laid out as
///
/// ```text
///  start      end_of_pivot_keys    lower          upper        end
///  | a: == pivot | b: < pivot       | w: unknown   | c: > pivot |
/// ```
///
/// with `a = [start, end_of_pivot_keys)`, `b = [end_of_pivot_keys, lower)`,
/// `w = [lower, upper]` and `c = (upper, end]`. Every swap touches indices past `start`, so the
/// pivot itself stays put until the final reorder.
fn partition<B, F>(
    buffer: &mut B,
    start: usize,
    end: usize,
    compare: &mut F,
) -> (Range<usize>, Range<usize>)
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Item, &B::Item) -> Ordering,
{
    debug_assert!(start + 2 <= end);

    let pivot = start;
    let mut end_of_pivot_keys = start + 1;
    let mut lower = start + 1;
    let mut upper = end;

    while lower <= upper {
        // Grow a and b until an element greater than the pivot turns up at `lower`.
        while lower <= upper {
            match compare(buffer.element(lower), buffer.element(pivot)) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    // A non-empty b starts with a less element; trade it for the equal one.
                    if end_of_pivot_keys < lower {
                        buffer.swap(end_of_pivot_keys, lower);
                    }
                    end_of_pivot_keys += 1;
                    lower += 1;
                }
                Ordering::Less => lower += 1,
            }

            #[cfg(any(test, feature = "verify"))]
            crate::verify::assert_regions(
                buffer,
                start,
                end,
                end_of_pivot_keys,
                lower,
                upper,
                compare,
            );
        }

        // Grow c until an element that belongs in a or b turns up at `upper`.
        while lower <= upper {
            match compare(buffer.element(upper), buffer.element(pivot)) {
                Ordering::Greater => upper -= 1,
                Ordering::Less => {
                    // `lower` holds a greater element: exchange the two.
                    buffer.swap(lower, upper);
                    lower += 1;
                    upper -= 1;
                    break;
                }
                Ordering::Equal => {
                    // Rotate: equal -> end_of_pivot_keys, greater -> upper, oldest b -> lower.
                    // With b empty `end_of_pivot_keys == lower` and the second swap is a no-op.
                    buffer.swap(lower, upper);
                    if end_of_pivot_keys < lower {
                        buffer.swap(end_of_pivot_keys, lower);
                    }
                    end_of_pivot_keys += 1;
                    lower += 1;
                    upper -= 1;
                    break;
                }
            }

            #[cfg(any(test, feature = "verify"))]
            crate::verify::assert_regions(
                buffer,
                start,
                end,
                end_of_pivot_keys,
                lower,
                upper,
                compare,
            );
        }

        #[cfg(any(test, feature = "verify"))]
        crate::verify::assert_regions(
            buffer,
            start,
            end,
            end_of_pivot_keys,
            lower,
            upper,
            compare,
        );
    }

    // w is empty. Move b in front of a by swapping a with the tail of b, outside in.
    let equal_len = end_of_pivot_keys - start;
    let less_len = lower - end_of_pivot_keys;
    for offset in 0..equal_len.min(less_len) {
        buffer.swap(start + offset, lower - 1 - offset);
    }

    let less_end = start + less_len;

    #[cfg(any(test, feature = "verify"))]
    crate::verify::assert_blocks(buffer, start, less_end, lower, end, compare);

    (start..less_end, lower..end + 1)
}
