//! Core buffer abstraction for Flagsort.
//!
//! This module defines:
//! - [`SortBuffer`]: The trait the sort engine is written against.
//! - [`RawBuffer`]: A pointer-addressed buffer over memory the caller owns.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// A mutable, randomly addressable range of elements.
///
/// The sort engine only ever reads, writes and swaps through this trait, so anything with O(1)
/// indexed access can be sorted in place: slices, `Vec`s, `VecDeque`s, raw memory wrapped in
/// [`RawBuffer`], or collections from other crates.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use flagsort::core::SortBuffer;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl SortBuffer for Scores {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
///
///     fn element(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn replace(&mut self, index: usize, value: u32) -> u32 {
///         std::mem::replace(&mut self.values[index], value)
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.values.swap(a, b);
///     }
/// }
/// ```
pub trait SortBuffer {
    /// The element type stored in the buffer.
    type Item;

    /// Returns the number of elements in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Implementations must panic when `index >= len()`.
    fn element(&self, index: usize) -> &Self::Item;

    /// Stores `value` at `index` and returns the element previously held there.
    fn replace(&mut self, index: usize, value: Self::Item) -> Self::Item;

    /// Exchanges the elements at `a` and `b`. `a == b` is allowed and leaves the buffer unchanged.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> SortBuffer for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> SortBuffer for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Explicit Vec impl so callers can pass `&mut vec` without `.as_mut_slice()`.
impl<T> SortBuffer for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Not contiguous, but indexing and swapping are still O(1).
impl<T> SortBuffer for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// A pointer-addressed view over `len` consecutive elements.
///
/// `RawBuffer` does not care where the memory lives: a stack array, a heap allocation, or a
/// region handed over through FFI. It holds an exclusive borrow of that memory for `'a`, and every
/// access is checked against `len`, so an out-of-range index panics instead of touching memory
/// outside the view.
///
/// # Examples
///
/// ```
/// use flagsort::core::RawBuffer;
///
/// let mut storage = [3u16, 1, 2];
/// let mut buffer = RawBuffer::from_slice(&mut storage);
/// flagsort::sort(&mut buffer);
///
/// assert_eq!(storage, [1, 2, 3]);
/// ```
pub struct RawBuffer<'a, T> {
    start: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> RawBuffer<'a, T> {
    /// Wraps an exclusively borrowed slice.
    pub fn from_slice(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        // A slice pointer is never null, even for an empty slice.
        let start = NonNull::from(slice).cast::<T>();
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    /// Wraps `len` elements starting at `start`.
    ///
    /// A null `start` is accepted only when `len == 0`.
    ///
    /// # Safety
    ///
    /// For the whole lifetime `'a`:
    /// - `start..start + len` must be valid for reads and writes and properly aligned,
    /// - every element in that range must be initialized,
    /// - no other pointer or reference may access that memory.
    pub unsafe fn from_raw_parts(start: *mut T, len: usize) -> Self {
        let start = match NonNull::new(start) {
            Some(start) => start,
            None => {
                assert!(len == 0, "null pointer with non-zero length {len}");
                NonNull::dangling()
            }
        };
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> *mut T {
        assert!(
            index < self.len,
            "index {index} out of range for raw buffer of length {}",
            self.len
        );
        // Safety: `index < len`, and the constructor guarantees `len` valid elements.
        unsafe { self.start.as_ptr().add(index) }
    }
}

impl<T> SortBuffer for RawBuffer<'_, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        // Safety: `slot` checked the bound; the element is initialized and borrowed through `self`.
        unsafe { &*self.slot(index) }
    }

    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        // Safety: see `element`; `&mut self` makes the write exclusive.
        unsafe { ptr::replace(self.slot(index), value) }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.slot(a), self.slot(b));
        // Safety: both slots are in bounds; `ptr::swap` tolerates `a == b`.
        unsafe { ptr::swap(a, b) }
    }
}

impl<T: fmt::Debug> fmt::Debug for RawBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|index| self.element(index)))
            .finish()
    }
}
