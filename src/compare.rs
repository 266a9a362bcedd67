//! Comparison strategies.
//!
//! The engine only knows one thing about ordering: a three-way `FnMut(&T, &T) -> Ordering`.
//! The four public call shapes (natural order, derived key, external comparer, derived key with
//! external comparer) are all reduced to that closure here.

use std::cmp::Ordering;

/// An externally supplied ordering over `T`.
///
/// Every `Fn(&T, &T) -> Ordering` is a `Comparer`, so plain closures work. Implement the trait
/// directly for reusable orderings that carry configuration.
///
/// # Examples
///
/// ```
/// use flagsort::compare::Comparer;
/// use std::cmp::Ordering;
///
/// struct CaseInsensitive;
///
/// impl Comparer<str> for CaseInsensitive {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.bytes()
///             .map(|c| c.to_ascii_lowercase())
///             .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
///     }
/// }
///
/// assert_eq!(CaseInsensitive.compare("Apple", "apple"), Ordering::Equal);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The type's own [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[inline(always)]
pub(crate) fn natural<T: Ord>() -> impl FnMut(&T, &T) -> Ordering {
    |a, b| a.cmp(b)
}

#[inline(always)]
pub(crate) fn by_key<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

#[inline(always)]
pub(crate) fn by_comparer<T, C>(comparer: C) -> impl FnMut(&T, &T) -> Ordering
where
    C: Comparer<T>,
{
    move |a, b| comparer.compare(a, b)
}

#[inline(always)]
pub(crate) fn by_key_with<T, K, F, C>(mut key: F, comparer: C) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T) -> K,
    C: Comparer<K>,
{
    move |a, b| comparer.compare(&key(a), &key(b))
}
