//! Hybrid unstable sort: introsort with a ninther pivot, duplicate aware Hoare partitioning, a
//! shell-pass small-sort and heapsort as worst-case fallback.
//!
//! Everything is safe code that mutates the input exclusively through `slice::swap`, no element is
//! ever copied out of the slice and nothing is allocated. If the comparison function panics the
//! slice still contains exactly the original elements.

use std::cmp::Ordering;
use std::mem;

mod heapsort;
mod partition;
mod pivot;
mod quicksort;
mod smallsort;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// hybridsort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_less(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// hybridsort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_less(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called on every comparison, twice. For expensive keys consider sorting
/// an index array or caching the keys up front.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort_by_less(v, |a, b| f(a).lt(&f(b)));
}

/// Sorts the slice according to `is_less`, which has to implement a strict weak ordering.
///
/// After the call, for every `i < j`, `is_less(&v[j], &v[i])` is false.
///
/// If `is_less` does not implement a strict weak ordering the resulting order is unspecified, but
/// the call still terminates and all original elements remain in `v`. Same is true if `is_less`
/// panics.
///
/// ```
/// let mut v = [5, 3, 8, 3, 9, 1];
/// hybridsort::sort_by_less(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 3, 3, 5, 8, 9]);
/// ```
#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    quicksort::quicksort(v, &mut is_less, max_depth(len));
}

/// Depth budget for the quicksort loop, twice the number of bits needed to represent `len`.
#[inline]
fn max_depth(len: usize) -> u32 {
    2 * (usize::BITS - len.leading_zeros())
}
