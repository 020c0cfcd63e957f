use std::cmp::Ordering;

/// A sort implementation under test or benchmark.
///
/// `sort_by_less` funnels into `sort_by` unless the implementation takes a raw `is_less`
/// predicate natively.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_by_less<T, F>(arr: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        Self::sort_by(arr, |a, b| {
            if is_less(a, b) {
                Ordering::Less
            } else if is_less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }
}

pub mod adversary;
pub mod patterns;
