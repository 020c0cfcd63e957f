use crate::heapsort;
use crate::partition::partition;
use crate::smallsort::{self, SMALL_SORT_THRESHOLD};

/// Sorts `v` recursively.
///
/// `limit` is the number of partitions allowed before switching to `heapsort`. If zero, this
/// function will immediately switch to heapsort.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F, mut limit: u32)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > SMALL_SORT_THRESHOLD {
        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort::heapsort(v, is_less);
            return;
        }

        limit -= 1;

        let (mid_lo, mid_hi) = partition(v, is_less);

        // Split the slice into `left`, `equal`, and `right`. Elements equal to the pivot are
        // already in their final position.
        let (left_and_equal, right) = v.split_at_mut(mid_hi);
        let left = &mut left_and_equal[..mid_lo];

        // Recurse into the shorter side and loop on the longer one. Every recursive call gets at
        // most half of its parent, which bounds the stack depth to lg(len).
        if left.len() < right.len() {
            quicksort(left, is_less, limit);
            v = right;
        } else {
            quicksort(right, is_less, limit);
            v = left;
        }
    }

    smallsort::small_sort(v, is_less);
}
