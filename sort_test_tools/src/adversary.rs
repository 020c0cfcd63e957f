//! McIlroy's "A Killer Adversary for Quicksort".
//!
//! The values of the sorted elements are decided lazily while the sort runs. Every element starts
//! out as `gas`, larger than any decided value. When two gas elements meet, one of them is frozen
//! to the next smallest solid value, preferably the one most recently compared, which is likely
//! the pivot. The answers stay consistent with a total order, so any correct sort terminates, but
//! a quicksort without a worst-case fallback degrades to quadratic time.

/// Sorts the index array `0..len` with `sort_by_less` against the adversary.
///
/// Returns the sorted indices, the values the elements ended up with and the number of
/// comparisons performed.
pub fn antiqsort<F>(len: usize, sort_by_less: F) -> (Vec<usize>, Vec<i64>, u64)
where
    F: FnOnce(&mut [usize], &mut dyn FnMut(&usize, &usize) -> bool),
{
    let gas = len as i64;
    let mut values = vec![gas; len];
    let mut solid = 0i64;
    let mut candidate = 0usize;
    let mut comp_count = 0u64;

    let mut indices = (0..len).collect::<Vec<usize>>();

    sort_by_less(&mut indices, &mut |&x: &usize, &y: &usize| {
        comp_count += 1;

        if values[x] == gas && values[y] == gas {
            let frozen = if x == candidate { x } else { y };
            values[frozen] = solid;
            solid += 1;
        }

        if values[x] == gas {
            candidate = x;
        } else if values[y] == gas {
            candidate = y;
        }

        values[x] < values[y]
    });

    (indices, values, comp_count)
}

/// Checks that `indices` is ordered by the values the adversary settled on.
pub fn is_sorted_by_frozen(indices: &[usize], values: &[i64]) -> bool {
    indices.windows(2).all(|w| values[w[0]] <= values[w[1]])
}
