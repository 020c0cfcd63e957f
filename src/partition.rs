use crate::pivot::choose_pivot;

// If fewer elements than this end up strictly greater than the pivot, the input is assumed to
// hold many duplicates of the pivot. The ninther alone would suggest 3.
const DUPLICATE_PROTECTION_THRESHOLD: usize = 5;

/// Chooses a pivot and partitions `v` around it.
///
/// Returns `(mid_lo, mid_hi)` such that after the call `v[..mid_lo]` holds elements `<=` pivot,
/// `v[mid_lo..mid_hi]` holds elements equal to the pivot, already in their final position, and
/// `v[mid_hi..]` holds elements `>=` pivot. `v[mid_lo]` is the pivot itself, so both outer
/// regions are strictly shorter than `v`.
///
/// If `is_less` does not implement a strict weak ordering the resulting order is unspecified, but
/// `mid_lo <= mid_hi <= v.len()` still holds and all original elements remain in `v`.
///
/// Expects `v.len() >` [`SMALL_SORT_THRESHOLD`](crate::smallsort::SMALL_SORT_THRESHOLD).
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let m = len / 2;

    choose_pivot(v, is_less);

    // Invariants are:
    //  v[0] = pivot
    //  v[0 < i < a] < pivot
    //  v[a <= i < b] <= pivot
    //  v[b <= i < c] unexamined
    //  v[c <= i < len - 1] > pivot
    //  v[len - 1] >= pivot
    const PIVOT: usize = 0;
    let mut a = 1;
    let mut c = len - 1;

    while a < c && is_less(&v[a], &v[PIVOT]) {
        a += 1;
    }

    let mut b = a;
    loop {
        // v[b] <= pivot
        while b < c && !is_less(&v[PIVOT], &v[b]) {
            b += 1;
        }
        // v[c - 1] > pivot
        while b < c && is_less(&v[PIVOT], &v[c - 1]) {
            c -= 1;
        }
        if b >= c {
            break;
        }

        // v[b] > pivot; v[c - 1] <= pivot
        v.swap(b, c - 1);
        b += 1;
        c -= 1;
    }

    // Here `c <= b <= c + 1`.

    let mut protect = len - c < DUPLICATE_PROTECTION_THRESHOLD;
    if !protect && len - c < len / 4 {
        // Test some points for equality to the pivot.
        let mut dups = 0;

        // v[len - 1] == pivot
        if !is_less(&v[PIVOT], &v[len - 1]) {
            v.swap(c, len - 1);
            c += 1;
            dups += 1;
        }

        // v[b - 1] == pivot
        if !is_less(&v[b - 1], &v[PIVOT]) {
            b -= 1;
            dups += 1;
        }

        // `b >= c > len * 3 / 4` here and `len > 12`, so `m < b`, which means v[m] <= pivot.
        // v[m] == pivot
        if !is_less(&v[m], &v[PIVOT]) {
            v.swap(m, b - 1);
            b -= 1;
            dups += 1;
        }

        // If at least 2 points are equal to the pivot, assume a skewed distribution.
        protect = dups > 1;
    }

    if protect {
        // Protect against a lot of duplicates, the invariants change to:
        //  v[a <= i < b] unexamined
        //  v[b <= i < c] = pivot
        loop {
            // v[b - 1] == pivot
            while a < b && !is_less(&v[b - 1], &v[PIVOT]) {
                b -= 1;
            }
            // v[a] < pivot
            while a < b && is_less(&v[a], &v[PIVOT]) {
                a += 1;
            }
            if a >= b {
                break;
            }

            // v[a] == pivot; v[b - 1] < pivot
            v.swap(a, b - 1);
            a += 1;
            b -= 1;
        }
    }

    // Swap the pivot into the middle.
    v.swap(PIVOT, b - 1);

    (b - 1, c)
}
