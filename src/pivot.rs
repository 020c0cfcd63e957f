// Above this length the pivot is the median of three medians of three, Tukey's ninther.
const NINTHER_THRESHOLD: usize = 40;

/// Selects a pivot from `v` and moves it to `v[0]`.
///
/// On return `v[len / 2] <= v[0] <= v[len - 1]`, the partition relies on both bounds.
///
/// Expects `v.len() >` [`SMALL_SORT_THRESHOLD`](crate::smallsort::SMALL_SORT_THRESHOLD).
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let last = len - 1;
    let m = len / 2;

    if len > NINTHER_THRESHOLD {
        let s = len / 8;
        median_of_three(v, 0, s, 2 * s, is_less);
        median_of_three(v, m, m - s, m + s, is_less);
        median_of_three(v, last, last - s, last - 2 * s, is_less);
    }

    median_of_three(v, 0, m, last, is_less);
}

/// Orders the three positions so that `v[lo] <= v[mid] <= v[hi]`, where the median lands in
/// `mid`, the first argument.
///
/// The positions need not be ascending, the ninther uses this to park the median of the left,
/// middle and right sample at `0`, `len / 2` and `len - 1` respectively.
fn median_of_three<T, F>(v: &mut [T], mid: usize, lo: usize, hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[mid], &v[lo]) {
        v.swap(mid, lo);
    }
    // v[lo] <= v[mid]
    if is_less(&v[hi], &v[mid]) {
        v.swap(hi, mid);
        // v[lo] <= v[hi] && v[mid] < v[hi]
        if is_less(&v[mid], &v[lo]) {
            v.swap(mid, lo);
        }
    }
    // v[lo] <= v[mid] <= v[hi]
}
