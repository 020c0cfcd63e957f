/// Slices of up to this length are sorted with `small_sort` instead of being partitioned.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 12;

// Gap of the single shell-sort pass. Has to stay below `SMALL_SORT_THRESHOLD`.
const SHELL_GAP: usize = 6;

/// Sorts `v` with one gap-6 shell pass followed by insertion sort.
///
/// Meant for `v.len() <= SMALL_SORT_THRESHOLD`, larger inputs are still sorted but in quadratic
/// time.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn small_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Removes long distance inversions cheaply, e.g. for descending input every element in the
    // tail is moved across half of a threshold sized slice with a single swap.
    for i in SHELL_GAP..len {
        if is_less(&v[i], &v[i - SHELL_GAP]) {
            v.swap(i, i - SHELL_GAP);
        }
    }

    insertion_sort(v, is_less);
}

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
