use std::cell::Cell;
use std::env;
use std::str::FromStr;

/// Pins the current thread to a fixed core, `BENCH_PIN_CORE` or core 2 by default.
///
/// Doing it per benchmark thread allows criterion to do other stuff with other threads, which
/// greatly impacts overall benchmark throughput.
pub fn pin_thread_to_core() {
    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    if AFFINITY_ALREADY_SET.with(|already_set| already_set.get()) {
        return;
    }

    let pin_core_id = env::var("BENCH_PIN_CORE")
        .ok()
        .map(|val| usize::from_str(&val).unwrap())
        .unwrap_or(2);

    if let Some(core_id) = core_affinity::get_core_ids()
        .as_ref()
        .and_then(|ids| ids.get(pin_core_id))
    {
        core_affinity::set_for_current(*core_id);
    }

    AFFINITY_ALREADY_SET.with(|already_set| already_set.set(true));
}

pub fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

pub fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;

    v.shuffle(&mut rand::thread_rng());

    v
}
