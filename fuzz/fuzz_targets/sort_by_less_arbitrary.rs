#![no_main]

use libfuzzer_sys::fuzz_target;

// The first bytes script the answers of `is_less`, which need not be a strict weak ordering. The
// sort has to terminate without panicking and keep the original elements either way.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (script, values) = data.split_at(data.len() / 2);
    let mut v = values.to_vec();

    let mut call = 0usize;
    hybridsort::sort_by_less(&mut v, |a, b| {
        let answer = script[call % script.len()];
        call += 1;

        match answer % 3 {
            0 => a < b,
            1 => true,
            _ => false,
        }
    });

    v.sort_unstable();
    let mut expected = values.to_vec();
    expected.sort_unstable();

    assert_eq!(v, expected);
});
