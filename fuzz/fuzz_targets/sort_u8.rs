#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    hybridsort::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort_unstable();

    assert_eq!(v, expected);
});
