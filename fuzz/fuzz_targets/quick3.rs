#![no_main]

use libfuzzer_sys::fuzz_target;

use quick_sorts::quick3 as test_sort;
use quick_sorts_fuzz::{bytes_as_i32, bytes_as_range};

fuzz_target!(|data: &[u8]| {
    let mut v = bytes_as_i32(data);
    let mut expected = v.clone();
    expected.sort_unstable();

    test_sort::sort(&mut v);
    assert_eq!(v, expected);

    let original = bytes_as_i32(data);
    if let Some((left, right)) = bytes_as_range(data, original.len()) {
        let mut v = original.clone();
        let mut expected = original;
        expected[left..=right].sort_unstable_by(|a, b| b.cmp(a));

        test_sort::sort_range_descending(&mut v, left, right).unwrap();
        assert_eq!(v, expected);
    }
});
