#![no_main]

use libfuzzer_sys::fuzz_target;

use quick_sorts::stable_quick::{self as test_sort, PivotChoice};
use quick_sorts_fuzz::{bytes_as_keyed, bytes_as_range};

fuzz_target!(|data: &[u8]| {
    let original = bytes_as_keyed(data);

    // The std stable sort is the reference for the order of equal keys.
    let mut expected = original.clone();
    expected.sort_by_key(|elem| elem.0);

    let mut v = original.clone();
    test_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, expected);

    let seed = data.len() as u64;
    let sorted = test_sort::sorted_by_with(
        original.clone(),
        |a, b| a.0.cmp(&b.0),
        PivotChoice::Random { seed },
    );
    assert_eq!(sorted, expected);

    if let Some((left, right)) = bytes_as_range(data, original.len()) {
        let mut list = original.clone();
        let mut expected = original;
        expected[left..=right].sort_by_key(|elem| elem.0);

        test_sort::sort_vec_range_by(&mut list, left, right, |a, b| a.0.cmp(&b.0)).unwrap();
        assert_eq!(list, expected);
    }
});
