use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::patterns;

use quick_sorts::cmp;
use quick_sorts::order::{self, SortOrder};
use quick_sorts::stable_quick::{self, PivotChoice};
use quick_sorts::RangeError;

type TestSort = stable_quick::SortImpl;

instantiate_sort_tests!(TestSort);

fn by_key(a: &(i32, &str), b: &(i32, &str)) -> Ordering {
    a.0.cmp(&b.0)
}

#[test]
fn equal_keys_keep_input_order() {
    let mut v = [(1, "a"), (1, "b"), (0, "c")];
    stable_quick::sort_by(&mut v, by_key);

    assert_eq!(v, [(0, "c"), (1, "a"), (1, "b")]);
}

#[test]
fn descending_is_stable() {
    let mut v = [(1, "a"), (2, "b"), (1, "c"), (2, "d")];
    stable_quick::sort_by(&mut v, cmp::reverse(by_key));

    assert_eq!(v, [(2, "b"), (2, "d"), (1, "a"), (1, "c")]);

    let mut v = [1, 2, 2, 3];
    stable_quick::sort_descending(&mut v);
    assert_eq!(v, [3, 2, 2, 1]);
}

#[test]
fn trivial_inputs() {
    let mut empty: [i32; 0] = [];
    stable_quick::sort(&mut empty);

    let mut single = [1];
    stable_quick::sort_by(&mut single, |_, _| panic!("nothing to compare"));
    assert_eq!(single, [1]);

    assert_eq!(stable_quick::sorted(Vec::<i32>::new()), Vec::<i32>::new());
    assert_eq!(stable_quick::sorted(vec![1]), vec![1]);
}

#[test]
fn functional_forms() {
    let v = vec![5, 3, 3, 1, 4, 3];

    assert_eq!(stable_quick::sorted(v.clone()), [1, 3, 3, 3, 4, 5]);
    assert_eq!(stable_quick::sorted_descending(v.clone()), [5, 4, 3, 3, 3, 1]);

    let words = vec!["pear", "fig", "plum", "kiwi", "date"];
    assert_eq!(
        stable_quick::sorted_by(words, |a, b| a.len().cmp(&b.len())),
        ["fig", "pear", "plum", "kiwi", "date"]
    );
}

#[test]
fn sorted_range_copies_only_the_range() {
    let v = [9, 8, 1, 2, 7];
    let sub = stable_quick::sorted_range_by(&v, 1, 3, |a: &i32, b: &i32| a.cmp(b)).unwrap();

    assert_eq!(sub, [1, 2, 8]);
    assert_eq!(v, [9, 8, 1, 2, 7]);

    assert_eq!(
        stable_quick::sorted_range_by(&v, 2, 9, |a: &i32, b: &i32| a.cmp(b)),
        Err(RangeError::OutOfBounds { right: 9, len: 5 })
    );
}

#[test]
fn range_leaves_outside_untouched() {
    let mut v = [9, 8, 1, 2, 7];
    stable_quick::sort_range(&mut v, 1, 3).unwrap();
    assert_eq!(v, [9, 1, 2, 8, 7]);

    let mut v = [0, 1, 5, 3, 4, 2];
    stable_quick::sort_range_descending(&mut v, 2, 5).unwrap();
    assert_eq!(v, [0, 1, 5, 4, 3, 2]);
}

#[test]
fn range_is_stable() {
    let mut v = [(7, "x"), (1, "b"), (0, "c"), (1, "a"), (7, "y")];
    stable_quick::sort_range_by(&mut v, 1, 3, |a, b| by_key(a, b)).unwrap();

    assert_eq!(v, [(7, "x"), (0, "c"), (1, "b"), (1, "a"), (7, "y")]);
}

#[test]
fn vec_range_splices_back_in_place() {
    let mut list = vec![9, 8, 1, 2, 7];
    stable_quick::sort_vec_range_by(&mut list, 1, 3, |a: &i32, b: &i32| a.cmp(b)).unwrap();
    assert_eq!(list, [9, 1, 2, 8, 7]);

    let mut list = vec![3, 2, 1];
    stable_quick::sort_vec_range_by(&mut list, 0, 2, |a: &i32, b: &i32| a.cmp(b)).unwrap();
    assert_eq!(list, [1, 2, 3]);

    let mut list = vec![3, 2, 1];
    assert_eq!(
        stable_quick::sort_vec_range_by(&mut list, 2, 1, |a: &i32, b: &i32| a.cmp(b)),
        Err(RangeError::Inverted { left: 2, right: 1 })
    );
    assert_eq!(list, [3, 2, 1]);
}

#[test]
fn vec_range_orders() {
    let mut list = vec![9, 8, 1, 2, 7];
    stable_quick::sort_vec_range(&mut list, 1, 3).unwrap();
    assert_eq!(list, [9, 1, 2, 8, 7]);

    let mut list = vec![0, 1, 5, 3, 4, 2];
    stable_quick::sort_vec_range_descending(&mut list, 2, 5).unwrap();
    assert_eq!(list, [0, 1, 5, 4, 3, 2]);

    let mut list = vec![1, 2];
    assert_eq!(
        stable_quick::sort_vec_range_descending(&mut list, 0, 2),
        Err(RangeError::OutOfBounds { right: 2, len: 2 })
    );
    assert_eq!(list, [1, 2]);
}

#[test]
fn vec_range_comparison_panic_keeps_all_elements() {
    let mut list = vec![9, 8, 1, 2, 7];

    let mut comps = 0;
    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        stable_quick::sort_vec_range_by(&mut list, 1, 3, |a: &i32, b: &i32| {
            comps += 1;
            if comps == 2 {
                panic!("comparison failed");
            }
            a.cmp(b)
        })
    }));

    assert!(res.is_err());
    assert_eq!(list, [9, 8, 1, 2, 7]);

    let original = patterns::random(500);
    let mut list = original.clone();

    let mut comps = 0;
    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        stable_quick::sort_vec_range_by(&mut list, 100, 399, |a: &i32, b: &i32| {
            comps += 1;
            if comps == 500 {
                panic!("comparison failed");
            }
            a.cmp(b)
        })
    }));

    assert!(res.is_err());
    assert_eq!(list, original);
}

#[test]
fn range_errors_leave_input_unchanged() {
    let mut v = [4, 3, 2, 1];

    assert_eq!(
        stable_quick::sort_range(&mut v, 2, 0),
        Err(RangeError::Inverted { left: 2, right: 0 })
    );
    assert_eq!(
        stable_quick::sort_range(&mut v, 1, 10),
        Err(RangeError::OutOfBounds { right: 10, len: 4 })
    );
    assert_eq!(v, [4, 3, 2, 1]);
}

#[test]
fn random_pivot_is_stable_and_reproducible() {
    let keys = patterns::random_duplicates(2_000, 16);
    let input = keys
        .iter()
        .enumerate()
        .map(|(i, key)| (*key, i))
        .collect::<Vec<_>>();

    let mut expected = input.clone();
    expected.sort_by_key(|elem| elem.0);

    for seed in [0, 1, 0xdead_beef] {
        let mut v = input.clone();
        stable_quick::sort_by_with(&mut v, |a, b| a.0.cmp(&b.0), PivotChoice::Random { seed });
        assert_eq!(v, expected);

        let sorted = stable_quick::sorted_by_with(
            input.clone(),
            |a, b| a.0.cmp(&b.0),
            PivotChoice::Random { seed },
        );
        assert_eq!(sorted, expected);
    }
}

#[test]
fn comparison_panic_leaves_input_untouched() {
    let original = patterns::random(500);
    let mut v = original.clone();

    let mut comps = 0;
    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        stable_quick::sort_by(&mut v, |a, b| {
            comps += 1;
            if comps == 1_000 {
                panic!("comparison failed");
            }
            a.cmp(b)
        });
    }));

    assert!(res.is_err());
    assert_eq!(v, original);
}

#[test]
fn sort_by_is_less_predicate_is_stable() {
    let mut v = [(2, "a"), (1, "b"), (2, "c"), (1, "d")];
    stable_quick::sort_by_is_less(&mut v, |a, b| a.0 < b.0);

    assert_eq!(v, [(1, "b"), (1, "d"), (2, "a"), (2, "c")]);
}

#[test]
fn sort_in_descending() {
    let mut v = [3, 1, 2, 3, 1];
    order::sort_in::<TestSort, _>(&mut v, SortOrder::Descending);

    assert_eq!(v, [3, 3, 2, 1, 1]);
}
