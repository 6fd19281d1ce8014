//! Three-way quicksort and stable quicksort, generic over the comparison function.
//!
//! Both algorithms expose the same family of entry points: ascending, descending and
//! custom-comparator variants, each for the whole slice and for an inclusive sub-range.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod cmp;
pub mod order;
pub mod range;

pub mod quick3;
pub mod stable_quick;

pub use order::SortOrder;
pub use range::RangeError;
pub use sort_test_tools::Sort;
