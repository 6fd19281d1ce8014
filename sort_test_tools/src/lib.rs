//! Shared test harness for the sorts in this workspace.
//!
//! A sort plugs in by implementing [`Sort`], after which [`instantiate_sort_tests!`] stamps out
//! the whole generic test battery for it.

pub trait Sort {
    /// Sorts whose name contains `unstable` skip the stability tests.
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod test_types;
