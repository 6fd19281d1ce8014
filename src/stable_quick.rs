//! Stable quicksort.
//!
//! Instead of partitioning in place, every step builds two new lists: elements before the
//! pivot and elements after it. Elements equal to the pivot are routed by their position
//! relative to the pivot, earlier ones to the front list and later ones to the back list, which
//! keeps equal elements in their original order without a secondary key.
//!
//! Stable, *O*(*n*) auxiliary memory per level, *O*(*n* \* log(*n*)) on average and
//! *O*(*n*^2) worst-case.
//!
//! The in-place entry points sort a list of indices and apply the resulting permutation to the
//! input in one final pass. The input is not touched before that pass, so a panicking
//! comparison leaves it as it was.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cmp;
use crate::range::{self, RangeError};

sort_impl!("stable_quick_stable");

/// How the pivot of each partitioning step is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotChoice {
    /// The element at `len / 2`.
    #[default]
    Midpoint,
    /// A uniformly random element, drawn from a generator seeded with `seed`. Avoids the
    /// quadratic worst-case of a fixed position on crafted inputs, while staying reproducible.
    Random { seed: u64 },
}

// --- In-place ---

/// Sorts `v` in ascending order, preserving the order of equal elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_quick(v, &mut cmp::natural(), PivotChoice::Midpoint);
}

/// Sorts `v` in descending order, preserving the order of equal elements.
#[inline]
pub fn sort_descending<T>(v: &mut [T])
where
    T: Ord,
{
    stable_quick(v, &mut cmp::descending(), PivotChoice::Midpoint);
}

/// Sorts `v` with a comparator function, preserving the order of equal elements.
///
/// The comparator must define a total order, otherwise the resulting order is unspecified. The
/// original set of elements is retained whatever `compare` returns.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_quick(v, &mut compare, PivotChoice::Midpoint);
}

/// Like [`sort_by`], with an explicit pivot choice.
#[inline]
pub fn sort_by_with<T, F>(v: &mut [T], mut compare: F, pivot: PivotChoice)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_quick(v, &mut compare, pivot);
}

/// Sorts `v` with a strict "`a` must be placed before `b`" predicate.
#[inline]
pub fn sort_by_is_less<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_by(v, cmp::from_is_less(is_less));
}

/// Sorts `v[left..=right]` in ascending order, leaving every other element in place.
pub fn sort_range<T>(v: &mut [T], left: usize, right: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_range_by(v, left, right, cmp::natural())
}

/// Sorts `v[left..=right]` in descending order, leaving every other element in place.
pub fn sort_range_descending<T>(
    v: &mut [T],
    left: usize,
    right: usize,
) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_range_by(v, left, right, cmp::descending())
}

/// Sorts `v[left..=right]` with a comparator function, leaving every other element in place.
pub fn sort_range_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let range = range::check_range(v.len(), left, right)?;
    log::trace!("stable_quick: sorting {left}..={right} of {} elements", v.len());

    stable_quick(&mut v[range], &mut compare, PivotChoice::Midpoint);

    Ok(())
}

/// Sorts `list[left..=right]` in ascending order, see [`sort_vec_range_by`].
pub fn sort_vec_range<T>(list: &mut Vec<T>, left: usize, right: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_vec_range_by(list, left, right, cmp::natural())
}

/// Sorts `list[left..=right]` in descending order, see [`sort_vec_range_by`].
pub fn sort_vec_range_descending<T>(
    list: &mut Vec<T>,
    left: usize,
    right: usize,
) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_vec_range_by(list, left, right, cmp::descending())
}

/// Sorts `list[left..=right]` by moving the range out of the list, sorting it as a list of its
/// own and splicing the result back at `left`.
///
/// The sub-list goes back into `list` even if `compare` panics, in its original order.
pub fn sort_vec_range_by<T, F>(
    list: &mut Vec<T>,
    left: usize,
    right: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let sub_list = range::take_range(list, left, right)?;
    log::trace!(
        "stable_quick: splicing sorted {left}..={right} back into {} elements",
        list.len() + sub_list.len()
    );

    let mut guard = SpliceBack {
        list,
        at: left,
        items: sub_list,
    };
    stable_quick(&mut guard.items, &mut compare, PivotChoice::Midpoint);

    Ok(())
}

/// Puts `items` back into `list` at `at` when dropped, including during unwinding.
struct SpliceBack<'a, T> {
    list: &'a mut Vec<T>,
    at: usize,
    items: Vec<T>,
}

impl<T> Drop for SpliceBack<'_, T> {
    fn drop(&mut self) {
        let items = std::mem::take(&mut self.items);

        // `at` is where the items were taken from, it is always a valid insertion point.
        if let Err(err) = range::splice_range(self.list, self.at, items) {
            log::error!("stable_quick: failed to splice sub-list back: {err}");
        }
    }
}

// --- Functional ---

/// Returns the elements of `v` in ascending order, preserving the order of equal elements.
#[inline]
pub fn sorted<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    stable_recursive(v, &mut cmp::natural(), PivotChoice::Midpoint)
}

/// Returns the elements of `v` in descending order, preserving the order of equal elements.
#[inline]
pub fn sorted_descending<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    stable_recursive(v, &mut cmp::descending(), PivotChoice::Midpoint)
}

/// Returns the elements of `v` ordered by `compare`, preserving the order of equal elements.
#[inline]
pub fn sorted_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_recursive(v, &mut compare, PivotChoice::Midpoint)
}

/// Like [`sorted_by`], with an explicit pivot choice.
#[inline]
pub fn sorted_by_with<T, F>(v: Vec<T>, mut compare: F, pivot: PivotChoice) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_recursive(v, &mut compare, pivot)
}

/// Returns a sorted copy of `v[left..=right]`. `v` itself is not modified.
pub fn sorted_range_by<T, F>(
    v: &[T],
    left: usize,
    right: usize,
    compare: F,
) -> Result<Vec<T>, RangeError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let sub_list = range::copy_range(v, left, right)?;

    Ok(sorted_by(sub_list, compare))
}

// --- IMPL ---

fn stable_quick<T, F>(v: &mut [T], compare: &mut F, pivot: PivotChoice)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    let order = {
        let elements: &[T] = v;
        let mut compare_idx = |a: &usize, b: &usize| compare(&elements[*a], &elements[*b]);

        stable_recursive((0..elements.len()).collect(), &mut compare_idx, pivot)
    };

    apply_permutation(v, order);
}

enum Work<T> {
    Split(Vec<T>),
    Emit(T),
}

/// Sorted `smaller` ++ `[pivot]` ++ sorted `greater`, evaluated with an explicit work stack so
/// that degenerate partitions cost heap memory rather than call stack depth.
fn stable_recursive<T, F>(list: Vec<T>, compare: &mut F, pivot_choice: PivotChoice) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot_picker = PivotPicker::new(pivot_choice);

    let mut out = Vec::with_capacity(list.len());
    let mut work = vec![Work::Split(list)];

    // The top of the stack is always the next part of the output, front to back.
    while let Some(item) = work.pop() {
        match item {
            Work::Emit(value) => out.push(value),
            Work::Split(list) if list.len() <= 1 => out.extend(list),
            Work::Split(list) => {
                let pivot_pos = pivot_picker.pick(list.len());
                let (smaller, pivot, greater) = split(list, pivot_pos, compare);

                work.push(Work::Split(greater));
                work.push(Work::Emit(pivot));
                work.push(Work::Split(smaller));
            }
        }
    }

    out
}

/// Splits `list` around the element at `pivot_pos`. Ties are broken by position, so the
/// relative order of equal elements is the same in `smaller` ++ `[pivot]` ++ `greater` as in
/// `list`.
fn split<T, F>(mut list: Vec<T>, pivot_pos: usize, compare: &mut F) -> (Vec<T>, T, Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(pivot_pos < list.len());

    let pivot = list.remove(pivot_pos);

    let mut smaller = Vec::new();
    let mut greater = Vec::new();

    // After the removal, indices below pivot_pos are exactly the elements that came before it.
    for (i, value) in list.into_iter().enumerate() {
        match compare(&value, &pivot) {
            Ordering::Less => smaller.push(value),
            Ordering::Greater => greater.push(value),
            Ordering::Equal if i < pivot_pos => smaller.push(value),
            Ordering::Equal => greater.push(value),
        }
    }

    (smaller, pivot, greater)
}

enum PivotPicker {
    Midpoint,
    Random(StdRng),
}

impl PivotPicker {
    fn new(choice: PivotChoice) -> Self {
        match choice {
            PivotChoice::Midpoint => Self::Midpoint,
            PivotChoice::Random { seed } => Self::Random(StdRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        match self {
            Self::Midpoint => len / 2,
            Self::Random(rng) => rng.gen_range(0..len),
        }
    }
}

/// Moves `v[order[i]]` to position `i` for every `i`, following the cycles of the permutation.
fn apply_permutation<T>(v: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        // Positions that already hold their final element are marked with order[i] == i.
        if order[start] == start {
            continue;
        }

        let mut pos = start;
        loop {
            let src = order[pos];
            order[pos] = pos;

            if src == start {
                break;
            }

            v.swap(pos, src);
            pos = src;
        }
    }
}
