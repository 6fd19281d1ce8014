//! Three-way quicksort.
//!
//! The range is split around the last element into elements that belong before the pivot, a
//! band of elements equal to it, and elements that belong after it. The equal band is excluded
//! from both follow-up sorts, which keeps inputs with many duplicate keys close to linear time.
//!
//! Unstable, in-place, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.

use std::cmp::Ordering;

use crate::cmp;
use crate::range::{self, RangeError};

sort_impl!("quick3_unstable");

/// Sorts `v` in ascending order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quick3(v, &mut cmp::natural());
}

/// Sorts `v` in descending order.
#[inline]
pub fn sort_descending<T>(v: &mut [T])
where
    T: Ord,
{
    quick3(v, &mut cmp::descending());
}

/// Sorts `v` with a comparator function.
///
/// The comparator must define a total order, otherwise the resulting order is unspecified. The
/// sort always terminates and never loses or duplicates elements, whatever `compare` returns.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick3(v, &mut compare);
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
    log::trace!("quick3: sorting {left}..={right} of {} elements", v.len());

    quick3(&mut v[range], &mut compare);

    Ok(())
}

/// Band boundaries produced by [`partition3`], relative to the partitioned slice.
///
/// `v[..less_end]` belongs before the pivot, `v[less_end..greater_start]` is equal to it and
/// `v[greater_start..]` belongs after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Partition {
    pub(crate) less_end: usize,
    pub(crate) greater_start: usize,
}

/// Partitions `v` into three bands around its last element.
///
/// Slices of at most two elements are put in order directly, a single element is never
/// compared. For those the split lies right after the first element, so neither band needs
/// further sorting.
pub(crate) fn partition3<T, F>(v: &mut [T], compare: &mut F) -> Partition
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len <= 2 {
        if len == 2 && compare(&v[1], &v[0]) == Ordering::Less {
            v.swap(0, 1);
        }

        let split = len.min(1);
        return Partition {
            less_end: split,
            greater_start: split,
        };
    }

    // The pivot moves whenever it takes part in a swap, its position is tracked instead of
    // copying it out. It always counts as equal to itself, so the equal band is never empty.
    let mut pivot = len - 1;

    // v[..lt] less, v[lt..mid] equal, v[mid..gt] unexamined, v[gt..] greater.
    let mut lt = 0;
    let mut mid = 0;
    let mut gt = len;

    while mid < gt {
        let ordering = if mid == pivot {
            Ordering::Equal
        } else {
            compare(&v[mid], &v[pivot])
        };

        match ordering {
            Ordering::Less => {
                swap_tracking(v, lt, mid, &mut pivot);
                lt += 1;
                mid += 1;
            }
            Ordering::Equal => {
                mid += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                swap_tracking(v, mid, gt, &mut pivot);
            }
        }
    }

    debug_assert!(lt <= pivot && pivot < mid);

    Partition {
        less_end: lt,
        greater_start: mid,
    }
}

fn quick3<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Recurse into the shorter band and loop on the longer one, which bounds the stack depth
    // by log2(len).
    while v.len() >= 2 {
        let Partition {
            less_end,
            greater_start,
        } = partition3(v, compare);

        let (less, rest) = v.split_at_mut(less_end);
        let (_, greater) = rest.split_at_mut(greater_start - less_end);

        if less.len() < greater.len() {
            quick3(less, compare);
            v = greater;
        } else {
            quick3(greater, compare);
            v = less;
        }
    }
}

#[inline]
fn swap_tracking<T>(v: &mut [T], a: usize, b: usize, tracked: &mut usize) {
    v.swap(a, b);

    if *tracked == a {
        *tracked = b;
    } else if *tracked == b {
        *tracked = a;
    }
}
