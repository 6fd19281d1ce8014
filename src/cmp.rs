//! Comparator combinators shared by all sort implementations.
//!
//! Every sort in this crate is written once against `FnMut(&T, &T) -> Ordering`. Ascending and
//! descending orders are just two instances of that closure, and boolean "does `a` move before
//! `b`" predicates are lifted into it with [`from_is_less`].

use std::cmp::Ordering;

/// The natural order of `T`.
#[inline]
pub fn natural<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.cmp(b)
}

/// The natural order of `T`, reversed.
#[inline]
pub fn descending<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| b.cmp(a)
}

/// Returns a comparator with the arguments of `compare` swapped, i.e. `reverse(c)(a, b) ==
/// c(b, a)`.
#[inline]
pub fn reverse<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(b, a)
}

/// Turns a strict "`a` must be placed before `b`" predicate into a three-way comparator.
///
/// Equality is derived by testing both directions: two elements are `Equal` when neither has
/// to move before the other. The predicate is called at most twice per comparison.
#[inline]
pub fn from_is_less<T, F>(mut is_less: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
