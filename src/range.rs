//! Inclusive sub-range validation, extraction and splicing.

use std::ops::RangeInclusive;

use thiserror::Error;

/// An inclusive `left..=right` range that does not address a valid part of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("inverted range: left ({left}) is greater than right ({right})")]
    Inverted { left: usize, right: usize },
    #[error("range end {right} out of bounds for sequence of length {len}")]
    OutOfBounds { right: usize, len: usize },
    #[error("insertion point {at} out of bounds for sequence of length {len}")]
    InsertionPoint { at: usize, len: usize },
}

/// Validates `left..=right` against a sequence of length `len`.
///
/// A single element range (`left == right`) is valid. Nothing is valid for an empty sequence.
pub fn check_range(
    len: usize,
    left: usize,
    right: usize,
) -> Result<RangeInclusive<usize>, RangeError> {
    let result = if left > right {
        Err(RangeError::Inverted { left, right })
    } else if right >= len {
        Err(RangeError::OutOfBounds { right, len })
    } else {
        Ok(left..=right)
    };

    if let Err(err) = &result {
        log::debug!("rejecting sort range: {err}");
    }

    result
}

/// Clones `v[left..=right]` into a new vector.
pub fn copy_range<T: Clone>(v: &[T], left: usize, right: usize) -> Result<Vec<T>, RangeError> {
    let range = check_range(v.len(), left, right)?;

    Ok(v[range].to_vec())
}

/// Moves `v[left..=right]` out of the list, shifting the tail down.
pub fn take_range<T>(v: &mut Vec<T>, left: usize, right: usize) -> Result<Vec<T>, RangeError> {
    let range = check_range(v.len(), left, right)?;

    Ok(v.drain(range).collect())
}

/// Inserts `items` into the list so that the first of them lands at index `at`.
///
/// This is the inverse of [`take_range`]: taking `left..=right` and splicing the same number of
/// elements back at `left` restores the list's length and leaves everything outside the range
/// where it was.
pub fn splice_range<T>(v: &mut Vec<T>, at: usize, items: Vec<T>) -> Result<(), RangeError> {
    if at > v.len() {
        let err = RangeError::InsertionPoint { at, len: v.len() };
        log::debug!("rejecting splice: {err}");
        return Err(err);
    }

    let tail = v.split_off(at);
    v.extend(items);
    v.extend(tail);

    Ok(())
}
