//! Order selection on top of any [`Sort`] implementation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use sort_test_tools::Sort;

use crate::cmp;

/// The arrangement a sequence should end up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
    /// Leave the sequence as it is.
    Unchanged,
    /// Reverse the current order without comparing anything.
    Reversed,
}

pub const ALL_ORDERS: [SortOrder; 4] = [
    SortOrder::Ascending,
    SortOrder::Descending,
    SortOrder::Unchanged,
    SortOrder::Reversed,
];

impl SortOrder {
    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
            SortOrder::Unchanged => "unchanged",
            SortOrder::Reversed => "reversed",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}', expected one of: ascending, descending, unchanged, reversed")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ORDERS
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortOrderError(s.to_owned()))
    }
}

/// Arranges `v` according to `order`, using `S` for the two orders that need sorting.
pub fn sort_in<S, T>(v: &mut [T], order: SortOrder)
where
    S: Sort,
    T: Ord,
{
    match order {
        SortOrder::Ascending => S::sort(v),
        SortOrder::Descending => S::sort_by(v, cmp::descending()),
        SortOrder::Unchanged => {}
        SortOrder::Reversed => v.reverse(),
    }
}
