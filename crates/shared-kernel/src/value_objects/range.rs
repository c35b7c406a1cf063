// crates/shared-kernel/src/value_objects/range.rs
use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use super::{RangeIter, Relation};
use crate::error::{ParseRangeError, RangeError, RangeResult};

/// Immutable closed interval `[start_inclusive, end_inclusive]` over `i64`.
///
/// Both bounds belong to the range, so `[1, 25]` and `[26, 100]` are disjoint
/// while `[1, 25]` and `[25, 100]` share the value `25`.
///
/// # Invariants
/// `start_inclusive <= end_inclusive`. Every way of building a `Range`
/// (constructor, `TryFrom`, `FromStr`, deserialization) checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    start_inclusive: i64,
    end_inclusive: i64,
}

/// Unvalidated wire shape; converted through [`Range::new`].
#[derive(Deserialize)]
struct RawRange {
    start_inclusive: i64,
    end_inclusive: i64,
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRange::deserialize(deserializer)?;
        Self::new(raw.start_inclusive, raw.end_inclusive).map_err(serde::de::Error::custom)
    }
}

impl Range {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Validation`] when `start > end`.
    pub fn new(start: i64, end: i64) -> RangeResult<Self> {
        if start > end {
            log::debug!("rejected range: start {start} is greater than end {end}");
            return Err(RangeError::Validation { start, end });
        }
        Ok(Self { start_inclusive: start, end_inclusive: end })
    }

    #[inline]
    #[must_use]
    pub const fn lower_bound(&self) -> i64 {
        self.start_inclusive
    }

    #[inline]
    #[must_use]
    pub const fn upper_bound(&self) -> i64 {
        self.end_inclusive
    }

    #[inline]
    #[must_use]
    pub const fn start_inclusive(&self) -> i64 {
        self.start_inclusive
    }

    #[inline]
    #[must_use]
    pub const fn end_inclusive(&self) -> i64 {
        self.end_inclusive
    }

    /// `true` when every value of `self` is strictly below every value of `other`.
    #[inline]
    #[must_use]
    pub const fn precedes(&self, other: &Range) -> bool {
        self.end_inclusive < other.start_inclusive
    }

    /// `true` when every value of `self` is strictly above every value of `other`.
    #[inline]
    #[must_use]
    pub const fn follows(&self, other: &Range) -> bool {
        self.start_inclusive > other.end_inclusive
    }

    /// `true` when the two ranges share at least one value.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Range) -> bool {
        self.start_inclusive <= other.end_inclusive && other.start_inclusive <= self.end_inclusive
    }

    /// Checked form of [`Range::precedes`] for call sites where the partner may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NullArgument`] when `other` is `None`.
    pub fn is_before<'a>(&self, other: impl Into<Option<&'a Range>>) -> RangeResult<bool> {
        other
            .into()
            .map(|other| self.precedes(other))
            .ok_or(RangeError::NullArgument)
    }

    /// Checked form of [`Range::follows`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NullArgument`] when `other` is `None`.
    pub fn is_after<'a>(&self, other: impl Into<Option<&'a Range>>) -> RangeResult<bool> {
        other
            .into()
            .map(|other| self.follows(other))
            .ok_or(RangeError::NullArgument)
    }

    /// Checked form of [`Range::overlaps`]. Symmetric in its two operands.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NullArgument`] when `other` is `None`.
    pub fn is_concurrent<'a>(&self, other: impl Into<Option<&'a Range>>) -> RangeResult<bool> {
        other
            .into()
            .map(|other| self.overlaps(other))
            .ok_or(RangeError::NullArgument)
    }

    #[must_use]
    pub const fn relation_to(&self, other: &Range) -> Relation {
        if self.precedes(other) {
            Relation::Before
        } else if self.follows(other) {
            Relation::After
        } else {
            Relation::Concurrent
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.start_inclusive <= value && value <= self.end_inclusive
    }

    /// Number of integers in the range. The full `i64` domain holds 2^64 values,
    /// one more than `u64` can represent.
    #[must_use]
    pub const fn cardinality(&self) -> u128 {
        self.end_inclusive.abs_diff(self.start_inclusive) as u128 + 1
    }

    /// Collects every value of the range in ascending order.
    ///
    /// Memory grows with [`Range::cardinality`]; only call this on ranges known
    /// to be small. Use [`Range::as_iterator`] otherwise.
    #[must_use]
    pub fn as_list(&self) -> Vec<i64> {
        self.as_iterator().collect()
    }

    /// Fresh cursor over the range, independent of any other cursor.
    #[must_use]
    pub const fn as_iterator(&self) -> RangeIter {
        RangeIter::new(self)
    }

    #[inline]
    #[must_use]
    pub const fn iter(&self) -> RangeIter {
        self.as_iterator()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_inclusive, self.end_inclusive)
    }
}

impl FromStr for Range {
    type Err = ParseRangeError;

    /// Accepts `start..=end`, `start,end` and the `Display` form `[start, end]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let (start, end) = inner
            .split_once("..=")
            .or_else(|| inner.split_once(','))
            .ok_or_else(|| ParseRangeError::MissingSeparator { input: s.to_string() })?;
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?)?)
    }
}

fn parse_bound(raw: &str) -> Result<i64, ParseRangeError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|source| ParseRangeError::InvalidBound { input: raw.to_string(), source })
}

impl TryFrom<(i64, i64)> for Range {
    type Error = RangeError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<RangeInclusive<i64>> for Range {
    type Error = RangeError;

    fn try_from(range: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

impl From<Range> for RangeInclusive<i64> {
    fn from(range: Range) -> Self {
        range.start_inclusive..=range.end_inclusive
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.as_iterator()
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.as_iterator()
    }
}
