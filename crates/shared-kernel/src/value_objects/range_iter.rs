// crates/shared-kernel/src/value_objects/range_iter.rs
use std::iter::FusedIterator;

use super::Range;
use crate::error::{RangeError, RangeResult};

/// Pull-based cursor over the values of a [`Range`], ascending.
///
/// The cursor never steps past a bound, so ranges ending at `i64::MAX` (or
/// starting at `i64::MIN` when iterated from the back) terminate cleanly.
#[derive(Debug, Clone)]
pub struct RangeIter {
    front: i64,
    back: i64,
    exhausted: bool,
}

impl RangeIter {
    pub(crate) const fn new(range: &Range) -> Self {
        Self {
            front: range.start_inclusive(),
            back: range.end_inclusive(),
            exhausted: false,
        }
    }

    /// `true` while at least one value is left. Does not move the cursor.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Yields the next value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Bounds`] once every value has been consumed.
    pub fn next_value(&mut self) -> RangeResult<i64> {
        self.next().ok_or_else(|| {
            log::trace!("range iterator advanced past its last value");
            RangeError::Bounds
        })
    }

    const fn remaining(&self) -> u128 {
        if self.exhausted {
            0
        } else {
            self.back.abs_diff(self.front) as u128 + 1
        }
    }
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back -= 1;
        }
        Some(value)
    }
}

impl FusedIterator for RangeIter {}
