// crates/shared-kernel/src/error.rs
use std::num::ParseIntError;

use thiserror::Error;

/// Message carried by a rejected construction.
pub const VALIDATION_MESSAGE: &str = "Start value should be lower than endInclusive";

/// Coarse classification of [`RangeError`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
    InvalidArgument,
    NullArgument,
    OutOfRange,
}

/// Contract violations raised by [`crate::Range`] and [`crate::RangeIter`].
///
/// Only [`RangeError::Validation`] carries a message; the other two variants
/// display as an empty string and callers should match on the variant instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Lower bound greater than upper bound at construction.
    #[error("Start value should be lower than endInclusive")]
    Validation { start: i64, end: i64 },

    /// A comparison was asked for without a partner range.
    #[error("")]
    NullArgument,

    /// The iterator was advanced past its last element.
    #[error("")]
    Bounds,
}

impl RangeError {
    #[must_use]
    pub const fn kind(&self) -> RangeErrorKind {
        match self {
            Self::Validation { .. } => RangeErrorKind::InvalidArgument,
            Self::NullArgument => RangeErrorKind::NullArgument,
            Self::Bounds => RangeErrorKind::OutOfRange,
        }
    }

    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => Some(VALIDATION_MESSAGE),
            Self::NullArgument | Self::Bounds => None,
        }
    }
}

pub type RangeResult<T> = std::result::Result<T, RangeError>;

/// Failures while reading a range from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
    #[error("Expected `start..=end`, `start,end` or `[start, end]`, got '{input}'")]
    MissingSeparator { input: String },

    #[error("Invalid bound '{input}': {source}")]
    InvalidBound {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Invalid(#[from] RangeError),
}

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ClosedRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClosedRangeError>,
    },

    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseRangeError),
}

pub type Result<T> = std::result::Result<T, ClosedRangeError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ClosedRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClosedRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClosedRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
