// crates/shared-kernel/src/lib.rs
//! Closed integer interval value object shared by the `closed_range` crates.

pub use error::{
    ClosedRangeError, ErrorContext, ParseRangeError, RangeError, RangeErrorKind, RangeResult, Result,
    VALIDATION_MESSAGE,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Range, RangeIter, Relation};
