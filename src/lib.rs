// src/lib.rs
//! Immutable closed integer interval `[lower, upper]` over `i64`.
//!
//! ```
//! use closed_range::Range;
//!
//! let one = Range::new(1, 25)?;
//! let another = Range::new(26, 100)?;
//! assert!(one.is_before(&another)?);
//! assert!(!one.is_concurrent(&another)?);
//! assert_eq!(one.as_list().len(), 25);
//! # Ok::<(), closed_range::RangeError>(())
//! ```

pub use closed_range_shared_kernel::{
    ClosedRangeError, ErrorContext, ParseRangeError, Range, RangeError, RangeErrorKind, RangeIter,
    RangeResult, Relation, Result, VALIDATION_MESSAGE, error, value_objects,
};
