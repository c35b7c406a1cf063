// crates/shared-kernel/src/value_objects/mod.rs
pub mod range;
pub mod range_iter;
pub mod relation;

pub use range::Range;
pub use range_iter::RangeIter;
pub use relation::Relation;
