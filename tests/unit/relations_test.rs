// tests/unit/relations_test.rs
use closed_range::{RangeError, Relation};

use crate::common::{Fixtures, range};

#[test]
fn is_before_null_args() {
    let fx = Fixtures::new();
    let err = fx.one.is_before(None).unwrap_err();
    assert_eq!(err, RangeError::NullArgument);
    assert!(err.message().is_none());
}

#[test]
fn is_before_returns_true() {
    let fx = Fixtures::new();
    assert!(fx.one.is_before(&fx.another2).unwrap());
}

#[test]
fn is_before_returns_false() {
    let fx = Fixtures::new();
    assert!(!fx.another.is_before(&fx.one).unwrap());
    assert!(!fx.one.is_before(&fx.equals_to_one).unwrap());
}

#[test]
fn is_after_null_args() {
    let fx = Fixtures::new();
    let err = fx.one.is_after(None).unwrap_err();
    assert_eq!(err, RangeError::NullArgument);
    assert!(err.message().is_none());
}

#[test]
fn is_after_returns_true() {
    let fx = Fixtures::new();
    assert!(fx.one.is_after(&fx.negative).unwrap());
}

#[test]
fn is_after_returns_false() {
    let fx = Fixtures::new();
    assert!(!fx.from_min_to_zero.is_after(&fx.full_range).unwrap());
    assert!(!fx.from_zero_to_max.is_after(&fx.from_min_to_zero).unwrap());
}

#[test]
fn is_concurrent_null_args() {
    let fx = Fixtures::new();
    let err = fx.another.is_concurrent(None).unwrap_err();
    assert_eq!(err, RangeError::NullArgument);
    assert!(err.to_string().is_empty());
}

#[test]
fn is_concurrent_returns_true() {
    let fx = Fixtures::new();
    assert!(fx.one.is_concurrent(&fx.another).unwrap());
    assert!(fx.another.is_concurrent(&fx.one).unwrap());
    // [MIN, 0] and [0, MAX] share exactly the value 0.
    assert!(fx.from_min_to_zero.is_concurrent(&fx.from_zero_to_max).unwrap());
}

#[test]
fn is_concurrent_returns_false() {
    let fx = Fixtures::new();
    assert!(!fx.one.is_concurrent(&fx.negative).unwrap());
    assert!(!fx.negative.is_concurrent(&fx.one).unwrap());
}

#[test]
fn adjacent_ranges_are_disjoint() {
    let fx = Fixtures::new();
    assert_eq!(fx.one.relation_to(&fx.another2), Relation::Before);
    assert_eq!(fx.another2.relation_to(&fx.one), Relation::After);
    assert_eq!(range(1, 25).relation_to(&range(25, 25)), Relation::Concurrent);
}
