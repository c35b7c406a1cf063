// tests/unit/bounds_test.rs
use closed_range::{Range, RangeError, RangeErrorKind};

use crate::common::Fixtures;

#[test]
fn wrong_contract_is_rejected_before_any_comparison() {
    let fx = Fixtures::new();
    let result = Range::new(50, 5).and_then(|range| range.is_after(&fx.negative));

    let err = result.unwrap_err();
    assert_eq!(err.kind(), RangeErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "Start value should be lower than endInclusive");
}

#[test]
fn lower_bound_is_correct() {
    let fx = Fixtures::new();
    assert_eq!(fx.negative.lower_bound(), -100);
    assert_ne!(fx.negative.lower_bound(), 50);
}

#[test]
fn upper_bound_is_correct() {
    let fx = Fixtures::new();
    assert_eq!(fx.another.upper_bound(), 50);
    assert_ne!(fx.full_range.upper_bound(), i64::MIN);
    assert_eq!(fx.from_zero_to_max.upper_bound(), i64::MAX);
}

#[test]
fn contains_returns_true() {
    let fx = Fixtures::new();
    assert!(fx.negative.contains(-5));
    assert!(fx.negative.contains(-50));
    assert!(fx.negative.contains(-100));
    assert!(fx.full_range.contains(i64::MIN));
    assert!(fx.full_range.contains(i64::MAX));
}

#[test]
fn contains_returns_false() {
    let fx = Fixtures::new();
    assert!(!fx.one.contains(0));
    assert!(!fx.one.contains(26));
    assert!(!fx.from_min_to_zero.contains(1));
}

#[test]
fn equal_bounds_compare_equal() {
    let fx = Fixtures::new();
    assert_eq!(fx.one, fx.equals_to_one);
    assert_ne!(fx.one, fx.another);
    assert_eq!(RangeError::NullArgument.message(), None);
}
