// tests/common/fixtures.rs
//! Ranges reused across the behavioural suites.

use closed_range::Range;

#[allow(dead_code)]
pub struct Fixtures {
    pub one: Range,
    pub equals_to_one: Range,
    pub another: Range,
    pub another2: Range,
    pub negative: Range,
    pub full_range: Range,
    pub from_min_to_zero: Range,
    pub from_zero_to_max: Range,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            one: range(1, 25),
            equals_to_one: range(1, 25),
            another: range(5, 50),
            another2: range(26, 100),
            negative: range(-100, -5),
            full_range: range(i64::MIN, i64::MAX),
            from_min_to_zero: range(i64::MIN, 0),
            from_zero_to_max: range(0, i64::MAX),
        }
    }
}

pub fn range(start: i64, end: i64) -> Range {
    Range::new(start, end).expect("fixture bounds are ordered")
}
