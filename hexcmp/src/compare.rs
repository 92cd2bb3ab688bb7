// hexcmp/src/compare.rs
//! Three-way comparison against two.

use derive_more::Display;
use num_bigint::BigInt;
use std::cmp::Ordering;

use crate::constants::COMPARISON_PIVOT;
use crate::types::ParsedHex;

/// Where a value sits relative to 2.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Comparison {
    /// value > 2
    #[display(fmt = "greater than 2")]
    GreaterThanTwo,
    /// value < 2
    #[display(fmt = "less than 2")]
    LessThanTwo,
    /// value == 2
    #[display(fmt = "equal to 2")]
    EqualToTwo,
}

impl Comparison {
    /// Map `value.cmp(&2)` onto a classification.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::GreaterThanTwo,
            Ordering::Less => Comparison::LessThanTwo,
            Ordering::Equal => Comparison::EqualToTwo,
        }
    }

    /// One-line verdict for display.
    pub fn verdict(&self) -> String {
        format!("The value is {}.", self)
    }
}

/// Classify a signed value against 2.
pub fn compare_value(value: &BigInt) -> Comparison {
    Comparison::from_ordering(value.cmp(&BigInt::from(COMPARISON_PIVOT)))
}

/// Classify a parsed value against 2.
pub fn compare(parsed: &ParsedHex) -> Comparison {
    compare_value(parsed.value())
}
