//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockClassifier setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::classifier::{Label, MockClassifier, Predictor};
use crate::parser::parse;
use crate::types::ParsedHex;

/// Build a Predictor around a MockClassifier pre-seeded with `labels`.
#[doc(hidden)]
pub fn mock_predictor(labels: Vec<Label>) -> Predictor<MockClassifier> {
    Predictor::new(MockClassifier::with_labels(labels))
}

/// Parse an input that the test knows to be valid.
#[doc(hidden)]
pub fn parsed(input: &str) -> ParsedHex {
    match parse(input) {
        Ok(p) => p,
        Err(e) => panic!("test input {:?} should parse: {}", input, e),
    }
}

/// Hex string of `digits` copies of `fill`, e.g. `repeat_digit('a', 40)`.
#[doc(hidden)]
pub fn repeat_digit(fill: char, digits: usize) -> String {
    std::iter::repeat(fill).take(digits).collect()
}
