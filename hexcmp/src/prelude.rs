// hexcmp/src/prelude.rs
//! Commonly used items, re-exported at the crate root.

pub use crate::classifier::{Classifier, Label, LinearClassifier, Predictor};
pub use crate::compare::{compare, Comparison};
pub use crate::features::{extract, FeatureVector};
pub use crate::parser::parse;
pub use crate::report::Report;
pub use crate::{Error, FormatError, ParsedHex, Result, Sign};

// Re-export display helpers for convenience
pub use crate::format::{binary_string, scientific, trimmed_hex, BinaryString};
