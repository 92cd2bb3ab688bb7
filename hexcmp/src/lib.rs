// hexcmp/src/lib.rs

//! hexcmp
//!
//! Arbitrary-precision hexadecimal parsing, display helpers and a three-way
//! comparison against two, plus a feature/classifier path for model-based
//! labelling.
#![warn(missing_docs)]

pub mod classifier;
pub mod compare;
pub mod constants;
pub mod error;
pub mod features;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod report;
pub mod test_support;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and `crate::ParsedHex` are available for consumers and for the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
