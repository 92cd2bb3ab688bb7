// hexcmp/src/error.rs
//! Error types returned by the parser, classifier and model loader.

use thiserror::Error;

/// Why an input string was rejected by the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Nothing but whitespace
    #[error("input cannot be empty")]
    Empty,

    /// A sign or `0x` prefix with nothing after it
    #[error("no hex digits after sign or prefix in '{input}'")]
    MissingDigits {
        /// The trimmed input
        input: String,
    },

    /// A run of characters outside `0-9a-fA-F`
    #[error("invalid hex digits '{invalid}' at offset {offset}")]
    InvalidDigits {
        /// First run of invalid characters
        invalid: String,
        /// Character offset of the run within the trimmed input
        offset: usize,
    },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a hex number
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// The classifier could not produce a label
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Weight count differs from the feature width
    #[error("model shape mismatch: expected {expected} weights, got {actual}")]
    ModelShape {
        /// Feature width
        expected: usize,
        /// Weights supplied
        actual: usize,
    },

    /// Model document could not be decoded
    #[error("model format error: {0}")]
    ModelFormat(String),

    /// JSON serialization failed
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a model file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the recoverable "bad user input" kind.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat(_))
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
