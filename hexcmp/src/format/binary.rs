// hexcmp/src/format/binary.rs

use std::fmt;

use crate::constants::{BINARY_FULL_MAX_BITS, BINARY_PREVIEW_DIGITS};
use crate::types::ParsedHex;

/// Sign-less binary digits of a magnitude, possibly cut short.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum BinaryString {
    /// Every binary digit
    Full {
        /// The digits, most significant first
        digits: String,
    },
    /// Leading digits of a magnitude wider than 256 bits
    Truncated {
        /// The first 100 digits
        prefix: String,
        /// Bit length of the whole magnitude
        total_bits: u64,
    },
}

impl BinaryString {
    /// True when only a prefix is kept.
    pub fn is_truncated(&self) -> bool {
        matches!(self, BinaryString::Truncated { .. })
    }

    /// The digits actually rendered.
    pub fn digits(&self) -> &str {
        match self {
            BinaryString::Full { digits } => digits,
            BinaryString::Truncated { prefix, .. } => prefix,
        }
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryString::Full { digits } => f.write_str(digits),
            BinaryString::Truncated { prefix, total_bits } => {
                write!(f, "{}... (truncated, {} bits)", prefix, total_bits)
            }
        }
    }
}

/// Binary rendering of `parsed`'s magnitude.
///
/// Magnitudes wider than 256 bits keep only a leading preview.
pub fn binary_string(parsed: &ParsedHex) -> BinaryString {
    let magnitude = parsed.magnitude();
    if parsed.bit_length() <= BINARY_FULL_MAX_BITS {
        return BinaryString::Full {
            digits: magnitude.to_str_radix(2),
        };
    }
    let shift = parsed.bit_length() - BINARY_PREVIEW_DIGITS as u64;
    let head = magnitude >> shift;
    BinaryString::Truncated {
        prefix: head.to_str_radix(2),
        total_bits: parsed.bit_length(),
    }
}
