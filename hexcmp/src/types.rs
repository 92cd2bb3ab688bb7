// hexcmp/src/types.rs
//! The parsed value and its sign.

use derive_more::Display;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use std::str::FromStr;

use crate::Error;

/// Sign taken from an optional leading `+` / `-`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sign {
    /// No sign or a leading `+`
    #[default]
    #[display(fmt = "+")]
    Positive,
    /// Leading `-`
    #[display(fmt = "-")]
    Negative,
}

impl Sign {
    /// `+` or `-`; anything else is not a sign.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Positive),
            '-' => Some(Sign::Negative),
            _ => None,
        }
    }
}

impl From<Sign> for num_bigint::Sign {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Positive => num_bigint::Sign::Plus,
            Sign::Negative => num_bigint::Sign::Minus,
        }
    }
}

/// A successfully parsed hex string.
///
/// Built only by [`crate::parser::parse`]; immutable afterwards. The stored
/// digit string is lowercased and has sign and `0x` prefix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHex {
    sign: Sign,
    magnitude: BigUint,
    value: BigInt,
    digits: String,
    bit_length: u64,
}

impl ParsedHex {
    pub(crate) fn new(sign: Sign, magnitude: BigUint, digits: String) -> Self {
        debug_assert!(!digits.is_empty());
        // from_biguint normalizes a zero magnitude to NoSign, so -0 == 0
        let value = BigInt::from_biguint(sign.into(), magnitude.clone());
        let bit_length = magnitude.bits();
        Self {
            sign,
            magnitude,
            value,
            digits,
            bit_length,
        }
    }

    /// Sign as written; kept even when the magnitude is zero.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Value of the digits before the sign is applied.
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Signed value; zero regardless of sign.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Lowercased digits without sign or prefix.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of digits after sign and prefix, leading zeros included.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Bits needed for the magnitude; 0 for zero.
    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }

    /// True when the magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl FromStr for ParsedHex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl TryFrom<&str> for ParsedHex {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        crate::parser::parse(s)
    }
}
