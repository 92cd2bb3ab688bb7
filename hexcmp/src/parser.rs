// hexcmp/src/parser.rs
//! Hex string validation and conversion.

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::FormatError;
use crate::types::{ParsedHex, Sign};
use crate::Result;

/// Case-insensitive `0-9a-fA-F`.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Strip an optional leading `0x` / `0X`.
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Split an optional leading sign character off `s`.
pub fn split_sign(s: &str) -> (Sign, &str) {
    let mut chars = s.chars();
    match chars.next().and_then(Sign::from_char) {
        Some(sign) => (sign, chars.as_str()),
        None => (Sign::Positive, s),
    }
}

/// Find the first run of non-hex characters in `digits`.
///
/// Returns the run and its character offset within `digits`.
pub fn first_invalid_run(digits: &str) -> Option<(String, usize)> {
    let start = digits.chars().position(|c| !is_hex_digit(c))?;
    let run: String = digits
        .chars()
        .skip(start)
        .take_while(|&c| !is_hex_digit(c))
        .collect();
    Some((run, start))
}

/// Parse a signed, optionally `0x`-prefixed hex string.
///
/// Surrounding whitespace is ignored. Only a leading prefix is stripped;
/// an embedded `0x` is reported as invalid.
pub fn parse(input: &str) -> Result<ParsedHex> {
    log::trace!("parse: {:?}", input);

    let trimmed = input.trim();
    if trimmed.is_empty() {
        log::debug!("rejecting empty input");
        return Err(FormatError::Empty.into());
    }

    let (sign, unsigned) = split_sign(trimmed);
    let digits = strip_prefix(unsigned);
    if digits.is_empty() {
        log::debug!("no digits in {:?}", trimmed);
        return Err(FormatError::MissingDigits {
            input: trimmed.to_string(),
        }
        .into());
    }

    // offsets are reported relative to the trimmed input
    let consumed = trimmed.chars().count() - digits.chars().count();
    if let Some((invalid, at)) = first_invalid_run(digits) {
        log::debug!("invalid digits {:?} in {:?}", invalid, trimmed);
        return Err(FormatError::InvalidDigits {
            invalid,
            offset: consumed + at,
        }
        .into());
    }

    let magnitude =
        BigUint::from_str_radix(digits, 16).map_err(|_| FormatError::InvalidDigits {
            invalid: digits.to_string(),
            offset: consumed,
        })?;

    Ok(ParsedHex::new(sign, magnitude, digits.to_ascii_lowercase()))
}
