// hexcmp/src/format/trim.rs

use crate::constants::{TRIM_EDGE, TRIM_ELLIPSIS, TRIM_THRESHOLD};
use crate::types::ParsedHex;

/// Shorten a digit string to `head...tail` once it exceeds the threshold.
///
/// Lengths are counted in characters, so any string is safe to pass.
pub fn trim_digits(digits: &str) -> String {
    let count = digits.chars().count();
    if count <= TRIM_THRESHOLD {
        return digits.to_string();
    }
    let head_end = char_boundary(digits, TRIM_EDGE);
    let tail_start = char_boundary(digits, count - TRIM_EDGE);
    let kept = head_end + digits.len() - tail_start;
    let mut s = String::with_capacity(kept + TRIM_ELLIPSIS.len());
    s.push_str(&digits[..head_end]);
    s.push_str(TRIM_ELLIPSIS);
    s.push_str(&digits[tail_start..]);
    s
}

/// Byte index of the `n`th character, or the string length past the end.
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// Trimmed, lowercased, prefix-stripped digits of `parsed`.
pub fn trimmed_hex(parsed: &ParsedHex) -> String {
    trim_digits(parsed.digits())
}
