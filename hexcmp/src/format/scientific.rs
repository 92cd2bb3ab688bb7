// hexcmp/src/format/scientific.rs

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::constants::{SCIENTIFIC_FRACTION_DIGITS, SCIENTIFIC_MIN_EXPONENT};
use crate::types::ParsedHex;

/// True when |value| >= 10^10.
pub fn scientific_applies(value: &BigInt) -> bool {
    let threshold = BigUint::from(10u32).pow(SCIENTIFIC_MIN_EXPONENT);
    value.magnitude() >= &threshold
}

/// Format `value` as `d.dddde+XX`, or `None` below the threshold.
///
/// Works on the exact decimal expansion, so values far outside the `f64`
/// range still format. The mantissa is rounded half-to-even.
pub fn scientific_notation(value: &BigInt) -> Option<String> {
    if !scientific_applies(value) {
        return None;
    }

    let decimal = value.magnitude().to_str_radix(10);
    let keep = SCIENTIFIC_FRACTION_DIGITS + 1;
    let mut exponent = decimal.len() - 1;

    let (head, rest) = decimal.split_at(keep);
    let mut mantissa: Vec<u8> = head.bytes().map(|b| b - b'0').collect();
    if rounds_up(&mantissa, rest) && increment(&mut mantissa) {
        // 9.99995e+N carried into 10.0000e+N
        mantissa.insert(0, 1);
        mantissa.truncate(keep);
        exponent += 1;
    }

    let mut s = String::with_capacity(keep + 8);
    if value.is_negative() {
        s.push('-');
    }
    s.push((b'0' + mantissa[0]) as char);
    s.push('.');
    for &d in &mantissa[1..] {
        s.push((b'0' + d) as char);
    }
    s.push_str(&format!("e+{:02}", exponent));
    Some(s)
}

/// Scientific notation of a parsed value.
pub fn scientific(parsed: &ParsedHex) -> Option<String> {
    scientific_notation(parsed.value())
}

fn rounds_up(kept: &[u8], rest: &str) -> bool {
    let mut digits = rest.bytes();
    let first = match digits.next() {
        Some(d) => d,
        None => return false,
    };
    match first.cmp(&b'5') {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => {
            let tail_nonzero = digits.any(|d| d != b'0');
            let last_odd = kept.last().map(|d| d % 2 == 1).unwrap_or(false);
            tail_nonzero || last_odd
        }
    }
}

/// Add one to a big-endian digit vector. Returns true on overflow.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
