// hexcmp/src/features.rs

//! Fixed-width numeric features of a validated hex string, fed to a
//! [`Classifier`](crate::classifier::Classifier).
//!
//! Layout: `[bytes(32) | digit frequencies(16) | count, mean, std, min, max, leading zeros]`

use crate::constants::{FEATURE_BYTES, FEATURE_HISTOGRAM, FEATURE_STATS, FEATURE_WIDTH};
use crate::types::ParsedHex;

/// FeatureVector - Newtype Pattern (FEATURE_WIDTH 個の f64)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_WIDTH]);

impl FeatureVector {
    /// Wrap raw feature values.
    pub fn from_array(values: [f64; FEATURE_WIDTH]) -> Self {
        Self(values)
    }

    /// All values in layout order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Magnitude byte block.
    pub fn bytes(&self) -> &[f64] {
        &self.0[..FEATURE_BYTES]
    }

    /// Digit frequency block.
    pub fn histogram(&self) -> &[f64] {
        &self.0[FEATURE_BYTES..FEATURE_BYTES + FEATURE_HISTOGRAM]
    }

    /// Summary statistics block.
    pub fn stats(&self) -> &[f64] {
        &self.0[FEATURE_BYTES + FEATURE_HISTOGRAM..]
    }
}

/// Summary statistics over the digit values (0..=15).
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct DigitStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: u8,
    pub max: u8,
    pub leading_zeros: usize,
}

impl DigitStats {
    fn to_array(self) -> [f64; FEATURE_STATS] {
        [
            self.count as f64,
            self.mean,
            self.std_dev,
            self.min as f64,
            self.max as f64,
            self.leading_zeros as f64,
        ]
    }
}

fn digit_value(c: char) -> u8 {
    // digits were validated by the parser
    c.to_digit(16).unwrap_or(0) as u8
}

/// Big-endian magnitude bytes, left-padded to 32. Wider magnitudes keep
/// their most significant 32 bytes.
pub fn byte_features(parsed: &ParsedHex) -> [f64; FEATURE_BYTES] {
    let be = parsed.magnitude().to_bytes_be();
    let kept = &be[..be.len().min(FEATURE_BYTES)];
    let mut out = [0f64; FEATURE_BYTES];
    let start = FEATURE_BYTES - kept.len();
    for (slot, &b) in out[start..].iter_mut().zip(kept) {
        *slot = b as f64;
    }
    out
}

/// Relative frequency of each hex digit; sums to 1.
pub fn digit_histogram(parsed: &ParsedHex) -> [f64; FEATURE_HISTOGRAM] {
    let mut counts = [0usize; FEATURE_HISTOGRAM];
    for c in parsed.digits().chars() {
        counts[digit_value(c) as usize] += 1;
    }
    let n = parsed.digit_count() as f64;
    let mut out = [0f64; FEATURE_HISTOGRAM];
    for (slot, &count) in out.iter_mut().zip(counts.iter()) {
        *slot = count as f64 / n;
    }
    out
}

/// Count, mean, spread and range of the digit values.
pub fn digit_stats(parsed: &ParsedHex) -> DigitStats {
    let values: Vec<u8> = parsed.digits().chars().map(digit_value).collect();
    let count = values.len();
    let n = count as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    DigitStats {
        count,
        mean,
        std_dev: variance.sqrt(),
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        leading_zeros: values.iter().take_while(|&&v| v == 0).count(),
    }
}

/// Build the full feature vector for `parsed`.
pub fn extract(parsed: &ParsedHex) -> FeatureVector {
    let mut out = [0f64; FEATURE_WIDTH];
    out[..FEATURE_BYTES].copy_from_slice(&byte_features(parsed));
    out[FEATURE_BYTES..FEATURE_BYTES + FEATURE_HISTOGRAM]
        .copy_from_slice(&digit_histogram(parsed));
    out[FEATURE_BYTES + FEATURE_HISTOGRAM..]
        .copy_from_slice(&digit_stats(parsed).to_array());
    FeatureVector(out)
}
