// hexcmp/src/constants.rs
//! Display thresholds and feature widths shared across the crate

/// Digit strings longer than this are shortened for display
pub const TRIM_THRESHOLD: usize = 30;

/// Digits kept on each side of the ellipsis when trimming
pub const TRIM_EDGE: usize = 15;

/// Separator placed between the kept head and tail
pub const TRIM_ELLIPSIS: &str = "...";

/// Scientific notation applies when |value| >= 10^SCIENTIFIC_MIN_EXPONENT
pub const SCIENTIFIC_MIN_EXPONENT: u32 = 10;

/// Fractional digits of the scientific mantissa
pub const SCIENTIFIC_FRACTION_DIGITS: usize = 4;

/// Magnitudes wider than this many bits are not rendered in full
pub const BINARY_FULL_MAX_BITS: u64 = 256;

/// Binary digits kept when the rendering is truncated
pub const BINARY_PREVIEW_DIGITS: usize = 100;

/// The constant every value is compared against
pub const COMPARISON_PIVOT: u32 = 2;

/// Byte-value block of the feature vector
pub const FEATURE_BYTES: usize = 32;

/// One frequency slot per hex digit
pub const FEATURE_HISTOGRAM: usize = 16;

/// count, mean, std, min, max, leading zeros
pub const FEATURE_STATS: usize = 6;

/// Total width of a feature vector
pub const FEATURE_WIDTH: usize = FEATURE_BYTES + FEATURE_HISTOGRAM + FEATURE_STATS;
