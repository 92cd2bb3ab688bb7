#[path = "../common/mod.rs"]
mod common;

use common::fixtures::LARGE_HEX;
use hexcmp::report::SCIENTIFIC_NOT_APPLICABLE;
use hexcmp::{Comparison, Report};

#[test]
fn report_for_equal_to_two() {
    let r = Report::from_input("0x2").unwrap();
    assert_eq!(r.comparison, Comparison::EqualToTwo);
    let text = r.to_string();
    assert!(text.contains("The value is equal to 2."));
    assert!(text.contains(&format!("Scientific Notation: {}", SCIENTIFIC_NOT_APPLICABLE)));
    assert!(text.contains("Bit Length: 2 bits"));
}

#[test]
fn report_for_large_value() {
    let r = Report::from_input(LARGE_HEX).unwrap();
    assert_eq!(r.digit_count, 64);
    assert_eq!(r.bit_length, 256);
    assert_eq!(r.scientific.as_deref(), Some("1.0986e+77"));
    assert!(!r.binary.is_truncated());
    assert_eq!(r.binary.digits().len(), 256);
    assert!(r.decimal.starts_with("10986125"));
    assert_eq!(r.comparison, Comparison::GreaterThanTwo);
}

#[test]
fn report_keeps_original_input() {
    let r = Report::from_input("  -0xFF ").unwrap();
    assert_eq!(r.input, "  -0xFF ");
    assert_eq!(r.decimal, "-255");
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_to_json() {
    let r = Report::from_input("0x1A").unwrap();
    let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
    assert_eq!(v["decimal"], "26");
    assert_eq!(v["comparison"], "greater_than_two");
    assert_eq!(v["sign"], "positive");
    assert_eq!(v["binary"]["kind"], "full");
    assert_eq!(v["binary"]["digits"], "11010");
    assert!(v["scientific"].is_null());
}
