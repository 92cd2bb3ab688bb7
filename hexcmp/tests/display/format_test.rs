#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{forty_a, LARGE_HEX};
use hexcmp::format::scientific_notation;
use hexcmp::prelude::*;
use num_bigint::BigInt;

#[test]
fn trimmed_forty_a() {
    let p = parse(&forty_a()).unwrap();
    assert_eq!(trimmed_hex(&p), "aaaaaaaaaaaaaaa...aaaaaaaaaaaaaaa");
}

#[test]
fn trimmed_large_value() {
    let p = parse(&format!("0X{}", LARGE_HEX.to_uppercase())).unwrap();
    assert_eq!(trimmed_hex(&p), "f2e3447a8ee9a2b...6428809cdb58d29");
    assert_eq!(p.digit_count(), 64);
}

#[test]
fn scientific_threshold() {
    assert_eq!(scientific(&parse("2540BE3FF").unwrap()), None);
    assert_eq!(
        scientific(&parse("2540BE400").unwrap()),
        Some("1.0000e+10".to_string())
    );
    assert_eq!(
        scientific_notation(&BigInt::from(-123_456_789_000_000i64)),
        Some("-1.2346e+14".to_string())
    );
}

#[test]
fn scientific_of_large_value() {
    let p = parse(LARGE_HEX).unwrap();
    assert_eq!(scientific(&p), Some("1.0986e+77".to_string()));
}

#[test]
fn binary_full_and_truncated() {
    let small = binary_string(&parse("-0x5").unwrap());
    assert_eq!(small, BinaryString::Full { digits: "101".into() });

    let wide = binary_string(&parse(&"f".repeat(65)).unwrap());
    match wide {
        BinaryString::Truncated { prefix, total_bits } => {
            assert_eq!(total_bits, 260);
            assert_eq!(prefix, "1".repeat(100));
        }
        other => panic!("expected truncated binary, got: {:?}", other),
    }
}

#[test]
fn comparisons() {
    assert_eq!(compare(&parse("2").unwrap()), Comparison::EqualToTwo);
    assert_eq!(compare(&parse("3").unwrap()), Comparison::GreaterThanTwo);
    assert_eq!(compare(&parse("1").unwrap()), Comparison::LessThanTwo);
    assert_eq!(compare(&parse("-0").unwrap()), Comparison::LessThanTwo);
}
