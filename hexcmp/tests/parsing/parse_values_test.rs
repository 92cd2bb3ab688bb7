#[path = "../common/mod.rs"]
mod common;

use hexcmp::{parse, ParsedHex, Sign};
use num_bigint::BigInt;

#[test]
fn documented_examples() {
    assert_eq!(parse("1A").unwrap().value(), &BigInt::from(26));
    assert_eq!(parse("-1A").unwrap().value(), &BigInt::from(-26));
    assert_eq!(parse("0x1A").unwrap().value(), &BigInt::from(26));
    assert_eq!(parse("FF").unwrap().bit_length(), 8);
    assert_eq!(parse("0").unwrap().bit_length(), 0);
}

#[test]
fn case_insensitive() {
    assert_eq!(parse("ff").unwrap().value(), parse("FF").unwrap().value());
    assert_eq!(parse("0Xab").unwrap().value(), parse("0xAB").unwrap().value());
}

#[test]
fn sign_and_prefix_are_stripped_from_digits() {
    let p = parse(" +0xBEEF ").unwrap();
    assert_eq!(p.sign(), Sign::Positive);
    assert_eq!(p.digits(), "beef");
    assert_eq!(p.digit_count(), 4);

    let n: ParsedHex = "-0X00".parse().unwrap();
    assert_eq!(n.sign(), Sign::Negative);
    assert!(n.is_zero());
    assert_eq!(n.value(), &BigInt::from(0));
    assert_eq!(n.digit_count(), 2);
}

#[test]
fn leading_zeros_count_as_digits() {
    let p = parse("0001").unwrap();
    assert_eq!(p.digit_count(), 4);
    assert_eq!(p.bit_length(), 1);
}
