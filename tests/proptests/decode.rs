//! Property tests for share value decoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::codec::{decode_value, encode_value};
use shamir_recover::domain::Radix;

/// Wrapper for arbitrary supported bases
#[derive(Clone, Copy, Debug)]
struct AnyRadix(Radix);

impl Arbitrary for AnyRadix {
    fn arbitrary(g: &mut Gen) -> Self {
        let span = Radix::MAX - Radix::MIN + 1;
        let base = Radix::MIN + u32::arbitrary(g) % span;
        AnyRadix(Radix::new(base).expect("base within 2..=36"))
    }
}

/// Wrapper for big values built from arbitrary bytes (often wider than u64)
#[derive(Clone, Debug)]
struct BigValue(BigUint);

impl Arbitrary for BigValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let bytes = Vec::<u8>::arbitrary(g);
        BigValue(BigUint::from_bytes_be(&bytes))
    }
}

/// Test that decoding the encoding of a value gives back the value
#[quickcheck]
fn prop_encode_decode_round_trip(value: BigValue, radix: AnyRadix) -> bool {
    let BigValue(value) = value;
    let AnyRadix(radix) = radix;

    let digits = encode_value(&value, radix);
    decode_value(&digits, radix) == Ok(value)
}

/// Test that canonical digit strings survive decode then encode unchanged
#[quickcheck]
fn prop_decode_encode_round_trip(digits: Vec<u8>, radix: AnyRadix) -> bool {
    let AnyRadix(radix) = radix;

    // Build a canonical digit string: no leading zeros, lower case
    let text: String = digits
        .iter()
        .map(|d| char::from_digit(u32::from(*d) % *radix, *radix).expect("digit below radix"))
        .skip_while(|c| *c == '0')
        .collect();
    if text.is_empty() {
        return true;
    }

    let Ok(value) = decode_value(&text, radix) else {
        return false;
    };
    encode_value(&value, radix) == text
}

/// Test that decoding agrees with the positional definition for small values
#[quickcheck]
fn prop_matches_native_parse(value: u64, radix: AnyRadix) -> bool {
    let AnyRadix(radix) = radix;

    let digits = BigUint::from(value).to_str_radix(*radix);
    let native = u64::from_str_radix(&digits, *radix).expect("fits in u64");
    decode_value(&digits.to_uppercase(), radix) == Ok(BigUint::from(native))
}

/// Test that a digit outside the base is always rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(value: u64, radix: AnyRadix) -> bool {
    let AnyRadix(radix) = radix;
    if *radix == Radix::MAX {
        return true;
    }

    let bad = char::from_digit(*radix, Radix::MAX).expect("digit below 36");
    let digits = format!("{}{bad}", BigUint::from(value).to_str_radix(*radix));
    decode_value(&digits, radix).is_err()
}
