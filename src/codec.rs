//! Decoding of base-encoded share values into points
//!
//! Each share in an input record is an identifier (the x-coordinate, in
//! decimal) and a digit string in a declared base (the y-coordinate). Values
//! are evaluated positionally into [`BigUint`], so there is no upper bound on
//! their magnitude.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use shamir_recover::codec::{decode_value, encode_value};
//! use shamir_recover::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base4 = Radix::new(4)?;
//! let value = decode_value("213", base4)?;
//! assert_eq!(value, BigUint::from(39u32));
//! assert_eq!(encode_value(&value, base4), "213");
//! # Ok(())
//! # }
//! ```

use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::domain::{Point, Radix};
use crate::error::{DecodeError, Error};
use crate::record::{RawShare, ShareRecord};

/// Evaluates `digits` in base `radix`
///
/// Digits are `0-9` then `a-z`, case-insensitive. Leading zeros are allowed.
///
/// # Errors
/// - [`DecodeError::EmptyValue`] if `digits` is empty
/// - [`DecodeError::InvalidDigit`] if a character is not a digit of `radix`
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use shamir_recover::codec::decode_value;
/// use shamir_recover::domain::Radix;
///
/// let value = decode_value("111", Radix::new(2).unwrap()).unwrap();
/// assert_eq!(value, BigUint::from(7u32));
///
/// assert!(decode_value("12", Radix::new(2).unwrap()).is_err());
/// ```
pub fn decode_value(digits: &str, radix: Radix) -> Result<BigUint, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    let base = BigUint::from(*radix);
    let mut value = BigUint::zero();
    for (position, digit) in digits.chars().enumerate() {
        let digit_value = digit.to_digit(*radix).ok_or(DecodeError::InvalidDigit {
            digit,
            position,
            base: *radix,
        })?;
        value = value * &base + digit_value;
    }

    Ok(value)
}

/// Renders `value` in base `radix` with lower-case digits and no leading zeros
#[must_use]
pub fn encode_value(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(*radix)
}

/// Parses a share identifier as a non-negative decimal integer
///
/// Only ASCII digits are accepted: no sign, no whitespace. There is no upper
/// bound; the identifier becomes an arbitrary-precision x-coordinate.
///
/// # Errors
/// Returns [`DecodeError::InvalidIdentifier`] otherwise
pub fn parse_identifier(id: &str) -> Result<BigUint, DecodeError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidIdentifier(id.to_string()));
    }
    BigUint::parse_bytes(id.as_bytes(), 10)
        .ok_or_else(|| DecodeError::InvalidIdentifier(id.to_string()))
}

/// Decodes a single share into a point
///
/// # Errors
/// Returns a [`DecodeError`] if the identifier, base or digit string is invalid
pub fn decode_share(id: &str, share: &RawShare) -> Result<Point, DecodeError> {
    let x = parse_identifier(id)?;
    let radix = share.radix()?;
    let y = decode_value(&share.value, radix)?;

    Ok(Point::new(BigInt::from(x), BigInt::from(y)))
}

/// Decodes every share in `record`, in identifier order of the record map
///
/// No ordering by x is imposed here; selection is the caller's job
/// (see [`PointSet::select_first`](crate::domain::PointSet::select_first)).
///
/// # Errors
/// Returns [`Error::Decode`] for the first share that fails; no partial result is produced
pub fn decode_shares(record: &ShareRecord) -> Result<Vec<Point>, Error> {
    let points = record
        .shares
        .iter()
        .map(|(id, share)| {
            decode_share(id, share).map_err(|source| Error::Decode {
                id: id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} share(s)", points.len());
    Ok(points)
}
