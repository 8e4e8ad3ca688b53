//! Points on the sharing polynomial

use num_bigint::BigInt;

/// A decoded share: `y = f(x)` for the unknown polynomial `f`
///
/// Both coordinates are arbitrary precision; `x` is the share identifier
/// widened so it can take part in interpolation arithmetic directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    /// Creates a point from anything convertible to `BigInt`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamir_recover::domain::Point;
    ///
    /// let point = Point::new(2u64, 7u64);
    /// assert_eq!(point.x(), &BigInt::from(2));
    /// assert_eq!(point.y(), &BigInt::from(7));
    /// ```
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
