//! Lagrange interpolation at zero over the integers

use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::domain::{Point, PointSet};
use crate::error::ArithmeticError;

/// An exact rational `numer / denom` kept in lowest terms with `denom > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// `denom` must be non-zero.
    fn new(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        let g = numer.gcd(&denom);
        let (mut numer, mut denom) = if g.is_one() || g.is_zero() {
            (numer, denom)
        } else {
            (numer / &g, denom / &g)
        };
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    fn plus(&self, other: &Self) -> Self {
        Self::new(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    /// Converts to an integer, refusing to truncate.
    fn into_integer(self) -> Result<BigInt, ArithmeticError> {
        let (quotient, remainder) = self.numer.div_rem(&self.denom);
        if !remainder.is_zero() {
            return Err(ArithmeticError::InexactDivision {
                numerator: self.numer,
                denominator: self.denom,
            });
        }
        Ok(quotient)
    }
}

/// Lagrange basis value `L_i(0)` for point `i` as a reduced fraction `(numer, denom)`.
///
/// # Formula
/// ```text
/// L_i(0) = ∏_{j ≠ i} (0 - x_j) / (x_i - x_j)
/// ```
/// The coefficient is rational in general (for x = {1, 3}, `L_1(0) = 3/2`),
/// so it is returned as an exact fraction with a positive denominator.
///
/// # Errors
/// Returns [`ArithmeticError::DuplicateX`] if another point shares `x_i`.
///
/// # Panics
/// Panics if `i` is out of bounds.
pub fn basis_at_zero(points: &[Point], i: usize) -> Result<(BigInt, BigInt), ArithmeticError> {
    let x_i = points[i].x();
    // numerator = ∏_{j != i} (-x_j)
    let mut numer = BigInt::one();
    // denominator = ∏_{j != i} (x_i - x_j)
    let mut denom = BigInt::one();
    for (j, point) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        let x_j = point.x();
        numer *= -x_j;
        denom *= x_i - x_j;
    }
    if denom.is_zero() {
        return Err(ArithmeticError::DuplicateX(x_i.clone()));
    }

    let basis = Fraction::new(numer, denom);
    Ok((basis.numer, basis.denom))
}

/// Recovers `f(0)`, the constant term of the unique polynomial of degree
/// `< points.len()` through `points`.
///
/// The sum `Σ y_i · L_i(0)` is accumulated as an exact fraction. Integer
/// shares of an integer polynomial always produce an integral total; any
/// remainder left at the end is reported instead of rounded away.
///
/// # Errors
/// - [`ArithmeticError::DuplicateX`] if two points share an x-coordinate
/// - [`ArithmeticError::InexactDivision`] if the interpolated value is not an integer
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamir_recover::domain::{Point, PointSet, Threshold};
/// use shamir_recover::interpolate::interpolate_at_zero;
///
/// // f(x) = x^2 + 3
/// let points = vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// let set = PointSet::new(points, Threshold::new(3).unwrap()).unwrap();
/// assert_eq!(interpolate_at_zero(&set).unwrap(), BigInt::from(3));
/// ```
pub fn interpolate_at_zero(points: &PointSet) -> Result<BigInt, ArithmeticError> {
    lagrange_at_zero(points)
}

fn lagrange_at_zero(points: &[Point]) -> Result<BigInt, ArithmeticError> {
    let mut sum = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let (numer, denom) = basis_at_zero(points, i)?;
        trace!("L_{i}(0) = {numer}/{denom} at x = {}", point.x());

        let term = Fraction::new(point.y() * numer, denom);
        sum = sum.plus(&term);
    }

    sum.into_integer()
}
