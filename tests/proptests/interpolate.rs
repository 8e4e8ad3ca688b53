//! Property tests for Lagrange interpolation at zero

use std::collections::BTreeSet;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::domain::{Point, PointSet, Threshold};
use shamir_recover::interpolate::interpolate_at_zero;
use shamir_recover::{ArithmeticError, Error};

/// Wrapper for an integer polynomial (constant term first) with big coefficients
#[derive(Clone, Debug)]
struct Polynomial(Vec<BigInt>);

impl Polynomial {
    fn eval(&self, x: &BigInt) -> BigInt {
        self.0
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    fn threshold(&self) -> usize {
        self.0.len()
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // Degree 0..=6 keeps the test fast
        let len = usize::arbitrary(g) % 7 + 1;
        let coeffs = (0..len)
            .map(|_| {
                // Up to 40 bytes per coefficient, far beyond u64
                let mut bytes = Vec::<u8>::arbitrary(g);
                bytes.truncate(40);
                let sign = if bool::arbitrary(g) {
                    Sign::Minus
                } else {
                    Sign::Plus
                };
                BigInt::from_bytes_be(sign, &bytes)
            })
            .collect();
        Polynomial(coeffs)
    }
}

/// Wrapper for a pool of distinct non-zero x-coordinates
#[derive(Clone, Debug)]
struct DistinctXs(Vec<i64>);

impl Arbitrary for DistinctXs {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut seen = BTreeSet::new();
        let mut xs = Vec::new();
        while xs.len() < 7 {
            let x = i64::from(i16::arbitrary(g) % 1000);
            if x != 0 && seen.insert(x) {
                xs.push(x);
            }
        }
        DistinctXs(xs)
    }
}

fn sample(poly: &Polynomial, xs: &[i64]) -> Vec<Point> {
    xs.iter()
        .take(poly.threshold())
        .map(|&x| {
            let x = BigInt::from(x);
            let y = poly.eval(&x);
            Point::new(x, y)
        })
        .collect()
}

fn interpolate(points: Vec<Point>) -> Result<BigInt, Error> {
    let threshold = Threshold::new(points.len()).expect("at least one point");
    let set = PointSet::new(points, threshold)?;
    Ok(interpolate_at_zero(&set)?)
}

/// Test that k samples of a degree-(k-1) polynomial recover its constant term exactly
#[quickcheck]
fn prop_recovers_constant_term(poly: Polynomial, xs: DistinctXs) -> bool {
    let points = sample(&poly, &xs.0);
    interpolate(points) == Ok(poly.0[0].clone())
}

/// Test that the order of the points does not change the result
#[quickcheck]
fn prop_permutation_invariant(poly: Polynomial, xs: DistinctXs, rotation: usize) -> bool {
    let points = sample(&poly, &xs.0);

    let mut rotated = points.clone();
    let len = rotated.len();
    rotated.rotate_left(rotation % len);
    let mut reversed = points.clone();
    reversed.reverse();

    let expected = interpolate(points);
    interpolate(rotated) == expected && interpolate(reversed) == expected
}

/// Test that a single point is returned as the secret
#[quickcheck]
fn prop_single_point_is_secret(x: i64, y: i64) -> bool {
    interpolate(vec![Point::new(x, y)]) == Ok(BigInt::from(y))
}

/// Test that a repeated x-coordinate is never silently interpolated
#[quickcheck]
fn prop_duplicate_x_rejected(poly: Polynomial, xs: DistinctXs) -> bool {
    let mut points = sample(&poly, &xs.0);
    if points.len() < 2 {
        return true;
    }
    let last = points.len() - 1;
    points[last] = Point::new(points[0].x().clone(), points[last].y().clone());

    matches!(
        interpolate(points),
        Err(Error::Arithmetic(ArithmeticError::DuplicateX(_)))
    )
}
