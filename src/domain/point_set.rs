//! The validated input of interpolation

use std::collections::HashSet;

use log::debug;

use super::{Point, Threshold};
use crate::error::{ArithmeticError, Error};

/// Exactly `k` points with pairwise-distinct x-coordinates
///
/// Invariant: `len() == *threshold` and no two points share an x-coordinate.
/// Both are checked at construction, so interpolation never sees a set that
/// would divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    /// Wraps `points` as-is, in the given order
    ///
    /// # Errors
    /// - [`Error::ThresholdMismatch`] if `points.len() != *threshold`
    /// - [`Error::Arithmetic`] with [`ArithmeticError::DuplicateX`] if an x-coordinate repeats
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::{Point, PointSet, Threshold};
    ///
    /// let k = Threshold::new(2).unwrap();
    /// let set = PointSet::new(vec![Point::new(1, 5), Point::new(2, 8)], k).unwrap();
    /// assert_eq!(set.len(), 2);
    ///
    /// // Same x twice
    /// assert!(PointSet::new(vec![Point::new(1, 5), Point::new(1, 8)], k).is_err());
    /// ```
    pub fn new(points: Vec<Point>, threshold: Threshold) -> Result<Self, Error> {
        if points.len() != *threshold {
            return Err(Error::ThresholdMismatch {
                expected: *threshold,
                actual: points.len(),
            });
        }

        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.x()) {
                return Err(ArithmeticError::DuplicateX(point.x().clone()).into());
            }
        }

        Ok(Self(points))
    }

    /// Sorts `points` by ascending x and keeps the first `k`
    ///
    /// Selection is purely positional: shares beyond the k-th smallest x are
    /// dropped without being checked against the fitted polynomial.
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] if fewer than `k` distinct x-coordinates are given
    /// - [`Error::Arithmetic`] if the selected points still repeat an x-coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::{Point, PointSet, Threshold};
    ///
    /// let points = vec![Point::new(6, 39), Point::new(2, 7), Point::new(1, 4)];
    /// let set = PointSet::select_first(points, Threshold::new(2).unwrap()).unwrap();
    ///
    /// let xs: Vec<_> = set.iter().map(|p| p.x().to_string()).collect();
    /// assert_eq!(xs, ["1", "2"]);
    /// ```
    pub fn select_first(mut points: Vec<Point>, threshold: Threshold) -> Result<Self, Error> {
        let distinct = points.iter().map(Point::x).collect::<HashSet<_>>().len();
        if distinct < *threshold {
            return Err(Error::InsufficientData {
                required: *threshold,
                available: distinct,
            });
        }

        points.sort_by(|a, b| a.x().cmp(b.x()));
        if points.len() > *threshold {
            debug!(
                "Ignoring {} share(s) beyond threshold {}",
                points.len() - *threshold,
                threshold
            );
        }
        points.truncate(*threshold);

        Self::new(points, threshold)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl std::ops::Deref for PointSet {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
