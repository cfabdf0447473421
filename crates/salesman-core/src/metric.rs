//! Distance metrics and precomputed distance matrices.

use std::fmt::Debug;

use crate::error::{Result, SalesmanError};
use crate::point::{Point, PointSet};

/// Cost of travelling between two points.
///
/// Implementations must be non-negative, symmetric, and zero exactly when
/// the points coincide. Every solver is generic over the metric, so the
/// metric is monomorphized into the solver loops.
pub trait DistanceMetric: Send + Sync + Debug {
    /// Returns the distance between `a` and `b`.
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

/// Straight-line distance in the plane.
///
/// # Example
///
/// ```
/// use salesman_core::{DistanceMetric, Euclidean, Point};
///
/// let d = Euclidean.distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        (**self).distance(a, b)
    }
}

/// Dense symmetric n × n matrix of pairwise distances.
///
/// Each unordered pair is measured once and mirrored, so `get(i, j)` and
/// `get(j, i)` are bit-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Measures every pair of points with `metric`.
    pub fn from_points<M: DistanceMetric>(points: &PointSet, metric: &M) -> Self {
        let n = points.len();
        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&points[i], &points[j]);
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }
        Self { n, cells }
    }

    /// Returns the number of points the matrix covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Returns the distances from `i` to every point, in index order.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Fails if any pairwise distance is infinite or NaN.
    ///
    /// Finite coordinates can still overflow, e.g. points near `±f64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidConfiguration`] naming the first
    /// offending pair.
    pub fn ensure_finite(&self) -> Result<()> {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if !self.get(i, j).is_finite() {
                    return Err(SalesmanError::invalid_configuration(format!(
                        "distance between points {i} and {j} is not finite"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the closed-tour cost of `order`, wrapping from the last
    /// index back to the first.
    pub fn cyclic_cost(&self, order: &[usize]) -> f64 {
        let len = order.len();
        (0..len)
            .map(|i| self.get(order[i], order[(i + 1) % len]))
            .sum()
    }
}

#[cfg(test)]
#[path = "metric_tests.rs"]
mod tests;
