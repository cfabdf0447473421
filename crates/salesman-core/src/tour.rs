//! Tours and tour cost evaluation.

use std::fmt;
use std::ops::Deref;

use crate::error::{Result, SalesmanError};
use crate::metric::{DistanceMatrix, DistanceMetric};
use crate::point::PointSet;

/// A closed visiting order over the indices `[0, n)`.
///
/// Every index appears exactly once; the last city connects back to the
/// first.
///
/// # Example
///
/// ```
/// use salesman_core::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1]).unwrap();
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 0)]);
///
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidTour`] unless `order` is a
    /// permutation of `[0, order.len())`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        if !is_permutation(&order) {
            return Err(SalesmanError::InvalidTour(format!(
                "{order:?} is not a permutation of 0..{}",
                order.len()
            )));
        }
        Ok(Self { order })
    }

    /// Creates a tour from an order the caller built as a permutation.
    ///
    /// Solvers use this for orders that are permutations by construction.
    /// The permutation check still runs in debug builds.
    pub fn from_order(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order), "not a permutation: {order:?}");
        Self { order }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the closed-tour edges in visiting order, including the
    /// closing edge back to the first city.
    ///
    /// A single-city tour yields the one loop edge `(c, c)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.order.len();
        (0..len).map(move |i| (self.order[i], self.order[(i + 1) % len]))
    }

    /// Returns true if this tour visits exactly the indices `[0, n)`.
    pub fn covers(&self, n: usize) -> bool {
        self.order.len() == n && is_permutation(&self.order)
    }

    /// Returns the same cycle rotated so that `city` comes first.
    pub fn rotated_to(&self, city: usize) -> Self {
        match self.order.iter().position(|&c| c == city) {
            Some(pos) => {
                let mut order = self.order.clone();
                order.rotate_left(pos);
                Self { order }
            }
            None => self.clone(),
        }
    }

    /// Returns the same cycle traversed in the opposite direction, keeping
    /// the first city in place.
    pub fn reflected(&self) -> Self {
        let mut order = self.order.clone();
        if order.len() > 1 {
            order[1..].reverse();
        }
        Self { order }
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.order
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = SalesmanError;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::new(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.order
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for city in &self.order {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{city}")?;
            first = false;
        }
        if let Some(start) = self.order.first() {
            write!(f, " -> {start}")?;
        }
        Ok(())
    }
}

/// Returns true if `order` is a permutation of `[0, order.len())`.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &city in order {
        match seen.get_mut(city) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Computes closed-tour costs over a point set.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet, Tour, TourEvaluator};
///
/// let square = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let evaluator = TourEvaluator::new(&square, &Euclidean);
///
/// assert_eq!(evaluator.cost(&Tour::identity(4)).unwrap(), 4.0);
/// ```
#[derive(Debug)]
pub struct TourEvaluator<'a, M: DistanceMetric> {
    points: &'a PointSet,
    metric: &'a M,
}

impl<'a, M: DistanceMetric> TourEvaluator<'a, M> {
    pub fn new(points: &'a PointSet, metric: &'a M) -> Self {
        Self { points, metric }
    }

    /// Returns the distance between the points at indices `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.metric.distance(&self.points[i], &self.points[j])
    }

    /// Returns the cyclic cost of `tour`.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidTour`] if the tour does not cover
    /// exactly the indices of the point set.
    pub fn cost(&self, tour: &Tour) -> Result<f64> {
        if !tour.covers(self.points.len()) {
            return Err(SalesmanError::InvalidTour(format!(
                "tour of {} cities over a set of {} points",
                tour.len(),
                self.points.len()
            )));
        }
        Ok(self.cost_of(tour.order()))
    }

    /// Returns the cyclic cost of an order without validating it.
    ///
    /// One city costs 0, two cities cost the round trip.
    pub fn cost_of(&self, order: &[usize]) -> f64 {
        let len = order.len();
        (0..len)
            .map(|i| self.distance(order[i], order[(i + 1) % len]))
            .sum()
    }

    /// Precomputes all pairwise distances for repeated evaluation.
    pub fn matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_points(self.points, self.metric)
    }

    pub fn points(&self) -> &'a PointSet {
        self.points
    }
}

#[cfg(test)]
#[path = "tour_tests.rs"]
mod tests;
