//! Exhaustive permutation search.
//!
//! Holds the anchor city in position 0 and enumerates all (n-1)! orderings
//! of the remaining cities with in-place swaps. Reflected tours are still
//! enumerated separately and tie on cost.

use std::time::Instant;

use salesman_core::{
    DistanceMatrix, DistanceMetric, PointSet, Result, ResultNote, SolveStatistics, Tour,
    TourResult,
};
use tracing::warn;

use crate::solver::TourSolver;

/// Largest instance the exhaustive search accepts.
pub const BRUTE_FORCE_LIMIT: usize = 9;

/// Exact solver that costs every cyclic ordering.
///
/// Ties keep the first ordering found in swap-generation order.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet};
/// use salesman_solver::{BruteForceSolver, TourSolver};
///
/// let square = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let result = BruteForceSolver.solve(&square, &Euclidean).unwrap();
///
/// assert_eq!(result.cost(), 4.0);
/// assert!(result.is_optimal());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl TourSolver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute force"
    }

    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult> {
        let n = points.len();
        if n > BRUTE_FORCE_LIMIT {
            warn!(
                event = "capacity_exceeded",
                solver = self.name(),
                n,
                limit = BRUTE_FORCE_LIMIT,
            );
            return Ok(TourResult::capacity_exceeded(
                "exhaustive search",
                n,
                BRUTE_FORCE_LIMIT,
            ));
        }

        let started = Instant::now();
        let matrix = DistanceMatrix::from_points(points, metric);
        matrix.ensure_finite()?;
        let mut search = PermutationSearch {
            matrix: &matrix,
            order: (0..n).collect(),
            best_order: Vec::new(),
            best_cost: f64::INFINITY,
            evaluations: 0,
        };
        search.permute(1);

        let statistics = SolveStatistics::new(search.evaluations, started.elapsed());
        Ok(TourResult::found(Tour::from_order(search.best_order), search.best_cost)
            .with_note(ResultNote::Optimal)
            .with_statistics(statistics))
    }
}

struct PermutationSearch<'a> {
    matrix: &'a DistanceMatrix,
    order: Vec<usize>,
    best_order: Vec<usize>,
    best_cost: f64,
    evaluations: u64,
}

impl PermutationSearch<'_> {
    /// Fixes `order[..depth]` and enumerates every arrangement of the rest.
    fn permute(&mut self, depth: usize) {
        if depth >= self.order.len() {
            self.evaluations += 1;
            let cost = self.matrix.cyclic_cost(&self.order);
            if cost < self.best_cost {
                self.best_cost = cost;
                self.best_order.clone_from(&self.order);
            }
            return;
        }

        for i in depth..self.order.len() {
            self.order.swap(depth, i);
            self.permute(depth + 1);
            self.order.swap(depth, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use salesman_core::Euclidean;

    use super::*;

    #[test]
    fn test_counts_every_ordering_of_non_anchor_cities() {
        let points =
            PointSet::from_coords(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (3.0, 3.0), (1.0, 2.0)])
                .unwrap();
        let result = BruteForceSolver.solve(&points, &Euclidean).unwrap();

        // (5 - 1)! orderings
        assert_eq!(result.statistics().evaluations, 24);
        assert_eq!(result.tour().unwrap()[0], 0);
    }

    #[test]
    fn test_first_found_wins_on_ties() {
        let square =
            PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let result = BruteForceSolver.solve(&square, &Euclidean).unwrap();

        // 0-1-2-3 is generated before its reflection 0-3-2-1
        assert_eq!(result.tour().unwrap().order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_declines_ten_points() {
        let coords: Vec<_> = (0..10).map(|i| (f64::from(i), 0.0)).collect();
        let points = PointSet::from_coords(&coords).unwrap();
        let result = BruteForceSolver.solve(&points, &Euclidean).unwrap();

        assert!(result.tour().is_none());
        assert_eq!(result.cost(), f64::INFINITY);
        assert_eq!(
            result.note(),
            Some(&ResultNote::CapacityExceeded {
                method: "exhaustive search",
                size: 10,
                limit: BRUTE_FORCE_LIMIT,
            })
        );
    }

    #[test]
    fn test_accepts_nine_points() {
        let coords: Vec<_> = (0..9).map(|i| (f64::from(i), 0.0)).collect();
        let points = PointSet::from_coords(&coords).unwrap();
        let result = BruteForceSolver.solve(&points, &Euclidean).unwrap();

        assert_eq!(result.cost(), 16.0);
        assert_eq!(result.statistics().evaluations, 40_320);
    }

    #[test]
    fn test_degenerate_sizes() {
        let one = PointSet::from_coords(&[(3.0, 3.0)]).unwrap();
        let result = BruteForceSolver.solve(&one, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0]);
        assert_eq!(result.cost(), 0.0);

        let two = PointSet::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
        let result = BruteForceSolver.solve(&two, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0, 1]);
        assert_eq!(result.cost(), 10.0);
    }
}
