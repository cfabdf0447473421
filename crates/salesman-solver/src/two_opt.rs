//! 2-opt local search.
//!
//! A move reverses the segment `tour[i..=k]` for `1 <= i < k <= n-1`, which
//! replaces the edges entering and leaving the segment. The anchor position
//! 0 never moves.
//!
//! The search is first-improvement: positions are scanned with `i`
//! ascending and `k` ascending within each `i`; the first strictly cheaper
//! tour is kept and the scan restarts from `i = 1`. The search stops after a
//! full scan without a strict improvement, so its output is a fixed point.

use std::time::Instant;

use salesman_core::{
    DistanceMatrix, DistanceMetric, PointSet, Result, SalesmanError, SolveStatistics, Tour,
    TourEvaluator, TourResult,
};
use tracing::{debug, trace};

use crate::nearest_neighbor::NearestNeighborHeuristic;
use crate::solver::TourSolver;

/// Refines an existing tour with first-improvement 2-opt moves.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet, Tour};
/// use salesman_solver::TwoOptLocalSearch;
///
/// let square = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();
///
/// let result = TwoOptLocalSearch.improve(&square, &Euclidean, &crossing).unwrap();
/// assert_eq!(result.cost(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOptLocalSearch;

impl TwoOptLocalSearch {
    /// Improves `initial` until no single segment reversal lowers its cost.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidTour`] if `initial` does not visit
    /// exactly the cities of `points`.
    pub fn improve<M: DistanceMetric>(
        &self,
        points: &PointSet,
        metric: &M,
        initial: &Tour,
    ) -> Result<TourResult> {
        if !initial.covers(points.len()) {
            return Err(SalesmanError::InvalidTour(format!(
                "initial tour of {} cities does not cover {} points",
                initial.len(),
                points.len()
            )));
        }

        let started = Instant::now();
        let matrix = DistanceMatrix::from_points(points, metric);
        let mut order = initial.order().to_vec();
        let outcome = descend(&matrix, &mut order);

        debug!(
            event = "two_opt_converged",
            moves = outcome.moves,
            evaluations = outcome.evaluations,
            cost = outcome.cost,
        );

        Ok(TourResult::found(Tour::from_order(order), outcome.cost)
            .with_statistics(SolveStatistics::new(outcome.evaluations, started.elapsed())))
    }
}

struct Descent {
    cost: f64,
    moves: u64,
    evaluations: u64,
}

/// Applies first-improvement moves to `order` in place until none remain.
fn descend(matrix: &DistanceMatrix, order: &mut [usize]) -> Descent {
    let n = order.len();
    let mut cost = matrix.cyclic_cost(order);
    let mut moves = 0u64;
    let mut evaluations = 0u64;

    'restart: loop {
        for i in 1..n.saturating_sub(1) {
            for k in (i + 1)..n {
                order[i..=k].reverse();
                evaluations += 1;
                let candidate = matrix.cyclic_cost(order);
                if candidate < cost {
                    trace!(event = "two_opt_move", i, k, from = cost, to = candidate);
                    cost = candidate;
                    moves += 1;
                    continue 'restart;
                }
                order[i..=k].reverse();
            }
        }
        break;
    }

    Descent {
        cost,
        moves,
        evaluations,
    }
}

/// Nearest-neighbor construction followed by 2-opt refinement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighborTwoOpt {
    construction: NearestNeighborHeuristic,
}

impl NearestNeighborTwoOpt {
    pub fn new(start: usize) -> Self {
        Self {
            construction: NearestNeighborHeuristic::new(start),
        }
    }
}

impl TourSolver for NearestNeighborTwoOpt {
    fn name(&self) -> &'static str {
        "nearest neighbor + 2-opt"
    }

    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult> {
        let started = Instant::now();
        let evaluator = TourEvaluator::new(points, metric);
        let (mut order, constructed) = self.construction.construct(&evaluator)?;
        let outcome = descend(&evaluator.matrix(), &mut order);

        debug!(
            event = "two_opt_converged",
            moves = outcome.moves,
            evaluations = outcome.evaluations,
            cost = outcome.cost,
        );

        let statistics =
            SolveStatistics::new(constructed + outcome.evaluations, started.elapsed());
        Ok(TourResult::found(Tour::from_order(order), outcome.cost).with_statistics(statistics))
    }
}

#[cfg(test)]
#[path = "two_opt_tests.rs"]
mod tests;
