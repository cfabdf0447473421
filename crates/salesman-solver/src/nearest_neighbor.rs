//! Greedy nearest-neighbor construction.

use std::time::Instant;

use salesman_core::{
    DistanceMetric, PointSet, Result, SalesmanError, SolveStatistics, Tour, TourEvaluator,
    TourResult,
};

use crate::solver::TourSolver;

/// Builds a tour by always moving to the closest unvisited city.
///
/// Distance ties go to the lowest index. Runs in O(n²) and always returns a
/// complete tour.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet};
/// use salesman_solver::{NearestNeighborHeuristic, TourSolver};
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)]).unwrap();
/// let result = NearestNeighborHeuristic::new(0).solve(&points, &Euclidean).unwrap();
///
/// assert_eq!(result.tour().unwrap().order(), &[0, 2, 1]);
/// assert_eq!(result.cost(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighborHeuristic {
    start: usize,
}

impl NearestNeighborHeuristic {
    /// Creates a heuristic that starts at city `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Runs the greedy construction, returning the order and the number of
    /// distances measured.
    pub(crate) fn construct<M: DistanceMetric>(
        &self,
        evaluator: &TourEvaluator<'_, M>,
    ) -> Result<(Vec<usize>, u64)> {
        let n = evaluator.points().len();
        if self.start >= n {
            return Err(SalesmanError::InvalidConfiguration(format!(
                "start city {} is out of range for {n} points",
                self.start
            )));
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut evaluations = 0u64;
        let mut current = self.start;
        visited[current] = true;
        order.push(current);

        while order.len() < n {
            let mut nearest: Option<(usize, f64)> = None;
            for candidate in (0..n).filter(|&c| !visited[c]) {
                evaluations += 1;
                let d = evaluator.distance(current, candidate);
                if nearest.map_or(true, |(_, best)| d < best) {
                    nearest = Some((candidate, d));
                }
            }
            // Loop condition guarantees an unvisited city remains.
            let Some((next, _)) = nearest else { break };
            visited[next] = true;
            order.push(next);
            current = next;
        }

        Ok((order, evaluations))
    }
}

impl TourSolver for NearestNeighborHeuristic {
    fn name(&self) -> &'static str {
        "nearest neighbor"
    }

    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult> {
        let started = Instant::now();
        let evaluator = TourEvaluator::new(points, metric);
        let (order, evaluations) = self.construct(&evaluator)?;
        let cost = evaluator.cost_of(&order);

        Ok(TourResult::found(Tour::from_order(order), cost)
            .with_statistics(SolveStatistics::new(evaluations, started.elapsed())))
    }
}
