//! Held-Karp bitmask dynamic program.
//!
//! `cost[mask][v]` is the cheapest path that starts at city 0, visits
//! exactly the cities in `mask` (which always contains city 0) and ends at
//! `v`. The table is a dense `2^n × n` arena; predecessors are kept in a
//! parallel table for reconstruction.

use std::time::Instant;

use salesman_core::{
    DistanceMatrix, DistanceMetric, PointSet, Result, ResultNote, SalesmanError,
    SolveStatistics, Tour, TourResult,
};
use tracing::warn;

use crate::solver::TourSolver;

/// Largest instance the dynamic program accepts.
pub const HELD_KARP_LIMIT: usize = 16;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Exact solver over subsets of cities. O(2ⁿ·n²) time, O(2ⁿ·n) memory.
///
/// Ties are broken by iteration order: ascending mask, then ascending
/// endpoint, then ascending destination.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet};
/// use salesman_solver::{HeldKarpSolver, TourSolver};
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]).unwrap();
/// let result = HeldKarpSolver.solve(&points, &Euclidean).unwrap();
///
/// assert_eq!(result.cost(), 12.0);
/// assert!(result.is_optimal());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKarpSolver;

struct Table {
    n: usize,
    cost: Vec<f64>,
    predecessor: Vec<u8>,
}

impl Table {
    fn new(n: usize) -> Self {
        let cells = (1usize << n) * n;
        Self {
            n,
            cost: vec![f64::INFINITY; cells],
            predecessor: vec![NO_PREDECESSOR; cells],
        }
    }

    #[inline]
    fn index(&self, mask: usize, city: usize) -> usize {
        mask * self.n + city
    }
}

impl TourSolver for HeldKarpSolver {
    fn name(&self) -> &'static str {
        "Held-Karp"
    }

    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult> {
        let n = points.len();
        if n > HELD_KARP_LIMIT {
            warn!(
                event = "capacity_exceeded",
                solver = self.name(),
                n,
                limit = HELD_KARP_LIMIT,
            );
            return Ok(TourResult::capacity_exceeded(
                "Held-Karp dynamic programming",
                n,
                HELD_KARP_LIMIT,
            ));
        }

        let started = Instant::now();
        let matrix = DistanceMatrix::from_points(points, metric);
        matrix.ensure_finite()?;
        let full = (1usize << n) - 1;
        let mut table = Table::new(n);
        let mut evaluations = 0u64;
        let base = table.index(1, 0);
        table.cost[base] = 0.0;

        // Masks without city 0 are unreachable and skipped.
        for mask in (1..=full).step_by(2) {
            for last in 0..n {
                if mask & (1 << last) == 0 {
                    continue;
                }
                let current = table.cost[table.index(mask, last)];
                if current == f64::INFINITY {
                    continue;
                }
                for next in 0..n {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    evaluations += 1;
                    let extended = mask | (1 << next);
                    let candidate = current + matrix.get(last, next);
                    let slot = table.index(extended, next);
                    if candidate < table.cost[slot] {
                        table.cost[slot] = candidate;
                        table.predecessor[slot] = last as u8;
                    }
                }
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for last in 0..n {
            let closed = table.cost[table.index(full, last)] + matrix.get(last, 0);
            if best.map_or(true, |(_, cost)| closed < cost) {
                best = Some((last, closed));
            }
        }
        let (last, cost) = best
            .filter(|(_, cost)| cost.is_finite())
            .ok_or_else(|| SalesmanError::InvalidConfiguration("no finite tour exists".into()))?;

        let order = reconstruct(&table, full, last);
        let statistics = SolveStatistics::new(evaluations, started.elapsed());
        Ok(TourResult::found(Tour::from_order(order), cost)
            .with_note(ResultNote::Optimal)
            .with_statistics(statistics))
    }
}

/// Follows predecessors back from `last` and returns the order starting at 0.
fn reconstruct(table: &Table, full: usize, last: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(table.n);
    let mut mask = full;
    let mut city = Some(last);
    while let Some(current) = city {
        order.push(current);
        let predecessor = table.predecessor[table.index(mask, current)];
        mask ^= 1 << current;
        city = (predecessor != NO_PREDECESSOR).then_some(predecessor as usize);
    }
    order.reverse();
    order
}

#[cfg(test)]
mod tests {
    use salesman_core::Euclidean;
    use salesman_test::{collinear, unit_square};

    use super::*;

    #[test]
    fn test_square_is_optimal() {
        let result = HeldKarpSolver.solve(&unit_square(), &Euclidean).unwrap();
        let tour = result.tour().unwrap();

        assert_eq!(result.cost(), 4.0);
        assert!(result.is_optimal());
        assert!(tour.order() == [0, 1, 2, 3] || tour.order() == [0, 3, 2, 1]);
    }

    #[test]
    fn test_reconstruction_starts_at_anchor() {
        let line = collinear(7);
        let result = HeldKarpSolver.solve(&line, &Euclidean).unwrap();
        let tour = result.tour().unwrap();

        assert_eq!(tour[0], 0);
        assert!(tour.covers(7));
        assert_eq!(result.cost(), 12.0);
    }

    #[test]
    fn test_declines_seventeen_points() {
        let result = HeldKarpSolver.solve(&collinear(17), &Euclidean).unwrap();
        assert!(!result.is_feasible());
        assert!(result.cost().is_infinite());
        assert!(matches!(
            result.note(),
            Some(ResultNote::CapacityExceeded { size: 17, limit: 16, .. })
        ));
    }

    #[test]
    fn test_counts_transitions() {
        // n = 3: {0}->1, {0}->2, {0,1}->2, {0,2}->1
        let points = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let result = HeldKarpSolver.solve(&points, &Euclidean).unwrap();
        assert_eq!(result.statistics().evaluations, 4);
    }

    #[test]
    fn test_degenerate_sizes() {
        let one = PointSet::from_coords(&[(9.0, 9.0)]).unwrap();
        let result = HeldKarpSolver.solve(&one, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0]);
        assert_eq!(result.cost(), 0.0);

        let two = PointSet::from_coords(&[(0.0, 0.0), (0.0, 5.0)]).unwrap();
        let result = HeldKarpSolver.solve(&two, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0, 1]);
        assert_eq!(result.cost(), 10.0);
    }
}
