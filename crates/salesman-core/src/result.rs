//! Solver results.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use crate::tour::Tour;

/// Annotation attached to a solver result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ResultNote {
    /// The tour is provably optimal.
    Optimal,
    /// The instance is larger than the solver's feasibility ceiling.
    CapacityExceeded {
        /// Method that declined the instance.
        method: &'static str,
        /// Number of points in the instance.
        size: usize,
        /// Largest instance the method accepts.
        limit: usize,
    },
}

impl fmt::Display for ResultNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultNote::Optimal => f.write_str("optimal"),
            ResultNote::CapacityExceeded {
                method,
                size,
                limit,
            } => write!(
                f,
                "too large for {method}: {size} points exceeds the limit of {limit}"
            ),
        }
    }
}

/// Running characteristics of one solver invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveStatistics {
    /// Solver-specific unit of work: costed tours, relaxations or DP transitions.
    pub evaluations: u64,
    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,
}

impl SolveStatistics {
    pub fn new(evaluations: u64, elapsed: Duration) -> Self {
        Self {
            evaluations,
            elapsed,
        }
    }

    /// Returns evaluations per second, or 0 when no time was measured.
    pub fn evaluations_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.evaluations as f64 / self.elapsed.as_secs_f64()
        }
    }
}

/// Outcome of one solver invocation.
///
/// A result either carries a tour and its cyclic cost, or no tour and an
/// infinite cost (when the solver declined the instance). Results are built
/// once by the solver and not modified afterwards.
///
/// # Example
///
/// ```
/// use salesman_core::{ResultNote, Tour, TourResult};
///
/// let found = TourResult::found(Tour::identity(3), 12.0).with_note(ResultNote::Optimal);
/// assert!(found.is_optimal());
///
/// let declined = TourResult::capacity_exceeded("brute force", 10, 9);
/// assert!(declined.tour().is_none());
/// assert!(declined.cost().is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TourResult {
    tour: Option<Tour>,
    cost: f64,
    note: Option<ResultNote>,
    statistics: SolveStatistics,
}

impl TourResult {
    /// A result carrying `tour` with total cost `cost`.
    pub fn found(tour: Tour, cost: f64) -> Self {
        Self {
            tour: Some(tour),
            cost,
            note: None,
            statistics: SolveStatistics::default(),
        }
    }

    /// A result for an instance the method declined to solve.
    pub fn capacity_exceeded(method: &'static str, size: usize, limit: usize) -> Self {
        Self {
            tour: None,
            cost: f64::INFINITY,
            note: Some(ResultNote::CapacityExceeded {
                method,
                size,
                limit,
            }),
            statistics: SolveStatistics::default(),
        }
    }

    pub fn with_note(mut self, note: ResultNote) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_statistics(mut self, statistics: SolveStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Total cyclic cost; `f64::INFINITY` when there is no tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn note(&self) -> Option<&ResultNote> {
        self.note.as_ref()
    }

    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Returns true if the result carries a tour.
    pub fn is_feasible(&self) -> bool {
        self.tour.is_some()
    }

    /// Returns true if the solver proved the tour optimal.
    pub fn is_optimal(&self) -> bool {
        matches!(self.note, Some(ResultNote::Optimal))
    }

    /// Orders results by ascending cost; results without a tour sort last.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }

    pub fn into_tour(self) -> Option<Tour> {
        self.tour
    }
}
