//! Solver trait and the kind-based entry point.

use std::fmt::Debug;

use salesman_config::{SolveParams, SolverKind};
use salesman_core::{DistanceMetric, Euclidean, PointSet, Result, TourResult};
use tracing::info;

use crate::brute_force::BruteForceSolver;
use crate::held_karp::HeldKarpSolver;
use crate::mst::MstApproximation;
use crate::nearest_neighbor::NearestNeighborHeuristic;
use crate::two_opt::NearestNeighborTwoOpt;

/// A strategy that turns a point set into a tour.
///
/// Solvers are pure functions of their inputs: they never mutate the point
/// set and keep no state between calls, so repeated calls return equal
/// results. The metric is a type parameter, so there is no dynamic dispatch
/// in the inner loops.
pub trait TourSolver: Send + Sync + Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Solves the instance.
    ///
    /// Instances beyond a solver's capacity are not errors: they produce a
    /// result without a tour. Errors are reserved for invalid parameters.
    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult>;
}

/// Solves `points` with the solver selected by `kind`, using Euclidean
/// distances.
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if `params.start` is not a city
/// of `points`.
///
/// # Example
///
/// ```
/// use salesman_config::{SolveParams, SolverKind};
/// use salesman_core::PointSet;
/// use salesman_solver::solve;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
///
/// for kind in SolverKind::ALL {
///     let result = solve(kind, &points, SolveParams::default()).unwrap();
///     assert_eq!(result.cost(), 12.0);
/// }
/// ```
pub fn solve(kind: SolverKind, points: &PointSet, params: SolveParams) -> Result<TourResult> {
    solve_with(kind, points, params, &Euclidean)
}

/// Like [`solve`], with an explicit distance metric.
pub fn solve_with<M: DistanceMetric>(
    kind: SolverKind,
    points: &PointSet,
    params: SolveParams,
    metric: &M,
) -> Result<TourResult> {
    let start = params.start_index();
    match kind {
        SolverKind::BruteForce => run(&BruteForceSolver, kind, points, metric),
        SolverKind::NearestNeighbor => {
            run(&NearestNeighborHeuristic::new(start), kind, points, metric)
        }
        SolverKind::NearestNeighborThenTwoOpt => {
            run(&NearestNeighborTwoOpt::new(start), kind, points, metric)
        }
        SolverKind::MstTwoApprox => run(&MstApproximation, kind, points, metric),
        SolverKind::HeldKarp => run(&HeldKarpSolver, kind, points, metric),
    }
}

fn run<S: TourSolver, M: DistanceMetric>(
    solver: &S,
    kind: SolverKind,
    points: &PointSet,
    metric: &M,
) -> Result<TourResult> {
    info!(
        event = "solve_start",
        solver = solver.name(),
        kind = kind.name(),
        n = points.len(),
    );

    let result = solver.solve(points, metric)?;

    let statistics = result.statistics();
    info!(
        event = "solve_end",
        solver = solver.name(),
        kind = kind.name(),
        cost = result.cost(),
        feasible = result.is_feasible(),
        evaluations = statistics.evaluations,
        duration_ms = statistics.elapsed.as_millis() as u64,
    );
    Ok(result)
}
