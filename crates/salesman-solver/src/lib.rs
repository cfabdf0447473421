//! Solvers for small Traveling Salesman instances.
//!
//! Five strategies, all generic over the distance metric:
//!
//! | Solver | Kind | Result |
//! |--------|------|--------|
//! | [`BruteForceSolver`] | exact, n ≤ 9 | optimal |
//! | [`NearestNeighborHeuristic`] | greedy construction | heuristic |
//! | [`NearestNeighborTwoOpt`] | construction + [`TwoOptLocalSearch`] | local optimum |
//! | [`MstApproximation`] | spanning tree shortcut | ≤ 2 × optimal |
//! | [`HeldKarpSolver`] | exact, n ≤ 16 | optimal |
//!
//! Pick one by [`SolverKind`](salesman_config::SolverKind) with [`solve`], or
//! call a solver directly through [`TourSolver`].

mod brute_force;
mod held_karp;
mod mst;
mod nearest_neighbor;
mod solver;
mod two_opt;


pub use brute_force::{BruteForceSolver, BRUTE_FORCE_LIMIT};
pub use held_karp::{HeldKarpSolver, HELD_KARP_LIMIT};
pub use mst::{MstApproximation, SpanningTree};
pub use nearest_neighbor::NearestNeighborHeuristic;
pub use solver::{solve, solve_with, TourSolver};
pub use two_opt::{NearestNeighborTwoOpt, TwoOptLocalSearch};
