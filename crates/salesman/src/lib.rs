//! Salesman - exact and heuristic Traveling Salesman solvers in Rust
//!
//! Pick a solver by kind, or run a match between several of them.
//!
//! # Example
//!
//! ```rust
//! use salesman::prelude::*;
//!
//! let square = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
//!
//! let result = solve(SolverKind::HeldKarp, &square, SolveParams::default()).unwrap();
//! assert_eq!(result.cost(), 4.0);
//!
//! let ranking = MatchOrchestrator::new()
//!     .with_participants([SolverKind::NearestNeighbor, SolverKind::MstTwoApprox])
//!     .run(&square)
//!     .unwrap();
//! assert_eq!(ranking.len(), 2);
//! ```

// Data model
pub use salesman_core::{
    is_permutation, DistanceMatrix, DistanceMetric, Euclidean, Point, PointSet, Preset,
    ResultNote, SalesmanError, SolveStatistics, Tour, TourEvaluator, TourResult,
};

// Configuration
pub use salesman_config::{
    Bounds, ConfigError, MatchConfig, ParticipantConfig, PointSource, RandomPointsConfig,
    SolveParams, SolverKind,
};

// Solvers
pub use salesman_solver::{
    solve, solve_with, BruteForceSolver, HeldKarpSolver, MstApproximation, NearestNeighborHeuristic,
    NearestNeighborTwoOpt, SpanningTree, TourSolver, TwoOptLocalSearch, BRUTE_FORCE_LIMIT,
    HELD_KARP_LIMIT,
};

// Matches and reports
pub use salesman_match::{
    run_match, CsvExporter, MarkdownReport, MatchEntry, MatchListener, MatchOrchestrator,
    NoopListener, Ranking, RecordingListener, MIN_MATCH_POINTS,
};

#[cfg(feature = "console")]
pub mod console;

mod runner;
pub use runner::{run_match_from_config, run_match_from_file, MatchOutcome};

pub mod prelude {
    pub use super::{
        solve, MatchConfig, MatchOrchestrator, ParticipantConfig, Point, PointSet, SolveParams,
        SolverKind, Tour, TourResult,
    };
    pub use super::{MarkdownReport, Ranking};
    pub use super::run_match_from_config;
}
