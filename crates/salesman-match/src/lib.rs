//! Matches between TSP solvers.
//!
//! A match runs several participants, each bound to a [`SolverKind`], over
//! the same point set and ranks their tours by cost.
//!
//! # Overview
//!
//! - [`MatchOrchestrator`] runs participants strictly in list order
//! - [`Ranking`] holds the [`MatchEntry`] list sorted by cost, with
//!   infeasible entries last
//! - [`MatchListener`] observes progress without affecting computation
//! - [`MarkdownReport`] and [`CsvExporter`] render a ranking
//!
//! # Example
//!
//! ```
//! use salesman_config::SolverKind;
//! use salesman_core::PointSet;
//! use salesman_match::MatchOrchestrator;
//!
//! let points = PointSet::from_coords(&[
//!     (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 5.0),
//! ]).unwrap();
//!
//! let ranking = MatchOrchestrator::new()
//!     .with_participant(SolverKind::NearestNeighbor)
//!     .with_participant(SolverKind::HeldKarp)
//!     .run(&points)
//!     .unwrap();
//!
//! assert_eq!(ranking.len(), 2);
//! let winner = ranking.winner().unwrap();
//! assert!(ranking.iter().all(|entry| winner.cost() <= entry.cost()));
//! ```
//!
//! [`SolverKind`]: salesman_config::SolverKind

mod entry;
mod listener;
mod orchestrator;
mod report;

#[cfg(test)]
mod tests;

pub use entry::{MatchEntry, Ranking};
pub use listener::{MatchListener, NoopListener, RecordingListener};
pub use orchestrator::{run_match, MatchOrchestrator, MIN_MATCH_POINTS};
pub use report::{CsvExporter, MarkdownReport};
