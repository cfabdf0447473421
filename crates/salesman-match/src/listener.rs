//! Progress listeners for matches.
//!
//! Listeners are purely observational: the orchestrator calls them between
//! solver runs and ignores what they do.

use salesman_config::SolverKind;

use crate::entry::{MatchEntry, Ranking};

/// Receives match lifecycle events.
///
/// Only [`on_participant_finished`](Self::on_participant_finished) is
/// required. Any `FnMut(usize, &MatchEntry)` closure is a listener.
///
/// # Example
///
/// ```
/// use salesman_config::SolverKind;
/// use salesman_core::PointSet;
/// use salesman_match::{MatchEntry, MatchOrchestrator};
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
/// let mut finished = Vec::new();
///
/// MatchOrchestrator::new()
///     .with_participant(SolverKind::NearestNeighbor)
///     .with_participant(SolverKind::MstTwoApprox)
///     .run_with_listener(&points, &mut |index: usize, _: &MatchEntry| finished.push(index))
///     .unwrap();
///
/// assert_eq!(finished, vec![0, 1]);
/// ```
pub trait MatchListener {
    /// Called once validation has passed, before any solver runs.
    fn on_match_started(&mut self, _n_points: usize, _n_participants: usize) {}

    /// Called before the participant at `index` runs.
    fn on_participant_started(&mut self, _index: usize, _name: &str, _kind: SolverKind) {}

    /// Called after the participant at `index` has produced its entry.
    fn on_participant_finished(&mut self, index: usize, entry: &MatchEntry);

    /// Called with the final ranking.
    fn on_match_finished(&mut self, _ranking: &Ranking) {}
}

impl<F> MatchListener for F
where
    F: FnMut(usize, &MatchEntry),
{
    fn on_participant_finished(&mut self, index: usize, entry: &MatchEntry) {
        self(index, entry)
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl MatchListener for NoopListener {
    fn on_participant_finished(&mut self, _index: usize, _entry: &MatchEntry) {}
}

/// Records events for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    started: Option<(usize, usize)>,
    running: Vec<(usize, String, SolverKind)>,
    entries: Vec<MatchEntry>,
    finished: bool,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(n_points, n_participants)` if the match started.
    pub fn started(&self) -> Option<(usize, usize)> {
        self.started
    }

    /// Participants announced as starting, in call order.
    pub fn participants_started(&self) -> &[(usize, String, SolverKind)] {
        &self.running
    }

    /// Entries in completion order.
    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl MatchListener for RecordingListener {
    fn on_match_started(&mut self, n_points: usize, n_participants: usize) {
        self.started = Some((n_points, n_participants));
    }

    fn on_participant_started(&mut self, index: usize, name: &str, kind: SolverKind) {
        self.running.push((index, name.to_string(), kind));
    }

    fn on_participant_finished(&mut self, _index: usize, entry: &MatchEntry) {
        self.entries.push(entry.clone());
    }

    fn on_match_finished(&mut self, _ranking: &Ranking) {
        self.finished = true;
    }
}
