//! Match orchestrator.

use salesman_config::ParticipantConfig;
use salesman_core::{DistanceMetric, Euclidean, PointSet, Result, SalesmanError};
use salesman_solver::solve_with;
use tracing::{debug, info};

use crate::entry::{MatchEntry, Ranking};
use crate::listener::{MatchListener, NoopListener};

/// Smallest point set a match accepts.
pub const MIN_MATCH_POINTS: usize = 3;

/// Runs participants over one point set and ranks their results.
///
/// Participants run sequentially in configured order. The metric is a type
/// parameter so every solver is monomorphized for it.
///
/// # Example
///
/// ```
/// use salesman_config::{ParticipantConfig, SolverKind};
/// use salesman_core::PointSet;
/// use salesman_match::MatchOrchestrator;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
///
/// let ranking = MatchOrchestrator::new()
///     .with_name("square")
///     .with_participant(ParticipantConfig::new(SolverKind::BruteForce).with_name("Ana"))
///     .with_participant(SolverKind::NearestNeighbor)
///     .run(&points)
///     .unwrap();
///
/// assert_eq!(ranking.winner().unwrap().name, "Ana");
/// assert_eq!(ranking.entries()[1].name, "Player 2");
/// ```
#[derive(Debug, Clone)]
pub struct MatchOrchestrator<M = Euclidean> {
    name: Option<String>,
    participants: Vec<ParticipantConfig>,
    metric: M,
}

impl MatchOrchestrator<Euclidean> {
    /// Creates an orchestrator with no participants and Euclidean distances.
    pub fn new() -> Self {
        Self {
            name: None,
            participants: Vec::new(),
            metric: Euclidean,
        }
    }
}

impl Default for MatchOrchestrator<Euclidean> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: DistanceMetric> MatchOrchestrator<M> {
    /// Sets the match name used in logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a participant.
    pub fn with_participant(mut self, participant: impl Into<ParticipantConfig>) -> Self {
        self.participants.push(participant.into());
        self
    }

    /// Appends several participants.
    pub fn with_participants<I, P>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantConfig>,
    {
        self.participants
            .extend(participants.into_iter().map(Into::into));
        self
    }

    /// Replaces the distance metric.
    pub fn with_metric<N: DistanceMetric>(self, metric: N) -> MatchOrchestrator<N> {
        MatchOrchestrator {
            name: self.name,
            participants: self.participants,
            metric,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn participants(&self) -> &[ParticipantConfig] {
        &self.participants
    }

    /// Runs the match without a listener.
    ///
    /// # Errors
    ///
    /// See [`run_with_listener`](Self::run_with_listener).
    pub fn run(&self, points: &PointSet) -> Result<Ranking> {
        self.run_with_listener(points, &mut NoopListener)
    }

    /// Runs the match, reporting progress to `listener`.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidConfiguration`] before any solver runs
    /// if `points` has fewer than [`MIN_MATCH_POINTS`] cities, if there are
    /// no participants, or if a participant's start city is out of range.
    pub fn run_with_listener<L: MatchListener>(
        &self,
        points: &PointSet,
        listener: &mut L,
    ) -> Result<Ranking> {
        self.validate(points)?;

        let n = points.len();
        let name = self.name.as_deref().unwrap_or("match");
        info!(
            event = "match_start",
            name,
            n,
            participants = self.participants.len(),
        );
        listener.on_match_started(n, self.participants.len());

        let mut entries = Vec::with_capacity(self.participants.len());
        for (index, participant) in self.participants.iter().enumerate() {
            let display_name = participant.display_name(index);
            debug!(
                event = "participant_start",
                index,
                participant = %display_name,
                kind = participant.solver.name(),
            );
            listener.on_participant_started(index, &display_name, participant.solver);

            let result = solve_with(participant.solver, points, participant.params(), &self.metric)?;
            let entry = MatchEntry::new(index, display_name, participant.solver, result);

            info!(
                event = "participant_end",
                index,
                participant = %entry.name,
                kind = entry.kind.name(),
                cost = entry.cost(),
                feasible = entry.is_feasible(),
            );
            listener.on_participant_finished(index, &entry);
            entries.push(entry);
        }

        let ranking = Ranking::new(n, entries);
        info!(
            event = "match_end",
            name,
            winner = ranking.winner().map(|entry| entry.name.as_str()),
            best_cost = ranking.winner().map_or(f64::INFINITY, MatchEntry::cost),
        );
        listener.on_match_finished(&ranking);
        Ok(ranking)
    }

    fn validate(&self, points: &PointSet) -> Result<()> {
        let n = points.len();
        if n < MIN_MATCH_POINTS {
            return Err(SalesmanError::InvalidConfiguration(format!(
                "a match needs at least {MIN_MATCH_POINTS} points, got {n}"
            )));
        }
        if self.participants.is_empty() {
            return Err(SalesmanError::InvalidConfiguration(
                "a match needs at least one participant".into(),
            ));
        }
        for (index, participant) in self.participants.iter().enumerate() {
            if let Some(start) = participant.start {
                if start >= n {
                    return Err(SalesmanError::InvalidConfiguration(format!(
                        "{} starts at city {start}, but there are only {n} points",
                        participant.display_name(index)
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Runs `participants` over `points` with Euclidean distances.
///
/// # Errors
///
/// See [`MatchOrchestrator::run_with_listener`].
pub fn run_match<L: MatchListener>(
    points: &PointSet,
    participants: &[ParticipantConfig],
    listener: &mut L,
) -> Result<Ranking> {
    MatchOrchestrator::new()
        .with_participants(participants.iter().cloned())
        .run_with_listener(points, listener)
}
