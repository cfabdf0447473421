//! Match entries and rankings.

use std::slice;

use salesman_config::SolverKind;
use salesman_core::TourResult;

/// One participant's result in a match.
#[derive(Debug, Clone)]
pub struct MatchEntry {
    /// Position of the participant in the configured list (0-based).
    pub index: usize,
    /// Display name of the participant.
    pub name: String,
    /// Solver the participant used.
    pub kind: SolverKind,
    /// The solver's result.
    pub result: TourResult,
}

impl MatchEntry {
    pub fn new(index: usize, name: impl Into<String>, kind: SolverKind, result: TourResult) -> Self {
        Self {
            index,
            name: name.into(),
            kind,
            result,
        }
    }

    /// Tour cost, `f64::INFINITY` when the solver produced no tour.
    pub fn cost(&self) -> f64 {
        self.result.cost()
    }

    pub fn is_feasible(&self) -> bool {
        self.result.is_feasible()
    }
}

/// Entries of a finished match, ordered by ascending cost.
///
/// The sort is stable, so participants with equal cost keep their
/// configured order. Entries without a tour have infinite cost and come
/// last.
///
/// # Example
///
/// ```
/// use salesman_config::SolverKind;
/// use salesman_core::{Tour, TourResult};
/// use salesman_match::{MatchEntry, Ranking};
///
/// let ranking = Ranking::new(
///     4,
///     vec![
///         MatchEntry::new(0, "A", SolverKind::BruteForce, TourResult::capacity_exceeded("exhaustive search", 12, 9)),
///         MatchEntry::new(1, "B", SolverKind::NearestNeighbor, TourResult::found(Tour::identity(4), 6.0)),
///         MatchEntry::new(2, "C", SolverKind::HeldKarp, TourResult::found(Tour::identity(4), 5.0)),
///     ],
/// );
///
/// assert_eq!(ranking.winner().unwrap().name, "C");
/// assert_eq!(ranking.position_of(1), Some(2));
/// assert_eq!(ranking.position_of(0), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct Ranking {
    points: usize,
    entries: Vec<MatchEntry>,
}

impl Ranking {
    /// Sorts `entries` into a ranking for a match over `points` cities.
    pub fn new(points: usize, mut entries: Vec<MatchEntry>) -> Self {
        entries.sort_by(|a, b| a.result.cmp_cost(&b.result));
        Self { points, entries }
    }

    /// Number of cities in the match.
    pub fn points(&self) -> usize {
        self.points
    }

    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, MatchEntry> {
        self.entries.iter()
    }

    /// The cheapest feasible entry.
    pub fn winner(&self) -> Option<&MatchEntry> {
        self.entries.first().filter(|entry| entry.is_feasible())
    }

    /// 1-based rank of the participant configured at `index`.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.index == index)
            .map(|position| position + 1)
    }

    /// Entries in configured participant order.
    pub fn by_participant(&self) -> Vec<&MatchEntry> {
        let mut entries: Vec<&MatchEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.index);
        entries
    }

    pub fn into_entries(self) -> Vec<MatchEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a MatchEntry;
    type IntoIter = slice::Iter<'a, MatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
