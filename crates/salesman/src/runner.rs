//! Match entry points that hide configuration wiring.

use std::path::Path;

use salesman_config::{ConfigError, MatchConfig};
use salesman_core::PointSet;
use salesman_match::{MarkdownReport, MatchOrchestrator, Ranking};
use tracing::info;

/// A finished match together with the points it was played on.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Title from the configuration, or `"match"`.
    pub name: String,
    pub points: PointSet,
    pub ranking: Ranking,
}

impl MatchOutcome {
    /// Renders the ranking as Markdown.
    pub fn to_markdown(&self) -> String {
        MarkdownReport::to_string(&self.name, &self.ranking)
    }
}

/// Resolves the configured points and runs the configured participants.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the point source cannot be resolved, or a
/// wrapped configuration error from the match itself.
///
/// # Example
///
/// ```
/// use salesman::{run_match_from_config, MatchConfig, PointSource, RandomPointsConfig, SolverKind};
///
/// let config = MatchConfig::new()
///     .with_name("demo")
///     .with_points(PointSource::Random(RandomPointsConfig::new(6, 3)))
///     .with_participant(SolverKind::NearestNeighborThenTwoOpt)
///     .with_participant(SolverKind::HeldKarp);
///
/// let outcome = run_match_from_config(&config).unwrap();
/// assert_eq!(outcome.points.len(), 6);
/// assert!(outcome.to_markdown().starts_with("# Match: demo"));
/// ```
pub fn run_match_from_config(config: &MatchConfig) -> Result<MatchOutcome, ConfigError> {
    let points = config.resolve_points()?;
    let name = config.name.clone().unwrap_or_else(|| "match".to_string());

    let ranking = MatchOrchestrator::new()
        .with_name(name.clone())
        .with_participants(config.participants.iter().cloned())
        .run(&points)?;

    Ok(MatchOutcome {
        name,
        points,
        ranking,
    })
}

/// Loads a match configuration file and runs it.
///
/// # Errors
///
/// See [`MatchConfig::load`] and [`run_match_from_config`].
pub fn run_match_from_file(path: impl AsRef<Path>) -> Result<MatchOutcome, ConfigError> {
    let path = path.as_ref();
    info!(event = "config_load", path = %path.display());
    let config = MatchConfig::load(path)?;
    run_match_from_config(&config)
}
