//! Configuration system for Salesman.
//!
//! Describe a match (which points, which solvers) in TOML or YAML and load it
//! without code changes.
//!
//! # Examples
//!
//! Load a match configuration from a TOML string:
//!
//! ```
//! use salesman_config::{MatchConfig, SolverKind};
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     [points]
//!     type = "preset"
//!     name = "ecuador"
//!     count = 6
//!
//!     [[participants]]
//!     solver = "nearest_neighbor"
//!
//!     [[participants]]
//!     name = "Exact"
//!     solver = "held_karp"
//! "#).unwrap();
//!
//! assert_eq!(config.participants.len(), 2);
//! assert_eq!(config.participants[1].solver, SolverKind::HeldKarp);
//! assert_eq!(config.resolve_points().unwrap().len(), 6);
//! ```
//!
//! Participants may also be listed by solver name only:
//!
//! ```
//! use salesman_config::MatchConfig;
//!
//! let config = MatchConfig::from_yaml_str(r#"
//!     points:
//!       type: random
//!       count: 7
//!       seed: 42
//!     participants: [nearest, twoopt, heldkarp]
//! "#).unwrap();
//!
//! assert_eq!(config.participants[0].display_name(0), "Player 1");
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use salesman_core::{Point, PointSet, Preset, SalesmanError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Domain(#[from] SalesmanError),
}

/// The solving strategies a participant can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SolverKind {
    /// Exhaustive permutation search.
    BruteForce,

    /// Greedy nearest-neighbor construction.
    NearestNeighbor,

    /// Nearest-neighbor construction refined by 2-opt.
    NearestNeighborThenTwoOpt,

    /// Minimum spanning tree doubling with shortcuts.
    MstTwoApprox,

    /// Bitmask dynamic program.
    HeldKarp,
}

impl SolverKind {
    pub const ALL: [SolverKind; 5] = [
        SolverKind::BruteForce,
        SolverKind::NearestNeighbor,
        SolverKind::NearestNeighborThenTwoOpt,
        SolverKind::MstTwoApprox,
        SolverKind::HeldKarp,
    ];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::BruteForce => "brute_force",
            SolverKind::NearestNeighbor => "nearest_neighbor",
            SolverKind::NearestNeighborThenTwoOpt => "nearest_neighbor_then_two_opt",
            SolverKind::MstTwoApprox => "mst_two_approx",
            SolverKind::HeldKarp => "held_karp",
        }
    }

    /// Human-readable name for reports.
    pub fn label(self) -> &'static str {
        match self {
            SolverKind::BruteForce => "Brute force",
            SolverKind::NearestNeighbor => "Nearest neighbor",
            SolverKind::NearestNeighborThenTwoOpt => "Nearest neighbor + 2-opt",
            SolverKind::MstTwoApprox => "MST 2-approximation",
            SolverKind::HeldKarp => "Held-Karp",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            SolverKind::BruteForce => &["bruteforce"],
            SolverKind::NearestNeighbor => &["nearest"],
            SolverKind::NearestNeighborThenTwoOpt => &["twoopt", "two_opt"],
            SolverKind::MstTwoApprox => &["mst2approx"],
            SolverKind::HeldKarp => &["heldkarp"],
        }
    }

    /// Returns true for methods that prove optimality.
    pub fn is_exact(self) -> bool {
        matches!(self, SolverKind::BruteForce | SolverKind::HeldKarp)
    }

    /// Returns true for kinds that honour a start index.
    pub fn uses_start(self) -> bool {
        matches!(
            self,
            SolverKind::NearestNeighbor | SolverKind::NearestNeighborThenTwoOpt
        )
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = SalesmanError;

    /// Parses canonical names and the short aliases.
    ///
    /// ```
    /// use salesman_config::SolverKind;
    ///
    /// assert_eq!("held_karp".parse::<SolverKind>().unwrap(), SolverKind::HeldKarp);
    /// assert_eq!("twoopt".parse::<SolverKind>().unwrap(), SolverKind::NearestNeighborThenTwoOpt);
    /// assert!("simulated_annealing".parse::<SolverKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SolverKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted)
                    || kind.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| SalesmanError::UnknownSolver(wanted.to_string()))
    }
}

impl TryFrom<String> for SolverKind {
    type Error = SalesmanError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Per-invocation solver parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolveParams {
    /// Start city for nearest-neighbor construction (default 0).
    #[serde(default)]
    pub start: Option<usize>,
}

impl SolveParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Returns the configured start city, or the anchor city.
    pub fn start_index(&self) -> usize {
        self.start.unwrap_or(0)
    }
}

/// One participant of a match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "ParticipantRepr")]
pub struct ParticipantConfig {
    /// Display name; defaults to `Player {position}`.
    pub name: Option<String>,

    /// Solver the participant runs.
    pub solver: SolverKind,

    /// Start city for nearest-neighbor based solvers.
    pub start: Option<usize>,
}

/// A participant as written in a file: a bare solver name or a table.
///
/// Solver names stay strings until conversion so that unknown names
/// surface as [`SalesmanError::UnknownSolver`].
#[derive(Deserialize)]
#[serde(untagged)]
enum ParticipantRepr {
    Kind(String),
    Full {
        #[serde(default)]
        name: Option<String>,
        solver: String,
        #[serde(default)]
        start: Option<usize>,
    },
}

impl TryFrom<ParticipantRepr> for ParticipantConfig {
    type Error = SalesmanError;

    fn try_from(repr: ParticipantRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            ParticipantRepr::Kind(solver) => ParticipantConfig::new(solver.parse()?),
            ParticipantRepr::Full { name, solver, start } => ParticipantConfig {
                name,
                solver: solver.parse()?,
                start,
            },
        })
    }
}

impl ParticipantConfig {
    pub fn new(solver: SolverKind) -> Self {
        Self {
            name: None,
            solver,
            start: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Returns the configured name, or `Player {index + 1}`.
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Player {}", index + 1))
    }

    /// Solver parameters derived from this participant.
    pub fn params(&self) -> SolveParams {
        SolveParams { start: self.start }
    }
}

impl From<SolverKind> for ParticipantConfig {
    fn from(solver: SolverKind) -> Self {
        Self::new(solver)
    }
}

/// Axis-aligned box random points are drawn from (half-open on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 50.0,
            max_x: 750.0,
            min_y: 40.0,
            max_y: 460.0,
        }
    }
}

impl Bounds {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = |lo: f64, hi: f64| lo.is_finite() && hi.is_finite() && lo < hi;
        if ordered(self.min_x, self.max_x) && ordered(self.min_y, self.max_y) {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "random point bounds must be finite with min < max, got {self:?}"
            )))
        }
    }
}

/// Random point generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RandomPointsConfig {
    /// Number of points to draw.
    pub count: usize,

    /// Seed for the generator; equal seeds produce equal point sets.
    #[serde(default)]
    pub seed: u64,

    /// Drawing area.
    #[serde(default)]
    pub bounds: Bounds,
}

impl RandomPointsConfig {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            bounds: Bounds::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Draws `count` points labelled `P1..Pn`.
    pub fn generate(&self) -> Result<PointSet, ConfigError> {
        self.bounds.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let points = (0..self.count)
            .map(|i| {
                let x = rng.random_range(self.bounds.min_x..self.bounds.max_x);
                let y = rng.random_range(self.bounds.min_y..self.bounds.max_y);
                Point::labelled(format!("P{}", i + 1), x, y)
            })
            .collect();
        Ok(PointSet::new(points)?)
    }
}

/// Where a match gets its points from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointSource {
    /// Points listed in the configuration.
    Explicit { points: Vec<Point> },

    /// The first `count` cities of a named preset.
    Preset {
        name: Preset,
        #[serde(default)]
        count: Option<usize>,
    },

    /// Seeded random points.
    Random(RandomPointsConfig),
}

impl Default for PointSource {
    fn default() -> Self {
        PointSource::Random(RandomPointsConfig::new(8, 0))
    }
}

impl PointSource {
    /// Materializes the point set.
    pub fn resolve(&self) -> Result<PointSet, ConfigError> {
        match self {
            PointSource::Explicit { points } => Ok(PointSet::new(points.clone())?),
            PointSource::Preset { name, count } => Ok(name.point_set(*count)?),
            PointSource::Random(random) => random.generate(),
        }
    }
}

/// Main match configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "MatchDocument")]
pub struct MatchConfig {
    /// Optional title used in reports.
    #[serde(default)]
    pub name: Option<String>,

    /// Point source.
    #[serde(default)]
    pub points: PointSource,

    /// Participants, run in list order.
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

/// [`MatchConfig`] before solver names are resolved.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct MatchDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    points: PointSource,
    #[serde(default)]
    participants: Vec<ParticipantRepr>,
}

impl TryFrom<MatchDocument> for MatchConfig {
    type Error = SalesmanError;

    fn try_from(document: MatchDocument) -> Result<Self, Self::Error> {
        let participants = document
            .participants
            .into_iter()
            .map(ParticipantConfig::try_from)
            .collect::<Result<_, _>>()?;
        Ok(MatchConfig {
            name: document.name,
            points: document.points,
            participants,
        })
    }
}

impl MatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, as YAML for `.yaml`/`.yml` paths
    /// and as TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let document: MatchDocument = toml::from_str(s)?;
        Ok(Self::try_from(document)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let document: MatchDocument = serde_yaml::from_str(s)?;
        Ok(Self::try_from(document)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_points(mut self, points: PointSource) -> Self {
        self.points = points;
        self
    }

    /// Adds a participant.
    pub fn with_participant(mut self, participant: impl Into<ParticipantConfig>) -> Self {
        self.participants.push(participant.into());
        self
    }

    /// Resolves the configured point source.
    pub fn resolve_points(&self) -> Result<PointSet, ConfigError> {
        self.points.resolve()
    }
}

#[cfg(test)]
mod tests;
