//! Error types for Salesman

use thiserror::Error;

/// Main error type for Salesman operations.
///
/// Capacity limits of the exact solvers are not errors: a solver that
/// refuses an instance returns a `TourResult` without a tour and with a
/// [`ResultNote::CapacityExceeded`](crate::ResultNote::CapacityExceeded) note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesmanError {
    /// The caller supplied inputs that cannot be solved as configured.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A solver kind name that no solver answers to.
    #[error("Unknown solver kind: {0}")]
    UnknownSolver(String),

    /// An ordering that is not a permutation of the point indices.
    #[error("Invalid tour: {0}")]
    InvalidTour(String),
}

impl SalesmanError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns true if the error was raised while validating configuration.
    ///
    /// Unknown solver names count as configuration errors.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_) | Self::UnknownSolver(_))
    }
}

/// Result type alias for Salesman operations
pub type Result<T> = std::result::Result<T, SalesmanError>;
