//! Salesman Core - core types for solving small Traveling Salesman instances
//!
//! This crate provides the fundamental abstractions shared by every solver:
//! - Points and point sets (the caller-owned input)
//! - Distance metrics and precomputed distance matrices
//! - Tours and closed-tour cost evaluation
//! - Tour results with notes and running statistics
//! - Named city presets

pub mod error;
pub mod metric;
pub mod point;
pub mod presets;
pub mod result;
pub mod tour;

pub use error::{Result, SalesmanError};
pub use metric::{DistanceMatrix, DistanceMetric, Euclidean};
pub use point::{Point, PointSet};
pub use presets::Preset;
pub use result::{ResultNote, SolveStatistics, TourResult};
pub use tour::{is_permutation, Tour, TourEvaluator};
