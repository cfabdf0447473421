//! Shared test fixtures for Salesman crates.
//!
//! This crate provides point sets and assertion helpers for testing.
//! It depends only on `salesman-core` so every other crate can use it.
//!
//! - [`instances`] - canonical point sets (square, line, seeded random)
//! - [`assertions`] - tour and float comparison helpers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! salesman-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use salesman_test::{unit_square, random_points, assert_permutation};
//! ```

pub mod assertions;
pub mod instances;

pub use assertions::{approx_eq, assert_permutation};
pub use instances::{collinear, random_points, unit_square};
