//! Named city layouts.
//!
//! Coordinates are in canvas units (origin top-left, y grows downward).

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SalesmanError};
use crate::point::{Point, PointSet};

const ECUADOR: [(&str, f64, f64); 10] = [
    ("Quito", 400.0, 80.0),
    ("Guayaquil", 400.0, 330.0),
    ("Cuenca", 330.0, 230.0),
    ("Manta", 330.0, 170.0),
    ("Loja", 300.0, 360.0),
    ("Ambato", 380.0, 150.0),
    ("Machala", 350.0, 390.0),
    ("Esmeraldas", 250.0, 80.0),
    ("Portoviejo", 290.0, 210.0),
    ("Santo Domingo", 320.0, 270.0),
];

const WORLD: [(&str, f64, f64); 10] = [
    ("Quito", 200.0, 100.0),
    ("Lima", 260.0, 150.0),
    ("Bogotá", 180.0, 60.0),
    ("Santiago", 210.0, 380.0),
    ("Buenos Aires", 340.0, 420.0),
    ("São Paulo", 320.0, 300.0),
    ("Mexico City", 80.0, 60.0),
    ("Madrid", 600.0, 80.0),
    ("London", 640.0, 60.0),
    ("New York", 480.0, 60.0),
];

/// A built-in set of labelled cities.
///
/// # Example
///
/// ```
/// use salesman_core::Preset;
///
/// let preset: Preset = "ecuador".parse().unwrap();
/// let points = preset.point_set(Some(5)).unwrap();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0].label(), Some("Quito"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preset {
    /// Ten Ecuadorian cities.
    Ecuador,
    /// Ten cities across the Americas and Europe.
    World,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Ecuador, Preset::World];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Ecuador => "ecuador",
            Preset::World => "world",
        }
    }

    fn table(self) -> &'static [(&'static str, f64, f64)] {
        match self {
            Preset::Ecuador => &ECUADOR,
            Preset::World => &WORLD,
        }
    }

    /// Number of cities in the full preset.
    pub fn len(self) -> usize {
        self.table().len()
    }

    /// Returns the first `count` cities (all of them when `None`).
    pub fn points(self, count: Option<usize>) -> Vec<Point> {
        let table = self.table();
        let count = count.unwrap_or(table.len()).min(table.len());
        table[..count]
            .iter()
            .map(|&(label, x, y)| Point::labelled(label, x, y))
            .collect()
    }

    /// Builds a point set from the first `count` cities.
    ///
    /// # Errors
    ///
    /// Fails when `count` is `Some(0)`.
    pub fn point_set(self, count: Option<usize>) -> Result<PointSet> {
        PointSet::new(self.points(count))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SalesmanError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalesmanError::invalid_configuration(format!("unknown preset '{s}'")))
    }
}
