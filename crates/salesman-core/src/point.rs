//! Planar points and the ordered point sets solvers work on.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::error::{Result, SalesmanError};

/// A city in the plane.
///
/// Points are owned by the caller and never mutated by a solver.
///
/// # Example
///
/// ```
/// use salesman_core::Point;
///
/// let quito = Point::labelled("Quito", 400.0, 80.0);
/// assert_eq!(quito.label(), Some("Quito"));
/// assert_eq!(quito.x, 400.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Optional display label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates an unlabelled point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { label: None, x, y }
    }

    /// Creates a labelled point.
    pub fn labelled(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: Some(label.into()),
            x,
            y,
        }
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label} ({}, {})", self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered, non-empty sequence of points.
///
/// Index 0 is the anchor city: exact solvers pin it to the first tour
/// position to break rotational symmetry.
///
/// # Example
///
/// ```
/// use salesman_core::PointSet;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points.anchor().x, 0.0);
///
/// assert!(PointSet::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set.
    ///
    /// # Errors
    ///
    /// Returns [`SalesmanError::InvalidConfiguration`] if `points` is empty
    /// or any coordinate is NaN or infinite.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(SalesmanError::invalid_configuration(
                "point set must contain at least one point",
            ));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SalesmanError::invalid_configuration(format!(
                "point {index} has non-finite coordinates"
            )));
        }
        Ok(Self { points })
    }

    /// Creates an unlabelled point set from coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a point set holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the anchor city (index 0).
    pub fn anchor(&self) -> &Point {
        &self.points[0]
    }

    /// Returns the point at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns the points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the display name of a point: its label or its 1-based number.
    pub fn display_name(&self, index: usize) -> String {
        match self.points.get(index).and_then(Point::label) {
            Some(label) => label.to_string(),
            None => format!("{}", index + 1),
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = SalesmanError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(matches!(
            PointSet::new(Vec::new()),
            Err(SalesmanError::InvalidConfiguration(_))
        ));
        assert!(PointSet::from_coords(&[(0.0, 0.0), (f64::NAN, 1.0)]).is_err());
        assert!(PointSet::from_coords(&[(f64::INFINITY, 0.0)]).is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_number() {
        let points = PointSet::new(vec![Point::labelled("Loja", 1.0, 2.0), Point::new(3.0, 4.0)])
            .unwrap();
        assert_eq!(points.display_name(0), "Loja");
        assert_eq!(points.display_name(1), "2");
        assert_eq!(points[1].to_string(), "(3, 4)");
    }
}
