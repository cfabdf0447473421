//! Canonical point sets.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use salesman_core::{Point, PointSet};

/// The unit square `(0,0), (1,0), (1,1), (0,1)` in perimeter order.
pub fn unit_square() -> PointSet {
    from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// `n` points on the x axis at `x = 0, 1, ..., n-1`.
///
/// The optimal tour goes out and back for a cost of `2 (n - 1)`.
pub fn collinear(n: usize) -> PointSet {
    let points = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
    build(points)
}

/// `n` points drawn uniformly from `[0, 100) × [0, 100)` with a fixed seed.
pub fn random_points(n: usize, seed: u64) -> PointSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    build(points)
}

fn from_coords(coords: &[(f64, f64)]) -> PointSet {
    build(coords.iter().copied().map(Point::from).collect())
}

fn build(points: Vec<Point>) -> PointSet {
    PointSet::new(points).expect("fixture point sets are non-empty and finite")
}
