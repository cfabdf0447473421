//! Assertion helpers.

use salesman_core::Tour;

/// Panics unless `tour` visits every index in `[0, n)` exactly once.
pub fn assert_permutation(tour: &Tour, n: usize) {
    assert_eq!(tour.len(), n, "tour {tour} should visit {n} cities");
    let mut seen = vec![false; n];
    for &city in tour.order() {
        assert!(city < n, "city {city} out of range in {tour}");
        assert!(!seen[city], "city {city} repeated in {tour}");
        seen[city] = true;
    }
}

/// Returns true if `a` and `b` agree within a relative tolerance.
///
/// Values near zero are compared with `rel` as an absolute tolerance.
pub fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel * scale
}
