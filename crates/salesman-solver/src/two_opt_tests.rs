//! Tests for 2-opt local search.

use salesman_core::Euclidean;
use salesman_test::{assert_permutation, collinear, random_points, unit_square};

use super::*;

#[test]
fn test_uncrosses_square() {
    let square = unit_square();
    let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();

    let result = TwoOptLocalSearch
        .improve(&square, &Euclidean, &crossing)
        .unwrap();

    assert_eq!(result.tour().unwrap().order(), &[0, 1, 2, 3]);
    assert_eq!(result.cost(), 4.0);
}

#[test]
fn test_never_worse_and_reaches_fixed_point() {
    for seed in 0..8 {
        let points = random_points(11, seed);
        let initial = Tour::identity(points.len());
        let initial_cost = TourEvaluator::new(&points, &Euclidean).cost_of(&initial);

        let first = TwoOptLocalSearch
            .improve(&points, &Euclidean, &initial)
            .unwrap();
        assert!(first.cost() <= initial_cost);
        assert_permutation(first.tour().unwrap(), points.len());

        let second = TwoOptLocalSearch
            .improve(&points, &Euclidean, first.tour().unwrap())
            .unwrap();
        assert_eq!(second.cost(), first.cost());
        assert_eq!(second.tour(), first.tour());
    }
}

#[test]
fn test_first_improvement_restarts_scan() {
    let square = unit_square();
    let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();
    let matrix = DistanceMatrix::from_points(&square, &Euclidean);
    let mut order = crossing.into_order();

    let outcome = descend(&matrix, &mut order);

    // one improving move at (1, 2), then a full scan of 3 candidates
    assert_eq!(outcome.moves, 1);
    assert_eq!(outcome.evaluations, 1 + 3);
}

#[test]
fn test_collinear_tour_is_left_alone() {
    let line = collinear(10);
    let result = NearestNeighborTwoOpt::new(0)
        .solve(&line, &Euclidean)
        .unwrap();
    assert_eq!(result.cost(), 18.0);
    assert_eq!(result.tour().unwrap().order(), Tour::identity(10).order());
}

#[test]
fn test_small_tours_are_returned_unchanged() {
    let two = PointSet::from_coords(&[(0.0, 0.0), (0.0, 2.0)]).unwrap();
    let result = TwoOptLocalSearch
        .improve(&two, &Euclidean, &Tour::new(vec![1, 0]).unwrap())
        .unwrap();
    assert_eq!(result.tour().unwrap().order(), &[1, 0]);
    assert_eq!(result.cost(), 4.0);
    assert_eq!(result.statistics().evaluations, 0);

    let one = PointSet::from_coords(&[(1.0, 1.0)]).unwrap();
    let result = TwoOptLocalSearch
        .improve(&one, &Euclidean, &Tour::identity(1))
        .unwrap();
    assert_eq!(result.cost(), 0.0);
}

#[test]
fn test_rejects_mismatched_tour() {
    let square = unit_square();
    let err = TwoOptLocalSearch
        .improve(&square, &Euclidean, &Tour::identity(3))
        .unwrap_err();
    assert!(matches!(err, SalesmanError::InvalidTour(_)));
}

#[test]
fn test_combined_solver_not_worse_than_construction() {
    for seed in 0..6 {
        let points = random_points(14, seed);
        let nn = NearestNeighborHeuristic::new(0)
            .solve(&points, &Euclidean)
            .unwrap();
        let refined = NearestNeighborTwoOpt::new(0)
            .solve(&points, &Euclidean)
            .unwrap();
        assert!(refined.cost() <= nn.cost());
        assert!(refined.statistics().evaluations > nn.statistics().evaluations);
    }
}
