//! Minimum spanning tree 2-approximation.
//!
//! Builds a spanning tree with Prim's algorithm rooted at city 0, walks it
//! depth-first in preorder, and keeps the first visit of every city. On
//! metric instances the shortcut tour costs at most twice the optimum,
//! because it is no longer than a walk around the doubled tree.

use std::time::Instant;

use salesman_core::{
    DistanceMatrix, DistanceMetric, PointSet, Result, SolveStatistics, Tour, TourResult,
};
use smallvec::SmallVec;

use crate::solver::TourSolver;

type Neighbors = SmallVec<[usize; 4]>;

/// A spanning tree stored as parent links.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    parents: Vec<Option<usize>>,
    weight: f64,
    relaxations: u64,
}

impl SpanningTree {
    /// Runs Prim's algorithm over the complete graph of `matrix`.
    ///
    /// Each of the n rounds attaches the unattached city with the cheapest
    /// connecting edge (lowest index on ties) and relaxes the keys of the
    /// rest. O(n²).
    pub fn prim(matrix: &DistanceMatrix) -> Self {
        let n = matrix.len();
        let mut attached = vec![false; n];
        let mut key = vec![f64::INFINITY; n];
        let mut parents = vec![None; n];
        let mut weight = 0.0;
        let mut relaxations = 0u64;
        if n > 0 {
            key[0] = 0.0;
        }

        for _ in 0..n {
            let mut closest: Option<usize> = None;
            let mut best = f64::INFINITY;
            for v in 0..n {
                if !attached[v] && key[v] < best {
                    best = key[v];
                    closest = Some(v);
                }
            }
            let Some(u) = closest else { break };
            attached[u] = true;
            weight += key[u];

            for v in 0..n {
                if attached[v] {
                    continue;
                }
                relaxations += 1;
                let w = matrix.get(u, v);
                if w < key[v] {
                    key[v] = w;
                    parents[v] = Some(u);
                }
            }
        }

        Self {
            parents,
            weight,
            relaxations,
        }
    }

    /// Parent of each city; `None` for the root.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Total edge weight of the tree.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Tree edges as `(parent, child)` pairs in child order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
    }

    fn adjacency(&self) -> Vec<Neighbors> {
        let mut adjacency = vec![Neighbors::new(); self.parents.len()];
        for (parent, child) in self.edges() {
            adjacency[parent].push(child);
            adjacency[child].push(parent);
        }
        adjacency
    }

    /// Depth-first preorder from city 0, then any city the walk missed.
    ///
    /// Neighbors are visited in the order their edges were added.
    pub fn preorder(&self) -> Vec<usize> {
        let n = self.parents.len();
        let adjacency = self.adjacency();
        let mut visited = vec![false; n];
        let mut walk = Vec::with_capacity(n);
        if n == 0 {
            return walk;
        }

        // (city, index of the next neighbor to try)
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        visited[0] = true;
        walk.push(0);
        while let Some(top) = stack.last_mut() {
            let city = top.0;
            match adjacency[city].get(top.1) {
                Some(&next) => {
                    top.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        walk.push(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        // Unreachable for a spanning tree; keeps the result a full tour.
        walk.extend((0..n).filter(|&city| !visited[city]));
        walk
    }
}

/// Double-tree-and-shortcut approximation.
///
/// # Example
///
/// ```
/// use salesman_core::{Euclidean, PointSet};
/// use salesman_solver::{MstApproximation, TourSolver};
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).unwrap();
/// let result = MstApproximation.solve(&points, &Euclidean).unwrap();
///
/// assert_eq!(result.tour().unwrap().order(), &[0, 1, 2, 3]);
/// assert_eq!(result.cost(), 14.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MstApproximation;

impl TourSolver for MstApproximation {
    fn name(&self) -> &'static str {
        "MST 2-approximation"
    }

    fn solve<M: DistanceMetric>(&self, points: &PointSet, metric: &M) -> Result<TourResult> {
        let started = Instant::now();
        let matrix = DistanceMatrix::from_points(points, metric);
        let tree = SpanningTree::prim(&matrix);
        let order = tree.preorder();
        let cost = matrix.cyclic_cost(&order);

        let statistics = SolveStatistics::new(tree.relaxations, started.elapsed());
        Ok(TourResult::found(Tour::from_order(order), cost).with_statistics(statistics))
    }
}

#[cfg(test)]
mod tests {
    use salesman_core::Euclidean;
    use salesman_test::{collinear, random_points};

    use super::*;

    #[test]
    fn test_prim_on_line_is_a_path() {
        let line = collinear(5);
        let matrix = DistanceMatrix::from_points(&line, &Euclidean);
        let tree = SpanningTree::prim(&matrix);

        assert_eq!(tree.parents(), &[None, Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(tree.weight(), 4.0);
        assert_eq!(tree.preorder(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_star_preorder_follows_insertion_order() {
        // city 0 in the middle, leaves around it
        let points = PointSet::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 1.0),
            (-3.0, 0.0),
            (0.0, -2.0),
        ])
        .unwrap();
        let matrix = DistanceMatrix::from_points(&points, &Euclidean);
        let tree = SpanningTree::prim(&matrix);

        assert!(tree.parents()[1..].iter().all(|p| *p == Some(0)));
        assert_eq!(tree.preorder(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_tour_is_within_twice_tree_weight() {
        for seed in 0..10 {
            let points = random_points(25, seed);
            let matrix = DistanceMatrix::from_points(&points, &Euclidean);
            let tree = SpanningTree::prim(&matrix);
            let result = MstApproximation.solve(&points, &Euclidean).unwrap();

            assert!(result.tour().unwrap().covers(points.len()));
            assert!(result.cost() <= 2.0 * tree.weight() + 1e-9);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        let one = PointSet::from_coords(&[(2.0, 2.0)]).unwrap();
        let result = MstApproximation.solve(&one, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0]);
        assert_eq!(result.cost(), 0.0);

        let two = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        let result = MstApproximation.solve(&two, &Euclidean).unwrap();
        assert_eq!(result.tour().unwrap().order(), &[0, 1]);
        assert_eq!(result.cost(), 2.0);
    }
}
