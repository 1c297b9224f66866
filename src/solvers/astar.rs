use crate::solvers::search_algorithms::BestFirstSearch;
use crate::solvers::{Search, SearchParameters};
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Creates an A* solver.
///
/// Search nodes are ordered by the f-value, which is the sum of the cost from the start and the heuristic value.
/// The cost of a node is the sum of the weights of the nodes preceding it on the path.
///
/// - `weight` gives the weight of a value. If `None`, every weight is zero.
/// - `heuristic` estimates the cost between two values. It should never overestimate the cost.
/// - `neighbors` enumerates the values adjacent to a value.
///
/// The returned solver exposes the cost and statistics of the search in addition to the path.
///
/// # Examples
///
/// ```
/// use grapo::prelude::*;
/// use grapo::solvers;
///
/// let neighbors = |n: &u32| if *n < 4 { vec![n + 1, n + 2] } else { vec![] };
/// let mut solver = solvers::create_astar(
///     0,
///     4,
///     Some(|_: &u32| 1),
///     |a: &u32, b: &u32| a.abs_diff(*b) / 2,
///     neighbors,
///     SearchParameters::default(),
/// );
/// let solution = solver.search();
/// assert_eq!(solution.path, Some(vec![0, 2, 4]));
/// assert_eq!(solution.cost, Some(2));
/// ```
pub fn create_astar<T, C, W, H, F, I>(
    start: T,
    goal: T,
    weight: Option<W>,
    heuristic: H,
    neighbors: F,
    parameters: SearchParameters,
) -> impl Search<Value = T, CostType = C>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    H: FnMut(&T, &T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    BestFirstSearch::new(start, goal, weight, heuristic, neighbors, parameters)
}

/// Finds a path from `start` to `goal` with A*.
///
/// Returns `None` if `goal` is unreachable.
/// See [`create_astar`] for the meaning of the arguments.
///
/// # Examples
///
/// ```
/// use grapo::algorithms;
/// use grapo::solvers;
///
/// // 4-connected 3 x 3 grid with a wall in the middle column except the bottom row.
/// let wall = [(0, 1), (1, 1)];
/// let neighbors = |&(i, j): &(i32, i32)| {
///     [(i - 1, j), (i + 1, j), (i, j - 1), (i, j + 1)]
///         .into_iter()
///         .filter(|&(a, b)| (0..3).contains(&a) && (0..3).contains(&b))
///         .filter(|p| !wall.contains(p))
///         .collect::<Vec<_>>()
/// };
/// let heuristic = |a: &(i32, i32), b: &(i32, i32)| {
///     algorithms::manhattan_distance(a.0 as f64, a.1 as f64, b.0 as f64, b.1 as f64)
/// };
///
/// let path = solvers::astar_search((0, 0), (0, 2), Some(|_: &(i32, i32)| 1.0), heuristic, neighbors);
/// assert_eq!(path, Some(vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]));
/// ```
pub fn astar_search<T, C, W, H, F, I>(
    start: T,
    goal: T,
    weight: Option<W>,
    heuristic: H,
    neighbors: F,
) -> Option<Vec<T>>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    H: FnMut(&T, &T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    let parameters = SearchParameters {
        quiet: true,
        ..Default::default()
    };

    create_astar(start, goal, weight, heuristic, neighbors, parameters)
        .search()
        .path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{euclidean_distance, manhattan_distance};
    use rustc_hash::FxHashMap;
    use smallvec::SmallVec;

    type Cell = (i32, i32);

    // | . . . . . . |
    // | w w w w w . |
    // | . . . . . . |
    // | . w w w w w |
    // | . . . . . . |
    // | w w w w w . |
    fn create_matrix(w: f64) -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![w, w, w, w, w, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, w, w, w, w, w],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![w, w, w, w, w, 0.0],
        ]
    }

    fn grid_neighbors(matrix: &[Vec<f64>], &(i, j): &Cell) -> SmallVec<[Cell; 8]> {
        let m = matrix.len() as i32;
        let n = matrix[0].len() as i32;

        [
            (i - 1, j),
            (i + 1, j),
            (i, j - 1),
            (i, j + 1),
            (i - 1, j - 1),
            (i - 1, j + 1),
            (i + 1, j - 1),
            (i + 1, j + 1),
        ]
        .into_iter()
        .filter(|&(a, b)| a >= 0 && a < m && b >= 0 && b < n)
        .collect()
    }

    fn euclidean(a: &Cell, b: &Cell) -> f64 {
        euclidean_distance(a.0 as f64, a.1 as f64, b.0 as f64, b.1 as f64)
    }

    fn solve_matrix(w: f64, duplicate_neighbors: bool) -> (Option<Vec<Cell>>, Option<f64>) {
        let matrix = create_matrix(w);
        let weight = |&(i, j): &Cell| matrix[i as usize][j as usize];
        let neighbors = |cell: &Cell| {
            let mut neighbors = grid_neighbors(&matrix, cell);

            if duplicate_neighbors {
                neighbors.extend(grid_neighbors(&matrix, cell));
            }

            neighbors
        };
        let mut solver = create_astar(
            (0, 0),
            (5, 5),
            Some(weight),
            euclidean,
            neighbors,
            SearchParameters::default(),
        );
        let solution = solver.search();

        (solution.path, solution.cost)
    }

    #[test]
    fn test_matrix_low_weight() {
        let (path, cost) = solve_matrix(1.0, false);

        assert_eq!(
            path,
            Some(vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)])
        );
        assert_eq!(cost, Some(2.0));
    }

    #[test]
    fn test_matrix_medium_weight() {
        let (path, cost) = solve_matrix(4.0, false);

        assert_eq!(
            path,
            Some(vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 5),
                (2, 5),
                (3, 5),
                (4, 5),
                (5, 5),
            ])
        );
        assert_eq!(cost, Some(4.0));
    }

    #[test]
    fn test_matrix_high_weight() {
        let (path, cost) = solve_matrix(9.0, false);

        assert_eq!(
            path,
            Some(vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 5),
                (2, 4),
                (2, 3),
                (2, 2),
                (2, 1),
                (3, 0),
                (4, 1),
                (4, 2),
                (4, 3),
                (4, 4),
                (5, 5),
            ])
        );
        assert_eq!(cost, Some(0.0));
    }

    #[test]
    fn test_matrix_duplicate_neighbors() {
        for w in [1.0, 4.0, 9.0] {
            assert_eq!(solve_matrix(w, true), solve_matrix(w, false));
        }
    }

    #[test]
    fn test_matrix_deterministic_cost() {
        let first = solve_matrix(9.0, false).1;

        for _ in 0..5 {
            assert_eq!(solve_matrix(9.0, false).1, first);
        }
    }

    #[test]
    fn test_fewest_hops_with_uniform_weight() {
        let n = 5;
        let neighbors = |&(i, j): &Cell| {
            [(i - 1, j), (i + 1, j), (i, j - 1), (i, j + 1)]
                .into_iter()
                .filter(|&(a, b)| a >= 0 && a < n && b >= 0 && b < n)
                .collect::<SmallVec<[Cell; 4]>>()
        };
        let heuristic =
            |a: &Cell, b: &Cell| manhattan_distance(a.0 as f64, a.1 as f64, b.0 as f64, b.1 as f64);
        let mut solver = create_astar(
            (0, 0),
            (4, 4),
            Some(|_: &Cell| 1.0),
            heuristic,
            neighbors,
            SearchParameters::default(),
        );

        let solution = solver.search();
        assert_eq!(solution.cost, Some(8.0));
        let path = solution.path.unwrap();
        assert_eq!(path.len(), 9);

        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
        }
    }

    struct Point {
        x: f64,
        y: f64,
        weight: f64,
        neighbors: Vec<char>,
    }

    fn create_point(x: f64, y: f64, weight: f64, neighbors: &str) -> Point {
        Point {
            x,
            y,
            weight,
            neighbors: neighbors.chars().collect(),
        }
    }

    // The straight route through d is short, but d is heavy.
    fn create_graph() -> FxHashMap<char, Point> {
        FxHashMap::from_iter([
            ('a', create_point(4.0, 0.0, 1.0, "bcd")),
            ('b', create_point(2.0, 3.0, 1.0, "cfe")),
            ('c', create_point(0.0, 1.0, 1.0, "b")),
            ('d', create_point(3.0, 2.0, 100.0, "cg")),
            ('e', create_point(4.0, 4.0, 1.0, "f")),
            ('f', create_point(5.0, 3.0, 1.0, "id")),
            ('g', create_point(5.0, 2.0, 1.0, "h")),
            ('h', create_point(5.0, 1.0, 1.0, "")),
            ('i', create_point(6.0, 4.0, 1.0, "g")),
        ])
    }

    fn point_distance(graph: &FxHashMap<char, Point>, a: &char, b: &char) -> f64 {
        let (a, b) = (&graph[a], &graph[b]);

        euclidean_distance(a.x, a.y, b.x, b.y)
    }

    fn adjacency(edges: &[(char, &str)]) -> FxHashMap<char, Vec<char>> {
        edges
            .iter()
            .map(|&(from, to)| (from, to.chars().collect()))
            .collect()
    }

    #[test]
    fn test_graph_with_weights() {
        let graph = create_graph();
        let mut solver = create_astar(
            'a',
            'g',
            Some(|n: &char| graph[n].weight),
            |a: &char, b: &char| point_distance(&graph, a, b),
            |n: &char| graph[n].neighbors.clone(),
            SearchParameters::default(),
        );

        let solution = solver.search();
        assert_eq!(solution.path, Some(vec!['a', 'b', 'f', 'i', 'g']));
        assert_eq!(solution.cost, Some(4.0));
    }

    #[test]
    fn test_graph_without_weights() {
        let graph = create_graph();
        let path = astar_search(
            'a',
            'g',
            None::<fn(&char) -> f64>,
            |a: &char, b: &char| point_distance(&graph, a, b),
            |n: &char| graph[n].neighbors.clone(),
        );

        assert_eq!(path, Some(vec!['a', 'd', 'g']));
    }

    #[test]
    fn test_graph_duplicate_neighbors() {
        let graph = create_graph();
        let path = astar_search(
            'a',
            'g',
            Some(|n: &char| graph[n].weight),
            |a: &char, b: &char| point_distance(&graph, a, b),
            |n: &char| graph[n].neighbors.repeat(2),
        );

        assert_eq!(path, Some(vec!['a', 'b', 'f', 'i', 'g']));
    }

    #[test]
    fn test_graph_zero_weight_and_heuristic() {
        let graph = adjacency(&[('a', "bc"), ('b', "cd"), ('c', "de")]);
        let path = astar_search(
            'a',
            'e',
            Some(|_: &char| 0.0),
            |_: &char, _: &char| 0.0,
            |n: &char| graph.get(n).cloned().unwrap_or_default(),
        );

        assert_eq!(path, Some(vec!['a', 'c', 'e']));
    }

    #[test]
    fn test_no_path() {
        let path = astar_search(
            'a',
            'b',
            Some(|_: &char| 0.0),
            |_: &char, _: &char| 0.0,
            |_: &char| Vec::new(),
        );

        assert_eq!(path, None);
    }

    #[test]
    fn test_disconnected() {
        // a <-> b, c is isolated.
        let graph = adjacency(&[('a', "b"), ('b', "a")]);
        let mut solver = create_astar(
            'a',
            'c',
            Some(|_: &char| 1.0),
            |_: &char, _: &char| 0.0,
            |n: &char| graph.get(n).cloned().unwrap_or_default(),
            SearchParameters::default(),
        );

        let solution = solver.search();
        assert_eq!(solution.path, None);
        assert_eq!(solution.cost, None);
        assert_eq!(solution.expanded, 2);
    }

    #[test]
    fn test_start_is_goal() {
        let graph = create_graph();
        let path = astar_search(
            'e',
            'e',
            Some(|n: &char| graph[n].weight),
            |a: &char, b: &char| point_distance(&graph, a, b),
            |n: &char| graph[n].neighbors.clone(),
        );

        assert_eq!(path, Some(vec!['e']));
    }
}
