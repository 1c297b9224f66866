use crate::solvers::search_algorithms::UniformCostSearch;
use crate::solvers::{Search, SearchParameters};
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Creates a Dijkstra solver.
///
/// The cost of a path is the sum of the distances along it and the weights of the values entered,
/// excluding the start.
///
/// - `weight` gives the weight of a value. If `None`, every weight is zero.
/// - `neighbors` enumerates pairs of an adjacent value and the distance to it.
///
/// # Examples
///
/// ```
/// use grapo::prelude::*;
/// use grapo::solvers;
///
/// let neighbors = |n: &char| match n {
///     'a' => vec![('b', 4), ('c', 1)],
///     'c' => vec![('b', 1)],
///     'b' => vec![('d', 1)],
///     _ => vec![],
/// };
/// let mut solver = solvers::create_dijkstra(
///     'a',
///     'd',
///     None::<fn(&char) -> i32>,
///     neighbors,
///     SearchParameters::default(),
/// );
/// let solution = solver.search();
/// assert_eq!(solution.path, Some(vec!['a', 'c', 'b', 'd']));
/// assert_eq!(solution.cost, Some(3));
/// ```
pub fn create_dijkstra<T, C, W, F, I>(
    start: T,
    goal: T,
    weight: Option<W>,
    neighbors: F,
    parameters: SearchParameters,
) -> impl Search<Value = T, CostType = C>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, C)>,
{
    UniformCostSearch::new(start, goal, weight, neighbors, parameters)
}

/// Finds a path from `start` to `goal` with Dijkstra's algorithm.
///
/// Returns `None` if `goal` is unreachable.
/// See [`create_dijkstra`] for the meaning of the arguments.
///
/// # Examples
///
/// ```
/// use grapo::solvers;
///
/// let neighbors = |n: &u32| if *n < 6 { vec![(n + 1, 1.0), (n + 3, 2.5)] } else { vec![] };
/// let path = solvers::dijkstra_search(0, 6, None::<fn(&u32) -> f64>, neighbors);
/// assert_eq!(path, Some(vec![0, 3, 6]));
/// ```
pub fn dijkstra_search<T, C, W, F, I>(
    start: T,
    goal: T,
    weight: Option<W>,
    neighbors: F,
) -> Option<Vec<T>>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, C)>,
{
    let parameters = SearchParameters {
        quiet: true,
        ..Default::default()
    };

    create_dijkstra(start, goal, weight, neighbors, parameters)
        .search()
        .path
}
