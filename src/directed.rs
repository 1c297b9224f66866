//! Traversals of directed graphs given as adjacency lists.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::hash::Hash;
use thiserror::Error;

/// Directed graph mapping each node to its successors.
///
/// A node that only appears as a successor is still a node of the graph.
pub type Graph<T> = FxHashMap<T, Vec<T>>;

/// Error in a directed graph algorithm.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The graph contains a cycle, including a self-loop.
    #[error("the graph contains a cycle")]
    Cyclic,
}

/// Visits the nodes reachable from `first` in breadth-first order.
///
/// Successors are enqueued in the order of the adjacency list, and each node is processed once.
/// The traversal stops at the first error returned by `process`.
///
/// # Examples
///
/// ```
/// use grapo::directed::{self, Graph};
///
/// let graph = Graph::from_iter([('a', vec!['b', 'c']), ('b', vec!['d']), ('c', vec!['a'])]);
/// let mut order = Vec::new();
/// let result = directed::bfs(&graph, 'a', |n| {
///     order.push(*n);
///     Ok::<_, ()>(())
/// });
/// assert_eq!(result, Ok(()));
/// assert_eq!(order, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn bfs<T, E, F>(graph: &Graph<T>, first: T, mut process: F) -> Result<(), E>
where
    T: Hash + Eq + Clone,
    F: FnMut(&T) -> Result<(), E>,
{
    let mut queue = VecDeque::from([first]);
    let mut visited = FxHashSet::default();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }

        process(&node)?;

        if let Some(successors) = graph.get(&node) {
            queue.extend(
                successors
                    .iter()
                    .filter(|successor| !visited.contains(*successor))
                    .cloned(),
            );
        }
    }

    Ok(())
}

/// Returns whether the graph contains a cycle.
///
/// # Examples
///
/// ```
/// use grapo::directed::{self, Graph};
///
/// let graph = Graph::from_iter([(1, vec![2]), (2, vec![3])]);
/// assert!(!directed::is_cyclic(&graph));
///
/// let graph = Graph::from_iter([(1, vec![2]), (2, vec![1])]);
/// assert!(directed::is_cyclic(&graph));
/// ```
pub fn is_cyclic<T>(graph: &Graph<T>) -> bool
where
    T: Hash + Eq + Clone,
{
    topological_sort(graph).is_err()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Sorts all nodes of the graph so that every node precedes its successors.
///
/// Fails with `GraphError::Cyclic` if no such order exists.
///
/// # Examples
///
/// ```
/// use grapo::directed::{self, Graph, GraphError};
///
/// let graph = Graph::from_iter([('a', vec!['b']), ('b', vec!['c'])]);
/// assert_eq!(directed::topological_sort(&graph), Ok(vec!['a', 'b', 'c']));
///
/// let graph = Graph::from_iter([('a', vec!['a'])]);
/// assert_eq!(directed::topological_sort(&graph), Err(GraphError::Cyclic));
/// ```
pub fn topological_sort<T>(graph: &Graph<T>) -> Result<Vec<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    let mut marks = FxHashMap::<&T, Mark>::default();
    let mut order = Vec::with_capacity(graph.len());
    let mut stack = Vec::new();

    for root in graph.keys() {
        if marks.contains_key(root) {
            continue;
        }

        marks.insert(root, Mark::InProgress);
        stack.push((root, 0));

        while let Some((node, index)) = stack.pop() {
            let successors = graph.get(node).map_or(&[][..], Vec::as_slice);

            let Some(successor) = successors.get(index) else {
                marks.insert(node, Mark::Done);
                order.push(node.clone());

                continue;
            };

            stack.push((node, index + 1));

            match marks.get(successor) {
                Some(Mark::InProgress) => return Err(GraphError::Cyclic),
                Some(Mark::Done) => {}
                None => {
                    marks.insert(successor, Mark::InProgress);
                    stack.push((successor, 0));
                }
            }
        }
    }

    order.reverse();

    Ok(order)
}
