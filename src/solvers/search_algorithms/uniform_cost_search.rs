use super::search::{Search, SearchParameters, Solution};
use super::search_nodes::IdTree;
use num_traits::Zero;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;
use std::rc::Rc;

/// Path from the start to its last value, ordered by the total weight.
///
/// Paths sharing a prefix share the same `IdTree` nodes.
#[derive(Clone, Debug)]
pub struct CandidatePath<T, C> {
    weight: C,
    path: Rc<IdTree<T>>,
}

impl<T, C> CandidatePath<T, C> {
    /// Creates a path containing only the start.
    pub fn create_root(start: T, weight: C) -> Self {
        Self {
            weight,
            path: Rc::new(IdTree::create_child(Rc::new(IdTree::default()), start)),
        }
    }

    /// Creates a path extending this path by `value`.
    pub fn create_child(&self, value: T, weight: C) -> Self {
        Self {
            weight,
            path: Rc::new(IdTree::create_child(self.path.clone(), value)),
        }
    }

    /// Returns the last value.
    pub fn get_last(&self) -> Option<&T> {
        self.path.get_id()
    }

    /// Returns the total weight.
    pub fn get_weight(&self) -> &C {
        &self.weight
    }

    /// Returns the values from the start to the last value.
    pub fn get_path(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.path.get_path()
    }
}

impl<T, C> PartialEq for CandidatePath<T, C>
where
    C: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C> Eq for CandidatePath<T, C> where C: PartialOrd {}

impl<T, C> Ord for CandidatePath<T, C>
where
    C: PartialOrd,
{
    /// Reversed so that `BinaryHeap` pops the lightest path first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
    }
}

impl<T, C> PartialOrd for CandidatePath<T, C>
where
    C: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search (Dijkstra's algorithm).
///
/// The open list stores whole paths rather than nodes.
/// A path whose last value is already visited is discarded when popped.
///
/// - `T` is the type of the values.
/// - `C` is the cost type.
/// - `W` returns the weight of a value, added to the cost when entering it.
/// - `F` returns the neighbors of a value with the distances to them.
pub struct UniformCostSearch<T, C, W, F> {
    goal: T,
    open: BinaryHeap<CandidatePath<T, C>>,
    visited: FxHashSet<T>,
    weight: Option<W>,
    neighbors: F,
    parameters: SearchParameters,
    solution: Solution<T, C>,
    terminated: bool,
}

impl<T, C, W, F, I> UniformCostSearch<T, C, W, F>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, C)>,
{
    /// Creates a new instance of the uniform-cost search algorithm.
    ///
    /// `weight` is the weight of a value. If `None`, every weight is zero.
    ///
    /// `neighbors` enumerates pairs of an adjacent value and the distance to it.
    pub fn new(
        start: T,
        goal: T,
        weight: Option<W>,
        neighbors: F,
        parameters: SearchParameters,
    ) -> Self {
        let visited = parameters
            .initial_registry_capacity
            .map(|capacity| FxHashSet::with_capacity_and_hasher(capacity, Default::default()))
            .unwrap_or_default();
        let mut open = BinaryHeap::with_capacity(1);
        open.push(CandidatePath::create_root(start, C::zero()));
        let solution = Solution {
            generated: 1,
            ..Default::default()
        };

        Self {
            goal,
            open,
            visited,
            weight,
            neighbors,
            parameters,
            solution,
            terminated: false,
        }
    }

    fn expand(&mut self, candidate: &CandidatePath<T, C>, last: &T) {
        for (successor, distance) in (self.neighbors)(last) {
            if self.visited.contains(&successor) {
                continue;
            }

            let weight = self
                .weight
                .as_mut()
                .map_or_else(C::zero, |weight| weight(&successor));
            let weight = *candidate.get_weight() + weight + distance;
            self.open.push(candidate.create_child(successor, weight));
            self.solution.generated += 1;
        }

        self.solution.expanded += 1;
    }

    fn finish(&mut self) -> Solution<T, C> {
        self.terminated = true;
        self.solution.log_summary("dijkstra", &self.parameters);

        self.solution.clone()
    }
}

impl<T, C, W, F, I> Search for UniformCostSearch<T, C, W, F>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, C)>,
{
    type Value = T;
    type CostType = C;

    fn search(&mut self) -> Solution<T, C> {
        if self.terminated {
            return self.solution.clone();
        }

        while let Some(candidate) = self.open.pop() {
            let Some(last) = candidate.get_last() else {
                continue;
            };

            if self.visited.contains(last) {
                continue;
            }

            tracing::trace!(weight = ?candidate.get_weight(), "pop");

            if *last == self.goal {
                self.solution.path = Some(candidate.get_path());
                self.solution.cost = Some(*candidate.get_weight());

                return self.finish();
            }

            self.visited.insert(last.clone());
            self.expand(&candidate, last);
        }

        self.finish()
    }
}
