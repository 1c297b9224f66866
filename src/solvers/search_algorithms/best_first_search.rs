use super::indexed_heap::{HeapElement, IndexedHeap};
use super::search::{Search, SearchParameters, Solution};
use super::search_nodes::{NodeId, NodeRegistry, NodeStatus};
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Best-first search guided by a heuristic function (A*).
///
/// Nodes are ordered by the f-value, the sum of the cost from the start and the heuristic value.
/// Once expanded, a node is closed and never reopened,
/// so the returned path is optimal only when all weights are non-negative and the heuristic is admissible.
///
/// - `T` is the type of the values.
/// - `C` is the cost type.
/// - `W` returns the weight of a value, added to the cost when leaving it.
/// - `H` returns the heuristic value between two values.
/// - `F` returns the neighbors of a value.
pub struct BestFirstSearch<T, C, W, H, F> {
    registry: NodeRegistry<T, C>,
    open: IndexedHeap,
    n_open: usize,
    goal: NodeId,
    weight: Option<W>,
    heuristic: H,
    neighbors: F,
    parameters: SearchParameters,
    solution: Solution<T, C>,
    terminated: bool,
}

impl<T, C, W, H, F, I> BestFirstSearch<T, C, W, H, F>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    H: FnMut(&T, &T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    /// Creates a new instance of the best-first search algorithm.
    ///
    /// `weight` is the weight of a value. If `None`, every weight is zero.
    ///
    /// `heuristic` is an estimate of the cost between two values.
    ///
    /// `neighbors` enumerates the values adjacent to a value. Duplicates are allowed.
    pub fn new(
        start: T,
        goal: T,
        weight: Option<W>,
        mut heuristic: H,
        neighbors: F,
        parameters: SearchParameters,
    ) -> Self {
        let mut registry = parameters
            .initial_registry_capacity
            .map(NodeRegistry::with_capacity)
            .unwrap_or_default();
        let mut open = IndexedHeap::with_capacity(1);
        let mut solution = Solution::default();

        let h = heuristic(&start, &goal);
        let root = registry.fetch(start);
        let node = registry.get_node_mut(root);
        node.open();
        node.relax(None, C::zero(), h);
        open.push(registry.get_nodes_mut(), root);
        solution.generated += 1;

        let goal = registry.fetch(goal);

        Self {
            registry,
            open,
            n_open: 1,
            goal,
            weight,
            heuristic,
            neighbors,
            parameters,
            solution,
            terminated: false,
        }
    }

    fn expand(&mut self, current: NodeId) {
        let value = self.registry.get_value(current).clone();
        let weight = self
            .weight
            .as_mut()
            .map_or_else(C::zero, |weight| weight(&value));
        let g = self.registry.get_node(current).get_g() + weight;

        for successor in (self.neighbors)(&value) {
            let id = self.registry.fetch(successor);
            let node = self.registry.get_node(id);

            match node.get_status() {
                NodeStatus::Closed => continue,
                NodeStatus::Unseen => {
                    self.registry.get_node_mut(id).open();
                    self.n_open += 1;
                }
                NodeStatus::Open if g >= node.get_g() => continue,
                NodeStatus::Open => {
                    tracing::debug!(node = id, old = ?node.get_g(), new = ?g, "better path found");

                    if let Some(index) = node.get_heap_index() {
                        self.open.remove(self.registry.get_nodes_mut(), index);
                    }
                }
            }

            let h = (self.heuristic)(
                self.registry.get_value(id),
                self.registry.get_value(self.goal),
            );
            self.registry.get_node_mut(id).relax(Some(current), g, h);
            self.open.push(self.registry.get_nodes_mut(), id);
            self.solution.generated += 1;
        }

        self.solution.expanded += 1;
    }

    fn finish(&mut self) -> Solution<T, C> {
        self.terminated = true;
        self.solution.log_summary("astar", &self.parameters);

        self.solution.clone()
    }
}

impl<T, C, W, H, F, I> Search for BestFirstSearch<T, C, W, H, F>
where
    T: Hash + Eq + Clone,
    C: Copy + PartialOrd + Add<Output = C> + Zero + Debug,
    W: FnMut(&T) -> C,
    H: FnMut(&T, &T) -> C,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    type Value = T;
    type CostType = C;

    fn search(&mut self) -> Solution<T, C> {
        if self.terminated {
            return self.solution.clone();
        }

        while self.n_open > 0 {
            let Some(current) = self.open.pop(self.registry.get_nodes_mut()) else {
                tracing::warn!(
                    n_open = self.n_open,
                    "priority queue is empty while the open list is not"
                );

                break;
            };

            tracing::trace!(
                node = current,
                g = ?self.registry.get_node(current).get_g(),
                f = ?self.registry.get_node(current).get_f(),
                "pop"
            );

            if current == self.goal {
                self.solution.path = Some(self.registry.get_path(current));
                self.solution.cost = Some(self.registry.get_node(current).get_g());

                return self.finish();
            }

            self.registry.get_node_mut(current).close();
            self.n_open -= 1;
            self.expand(current);
        }

        self.finish()
    }
}
