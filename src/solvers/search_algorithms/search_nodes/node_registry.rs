use super::SearchNode;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Handle to a search node in a `NodeRegistry`.
pub type NodeId = usize;

/// Data structure to map values to unique search nodes.
///
/// Nodes are stored in an arena and referred to by `NodeId`.
/// A value fetched twice maps to the same node.
pub struct NodeRegistry<T, C> {
    map: FxHashMap<T, NodeId>,
    values: Vec<T>,
    nodes: Vec<SearchNode<C>>,
}

impl<T, C> Default for NodeRegistry<T, C> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl<T, C> NodeRegistry<T, C>
where
    T: Hash + Eq + Clone,
    C: Copy + num_traits::Zero,
{
    /// Creates a new node registry with the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            values: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the node associated with the value, allocating a new one on the first call.
    pub fn fetch(&mut self, value: T) -> NodeId {
        match self.map.entry(value) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.nodes.len();
                self.values.push(entry.key().clone());
                self.nodes.push(SearchNode::default());
                entry.insert(id);

                id
            }
        }
    }

    /// Returns the node associated with the value if it exists.
    pub fn get(&self, value: &T) -> Option<NodeId> {
        self.map.get(value).copied()
    }

    /// Returns the path from the root to the node by following parents.
    pub fn get_path(&self, id: NodeId) -> Vec<T> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(id) = current {
            path.push(self.values[id].clone());
            current = self.nodes[id].get_parent();
        }

        path.reverse();

        path
    }
}

impl<T, C> NodeRegistry<T, C> {
    /// Returns the value of the node.
    pub fn get_value(&self, id: NodeId) -> &T {
        &self.values[id]
    }

    /// Returns the node.
    pub fn get_node(&self, id: NodeId) -> &SearchNode<C> {
        &self.nodes[id]
    }

    /// Returns the node.
    pub fn get_node_mut(&mut self, id: NodeId) -> &mut SearchNode<C> {
        &mut self.nodes[id]
    }

    /// Returns all nodes, indexed by `NodeId`.
    pub fn get_nodes_mut(&mut self) -> &mut [SearchNode<C>] {
        &mut self.nodes
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes all values and nodes.
    pub fn clear(&mut self) {
        self.map.clear();
        self.values.clear();
        self.nodes.clear();
    }
}
