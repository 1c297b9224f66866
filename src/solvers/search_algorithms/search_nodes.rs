//! Search nodes for state space search.

mod id_tree;
mod node_registry;

pub use id_tree::IdTree;
pub use node_registry::{NodeId, NodeRegistry};

use super::indexed_heap::HeapElement;
use num_traits::Zero;
use std::ops::Add;

/// Status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    /// Not generated yet.
    #[default]
    Unseen,
    /// In the open list.
    Open,
    /// Expanded and never reopened.
    Closed,
}

/// Node ordered by the f-value, which is the sum of the g-value and the h-value.
///
/// The parent is stored as a handle to the node registry.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<C> {
    g: C,
    h: C,
    f: C,
    heap_index: Option<usize>,
    parent: Option<NodeId>,
    status: NodeStatus,
}

impl<C> Default for SearchNode<C>
where
    C: Zero,
{
    fn default() -> Self {
        Self {
            g: C::zero(),
            h: C::zero(),
            f: C::zero(),
            heap_index: None,
            parent: None,
            status: NodeStatus::Unseen,
        }
    }
}

impl<C> SearchNode<C>
where
    C: Copy + Add<Output = C>,
{
    /// Updates the cost, the heuristic value, and the parent.
    ///
    /// The f-value is recomputed.
    pub fn relax(&mut self, parent: Option<NodeId>, g: C, h: C) {
        self.parent = parent;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Returns the cost from the start.
    pub fn get_g(&self) -> C {
        self.g
    }

    /// Returns the heuristic value.
    pub fn get_h(&self) -> C {
        self.h
    }

    /// Returns the f-value.
    pub fn get_f(&self) -> C {
        self.f
    }
}

impl<C> SearchNode<C> {
    /// Returns the parent node.
    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the status.
    pub fn get_status(&self) -> NodeStatus {
        self.status
    }

    /// Returns whether the node is open.
    pub fn is_open(&self) -> bool {
        self.status == NodeStatus::Open
    }

    /// Returns whether the node is closed.
    pub fn is_closed(&self) -> bool {
        self.status == NodeStatus::Closed
    }

    /// Opens the node.
    pub fn open(&mut self) {
        debug_assert_eq!(self.status, NodeStatus::Unseen);
        self.status = NodeStatus::Open;
    }

    /// Closes the node.
    pub fn close(&mut self) {
        debug_assert_eq!(self.status, NodeStatus::Open);
        self.status = NodeStatus::Closed;
    }
}

impl<C> HeapElement for SearchNode<C>
where
    C: PartialOrd,
{
    type Priority = C;

    fn get_priority(&self) -> &C {
        &self.f
    }

    fn get_heap_index(&self) -> Option<usize> {
        self.heap_index
    }

    fn set_heap_index(&mut self, index: Option<usize>) {
        self.heap_index = index;
    }
}
