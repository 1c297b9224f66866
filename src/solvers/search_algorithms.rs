//! State space search algorithms for shortest paths.

mod best_first_search;
mod indexed_heap;
mod search;
mod search_nodes;
mod uniform_cost_search;

pub use best_first_search::BestFirstSearch;
pub use indexed_heap::{HeapElement, IndexedHeap};
pub use search::{Search, SearchParameters, Solution};
pub use search_nodes::{IdTree, NodeId, NodeRegistry, NodeStatus, SearchNode};
pub use uniform_cost_search::{CandidatePath, UniformCostSearch};
