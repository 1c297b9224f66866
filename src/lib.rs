//! Shortest path search over implicit graphs.
//!
//! A graph is described by callbacks giving the neighbors and weights of a node,
//! so nodes can be any hashable value and are generated on demand.

pub mod algorithms;
pub mod directed;
pub mod solvers;

pub use directed::GraphError;
pub use solvers::Solution;

pub mod prelude {
    pub use super::solvers::{Search, SearchParameters};
    pub use super::{GraphError, Solution};
}
