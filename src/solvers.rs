mod astar;
mod dijkstra;
pub mod search_algorithms;

pub use astar::{astar_search, create_astar};
pub use dijkstra::{create_dijkstra, dijkstra_search};
pub use search_algorithms::{Search, SearchParameters, Solution};
