pub mod edge_list;
pub mod error;
pub mod graph;
pub mod hashing;
pub mod routing;
pub mod weight;

#[cfg(test)]
mod test_graph_utils;

pub use graph::{AdjacencyList, Graph, OutwardEdge};
pub use routing::astar::{AStar, a_star_search};
pub use routing::dijkstra::{Dijkstra, dijkstra};
pub use routing::routing_path::build_path;
pub use weight::Weight;
