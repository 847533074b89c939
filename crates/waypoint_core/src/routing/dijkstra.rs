use std::hash::Hash;

use super::{
    astar::AStar, astar_heuristic::AStarHeuristic,
    shortest_path_algorithm::ShortestPathAlgorithm,
};
use crate::{graph::Graph, weight::Weight};

pub struct DijkstraHeuristic;

impl<V> AStarHeuristic<V> for DijkstraHeuristic {
    #[inline(always)]
    fn estimate(&self, _from: &V, _to: &V) -> Weight {
        0.0
    }
}

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<V>() -> AStar<V, DijkstraHeuristic>
    where
        V: Clone + Eq + Hash,
    {
        AStar::with_heuristic(DijkstraHeuristic)
    }
}

/// Shortest path from `src` to `sink`, or an empty path when either vertex is
/// missing or `sink` cannot be reached.
pub fn dijkstra<V>(graph: &Graph<V>, src: &V, sink: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    if !graph.vertex_exists(sink) {
        return Vec::new();
    }

    Dijkstra::new()
        .calc_path(graph, src, |vertex| vertex == sink, None)
        .map(|result| result.path)
        .unwrap_or_default()
}
