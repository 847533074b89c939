use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use fxhash::FxHashMap;
use tracing::{Level, debug, instrument};

use super::astar_heuristic::AStarHeuristic;
use super::routing_path::build_path;
use super::shortest_path_algorithm::{
    ShortestPathAlgorithm, ShortestPathDebugInfo, ShortestPathOptions, ShortestPathResult,
};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::weight::{MAX_WEIGHT, Weight};

// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Clone, Debug)]
struct HeapItem<V> {
    vertex: V,

    /// g_score is the current cheapest weight from start to `vertex`
    g_score: Weight,

    /// f_score = g_score + h_score
    f_score: Weight,

    /// Push order, equal f_scores pop first-in first-out
    sequence: u64,
}

impl<V> PartialEq for HeapItem<V> {
    fn eq(&self, other: &HeapItem<V>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapItem<V> {}

impl<V> PartialOrd for HeapItem<V> {
    fn partial_cmp(&self, other: &HeapItem<V>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapItem<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

pub struct AStar<V, H> {
    heap: BinaryHeap<HeapItem<V>>,

    /// Best known weight from the start, a missing vertex is unreached
    g_scores: FxHashMap<V, Weight>,

    predecessors: FxHashMap<V, V>,

    sequence: u64,

    debug_visited_vertices: Option<Vec<V>>,

    heuristic: H,
}

impl<V, H> AStar<V, H>
where
    V: Clone + Eq + Hash,
    H: AStarHeuristic<V>,
{
    pub fn with_heuristic(heuristic: H) -> AStar<V, H> {
        AStar {
            heap: BinaryHeap::with_capacity(1024),
            g_scores: FxHashMap::default(),
            predecessors: FxHashMap::default(),
            sequence: 0,
            debug_visited_vertices: None,
            heuristic,
        }
    }

    fn init(&mut self, start: &V) {
        self.heap.clear();
        self.g_scores.clear();
        self.predecessors.clear();
        self.sequence = 0;
        self.debug_visited_vertices = None;

        self.g_scores.insert(start.clone(), 0.0);
        self.push(start.clone(), 0.0, 0.0);
    }

    fn push(&mut self, vertex: V, g_score: Weight, f_score: Weight) {
        self.heap.push(HeapItem {
            vertex,
            g_score,
            f_score,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    #[inline(always)]
    fn current_shortest_weight(&self, vertex: &V) -> Weight {
        self.g_scores.get(vertex).copied().unwrap_or(MAX_WEIGHT)
    }

    fn add_visited_vertex(&mut self, vertex: &V) {
        self.debug_visited_vertices
            .get_or_insert_with(Vec::new)
            .push(vertex.clone());
    }

    fn debug_info(&mut self) -> ShortestPathDebugInfo<V> {
        ShortestPathDebugInfo {
            visited_vertices: self.debug_visited_vertices.take().unwrap_or_default(),
        }
    }

    /// Predecessor map left behind by the last search
    pub fn predecessors(&self) -> &FxHashMap<V, V> {
        &self.predecessors
    }
}

impl<V, H> ShortestPathAlgorithm<V> for AStar<V, H>
where
    V: Clone + Eq + Hash,
    H: AStarHeuristic<V>,
{
    #[instrument(skip_all, level = Level::DEBUG)]
    fn calc_path<G>(
        &mut self,
        graph: &Graph<V>,
        start: &V,
        goal_test: G,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult<V>, SearchError>
    where
        G: Fn(&V) -> bool,
    {
        if !graph.vertex_exists(start) {
            return Err(SearchError::InvalidStart);
        }

        let include_debug_info: bool = options
            .and_then(|options| options.include_debug_info)
            .unwrap_or(false);

        self.init(start);

        let mut iterations = 0;
        let mut relaxed_edges = 0;

        while let Some(HeapItem { vertex, g_score, .. }) = self.heap.pop() {
            // A cheaper entry for this vertex was already expanded, skip
            if g_score > self.current_shortest_weight(&vertex) {
                continue;
            }

            iterations += 1;

            if include_debug_info {
                self.add_visited_vertex(&vertex);
            }

            if goal_test(&vertex) {
                debug!(iterations, relaxed_edges, "AStar reached goal");

                let path = build_path(&self.predecessors, start, &vertex);
                if path.is_empty() {
                    return Err(SearchError::NoPath);
                }

                return Ok(ShortestPathResult {
                    path,
                    cost: g_score,
                    debug: include_debug_info.then(|| self.debug_info()),
                });
            }

            for edge in graph.adjacency_list(&vertex) {
                let edge_weight = edge.weight();

                if edge_weight.is_infinite() {
                    continue;
                }

                let adj_vertex = edge.vertex();
                let next_weight = g_score + edge_weight;

                if next_weight < self.current_shortest_weight(adj_vertex) {
                    relaxed_edges += 1;

                    let h_score = self.heuristic.estimate(&vertex, adj_vertex);

                    self.g_scores.insert(adj_vertex.clone(), next_weight);
                    self.predecessors.insert(adj_vertex.clone(), vertex.clone());
                    self.push(adj_vertex.clone(), next_weight, next_weight + h_score);
                }
            }
        }

        debug!(iterations, relaxed_edges, "AStar exhausted the frontier");

        Err(SearchError::NoPath)
    }
}

/// Runs A* from `start` until a vertex satisfies `goal_test`.
///
/// `heuristic(v, u)` is evaluated when `u` is reached from the expanded vertex
/// `v`. Returns an empty path when `start` is not in the graph or when no
/// reachable vertex satisfies the goal.
pub fn a_star_search<V, G, H>(graph: &Graph<V>, start: &V, goal_test: G, heuristic: H) -> Vec<V>
where
    V: Clone + Eq + Hash,
    G: Fn(&V) -> bool,
    H: Fn(&V, &V) -> Weight,
{
    AStar::with_heuristic(heuristic)
        .calc_path(graph, start, goal_test, None)
        .map(|result| result.path)
        .unwrap_or_default()
}
