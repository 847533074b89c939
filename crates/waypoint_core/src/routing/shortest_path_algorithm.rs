use std::hash::Hash;

use crate::{error::SearchError, graph::Graph, weight::Weight};

#[derive(Default, Clone, Copy, Debug)]
pub struct ShortestPathOptions {
    pub include_debug_info: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ShortestPathDebugInfo<V> {
    /// Vertices in the order they were expanded
    pub visited_vertices: Vec<V>,
}

#[derive(Clone, Debug)]
pub struct ShortestPathResult<V> {
    pub path: Vec<V>,
    pub cost: Weight,
    pub debug: Option<ShortestPathDebugInfo<V>>,
}

pub trait ShortestPathAlgorithm<V>
where
    V: Clone + Eq + Hash,
{
    fn calc_path<G>(
        &mut self,
        graph: &Graph<V>,
        start: &V,
        goal_test: G,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult<V>, SearchError>
    where
        G: Fn(&V) -> bool;
}
