use std::hash::Hash;

use fxhash::FxHashMap;
use tracing::warn;

use crate::error::GraphError;
use crate::weight::{Weight, is_valid_weight};

#[derive(Clone, Debug, PartialEq)]
pub struct OutwardEdge<V> {
    vertex: V,
    weight: Weight,
}

impl<V> OutwardEdge<V> {
    pub fn new(vertex: V, weight: Weight) -> Self {
        OutwardEdge { vertex, weight }
    }

    /// The vertex this edge points to
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

pub type AdjacencyList<V> = Vec<OutwardEdge<V>>;

/// Adjacency-list graph keyed by vertex value.
///
/// In undirected mode every inserted edge `(a, b, w)` is stored twice, once in
/// the adjacency list of `a` and once, mirrored, in the list of `b`.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    directed: bool,
    adjacency: FxHashMap<V, AdjacencyList<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            directed: false,
            adjacency: FxHashMap::default(),
        }
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            adjacency: FxHashMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn from_edges<I>(directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        let mut graph = Graph::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_exists(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Removes `vertex` along with every edge pointing to it.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if !self.vertex_exists(vertex) {
            return;
        }

        for edges in self.adjacency.values_mut() {
            remove_adjacency(edges, vertex);
        }

        self.adjacency.remove(vertex);
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) -> Result<(), GraphError> {
        if !is_valid_weight(weight) {
            warn!(weight, "Rejected edge with invalid weight");
            return Err(GraphError::InvalidWeight(weight));
        }

        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if !self.directed {
            self.push_edge(&to, OutwardEdge::new(from.clone(), weight));
        }
        self.push_edge(&from, OutwardEdge::new(to, weight));

        Ok(())
    }

    fn push_edge(&mut self, from: &V, edge: OutwardEdge<V>) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(edge);
        }
    }

    /// Removes every `from -> to` edge, and every `to -> from` edge as well
    /// when the graph is undirected.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if !self.vertex_exists(from) || !self.vertex_exists(to) {
            return;
        }

        if let Some(edges) = self.adjacency.get_mut(from) {
            remove_adjacency(edges, to);
        }

        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(to) {
                remove_adjacency(edges, from);
            }
        }
    }

    pub fn vertex_cardinality(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outward edges of `vertex`, or an empty slice when the vertex is unknown.
    pub fn adjacency_list(&self, vertex: &V) -> &[OutwardEdge<V>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    pub fn vertices_iter(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}

fn remove_adjacency<V: PartialEq>(edges: &mut AdjacencyList<V>, target: &V) {
    edges.retain(|edge| edge.vertex() != target);
}
