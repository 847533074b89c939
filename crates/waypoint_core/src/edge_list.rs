use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EdgeListError;
use crate::graph::Graph;
use crate::weight::Weight;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EdgeRecord<V> {
    pub source: V,
    pub target: V,
    pub weight: Weight,
}

/// Plain `(source, target, weight)` triples describing a graph.
///
/// ```json
/// { "directed": true, "edges": [{ "source": "a", "target": "b", "weight": 1.5 }] }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EdgeList<V> {
    #[serde(default)]
    pub directed: bool,
    pub edges: Vec<EdgeRecord<V>>,
}

impl<V> EdgeList<V>
where
    V: Clone + Eq + Hash + for<'de> Deserialize<'de>,
{
    pub fn from_reader<R: Read>(reader: R) -> Result<EdgeList<V>, EdgeListError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EdgeList<V>, EdgeListError> {
        let file = File::open(path.as_ref())?;
        debug!("Reading edge list from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<V> EdgeList<V>
where
    V: Clone + Eq + Hash,
{
    pub fn into_graph(self) -> Result<Graph<V>, EdgeListError> {
        let mut graph = Graph::new(self.directed);

        for (index, edge) in self.edges.into_iter().enumerate() {
            graph
                .add_edge(edge.source, edge.target, edge.weight)
                .map_err(|source| EdgeListError::InvalidEdge { index, source })?;
        }

        debug!(
            vertices = graph.vertex_cardinality(),
            edges = graph.edge_count(),
            "Built graph from edge list"
        );

        Ok(graph)
    }
}

impl<V> From<&Graph<V>> for EdgeList<V>
where
    V: Clone + Eq + Hash,
{
    /// Undirected graphs are exported with both mirrored arcs, so the export
    /// is always written as a directed edge list.
    fn from(graph: &Graph<V>) -> Self {
        let edges = graph
            .vertices_iter()
            .flat_map(|source| {
                graph
                    .adjacency_list(source)
                    .iter()
                    .map(move |edge| EdgeRecord {
                        source: source.clone(),
                        target: edge.vertex().clone(),
                        weight: edge.weight(),
                    })
            })
            .collect();

        EdgeList {
            directed: true,
            edges,
        }
    }
}
