use thiserror::Error;

use crate::weight::Weight;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge weight must be non-negative and not NaN, got {0}")]
    InvalidWeight(Weight),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("Start vertex is not part of the graph")]
    InvalidStart,
    #[error("No path satisfies the goal")]
    NoPath,
}

#[derive(Error, Debug)]
pub enum EdgeListError {
    #[error("Failed to read edge list file")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse edge list")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid edge {index} in edge list")]
    InvalidEdge {
        index: usize,
        #[source]
        source: GraphError,
    },
}
