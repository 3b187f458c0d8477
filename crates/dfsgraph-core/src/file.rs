/// Serde model of a graph file.
///
/// A graph file is a JSON object naming the vertex count, the directedness,
/// and the edges in insertion order:
///
/// ```json
/// {
///   "vertex_count": 5,
///   "directed": true,
///   "edges": [
///     { "from": 0, "to": 1, "weight": 1 },
///     { "from": 1, "to": 2 }
///   ]
/// }
/// ```
///
/// `directed` defaults to `false`, `edges` to an empty list and `weight` to
/// [`DEFAULT_WEIGHT`]. Endpoints and the vertex count are signed so that
/// negative values survive parsing and are rejected by
/// [`build_graph`](crate::graph::build_graph) with a precise error instead
/// of a generic deserialization failure.
use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// Weight given to edges whose `weight` field is omitted.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Errors produced while decoding a graph file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The input is not valid JSON or does not match the graph file shape.
    #[error("invalid graph file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level graph file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Number of vertices; vertex ids are `0 .. vertex_count`.
    pub vertex_count: i64,
    /// Whether edges are one-way.
    #[serde(default)]
    pub directed: bool,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One edge entry of a [`GraphFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    /// Source vertex.
    pub from: i64,
    /// Target vertex.
    pub to: i64,
    /// Edge weight.
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

impl EdgeRecord {
    /// Builds an edge record.
    pub fn new(from: i64, to: i64, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// Parses a graph file from JSON text.
///
/// # Errors
///
/// [`FileError::Json`] if the text is not a well-formed graph file.
pub fn parse_graph_file(content: &str) -> Result<GraphFile, FileError> {
    Ok(serde_json::from_str(content)?)
}
