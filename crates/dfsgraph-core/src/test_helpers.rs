//! Shared constructors for unit tests.
//!
//! Compiled only in test builds. Integration tests under
//! `crates/dfsgraph-core/tests/` keep their own helpers because they link
//! against the non-test library build.
#![allow(clippy::expect_used)]

use crate::graph::{Graph, VertexId, Weight};

fn build(vertex_count: usize, is_directed: bool, edges: &[(i64, i64, Weight)]) -> Graph {
    let mut g = Graph::new(vertex_count, is_directed).expect("valid vertex count");
    for &(from, to, weight) in edges {
        g.add_edge(from, to, weight).expect("edge endpoints in range");
    }
    g
}

/// Builds a directed graph, inserting `edges` in order.
pub fn directed(vertex_count: usize, edges: &[(i64, i64, Weight)]) -> Graph {
    build(vertex_count, true, edges)
}

/// Builds an undirected graph, inserting `edges` in order.
pub fn undirected(vertex_count: usize, edges: &[(i64, i64, Weight)]) -> Graph {
    build(vertex_count, false, edges)
}

/// Neighbor vertex ids of `v` in adjacency order.
pub fn neighbors_of(g: &Graph, v: VertexId) -> Vec<VertexId> {
    g.neighbors(v).map(|n| n.vertex).collect()
}

/// The five-vertex undirected graph used by the path and visit-order
/// examples: 0-1, 0-2, 1-3, 2-3, 3-4 with weights 1..=5.
pub fn diamond_with_tail() -> Graph {
    undirected(5, &[(0, 1, 1), (0, 2, 2), (1, 3, 3), (2, 3, 4), (3, 4, 5)])
}
