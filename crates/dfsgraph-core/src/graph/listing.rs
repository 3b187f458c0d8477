//! Plain-text adjacency-list dump of a [`Graph`].
use std::fmt;

use crate::graph::Graph;

/// Displays a graph as one line per vertex listing its neighbors in
/// adjacency order:
///
/// ```text
/// Adjacency lists:
/// 0: (2)(1)
/// 1: (3)(0)
/// ```
///
/// Created by [`Graph::adjacency_listing`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyListing<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyListing<'a> {
    pub(crate) fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl fmt::Display for AdjacencyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency lists:")?;
        for v in self.graph.vertices() {
            write!(f, "{v}: ")?;
            for n in self.graph.neighbors(v) {
                write!(f, "({})", n.vertex)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
