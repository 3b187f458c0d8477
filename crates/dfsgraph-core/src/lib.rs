#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod file;
pub mod graph;

#[cfg(test)]
mod test_helpers;

pub use file::{DEFAULT_WEIGHT, EdgeRecord, FileError, GraphFile, parse_graph_file};
pub use graph::{
    AdjacencyListing, BuiltGraph, CycleDetector, DEFAULT_MAX_VERTICES, DfsTree, Graph,
    GraphError, MAX_VERTICES, Neighbor, Neighbors, QueryError, RejectedEdge, TraversalState,
    VertexId, VisitState, Weight, build_graph, build_graph_with_limit, depth_first_order,
    dfs_tree, find_cycle, has_cycle, path_length, reconstruct_path,
};

/// Returns the version of the dfsgraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
