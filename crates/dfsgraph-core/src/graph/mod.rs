/// Adjacency-list graph backed by `petgraph`, plus the depth-first algorithms
/// that run over it.
///
/// [`Graph`] wraps a [`StableDiGraph`] whose node indices are exactly the
/// vertex ids `0 .. vertex_count`. An undirected graph stores every edge as a
/// pair of mirrored directed edges inserted by the same [`Graph::add_edge`]
/// call, so traversal code never needs to know which kind of graph it walks.
///
/// # Adjacency Order
///
/// `petgraph` threads each vertex's outgoing edges through a singly linked
/// list with head insertion, so [`Graph::neighbors`] yields the most recently
/// added edge first. Every traversal in this crate examines edges in that
/// order, which makes the visit order (and the first cycle found) a pure
/// function of the insertion sequence.
///
/// # Algorithms
///
/// - [`traversal`]: plain DFS visit order, DFS trees and path reconstruction.
/// - [`cycles`]: [`CycleDetector`], the back-edge based cycle finder.
/// - [`state`]: [`TraversalState`], the per-run vertex state shared by both.
pub mod cycles;
pub mod listing;
pub mod state;
pub mod traversal;

pub use cycles::{CycleDetector, find_cycle, has_cycle};
pub use listing::AdjacencyListing;
pub use state::{TraversalState, VisitState};
pub use traversal::{
    DfsTree, QueryError, depth_first_order, dfs_tree, path_length, reconstruct_path,
};

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::file::GraphFile;

/// Vertex identifier: an index in `0 .. vertex_count`.
pub type VertexId = usize;

/// Edge weight. Carried through the graph but not interpreted by any
/// algorithm in this crate.
pub type Weight = i64;

/// Largest vertex count a [`Graph`] can hold.
///
/// `petgraph` reserves `u32::MAX` as its "no index" sentinel for the default
/// index type.
pub const MAX_VERTICES: usize = (u32::MAX - 1) as usize;

/// Vertex cap applied by [`build_graph`].
///
/// Vertices are allocated up front, so the declared count alone decides the
/// memory a graph file costs. Use [`build_graph_with_limit`] to raise or
/// lower it.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 24;

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    /// The vertex at the far end of the edge.
    pub vertex: VertexId,
    /// The weight the edge was inserted with.
    pub weight: Weight,
}

/// Errors raised while constructing or extending a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested vertex count is negative or exceeds the applicable
    /// limit.
    #[error("invalid vertex count {requested}: must be between 0 and {limit}")]
    InvalidSize {
        /// The rejected vertex count, exactly as requested.
        requested: i128,
        /// The vertex cap that was in force.
        limit: usize,
    },

    /// An edge endpoint lies outside `0 .. vertex_count`.
    ///
    /// Non-fatal: the graph is left unchanged and remains usable.
    #[error("edge {from} -> {to} is out of range for a graph with {vertex_count} vertices")]
    OutOfRangeEdge {
        /// Requested source vertex.
        from: i64,
        /// Requested target vertex.
        to: i64,
        /// Vertex count of the graph that rejected the edge.
        vertex_count: usize,
    },
}

/// A fixed-size directed or undirected multigraph with weighted edges.
///
/// Vertices are created up front by [`Graph::new`] or [`Graph::create`];
/// afterwards only edges change. Parallel edges and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct Graph {
    graph: StableDiGraph<(), Weight>,
    directed: bool,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidSize`] if `vertex_count` exceeds [`MAX_VERTICES`].
    pub fn new(vertex_count: usize, directed: bool) -> Result<Self, GraphError> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::InvalidSize {
                requested: vertex_count as i128,
                limit: MAX_VERTICES,
            });
        }

        let mut graph = StableDiGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }

        Ok(Self { graph, directed })
    }

    /// Creates a graph from a signed vertex count, as read from untyped input.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidSize`] if `vertex_count` is negative or exceeds
    /// [`MAX_VERTICES`].
    pub fn create(vertex_count: i64, directed: bool) -> Result<Self, GraphError> {
        let count = usize::try_from(vertex_count).map_err(|_| GraphError::InvalidSize {
            requested: i128::from(vertex_count),
            limit: MAX_VERTICES,
        })?;
        Self::new(count, directed)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.graph.edge_count()
        } else {
            self.graph.edge_count() / 2
        }
    }

    /// Returns `true` if edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` if `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.vertex_count()
    }

    /// Iterates all vertex ids in increasing order.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.vertex_count()
    }

    /// Inserts the edge `v1 → v2` with `weight`.
    ///
    /// The new edge is placed at the front of `v1`'s adjacency list. For an
    /// undirected graph the mirror `v2 → v1` is placed at the front of `v2`'s
    /// list in the same call. Duplicate edges are kept.
    ///
    /// # Errors
    ///
    /// [`GraphError::OutOfRangeEdge`] if either endpoint is not a vertex. No
    /// edge is inserted in that case and the graph stays valid.
    pub fn add_edge(&mut self, v1: i64, v2: i64, weight: Weight) -> Result<(), GraphError> {
        let (Some(from), Some(to)) = (self.vertex(v1), self.vertex(v2)) else {
            return Err(GraphError::OutOfRangeEdge {
                from: v1,
                to: v2,
                vertex_count: self.vertex_count(),
            });
        };

        self.graph
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        if !self.directed {
            self.graph
                .add_edge(NodeIndex::new(to), NodeIndex::new(from), weight);
        }
        Ok(())
    }

    /// Removes the most recently added edge `v1 → v2`, and its mirror when
    /// the graph is undirected.
    ///
    /// Returns `false` if no such edge exists.
    pub fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> bool {
        let Some(edge) = self.find_edge(v1, v2) else {
            return false;
        };
        let removed = self.graph.remove_edge(edge).is_some();

        if removed && !self.directed {
            if let Some(mirror) = self.find_edge(v2, v1) {
                self.graph.remove_edge(mirror);
            }
        }
        removed
    }

    /// Returns `true` if at least one edge `v1 → v2` exists.
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.find_edge(v1, v2).is_some()
    }

    /// Returns the weight of the most recently added edge `v1 → v2`.
    pub fn edge_weight(&self, v1: VertexId, v2: VertexId) -> Option<Weight> {
        self.neighbors(v1)
            .find(|n| n.vertex == v2)
            .map(|n| n.weight)
    }

    /// Iterates the adjacency list of `v`, most recently added edge first.
    ///
    /// Yields nothing if `v` is not a vertex.
    pub fn neighbors(&self, v: VertexId) -> Neighbors<'_> {
        let edges = self
            .contains_vertex(v)
            .then(|| self.graph.edges(NodeIndex::new(v)));
        Neighbors { edges }
    }

    /// Returns a [`Display`](std::fmt::Display) view listing every vertex's
    /// adjacency list.
    pub fn adjacency_listing(&self) -> AdjacencyListing<'_> {
        AdjacencyListing::new(self)
    }

    fn vertex(&self, v: i64) -> Option<VertexId> {
        usize::try_from(v).ok().filter(|&v| self.contains_vertex(v))
    }

    fn find_edge(&self, v1: VertexId, v2: VertexId) -> Option<EdgeIndex> {
        if !self.contains_vertex(v1) || !self.contains_vertex(v2) {
            return None;
        }
        self.graph
            .edges(NodeIndex::new(v1))
            .find(|e| e.target().index() == v2)
            .map(|e| e.id())
    }
}

/// Iterator over one vertex's adjacency list. See [`Graph::neighbors`].
pub struct Neighbors<'a> {
    edges: Option<petgraph::stable_graph::Edges<'a, Weight, petgraph::Directed>>,
}

impl Iterator for Neighbors<'_> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Neighbor> {
        let edge = self.edges.as_mut()?.next()?;
        Some(Neighbor {
            vertex: edge.target().index(),
            weight: *edge.weight(),
        })
    }
}

/// An edge from a [`GraphFile`] that [`build_graph`] could not insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEdge {
    /// Position of the edge in [`GraphFile::edges`].
    pub position: usize,
    /// Why it was rejected.
    pub error: GraphError,
}

/// Result of [`build_graph`]: the graph plus every edge that was skipped.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    /// The constructed graph.
    pub graph: Graph,
    /// Edges dropped because an endpoint was out of range, in file order.
    pub rejected: Vec<RejectedEdge>,
}

/// Constructs a [`Graph`] from a deserialized [`GraphFile`], capped at
/// [`DEFAULT_MAX_VERTICES`].
///
/// Edges are inserted in file order, so the last edge listed for a vertex is
/// the first one traversed. Out-of-range edges do not abort construction;
/// they are collected in [`BuiltGraph::rejected`].
///
/// # Errors
///
/// [`GraphError::InvalidSize`] if `vertex_count` is negative or above
/// [`DEFAULT_MAX_VERTICES`].
pub fn build_graph(file: &GraphFile) -> Result<BuiltGraph, GraphError> {
    build_graph_with_limit(file, DEFAULT_MAX_VERTICES)
}

/// [`build_graph`] with an explicit vertex cap.
///
/// The cap is checked before anything is allocated. It is clamped to
/// [`MAX_VERTICES`].
///
/// # Errors
///
/// [`GraphError::InvalidSize`] if `vertex_count` is negative or above
/// `max_vertices`.
pub fn build_graph_with_limit(
    file: &GraphFile,
    max_vertices: usize,
) -> Result<BuiltGraph, GraphError> {
    let limit = max_vertices.min(MAX_VERTICES);
    let within_limit = usize::try_from(file.vertex_count).is_ok_and(|n| n <= limit);
    if !within_limit {
        return Err(GraphError::InvalidSize {
            requested: i128::from(file.vertex_count),
            limit,
        });
    }

    let mut graph = Graph::create(file.vertex_count, file.directed)?;
    let mut rejected = Vec::new();

    for (position, edge) in file.edges.iter().enumerate() {
        if let Err(error) = graph.add_edge(edge.from, edge.to, edge.weight) {
            tracing::debug!(position, %error, "skipping edge");
            rejected.push(RejectedEdge { position, error });
        }
    }

    Ok(BuiltGraph { graph, rejected })
}
