//! Depth-first traversal from a single start vertex: visit order, DFS tree,
//! and reachability-path reconstruction.
//!
//! All traversals here use an explicit frame stack instead of recursion.
//! Each frame holds the vertex being explored and its partially consumed
//! adjacency iterator, so the order in which vertices are entered is exactly
//! the order a recursive DFS would produce, but depth is limited by heap
//! rather than call-stack size.
//!
//! # Path Reconstruction
//!
//! The DFS records the tree parent of every vertex it enters.
//! [`reconstruct_path`] walks those parent links backwards from the target
//! until it reaches the start vertex. The path it returns is the DFS-tree
//! path, not necessarily a shortest one.
use crate::graph::state::TraversalState;
use crate::graph::{Graph, Neighbors, VertexId};


/// Errors returned by traversal queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A vertex argument is not part of the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    /// The target is not reachable from the start vertex in the DFS tree.
    #[error("no path from {from} to {to}")]
    PathNotFound {
        /// Start vertex of the requested path.
        from: VertexId,
        /// Target vertex of the requested path.
        to: VertexId,
    },
}

/// One level of the explicit DFS stack.
pub(crate) struct Frame<'g> {
    pub(crate) vertex: VertexId,
    pub(crate) edges: Neighbors<'g>,
}

impl<'g> Frame<'g> {
    pub(crate) fn new(graph: &'g Graph, vertex: VertexId) -> Self {
        Self {
            vertex,
            edges: graph.neighbors(vertex),
        }
    }
}

/// The outcome of a depth-first search rooted at one vertex.
///
/// Holds the [`TraversalState`] the search finished with, so the tree can be
/// queried for paths from the root to any reached vertex.
#[derive(Debug, Clone)]
pub struct DfsTree {
    root: VertexId,
    state: TraversalState,
    order: Vec<VertexId>,
}

impl DfsTree {
    /// The start vertex of the search.
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Vertices in the order they were first entered (pre-order).
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// The final traversal state. Every reached vertex is
    /// [`Finished`](crate::graph::VisitState::Finished).
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Returns `true` if `v` was reached from the root.
    pub fn reaches(&self, v: VertexId) -> bool {
        self.state.is_visited(v)
    }

    /// Returns the tree path from the root to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// - [`QueryError::VertexNotFound`] if `end` is not a vertex.
    /// - [`QueryError::PathNotFound`] if `end` was not reached.
    pub fn path_to(&self, end: VertexId) -> Result<Vec<VertexId>, QueryError> {
        reconstruct_path(&self.state, self.root, end)
    }
}

/// Runs a depth-first search from `start` and returns the resulting tree.
///
/// Neighbors are examined in adjacency order (most recently added edge
/// first); only vertices reachable from `start` are entered.
///
/// # Errors
///
/// [`QueryError::VertexNotFound`] if `start` is not a vertex.
pub fn dfs_tree(graph: &Graph, start: VertexId) -> Result<DfsTree, QueryError> {
    if !graph.contains_vertex(start) {
        return Err(QueryError::VertexNotFound(start));
    }
    tracing::debug!(start, vertices = graph.vertex_count(), "depth-first search");

    let mut state = TraversalState::new(graph.vertex_count());
    let mut order = vec![start];
    state.enter(start, None);

    let mut stack = vec![Frame::new(graph, start)];
    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        match frame.edges.next() {
            Some(next) => {
                if !state.is_visited(next.vertex) {
                    tracing::trace!(vertex = next.vertex, parent = vertex, "enter");
                    state.enter(next.vertex, Some(vertex));
                    order.push(next.vertex);
                    stack.push(Frame::new(graph, next.vertex));
                }
            }
            None => {
                state.finish(vertex);
                stack.pop();
            }
        }
    }

    Ok(DfsTree {
        root: start,
        state,
        order,
    })
}

/// Returns the vertices reachable from `start` in depth-first pre-order.
///
/// # Errors
///
/// [`QueryError::VertexNotFound`] if `start` is not a vertex.
pub fn depth_first_order(graph: &Graph, start: VertexId) -> Result<Vec<VertexId>, QueryError> {
    dfs_tree(graph, start).map(|tree| tree.order)
}

/// Rebuilds the path `start → … → end` from the parent links in `state`.
///
/// Walks from `end` towards the root until `start` is met. `start == end`
/// yields the single-vertex path.
///
/// # Errors
///
/// - [`QueryError::VertexNotFound`] if either vertex is outside the state.
/// - [`QueryError::PathNotFound`] if the parent chain of `end` ends before
///   reaching `start`, i.e. `end` is not a descendant of `start`.
pub fn reconstruct_path(
    state: &TraversalState,
    start: VertexId,
    end: VertexId,
) -> Result<Vec<VertexId>, QueryError> {
    for v in [start, end] {
        if v >= state.vertex_count() {
            return Err(QueryError::VertexNotFound(v));
        }
    }

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = state.parent(current).ok_or(QueryError::PathNotFound {
            from: start,
            to: end,
        })?;
        path.push(current);
    }
    path.reverse();

    Ok(path)
}

/// Number of edges in `path`.
pub fn path_length(path: &[VertexId]) -> usize {
    path.len().saturating_sub(1)
}
