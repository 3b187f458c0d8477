/// Cycle detection by depth-first search with back-edge tracking.
///
/// # Algorithm Overview
///
/// [`CycleDetector::find_cycle`] tries every vertex in increasing index order
/// as a DFS root, skipping vertices an earlier root already reached, so
/// disconnected components are all covered. Each vertex moves
/// `Unvisited → OnStack → Finished` (see [`VisitState`]).
///
/// While a vertex is being explored its outgoing edges are examined in
/// adjacency order:
///
/// - an `Unvisited` neighbor is entered with the current vertex as parent;
/// - an `OnStack` neighbor closes a cycle (a back-edge to an ancestor on the
///   active path), which ends the whole search;
/// - a `Finished` neighbor is a cross or forward edge and is ignored.
///
/// The cycle is rebuilt by walking parent links from the vertex that owns the
/// back-edge up to the neighbor it points at. It is reported starting at that
/// neighbor (the closing vertex) and ending at the back-edge source; the edge
/// from the last vertex back to the first is implied.
///
/// # Undirected Graphs
///
/// An undirected edge is stored in both directions, so every non-root vertex
/// sees its tree parent as an on-stack neighbor. The detector skips exactly
/// one occurrence of the parent in each vertex's adjacency list. A second
/// parallel edge to the parent, or a self-loop, still counts as a cycle.
///
/// Only the first cycle found is reported. Which one that is depends on the
/// root order and on adjacency order (most recently added edge first).
use crate::graph::state::{TraversalState, VisitState};
use crate::graph::traversal::Frame;
use crate::graph::{Graph, VertexId};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Finds the first cycle of a [`Graph`].
///
/// A detector owns the [`TraversalState`] of exactly one search and is
/// consumed by it; every call to [`CycleDetector::find_cycle`] starts from a
/// fresh state.
#[derive(Debug)]
pub struct CycleDetector<'g> {
    graph: &'g Graph,
    state: TraversalState,
}

impl<'g> CycleDetector<'g> {
    /// Searches `graph` for a cycle.
    ///
    /// Returns `None` if the graph is acyclic. Otherwise returns the cycle's
    /// vertices from the closing vertex forward to the vertex whose edge
    /// closed it. Consecutive vertices are joined by an edge, and so are the
    /// last and the first.
    pub fn find_cycle(graph: &'g Graph) -> Option<Vec<VertexId>> {
        Self::new(graph).run()
    }

    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            state: TraversalState::new(graph.vertex_count()),
        }
    }

    fn run(mut self) -> Option<Vec<VertexId>> {
        tracing::debug!(
            vertices = self.graph.vertex_count(),
            directed = self.graph.is_directed(),
            "cycle search"
        );

        for root in self.graph.vertices() {
            if self.state.is_visited(root) {
                continue;
            }
            if let Some(cycle) = self.visit_from(root) {
                tracing::debug!(root, ?cycle, "cycle found");
                return Some(cycle);
            }
        }

        tracing::debug!("no cycle");
        None
    }

    /// Explores everything reachable from `root` that is still unvisited.
    fn visit_from(&mut self, root: VertexId) -> Option<Vec<VertexId>> {
        let graph = self.graph;
        tracing::trace!(root, "enter root");
        self.state.enter(root, None);

        let mut stack = vec![PathFrame::new(graph, root, None)];
        while let Some(top) = stack.last_mut() {
            let vertex = top.frame.vertex;
            let Some(next) = top.frame.edges.next() else {
                self.state.finish(vertex);
                stack.pop();
                continue;
            };

            if top.tree_edge == Some(next.vertex) {
                top.tree_edge = None;
                continue;
            }

            match self.state.state(next.vertex) {
                VisitState::Unvisited => {
                    tracing::trace!(vertex = next.vertex, parent = vertex, "enter");
                    self.state.enter(next.vertex, Some(vertex));
                    stack.push(PathFrame::new(graph, next.vertex, Some(vertex)));
                }
                VisitState::OnStack => {
                    return Some(self.reconstruct_cycle(vertex, next.vertex));
                }
                VisitState::Finished => {}
            }
        }

        None
    }

    /// Collects `from`, its parent, its grandparent, … up to `closing`, then
    /// reverses so the cycle starts at `closing`.
    fn reconstruct_cycle(&self, from: VertexId, closing: VertexId) -> Vec<VertexId> {
        let mut cycle = Vec::new();
        let mut current = from;
        while current != closing {
            cycle.push(current);
            match self.state.parent(current) {
                Some(parent) => current = parent,
                // `closing` is on the active path, so it is an ancestor of
                // `from` and the chain cannot end first.
                None => break,
            }
        }
        cycle.push(closing);
        cycle.reverse();
        cycle
    }
}

/// Returns the first cycle in `graph`, or `None` if it is acyclic.
///
/// Shorthand for [`CycleDetector::find_cycle`].
pub fn find_cycle(graph: &Graph) -> Option<Vec<VertexId>> {
    CycleDetector::find_cycle(graph)
}

/// Returns `true` if `graph` contains at least one cycle.
pub fn has_cycle(graph: &Graph) -> bool {
    find_cycle(graph).is_some()
}

// ---------------------------------------------------------------------------
// Internal: stack frame
// ---------------------------------------------------------------------------

/// A DFS frame plus, for undirected graphs, the parent vertex whose mirror
/// edge has not been skipped yet.
struct PathFrame<'g> {
    frame: Frame<'g>,
    tree_edge: Option<VertexId>,
}

impl<'g> PathFrame<'g> {
    fn new(graph: &'g Graph, vertex: VertexId, parent: Option<VertexId>) -> Self {
        Self {
            frame: Frame::new(graph, vertex),
            tree_edge: if graph.is_directed() { None } else { parent },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
