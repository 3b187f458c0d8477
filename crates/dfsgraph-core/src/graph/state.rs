/// Per-run depth-first traversal state.
///
/// A [`TraversalState`] is created fresh for every traversal and owned by
/// that traversal alone; nothing in this crate stores one on a [`Graph`] or
/// reuses one across runs.
///
/// Each vertex moves through [`VisitState::Unvisited`] →
/// [`VisitState::OnStack`] → [`VisitState::Finished`]. Because "visited" and
/// "on the recursion path" are two views of the same enum, a vertex can never
/// be on the stack without having been visited.
///
/// [`Graph`]: crate::graph::Graph
use crate::graph::VertexId;

/// Where a vertex is in the depth-first state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitState {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Its visit has started and not completed: it lies on the path from the
    /// current root to the vertex being explored.
    OnStack,
    /// Its visit completed without finding a cycle through it.
    Finished,
}

/// Visit state and DFS-tree parent of every vertex for one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    states: Vec<VisitState>,
    parents: Vec<Option<VertexId>>,
}

impl TraversalState {
    /// Creates a state with every vertex unvisited and parentless.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            states: vec![VisitState::Unvisited; vertex_count],
            parents: vec![None; vertex_count],
        }
    }

    /// Number of vertices tracked.
    pub fn vertex_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the state of `v`; vertices outside the graph read as unvisited.
    pub fn state(&self, v: VertexId) -> VisitState {
        self.states.get(v).copied().unwrap_or_default()
    }

    /// Returns `true` once the visit of `v` has started.
    pub fn is_visited(&self, v: VertexId) -> bool {
        self.state(v) != VisitState::Unvisited
    }

    /// Returns `true` while `v` lies on the active path.
    pub fn is_on_stack(&self, v: VertexId) -> bool {
        self.state(v) == VisitState::OnStack
    }

    /// Returns the DFS-tree parent of `v`, or `None` for roots and vertices
    /// that were never reached.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parents.get(v).copied().flatten()
    }

    /// Iterates the vertices whose visit has started, in index order.
    pub fn visited(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|&(_, s)| *s != VisitState::Unvisited)
            .map(|(v, _)| v)
    }

    /// Marks `v` as entered: `Unvisited → OnStack`, recording `parent`.
    pub(crate) fn enter(&mut self, v: VertexId, parent: Option<VertexId>) {
        if let (Some(state), Some(slot)) = (self.states.get_mut(v), self.parents.get_mut(v)) {
            *state = VisitState::OnStack;
            *slot = parent;
        }
    }

    /// Marks `v` as completed: `OnStack → Finished`.
    pub(crate) fn finish(&mut self, v: VertexId) {
        if let Some(state) = self.states.get_mut(v) {
            *state = VisitState::Finished;
        }
    }
}
