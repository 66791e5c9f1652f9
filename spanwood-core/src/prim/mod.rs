//! Minimum spanning tree construction with Prim's algorithm.
//!
//! The tree grows from a root vertex. At every step the lightest frontier
//! edge whose far endpoint is still unvisited joins the tree; ties go to the
//! edge that entered the frontier first. Frontier entries whose far endpoint
//! was reached in the meantime are discarded when popped.
//!
//! The [`AdjacencyIndex`] is only read, so several threads may build trees
//! from different roots over one shared index.
//!
//! When the graph is disconnected only the root's component is covered. The
//! result is then a spanning tree of that component, not of the graph; check
//! [`SpanningTree::is_spanning`] when full coverage matters.

mod frontier;

use tracing::{Span, debug, field, instrument};

use crate::{
    adjacency::AdjacencyIndex,
    error::{GraphError, Result},
    graph::{Graph, VertexId, Weight},
};

use self::frontier::Frontier;

/// A tree edge in the order Prim's algorithm fixed it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    parent: VertexId,
    child: VertexId,
    weight: Weight,
}

impl TreeEdge {
    /// Returns the endpoint that was already in the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> VertexId { self.parent }

    /// Returns the endpoint this edge attached to the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn child(&self) -> VertexId { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns `(parent, child)`.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.parent, self.child)
    }
}

/// Output of [`build_mst`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    root: VertexId,
    edges: Vec<TreeEdge>,
    total_weight: Weight,
    visited: Vec<bool>,
}

impl SpanningTree {
    /// Returns the root the tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> VertexId { self.root }

    /// Returns the tree edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of vertices in the underlying graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns the number of vertices the tree reached, root included.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// Returns `true` when `vertex` belongs to the tree.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Iterates over the vertices the tree reached, in id order.
    pub fn visited(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(vertex, &seen)| seen.then_some(vertex))
    }

    /// Returns `true` when the tree reaches every vertex of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.visited_count() == self.vertex_count()
    }
}

/// Builds a minimum spanning tree of `root`'s component with Prim's
/// algorithm.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when the index has no vertices and
/// [`GraphError::RootOutOfRange`] when `root` is not a vertex.
///
/// # Examples
/// ```
/// use spanwood_core::{AdjacencyIndex, Graph, build_mst};
///
/// let graph = Graph::from_edges(
///     4,
///     [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)],
/// )?;
/// let tree = build_mst(&AdjacencyIndex::build(&graph), 0)?;
/// let pairs: Vec<_> = tree.edges().iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(pairs, vec![(0, 2), (2, 1), (1, 3)]);
/// assert_eq!(tree.total_weight(), 8);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[instrument(
    name = "core.build_mst",
    err,
    skip(index),
    fields(vertices = index.vertex_count(), root = root, tree_edges = field::Empty),
)]
pub fn build_mst(index: &AdjacencyIndex, root: VertexId) -> Result<SpanningTree> {
    let vertex_count = index.vertex_count();
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    let Some(root_neighbours) = index.neighbours(root) else {
        return Err(GraphError::RootOutOfRange { root, vertex_count });
    };

    let mut visited = vec![false; vertex_count];
    visited[root] = true;
    let mut frontier = Frontier::default();
    frontier.extend_from(root, root_neighbours, &visited);

    let mut edges = Vec::with_capacity(vertex_count - 1);
    let mut total_weight: Weight = 0;
    let mut stale = 0_usize;

    while let Some(candidate) = frontier.pop_min() {
        if visited[candidate.to] {
            stale += 1;
            continue;
        }
        visited[candidate.to] = true;
        edges.push(TreeEdge {
            parent: candidate.from,
            child: candidate.to,
            weight: candidate.weight,
        });
        total_weight += candidate.weight;
        if let Some(next) = index.neighbours(candidate.to) {
            frontier.extend_from(candidate.to, next, &visited);
        }
    }

    let tree = SpanningTree {
        root,
        edges,
        total_weight,
        visited,
    };

    Span::current().record("tree_edges", tree.edges.len());
    if !tree.is_spanning() {
        debug!(
            reached = tree.visited_count(),
            vertices = vertex_count,
            "graph is disconnected; tree covers the root component only"
        );
    }
    debug!(
        total_weight = tree.total_weight,
        candidates = frontier.pushed(),
        stale_candidates = stale,
        "minimum spanning tree built"
    );
    Ok(tree)
}

/// Indexes `graph` and runs [`build_mst`] from `root`.
///
/// # Errors
/// Returns the errors described in [`build_mst`].
pub fn minimum_spanning_tree(graph: &Graph, root: VertexId) -> Result<SpanningTree> {
    build_mst(&AdjacencyIndex::build(graph), root)
}

#[cfg(test)]
mod property;
