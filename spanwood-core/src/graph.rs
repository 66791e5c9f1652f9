//! Undirected, integer-weighted graph model.
//!
//! Vertices are the contiguous ids `0..vertex_count`. Each undirected edge is
//! stored once in canonical form (`source < target`), in the order it was
//! supplied.

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};

/// Identifier of a vertex; valid ids are `0..vertex_count`.
pub type VertexId = usize;

/// Integer edge weight. Negative values are permitted.
pub type Weight = i64;

/// Largest edge weight accepted by [`Graph::from_edges`] and
/// [`crate::WeightRange::new`].
///
/// Weights are confined to `[MIN_WEIGHT, MAX_WEIGHT]` so that a path or tree
/// of up to 2³² edges always sums without overflowing [`Weight`].
pub const MAX_WEIGHT: Weight = (1 << 31) - 1;

/// Smallest edge weight accepted; the negation of [`MAX_WEIGHT`].
pub const MIN_WEIGHT: Weight = -MAX_WEIGHT;

/// Returns `true` when `weight` lies in `[MIN_WEIGHT, MAX_WEIGHT]`.
#[must_use]
pub const fn is_supported_weight(weight: Weight) -> bool {
    weight >= MIN_WEIGHT && weight <= MAX_WEIGHT
}

/// A single undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge, swapping the endpoints when needed so that
    /// `source <= target`.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::Edge;
    ///
    /// let edge = Edge::new(3, 1, 7);
    /// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 3, 7));
    /// ```
    #[must_use]
    pub fn new(left: VertexId, right: VertexId, weight: Weight) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }
}

/// A simple undirected graph over the vertices `0..vertex_count`.
///
/// [`Graph::from_edges`] guarantees there are no self-loops, no duplicate
/// pairs, and no out-of-range endpoints. Connectivity and the edge-count
/// bounds are only guaranteed for graphs produced by
/// [`crate::GraphGenerator`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not below
    /// `vertex_count`, [`GraphError::SelfLoop`] when `u == v`,
    /// [`GraphError::WeightOutOfRange`] when a weight lies outside
    /// `[MIN_WEIGHT, MAX_WEIGHT]`, and [`GraphError::DuplicateEdge`] when an
    /// unordered pair repeats.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 4), (2, 1, 2)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// assert!(graph.is_connected());
    /// # Ok::<(), spanwood_core::GraphError>(())
    /// ```
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let iter = edges.into_iter();
        let mut seen = HashSet::with_capacity(iter.size_hint().0);
        let mut stored = Vec::with_capacity(iter.size_hint().0);

        for (left, right, weight) in iter {
            for vertex in [left, right] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if left == right {
                return Err(GraphError::SelfLoop { vertex: left });
            }
            if !is_supported_weight(weight) {
                return Err(GraphError::WeightOutOfRange { weight });
            }
            let edge = Edge::new(left, right, weight);
            if !seen.insert((edge.source, edge.target)) {
                return Err(GraphError::DuplicateEdge {
                    left: edge.source,
                    right: edge.target,
                });
            }
            stored.push(edge);
        }

        Ok(Self {
            vertex_count,
            edges: stored,
        })
    }

    /// Wraps edges whose invariants the caller has already established.
    pub(crate) fn from_canonical_edges(vertex_count: usize, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges.iter().all(|edge| edge.source < edge.target
                && edge.target < vertex_count
                && is_supported_weight(edge.weight))
        );
        Self {
            vertex_count,
            edges,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns the weight of the edge `{u, v}` if present.
    #[must_use]
    pub fn weight_between(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        let probe = Edge::new(u, v, 0);
        self.edges
            .iter()
            .find(|edge| edge.source == probe.source && edge.target == probe.target)
            .map(Edge::weight)
    }

    /// Returns the number of vertices reachable from vertex `start`.
    ///
    /// Returns `0` when `start` is out of range.
    #[must_use]
    pub fn reachable_count(&self, start: VertexId) -> usize {
        if start >= self.vertex_count {
            return 0;
        }
        let mut neighbours = vec![Vec::new(); self.vertex_count];
        for edge in &self.edges {
            neighbours[edge.source].push(edge.target);
            neighbours[edge.target].push(edge.source);
        }

        let mut seen = vec![false; self.vertex_count];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut reached = 1;
        while let Some(vertex) = queue.pop_front() {
            for &next in &neighbours[vertex] {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached
    }

    /// Returns `true` when every vertex is reachable from vertex `0`.
    ///
    /// The empty graph is considered disconnected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && self.reachable_count(0) == self.vertex_count
    }
}
