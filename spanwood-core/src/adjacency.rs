//! Per-vertex neighbour lists derived from a graph's edge set.
//!
//! Every edge `{u, v, w}` appears twice: as `(v, w)` in `u`'s list and as
//! `(u, w)` in `v`'s list. Lists keep the order in which edges were read, so
//! traversals over the index are reproducible. The index is immutable once
//! built and can be shared across threads.

use crate::graph::{Edge, Graph, VertexId, Weight, is_supported_weight};

/// One entry of a vertex's neighbour list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbour {
    vertex: VertexId,
    weight: Weight,
}

impl Neighbour {
    /// Returns the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// Symmetric adjacency lists for the vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use spanwood_core::{AdjacencyIndex, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 2)])?;
/// let index = AdjacencyIndex::build(&graph);
/// let around_one: Vec<_> = index
///     .neighbours(1)
///     .unwrap_or_default()
///     .iter()
///     .map(|n| (n.vertex(), n.weight()))
///     .collect();
/// assert_eq!(around_one, vec![(0, 4), (2, 2)]);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyIndex {
    lists: Vec<Vec<Neighbour>>,
}

impl AdjacencyIndex {
    /// Indexes every edge of `graph`.
    #[must_use]
    pub fn build(graph: &Graph) -> Self {
        Self::from_edges(graph.vertex_count(), graph.edges())
    }

    /// Indexes `edges` over `vertex_count` vertices.
    ///
    /// Nothing is aggregated or deduplicated: an edge supplied twice is listed
    /// twice. Endpoints are expected to be below `vertex_count` and weights
    /// inside `[MIN_WEIGHT, MAX_WEIGHT]`; other edges are skipped with a
    /// warning.
    #[must_use]
    pub fn from_edges<'a, I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut lists = vec![Vec::new(); vertex_count];
        for edge in edges {
            let (source, target, weight) = (edge.source(), edge.target(), edge.weight());
            if source >= vertex_count || target >= vertex_count {
                tracing::warn!(source, target, vertex_count, "skipping out-of-range edge");
                continue;
            }
            if !is_supported_weight(weight) {
                tracing::warn!(source, target, weight, "skipping edge with unsupported weight");
                continue;
            }
            lists[source].push(Neighbour {
                vertex: target,
                weight,
            });
            lists[target].push(Neighbour {
                vertex: source,
                weight,
            });
        }
        Self { lists }
    }

    /// Returns the number of indexed vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` when the index has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the neighbours of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> Option<&[Neighbour]> {
        self.lists.get(vertex).map(Vec::as_slice)
    }

    /// Returns the number of neighbour entries of `vertex` (0 when out of
    /// range).
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbours(vertex).map_or(0, <[Neighbour]>::len)
    }

    /// Iterates over `(vertex, neighbours)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Neighbour])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(vertex, list)| (vertex, list.as_slice()))
    }

    /// Iterates over every directed entry `(u, v, w)`; each undirected edge
    /// contributes two.
    pub fn entries(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.iter().flat_map(|(vertex, list)| {
            list.iter()
                .map(move |neighbour| (vertex, neighbour.vertex, neighbour.weight))
        })
    }

    /// Returns `true` when every entry `(u, v, w)` is mirrored by an entry
    /// `(v, u, w)` with matching multiplicity.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.entries().all(|(u, v, weight)| {
            let forward = self.multiplicity(u, v, weight);
            let backward = self.multiplicity(v, u, weight);
            forward == backward
        })
    }

    fn multiplicity(&self, from: VertexId, to: VertexId, weight: Weight) -> usize {
        self.neighbours(from).map_or(0, |list| {
            list.iter()
                .filter(|entry| entry.vertex == to && entry.weight == weight)
                .count()
        })
    }
}
