//! All-pairs shortest paths, computed by `petgraph`.
//!
//! The graph is copied into a [`petgraph::graph::UnGraph`] and handed to
//! [`petgraph::algo::floyd_warshall`]. Every edge is traversable in both
//! directions, so a single negative edge already forms a negative cycle and
//! is reported as [`GraphError::NegativeCycle`].

use petgraph::{
    algo::floyd_warshall,
    graph::{NodeIndex, UnGraph},
};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, VertexId, Weight},
};

/// Dense table of shortest distances between every ordered vertex pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    distances: Vec<Option<Weight>>,
}

impl DistanceMatrix {
    /// Returns the number of vertices covered by the table.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the shortest distance from `u` to `v`.
    ///
    /// `None` when `v` is unreachable from `u` or either vertex is out of
    /// range.
    #[must_use]
    pub fn distance(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        if u >= self.vertex_count || v >= self.vertex_count {
            return None;
        }
        self.distances[u * self.vertex_count + v]
    }

    /// Iterates over the rows of the table in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> + '_ {
        self.distances.chunks(self.vertex_count.max(1))
    }
}

fn to_petgraph(graph: &Graph) -> UnGraph<(), Weight> {
    let mut converted = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        converted.add_node(());
    }
    for edge in graph.edges() {
        converted.add_edge(
            NodeIndex::new(edge.source()),
            NodeIndex::new(edge.target()),
            edge.weight(),
        );
    }
    converted
}

/// Computes shortest distances between every pair of vertices in `graph`.
///
/// # Errors
/// Returns [`GraphError::NegativeCycle`] when a cycle of negative total
/// weight exists, which for an undirected graph means any negative edge.
///
/// # Examples
/// ```
/// use spanwood_core::{Graph, all_pairs_shortest_paths};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 7)])?;
/// let table = all_pairs_shortest_paths(&graph)?;
/// assert_eq!(table.distance(0, 2), Some(6));
/// assert_eq!(table.distance(2, 2), Some(0));
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[instrument(
    name = "core.shortest_paths",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn all_pairs_shortest_paths(graph: &Graph) -> Result<DistanceMatrix> {
    let converted = to_petgraph(graph);
    let table = floyd_warshall(&converted, |edge| *edge.weight())
        .map_err(|_| GraphError::NegativeCycle)?;

    let vertex_count = graph.vertex_count();
    let mut distances = vec![None; vertex_count * vertex_count];
    for ((from, to), distance) in table {
        // Unreachable pairs keep the library's saturated sentinel; bounded
        // weights keep every real path sum below it.
        if distance != Weight::MAX {
            distances[from.index() * vertex_count + to.index()] = Some(distance);
        }
    }
    let reachable = distances.iter().filter(|entry| entry.is_some()).count();
    debug!(reachable_pairs = reachable, "shortest paths computed");

    Ok(DistanceMatrix {
        vertex_count,
        distances,
    })
}
