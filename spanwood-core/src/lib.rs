//! Random weighted graph generation and minimum spanning trees.
//!
//! [`GraphGenerator`] produces connected simple graphs, [`AdjacencyIndex`]
//! turns an edge set into per-vertex neighbour lists, and [`build_mst`] grows
//! a minimum spanning tree from a root with Prim's algorithm. All-pairs
//! shortest paths are delegated to `petgraph` behind the `shortest-paths`
//! feature.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod error;
mod generator;
mod graph;
mod prim;
#[cfg(feature = "shortest-paths")]
mod shortest_path;
#[cfg(test)]
mod test_utils;

#[cfg(feature = "shortest-paths")]
#[cfg_attr(docsrs, doc(cfg(feature = "shortest-paths")))]
pub use crate::shortest_path::{DistanceMatrix, all_pairs_shortest_paths};
pub use crate::{
    adjacency::{AdjacencyIndex, Neighbour},
    error::{ErrorKind, GraphError, GraphErrorCode, Result},
    generator::{GraphGenerator, WeightRange, generate, max_edges},
    graph::{Edge, Graph, MAX_WEIGHT, MIN_WEIGHT, VertexId, Weight, is_supported_weight},
    prim::{SpanningTree, TreeEdge, build_mst, minimum_spanning_tree},
};
