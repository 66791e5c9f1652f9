//! Independent reference implementations for minimum spanning weights.

use crate::{Graph, VertexId, Weight};

/// Path-halving find over a parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Result of the Kruskal oracle restricted to one component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct ComponentTree {
    pub total_weight: Weight,
    pub edge_count: usize,
}

/// Runs sequential Kruskal over the whole graph and keeps the part of the
/// forest that lies in `root`'s component.
pub(super) fn kruskal_component(graph: &Graph, root: VertexId) -> ComponentTree {
    let mut order: Vec<_> = graph.edges().to_vec();
    order.sort_by_key(|edge| edge.weight());

    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut accepted = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    for edge in order {
        let a = find_root(&mut parent, edge.source());
        let b = find_root(&mut parent, edge.target());
        if a != b {
            parent[a] = b;
            accepted.push(edge);
        }
    }

    let component = find_root(&mut parent, root);
    accepted
        .into_iter()
        .filter(|edge| find_root(&mut parent, edge.source()) == component)
        .fold(
            ComponentTree {
                total_weight: 0,
                edge_count: 0,
            },
            |acc, edge| ComponentTree {
                total_weight: acc.total_weight + edge.weight(),
                edge_count: acc.edge_count + 1,
            },
        )
}

/// Enumerates every `n - 1` edge subset and returns the lightest one that
/// spans the graph, or `None` when the graph is disconnected.
///
/// Only suitable for a handful of vertices and at most 20 edges.
pub(super) fn exhaustive_minimum(graph: &Graph) -> Option<Weight> {
    let edges = graph.edges();
    let needed = graph.vertex_count().checked_sub(1)?;
    assert!(edges.len() <= 20, "exhaustive oracle is limited to 20 edges");

    let mut best: Option<Weight> = None;
    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        let mut total = 0;
        let mut acyclic = true;
        for (position, edge) in edges.iter().enumerate() {
            if mask & (1 << position) == 0 {
                continue;
            }
            let a = find_root(&mut parent, edge.source());
            let b = find_root(&mut parent, edge.target());
            if a == b {
                acyclic = false;
                break;
            }
            parent[a] = b;
            total += edge.weight();
        }
        if acyclic {
            best = Some(best.map_or(total, |current| current.min(total)));
        }
    }
    best
}
