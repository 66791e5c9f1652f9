//! Structural checks on every tree the builder returns.
//!
//! - The tree reaches exactly the root's component.
//! - It has one edge fewer than the vertices it reaches.
//! - Each edge hangs a fresh child off an already-reached parent.
//! - Each edge exists in the graph with the recorded weight.
//! - The reported total equals the sum of the edge weights.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningTree, Weight, minimum_spanning_tree};

use super::types::MstFixture;

/// Runs the structural property for `fixture`.
pub(super) fn run_structural_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = build(fixture)?;
    let graph = &fixture.graph;

    let reachable = graph.reachable_count(fixture.root);
    if tree.visited_count() != reachable || tree.edges().len() + 1 != reachable {
        return Err(TestCaseError::fail(format!(
            "tree reached {} vertices with {} edges, component has {reachable} ({:?})",
            tree.visited_count(),
            tree.edges().len(),
            fixture.distribution,
        )));
    }
    if tree.is_spanning() != graph.is_connected() {
        return Err(TestCaseError::fail(format!(
            "is_spanning={} but is_connected={}",
            tree.is_spanning(),
            graph.is_connected(),
        )));
    }

    let mut reached = HashSet::from([fixture.root]);
    for (position, edge) in tree.edges().iter().enumerate() {
        if !reached.contains(&edge.parent()) {
            return Err(TestCaseError::fail(format!(
                "edge {position} ({}, {}) grows from an unreached parent",
                edge.parent(),
                edge.child(),
            )));
        }
        if !reached.insert(edge.child()) {
            return Err(TestCaseError::fail(format!(
                "edge {position} revisits vertex {}",
                edge.child()
            )));
        }
        if graph.weight_between(edge.parent(), edge.child()) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "edge {position} ({}, {}, {}) is not a graph edge",
                edge.parent(),
                edge.child(),
                edge.weight(),
            )));
        }
    }

    let summed: Weight = tree.edges().iter().map(|edge| edge.weight()).sum();
    if summed != tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total {} differs from summed edges {summed}",
            tree.total_weight()
        )));
    }
    if reached.len() != tree.visited().count() || !reached.iter().all(|&v| tree.contains(v)) {
        return Err(TestCaseError::fail("visited set disagrees with tree edges"));
    }
    Ok(())
}

pub(super) fn build(fixture: &MstFixture) -> Result<SpanningTree, TestCaseError> {
    minimum_spanning_tree(&fixture.graph, fixture.root).map_err(|err| {
        TestCaseError::fail(format!(
            "minimum_spanning_tree failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.graph.vertex_count(),
            fixture.graph.edge_count(),
        ))
    })
}
