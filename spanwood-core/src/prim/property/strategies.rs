//! Strategy builders for the MST property suites.
//!
//! Graphs come from [`GraphGenerator`] driven by a seeded [`SmallRng`], so
//! every fixture is reproducible from `(distribution, seed)` alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    Edge, Graph, GraphGenerator, WeightRange, max_edges, test_utils::max_test_vertices,
};

use super::types::{MstFixture, WeightDistribution};

/// Smallest vertex count the generator accepts.
const MIN_VERTICES: usize = 3;
/// Largest graph handed to the exhaustive oracle.
const EXHAUSTIVE_MAX_VERTICES: usize = 6;

/// Samples a distribution, biased towards heavy ties.
pub(super) fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Positive),
        2 => Just(WeightDistribution::Symmetric),
        3 => Just(WeightDistribution::FewDistinct),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates fixtures across every distribution up to the suite's vertex cap.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates fixtures small enough for exhaustive spanning-tree enumeration.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_bounded_fixture(distribution, &mut rng, EXHAUSTIVE_MAX_VERTICES)
    })
}

/// Generates a fixture for one distribution using the suite's vertex cap.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    generate_bounded_fixture(distribution, rng, max_test_vertices())
}

fn generate_bounded_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
    max_vertices: usize,
) -> MstFixture {
    let max_vertices = max_vertices.max(MIN_VERTICES);
    let graph = match distribution {
        WeightDistribution::Positive => connected(rng, max_vertices, WeightRange::POSITIVE),
        WeightDistribution::Symmetric => connected(rng, max_vertices, WeightRange::SYMMETRIC),
        WeightDistribution::FewDistinct => {
            let weights = WeightRange::new(1, 3).expect("range is non-empty");
            connected(rng, max_vertices, weights)
        }
        WeightDistribution::Disconnected => disconnected(rng, max_vertices),
    };
    let root = rng.gen_range(0..graph.vertex_count());
    MstFixture {
        graph,
        root,
        distribution,
    }
}

fn connected(rng: &mut SmallRng, max_vertices: usize, weights: WeightRange) -> Graph {
    let vertices = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edges = rng.gen_range(vertices..=max_edges(vertices));
    GraphGenerator::new(vertices, edges)
        .with_weight_range(weights)
        .generate(rng)
        .expect("sampled counts are feasible")
}

/// Two generated components laid side by side with no bridging edge.
fn disconnected(rng: &mut SmallRng, max_vertices: usize) -> Graph {
    let half = (max_vertices / 2).max(MIN_VERTICES);
    let left = connected(rng, half, WeightRange::SYMMETRIC);
    let right = connected(rng, half, WeightRange::SYMMETRIC);
    let offset = left.vertex_count();
    let edges = left
        .edges()
        .iter()
        .copied()
        .chain(right.edges().iter().map(|edge| {
            Edge::new(edge.source() + offset, edge.target() + offset, edge.weight())
        }))
        .collect();
    Graph::from_canonical_edges(offset + right.vertex_count(), edges)
}
