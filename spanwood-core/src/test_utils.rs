//! Shared test utilities for `spanwood-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::Graph;

/// Vertex cap used by property suites unless overridden from the environment.
const DEFAULT_MAX_VERTICES: usize = 24;

/// Builds a proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false, DEFAULT_MAX_VERTICES);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Largest graph the property suites should generate.
#[must_use]
pub(crate) fn max_test_vertices() -> usize {
    ProptestRunProfile::load(1, false, DEFAULT_MAX_VERTICES).max_vertices()
}

/// Four vertices whose MST from vertex 0 is `(0,2), (2,1), (1,3)` with total
/// weight 8.
#[must_use]
pub(crate) fn diamond_graph() -> Graph {
    Graph::from_edges(4, [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)])
        .expect("diamond edges are valid")
}

/// Two components, `{0, 1}` and `{2, 3}`.
#[must_use]
pub(crate) fn split_graph() -> Graph {
    Graph::from_edges(4, [(0, 1, 6), (2, 3, 1)]).expect("split edges are valid")
}
