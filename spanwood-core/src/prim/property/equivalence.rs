//! Oracle agreement: Prim's total weight matches Kruskal on the root's
//! component, and on small connected graphs matches the lightest of all
//! spanning trees.

use proptest::prop_assert_eq;
use proptest::test_runner::TestCaseResult;

use super::oracle::{exhaustive_minimum, kruskal_component};
use super::structural::build;
use super::types::MstFixture;

/// Compares the builder against the Kruskal oracle.
pub(super) fn run_kruskal_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = build(fixture)?;
    let expected = kruskal_component(&fixture.graph, fixture.root);

    prop_assert_eq!(
        tree.total_weight(),
        expected.total_weight,
        "distribution={:?} root={}",
        fixture.distribution,
        fixture.root
    );
    prop_assert_eq!(tree.edges().len(), expected.edge_count);
    Ok(())
}

/// Compares the builder against exhaustive enumeration. Disconnected
/// fixtures have no spanning tree and only need to agree with Kruskal.
pub(super) fn run_exhaustive_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    match exhaustive_minimum(&fixture.graph) {
        Some(minimum) => {
            let tree = build(fixture)?;
            prop_assert_eq!(tree.total_weight(), minimum);
            Ok(())
        }
        None => run_kruskal_equivalence_property(fixture),
    }
}
