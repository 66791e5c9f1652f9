//! Fixture types for the MST property suites.

use crate::{Graph, VertexId};

/// How a fixture's graph and weights were produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Generator defaults: weights in `[1, 100]`.
    Positive,
    /// Weights in `[-100, 100]`.
    Symmetric,
    /// Weights drawn from a tiny range so most edges tie.
    FewDistinct,
    /// Two generated components with no edge between them.
    Disconnected,
}

/// A generated graph plus the root to grow the tree from.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub graph: Graph,
    pub root: VertexId,
    pub distribution: WeightDistribution,
}
