//! Random connected graph generation.
//!
//! A graph is built in two passes. The backbone pass walks the vertices
//! `0..n-1` and links each vertex `i` to a uniformly chosen later vertex
//! `j > i`, giving `n - 1` edges that connect every vertex to `n - 1`. The fill
//! pass then samples the remaining `m - (n - 1)` edges uniformly, without
//! replacement, from the pairs the backbone left unused.
//!
//! Randomness is always injected by the caller so that tests and the CLI can
//! reproduce a graph from a seed.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::index};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{Edge, Graph, VertexId, Weight, is_supported_weight},
};

/// Inclusive range edge weights are drawn from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightRange {
    low: Weight,
    high: Weight,
}

impl WeightRange {
    /// Positive weights in `[1, 100]`, the default.
    pub const POSITIVE: Self = Self { low: 1, high: 100 };

    /// Symmetric weights in `[-100, 100]`.
    ///
    /// Only meaningful for shortest paths; Prim's algorithm ignores the sign.
    pub const SYMMETRIC: Self = Self {
        low: -100,
        high: 100,
    };

    /// Creates an inclusive range.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyWeightRange`] when `low > high` and
    /// [`GraphError::WeightOutOfRange`] when a bound lies outside
    /// `[MIN_WEIGHT, MAX_WEIGHT]`.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::WeightRange;
    ///
    /// let range = WeightRange::new(-5, 5)?;
    /// assert_eq!((range.low(), range.high()), (-5, 5));
    /// assert!(WeightRange::new(3, 2).is_err());
    /// # Ok::<(), spanwood_core::GraphError>(())
    /// ```
    pub fn new(low: Weight, high: Weight) -> Result<Self> {
        if low > high {
            return Err(GraphError::EmptyWeightRange { low, high });
        }
        if let Some(weight) = [low, high]
            .into_iter()
            .find(|&bound| !is_supported_weight(bound))
        {
            return Err(GraphError::WeightOutOfRange { weight });
        }
        Ok(Self { low, high })
    }

    /// Selects [`Self::SYMMETRIC`] when negative weights are allowed and
    /// [`Self::POSITIVE`] otherwise.
    #[must_use]
    pub const fn for_sign(allow_negative_weights: bool) -> Self {
        if allow_negative_weights {
            Self::SYMMETRIC
        } else {
            Self::POSITIVE
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub fn low(&self) -> Weight { self.low }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub fn high(&self) -> Weight { self.high }

    /// Returns `true` when `weight` lies inside the range.
    #[must_use]
    pub fn contains(&self, weight: Weight) -> bool {
        (self.low..=self.high).contains(&weight)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        rng.gen_range(self.low..=self.high)
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::POSITIVE
    }
}

/// Configures and runs random graph generation.
///
/// # Examples
/// ```
/// use spanwood_core::GraphGenerator;
///
/// let graph = GraphGenerator::new(20, 37).generate_seeded(7)?;
/// assert_eq!(graph.vertex_count(), 20);
/// assert_eq!(graph.edge_count(), 37);
/// assert!(graph.is_connected());
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphGenerator {
    vertices: usize,
    edges: usize,
    weights: WeightRange,
}

impl GraphGenerator {
    /// Creates a generator for `vertices` vertices and `edges` edges with
    /// positive weights.
    #[must_use]
    pub const fn new(vertices: usize, edges: usize) -> Self {
        Self {
            vertices,
            edges,
            weights: WeightRange::POSITIVE,
        }
    }

    /// Switches between the positive and the symmetric weight range.
    #[must_use]
    pub const fn with_negative_weights(mut self, allow: bool) -> Self {
        self.weights = WeightRange::for_sign(allow);
        self
    }

    /// Overrides the weight range.
    #[must_use]
    pub const fn with_weight_range(mut self, weights: WeightRange) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> usize { self.vertices }

    /// Returns the configured edge count.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> usize { self.edges }

    /// Returns the configured weight range.
    #[must_use]
    #[rustfmt::skip]
    pub fn weights(&self) -> WeightRange { self.weights }

    /// Checks the feasibility constraint `n <= m <= n² / 2`.
    ///
    /// The upper bound is additionally capped at `n (n - 1) / 2`, the number
    /// of distinct pairs, because the graph must stay simple.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] for zero vertices,
    /// [`GraphError::EdgeCountTooSmall`] when `m < n`, and
    /// [`GraphError::EdgeCountTooLarge`] when `m` exceeds the cap.
    pub fn validate(&self) -> Result<()> {
        let (vertices, edges) = (self.vertices, self.edges);
        if vertices == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if edges < vertices {
            return Err(GraphError::EdgeCountTooSmall { vertices, edges });
        }
        let max = max_edges(vertices);
        if edges > max {
            return Err(GraphError::EdgeCountTooLarge {
                vertices,
                edges,
                max,
            });
        }
        Ok(())
    }

    /// Generates a graph drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Returns the errors described in [`Self::validate`].
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(
            vertices = self.vertices,
            edges = self.edges,
            weight_low = self.weights.low,
            weight_high = self.weights.high,
        ),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        self.validate()?;

        let mut edges = Vec::with_capacity(self.edges);
        let backbone = self.build_backbone(rng, &mut edges);
        let extra = self.edges - backbone.len();
        self.fill_remaining(rng, &backbone, extra, &mut edges);

        debug!(
            backbone_edges = backbone.len(),
            extra_edges = extra,
            "graph generated"
        );
        Ok(Graph::from_canonical_edges(self.vertices, edges))
    }

    /// Generates a graph from a [`SmallRng`] seeded with `seed`.
    ///
    /// # Errors
    /// Returns the errors described in [`Self::validate`].
    pub fn generate_seeded(&self, seed: u64) -> Result<Graph> {
        self.generate(&mut SmallRng::seed_from_u64(seed))
    }

    fn build_backbone<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        edges: &mut Vec<Edge>,
    ) -> HashSet<(VertexId, VertexId)> {
        let last = self.vertices - 1;
        let mut used = HashSet::with_capacity(last);
        for source in 0..last {
            let target = rng.gen_range(source + 1..=last);
            edges.push(Edge::new(source, target, self.weights.sample(rng)));
            used.insert((source, target));
        }
        used
    }

    fn fill_remaining<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        used: &HashSet<(VertexId, VertexId)>,
        extra: usize,
        edges: &mut Vec<Edge>,
    ) {
        let candidates: Vec<(VertexId, VertexId)> = (0..self.vertices)
            .flat_map(|source| ((source + 1)..self.vertices).map(move |target| (source, target)))
            .filter(|pair| !used.contains(pair))
            .collect();

        for position in index::sample(rng, candidates.len(), extra) {
            let (source, target) = candidates[position];
            edges.push(Edge::new(source, target, self.weights.sample(rng)));
        }
    }
}

/// Largest edge count [`GraphGenerator`] accepts for `vertices` vertices.
///
/// # Examples
/// ```
/// use spanwood_core::max_edges;
///
/// assert_eq!(max_edges(4), 6);
/// assert_eq!(max_edges(20), 190);
/// ```
#[must_use]
pub fn max_edges(vertices: usize) -> usize {
    let pairs = vertices.saturating_mul(vertices.saturating_sub(1)) / 2;
    let half_square = vertices.saturating_mul(vertices) / 2;
    pairs.min(half_square)
}

/// Generates a random connected graph with `vertices` vertices and `edges`
/// edges.
///
/// Weights come from `[1, 100]`, or from `[-100, 100]` when
/// `allow_negative_weights` is set.
///
/// # Errors
/// Returns the errors described in [`GraphGenerator::validate`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spanwood_core::generate;
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let graph = generate(6, 9, false, &mut rng)?;
/// assert_eq!(graph.edge_count(), 9);
/// assert!(generate(6, 5, false, &mut rng).is_err());
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
pub fn generate<R: Rng + ?Sized>(
    vertices: usize,
    edges: usize,
    allow_negative_weights: bool,
    rng: &mut R,
) -> Result<Graph> {
    GraphGenerator::new(vertices, edges)
        .with_negative_weights(allow_negative_weights)
        .generate(rng)
}
