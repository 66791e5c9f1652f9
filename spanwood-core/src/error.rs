//! Error types for the spanwood core library.
//!
//! Every failure is detected eagerly at the start of the offending operation.
//! Nothing is retried: given fixed inputs and a fixed seed the computation is
//! deterministic, so a failure would simply repeat.

use std::fmt;

use thiserror::Error;

use crate::graph::{MAX_WEIGHT, MIN_WEIGHT, VertexId, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller supplied counts, ids, or ranges the operation cannot accept.
    InvalidArgument,
    /// The graph contains a cycle of negative total weight.
    NegativeCycle,
}

/// Error produced by graph construction, generation, and traversal.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The operation needs at least one vertex.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// Fewer edges were requested than vertices.
    #[error("edge count {edges} is below the vertex count {vertices}")]
    EdgeCountTooSmall {
        /// Requested number of vertices.
        vertices: usize,
        /// Requested number of edges.
        edges: usize,
    },
    /// More edges were requested than a simple graph on `vertices` vertices
    /// can hold (never more than `vertices² / 2`).
    #[error("edge count {edges} exceeds the maximum of {max} for {vertices} vertices")]
    EdgeCountTooLarge {
        /// Requested number of vertices.
        vertices: usize,
        /// Requested number of edges.
        edges: usize,
        /// Largest edge count accepted for `vertices`.
        max: usize,
    },
    /// The weight range contains no values.
    #[error("weight range [{low}, {high}] is empty")]
    EmptyWeightRange {
        /// Inclusive lower bound.
        low: Weight,
        /// Inclusive upper bound.
        high: Weight,
    },
    /// An edge weight lies outside `[MIN_WEIGHT, MAX_WEIGHT]`.
    #[error("weight {weight} is outside [{min}, {max}]", min = MIN_WEIGHT, max = MAX_WEIGHT)]
    WeightOutOfRange {
        /// Offending weight or range bound.
        weight: Weight,
    },
    /// The MST root is not a vertex of the graph.
    #[error("root {root} is out of range for {vertex_count} vertices")]
    RootOutOfRange {
        /// Requested root.
        root: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge endpoint is not a vertex of the graph.
    #[error("edge endpoint {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending endpoint.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The looping vertex.
        vertex: VertexId,
    },
    /// The same unordered pair appears more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint.
        left: VertexId,
        /// Larger endpoint.
        right: VertexId,
    },
    /// Shortest paths are undefined because a negative cycle exists.
    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The operation needs at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Fewer edges were requested than vertices.
        EdgeCountTooSmall => EdgeCountTooSmall { .. } => "GRAPH_EDGE_COUNT_TOO_SMALL",
        /// More edges were requested than a simple graph can hold.
        EdgeCountTooLarge => EdgeCountTooLarge { .. } => "GRAPH_EDGE_COUNT_TOO_LARGE",
        /// The weight range contains no values.
        EmptyWeightRange => EmptyWeightRange { .. } => "GRAPH_EMPTY_WEIGHT_RANGE",
        /// A weight exceeds the supported magnitude.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
        /// The MST root is not a vertex of the graph.
        RootOutOfRange => RootOutOfRange { .. } => "GRAPH_ROOT_OUT_OF_RANGE",
        /// An edge endpoint is not a vertex of the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge connects a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The same unordered pair appears more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// Shortest paths are undefined because a negative cycle exists.
        NegativeCycle => NegativeCycle => "GRAPH_NEGATIVE_CYCLE",
    }
}

impl GraphError {
    /// Classifies the error.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::{ErrorKind, GraphError};
    ///
    /// let err = GraphError::RootOutOfRange { root: 9, vertex_count: 4 };
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(GraphError::NegativeCycle.kind(), ErrorKind::NegativeCycle);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeCycle => ErrorKind::NegativeCycle,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
