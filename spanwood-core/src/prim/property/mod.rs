//! Property-based tests for Prim's minimum spanning tree builder.
//!
//! Checks the builder against two independent oracles (Kruskal on the root's
//! component, and exhaustive enumeration of spanning trees on small graphs)
//! and validates the structure of every tree it returns, across graphs with
//! positive, signed, heavily tied, and disconnected weight layouts.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
