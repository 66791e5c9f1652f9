//! Candidate-edge frontier for Prim's algorithm.
//!
//! Candidates are popped by ascending weight; equal weights come out in the
//! order they were pushed. A binary heap keyed by `(weight, sequence)` gives
//! the same selection as a linear scan for the earliest minimum.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::{
    adjacency::Neighbour,
    graph::{VertexId, Weight},
};

/// An edge leaving the grown tree, tagged with its insertion sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Candidate {
    pub(super) from: VertexId,
    pub(super) to: VertexId,
    pub(super) weight: Weight,
    sequence: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_sequence: u64,
}

impl Frontier {
    /// Pushes every neighbour of `from` that is not yet visited.
    pub(super) fn extend_from(
        &mut self,
        from: VertexId,
        neighbours: &[Neighbour],
        visited: &[bool],
    ) {
        for neighbour in neighbours {
            let to = neighbour.vertex();
            if visited.get(to).copied().unwrap_or(true) {
                continue;
            }
            self.push(from, to, neighbour.weight());
        }
    }

    pub(super) fn push(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Candidate {
            from,
            to,
            weight,
            sequence,
        }));
    }

    /// Removes and returns the lightest candidate, earliest first on ties.
    pub(super) fn pop_min(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    /// Total number of candidates ever pushed.
    pub(super) fn pushed(&self) -> u64 {
        self.next_sequence
    }
}
