//! Mysticum Permutation Equivalence
//!
//! The symmetric group S6 acting on the six labels of a hexagon, and the
//! combinatorial relations that decide how Pascal lines combine into the
//! higher-order objects of the Mysticum Hexagrammaticum.
//!
//! # Indexing
//!
//! Every object of the configuration is indexed by a permutation of a
//! fixed cycle shape, taken up to inversion:
//!
//! | Object        | Shape   | Canonical indices |
//! |---------------|---------|-------------------|
//! | Pascal line   | 6       | 60                |
//! | Kirkman point | 6       | 60                |
//! | Steiner point | 3+3     | 20                |
//! | Cayley line   | 3+3     | 20                |
//! | Plücker line  | 2+2+2   | 15                |
//!
//! # Backend
//!
//! Group-theoretic queries go through the narrow [`PermutationGroup`]
//! interface. [`SymmetricGroup`] is the bundled implementation: it lists the
//! 720 elements once and computes conjugacy classes by brute force.

mod error;
mod group;
mod permutation;
mod relations;

pub use error::{PermutationError, Result};
pub use group::{PermutationGroup, SymmetricGroup, SYMMETRIC_GROUP_ORDER};
pub use permutation::{CycleShape, Permutation, DEGREE};
pub use relations::{
    apply_cycle, conjugacy_class_up_to_inverses, cycle_edges, cycle_order, cycles_commuting_with,
    Edge, EquivalenceEngine,
};

/// Number of canonical 6-cycles (Pascal lines, Kirkman points).
pub const SIX_CYCLES: usize = 60;

/// Number of canonical 3+3 permutations (Steiner points, Cayley lines).
pub const DOUBLE_TRIPLES: usize = 20;

/// Number of 2+2+2 permutations (Plücker lines).
pub const TRIPLE_TRANSPOSITIONS: usize = 15;

// 6!/6 six-cycles, halved for inversion
const _: () = assert!(SYMMETRIC_GROUP_ORDER / 6 / 2 == SIX_CYCLES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_counts_match_engine() {
        let engine = EquivalenceEngine::symmetric();
        assert_eq!(engine.six_cycles().len(), SIX_CYCLES);
        assert_eq!(engine.double_triples().len(), DOUBLE_TRIPLES);
        assert_eq!(engine.triple_transpositions().len(), TRIPLE_TRANSPOSITIONS);
    }

    #[test]
    fn relations_chain_through_the_configuration() {
        // Every 3+3 element is the square of a 6-cycle, and every
        // 2+2+2 element commutes with some 3+3 element.
        let engine = EquivalenceEngine::symmetric();
        let squares: std::collections::BTreeSet<Permutation> = engine
            .six_cycles()
            .iter()
            .map(|h| (*h * *h).canonical())
            .collect();
        assert_eq!(squares.len(), DOUBLE_TRIPLES);

        for t in engine.triple_transpositions() {
            assert!(!engine.double_triples_commuting_with(t).unwrap().is_empty());
        }
    }
}
