//! Mysticum Hexagrammaticum
//!
//! Six points on a conic give sixty Pascal lines, and those lines meet and
//! align in a fixed combinatorial pattern. This crate computes that pattern
//! exactly for one hexagon.
//!
//! # Architecture
//!
//! - **mysticum-projective**: exact homogeneous points and lines, join/meet
//! - **mysticum-group**: S6 permutations and the relations that index objects
//! - **Mysticum**: memoized derivation of each object from lower-order ones
//!
//! # Usage
//!
//! ```ignore
//! let mysticum = Mysticum::new(hexagon);
//! let pascal = mysticum.pascal_line(&"(1,2,3,4,5,6)".parse()?)?;
//! let cayley = mysticum.cayley_lines()?; // 20 lines
//! ```

mod cache;
mod config;
mod error;
mod model;

pub use cache::{CacheStats, ObjectKind};
pub use config::MysticumConfig;
pub use error::{MysticumError, Result};
pub use model::Mysticum;

pub use mysticum_group::{
    CycleShape, EquivalenceEngine, Permutation, PermutationError, PermutationGroup, SymmetricGroup,
};
pub use mysticum_projective::{GeometryError, Hexagon, Line, Point};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_index_the_right_class_sizes() {
        let engine = EquivalenceEngine::symmetric();
        for kind in ObjectKind::ALL {
            let expected = match kind.shape() {
                s if s == CycleShape::six_cycle() => mysticum_group::SIX_CYCLES,
                s if s == CycleShape::double_triple() => mysticum_group::DOUBLE_TRIPLES,
                _ => mysticum_group::TRIPLE_TRANSPOSITIONS,
            };
            let rep = engine
                .group()
                .elements()
                .iter()
                .find(|g| g.shape() == kind.shape())
                .copied()
                .unwrap();
            assert_eq!(engine.conjugacy_class_up_to_inverses(&rep).len(), expected);
        }
    }
}
