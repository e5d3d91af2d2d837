//! Equivalence up to inversion and the hexagon relations.
//!
//! A 6-cycle `g` names a hexagon: start at label 1 and keep applying `g`.
//! Reading the same hexagon backwards gives `g⁻¹`, so every object built
//! from `g` is also built from `g⁻¹`. Classes are therefore reduced to one
//! representative per `{g, g⁻¹}` pair.
//!
//! # Relations
//!
//! ```text
//! cycles_disjoint(g)          6-cycles sharing no hexagon edge with g      (3 of them)
//! cycles_squaring_to(s)       6-cycles h with h² ∈ {s, s⁻¹}, s of shape 3+3 (3 of them)
//! cycles_commuting_with(C, t) elements of C commuting with t                (4 for 3+3 vs 2+2+2)
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::{CycleShape, Permutation, PermutationGroup, Result, SymmetricGroup, DEGREE};

/// An unordered pair of 1-based labels: one side of a hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge(u8, u8);

impl Edge {
    /// Create an edge; endpoint order does not matter.
    pub fn new(a: u8, b: u8) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Endpoints, smaller first.
    pub fn endpoints(&self) -> (u8, u8) {
        (self.0, self.1)
    }

    /// Whether `label` is an endpoint.
    pub fn touches(&self, label: u8) -> bool {
        self.0 == label || self.1 == label
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// One representative of each `{g, g⁻¹}` pair in the class of `g`.
///
/// The representative is the smaller of the two in the lexicographic image
/// order, so the result does not depend on enumeration order. Returned sorted.
pub fn conjugacy_class_up_to_inverses<G>(group: &G, g: &Permutation) -> Vec<Permutation>
where
    G: PermutationGroup + ?Sized,
{
    group
        .conjugacy_class(g)
        .into_iter()
        .filter(Permutation::is_canonical)
        .collect()
}

/// 0-based visiting order of the hexagon named by the 6-cycle `g`.
pub fn cycle_order(g: &Permutation) -> Result<[usize; DEGREE]> {
    g.expect_shape(&CycleShape::six_cycle())?;
    let mut order = [0usize; DEGREE];
    let mut i = 0;
    for slot in order.iter_mut() {
        *slot = i;
        i = g.map_index(i);
    }
    Ok(order)
}

/// The six sides of the hexagon named by the 6-cycle `g`.
///
/// Walks the orbit of label 1 and records each step `(x, g(x))` as an
/// unordered pair.
pub fn cycle_edges(g: &Permutation) -> Result<BTreeSet<Edge>> {
    let order = cycle_order(g)?;
    Ok((0..DEGREE)
        .map(|k| {
            let a = order[k] as u8 + 1;
            let b = order[(k + 1) % DEGREE] as u8 + 1;
            Edge::new(a, b)
        })
        .collect())
}

/// Reorder `items` by the orbit of label 1 under the 6-cycle `g`.
///
/// Position `k` of the result holds `items[g^k(1) - 1]`.
pub fn apply_cycle<T: Clone>(g: &Permutation, items: &[T; DEGREE]) -> Result<[T; DEGREE]> {
    let order = cycle_order(g)?;
    Ok(order.map(|i| items[i].clone()))
}

/// Elements of `class` commuting with `g`, restricted to canonical representatives.
///
/// Lazy: nothing is tested until the iterator is driven.
pub fn cycles_commuting_with<'a>(
    class: &'a [Permutation],
    g: &Permutation,
) -> impl Iterator<Item = Permutation> + 'a {
    let g = *g;
    class
        .iter()
        .filter(move |h| h.is_canonical() && h.commutes_with(&g))
        .copied()
}

/// The permutation-equivalence engine over a group backend.
///
/// Holds the canonical classes the Mysticum indexes by, computed once from
/// the backend at construction.
#[derive(Debug, Clone)]
pub struct EquivalenceEngine<G = SymmetricGroup> {
    group: G,
    six_cycles: Vec<Permutation>,
    double_triples: Vec<Permutation>,
    triple_transpositions: Vec<Permutation>,
}

impl EquivalenceEngine<SymmetricGroup> {
    /// Engine over the bundled S6 backend.
    pub fn symmetric() -> Self {
        Self::new(SymmetricGroup::new())
    }
}

impl Default for EquivalenceEngine<SymmetricGroup> {
    fn default() -> Self {
        Self::symmetric()
    }
}

impl<G: PermutationGroup> EquivalenceEngine<G> {
    /// Build the engine, enumerating the three indexing classes.
    pub fn new(group: G) -> Self {
        let six_cycles = conjugacy_class_up_to_inverses(&group, &Permutation::SIX_CYCLE);
        let double_triples = conjugacy_class_up_to_inverses(&group, &Permutation::DOUBLE_TRIPLE);
        let triple_transpositions =
            conjugacy_class_up_to_inverses(&group, &Permutation::TRIPLE_TRANSPOSITION);
        Self {
            group,
            six_cycles,
            double_triples,
            triple_transpositions,
        }
    }

    /// The group backend.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Canonical 6-cycles (60).
    pub fn six_cycles(&self) -> &[Permutation] {
        &self.six_cycles
    }

    /// Canonical permutations of shape 3+3 (20).
    pub fn double_triples(&self) -> &[Permutation] {
        &self.double_triples
    }

    /// Permutations of shape 2+2+2 (15, each its own inverse).
    pub fn triple_transpositions(&self) -> &[Permutation] {
        &self.triple_transpositions
    }

    /// Canonical representatives of the class of `g`.
    pub fn conjugacy_class_up_to_inverses(&self, g: &Permutation) -> Vec<Permutation> {
        conjugacy_class_up_to_inverses(&self.group, g)
    }

    /// Canonical 6-cycles whose hexagon shares no side with that of `g`.
    pub fn cycles_disjoint(&self, g: &Permutation) -> Result<Vec<Permutation>> {
        let edges = cycle_edges(g)?;
        let mut disjoint = Vec::new();
        for h in &self.six_cycles {
            if cycle_edges(h)?.is_disjoint(&edges) {
                disjoint.push(*h);
            }
        }
        Ok(disjoint)
    }

    /// Canonical 6-cycles `h` with `h² = s` or `h² = s⁻¹`, for `s` of shape 3+3.
    ///
    /// `{h, h⁻¹}` squares to `{s, s⁻¹}`, so both members of the pair are
    /// matched against both.
    pub fn cycles_squaring_to(&self, s: &Permutation) -> Result<Vec<Permutation>> {
        s.expect_shape(&CycleShape::double_triple())?;
        let s_inv = s.inverse();
        Ok(self
            .six_cycles
            .iter()
            .filter(|h| {
                let square = **h * **h;
                square == *s || square == s_inv
            })
            .copied()
            .collect())
    }

    /// Canonical 3+3 permutations commuting with the 2+2+2 permutation `t`.
    pub fn double_triples_commuting_with(&self, t: &Permutation) -> Result<Vec<Permutation>> {
        t.expect_shape(&CycleShape::triple_transposition())?;
        Ok(cycles_commuting_with(&self.double_triples, t).collect())
    }
}
