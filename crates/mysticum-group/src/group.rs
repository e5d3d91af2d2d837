//! The finite permutation group backend.
//!
//! The Mysticum only ever asks a group for two things: its elements and the
//! conjugacy class of an element. [`PermutationGroup`] is that narrow
//! interface; [`SymmetricGroup`] implements it for S6 by enumerating all 720
//! elements once and conjugating by brute force.

use crate::{Permutation, DEGREE};

/// Order of S6 (6!).
pub const SYMMETRIC_GROUP_ORDER: usize = 720;

/// A finite group of permutations of the six labels.
pub trait PermutationGroup {
    /// Every element, in ascending [`Permutation`] order.
    fn elements(&self) -> &[Permutation];

    /// Number of elements.
    fn order(&self) -> usize {
        self.elements().len()
    }

    /// `{ h g h⁻¹ : h in G }`, sorted and without duplicates.
    fn conjugacy_class(&self, g: &Permutation) -> Vec<Permutation> {
        let mut class: Vec<Permutation> = self.elements().iter().map(|h| g.conjugate_by(h)).collect();
        class.sort_unstable();
        class.dedup();
        class
    }

    /// Whether `g` is an element of this group.
    fn contains(&self, g: &Permutation) -> bool {
        self.elements().binary_search(g).is_ok()
    }
}

/// The full symmetric group on six labels.
#[derive(Debug, Clone)]
pub struct SymmetricGroup {
    elements: Vec<Permutation>,
}

impl SymmetricGroup {
    /// Enumerate S6 in lexicographic image order.
    pub fn new() -> Self {
        let mut images: [u8; DEGREE] = [0, 1, 2, 3, 4, 5];
        let mut elements = Vec::with_capacity(SYMMETRIC_GROUP_ORDER);
        loop {
            elements.push(Permutation::from_zero_based(images));
            if !next_permutation(&mut images) {
                break;
            }
        }
        Self { elements }
    }
}

impl Default for SymmetricGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl PermutationGroup for SymmetricGroup {
    fn elements(&self) -> &[Permutation] {
        &self.elements
    }
}

/// Advance `items` to the next lexicographic arrangement.
///
/// Returns `false` (leaving `items` unchanged) at the last arrangement.
fn next_permutation(items: &mut [u8]) -> bool {
    let Some(pivot) = (1..items.len()).rev().find(|&i| items[i - 1] < items[i]) else {
        return false;
    };
    let pivot = pivot - 1;
    let Some(successor) = (pivot + 1..items.len()).rev().find(|&j| items[j] > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
