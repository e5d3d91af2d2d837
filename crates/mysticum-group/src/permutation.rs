//! Permutations of the six hexagon labels.
//!
//! A [`Permutation`] is a bijection of `{1, 2, 3, 4, 5, 6}` stored as its
//! image array. Composition reads right to left, as for functions:
//!
//! ```text
//! (a * b)(i) = a(b(i))
//! ```
//!
//! The derived ordering compares image sequences `(g(1), ..., g(6))`
//! lexicographically. That order is the tie-break for choosing one
//! representative of each `{g, g⁻¹}` pair (see [`Permutation::canonical`]).

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::{PermutationError, Result};

/// Number of labels permuted (the degree of S6).
pub const DEGREE: usize = 6;

/// Sorted lengths of the nontrivial cycles of a permutation.
///
/// Two permutations are conjugate in S6 iff their shapes are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleShape(Vec<usize>);

impl CycleShape {
    /// Shape from cycle lengths; fixed points (length 1) are dropped.
    pub fn new(lengths: &[usize]) -> Self {
        let mut lengths: Vec<usize> = lengths.iter().copied().filter(|&l| l > 1).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Self(lengths)
    }

    /// A single 6-cycle, e.g. `(1,2,3,4,5,6)`.
    pub fn six_cycle() -> Self {
        Self(vec![6])
    }

    /// Two disjoint 3-cycles, e.g. `(1,3,5)(2,4,6)`.
    pub fn double_triple() -> Self {
        Self(vec![3, 3])
    }

    /// Three disjoint transpositions, e.g. `(1,2)(3,4)(5,6)`.
    pub fn triple_transposition() -> Self {
        Self(vec![2, 2, 2])
    }

    /// Nontrivial cycle lengths, longest first.
    pub fn lengths(&self) -> &[usize] {
        &self.0
    }

    /// Whether this is the shape of the identity.
    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CycleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A bijection of the labels `1..=6`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Permutation([u8; DEGREE]);

/// 0-based index of a 1-based label.
fn label_index(label: u8) -> Result<usize> {
    if (1..=DEGREE as u8).contains(&label) {
        Ok(usize::from(label - 1))
    } else {
        Err(PermutationError::IndexOutOfRange { index: label })
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl Permutation {
    /// `(1,2,3,4,5,6)`, the natural hexagon.
    pub const SIX_CYCLE: Self = Self([1, 2, 3, 4, 5, 0]);

    /// `(1,2,3)(4,5,6)`.
    pub const DOUBLE_TRIPLE: Self = Self([1, 2, 0, 4, 5, 3]);

    /// `(1,2)(3,4)(5,6)`.
    pub const TRIPLE_TRANSPOSITION: Self = Self([1, 0, 3, 2, 5, 4]);

    /// The identity permutation.
    pub const fn identity() -> Self {
        Self([0, 1, 2, 3, 4, 5])
    }

    /// Wrap 0-based images the caller already knows to be a bijection.
    pub(crate) fn from_zero_based(images: [u8; DEGREE]) -> Self {
        debug_assert!(
            {
                let mut sorted = images;
                sorted.sort_unstable();
                sorted == Self::identity().0
            },
            "not a bijection: {:?}",
            images
        );
        Self(images)
    }

    /// Create from 1-based images: `images[i - 1] = g(i)`.
    pub fn from_images(images: [u8; DEGREE]) -> Result<Self> {
        let mut seen = [false; DEGREE];
        let mut zero_based = [0u8; DEGREE];
        for (slot, &image) in zero_based.iter_mut().zip(images.iter()) {
            let idx = label_index(image)?;
            if seen[idx] {
                return Err(PermutationError::RepeatedIndex { index: image });
            }
            seen[idx] = true;
            *slot = idx as u8;
        }
        Ok(Self(zero_based))
    }

    /// Create from disjoint cycles in 1-based labels.
    ///
    /// ```
    /// use mysticum_group::Permutation;
    ///
    /// let g = Permutation::from_cycles(&[&[1, 3, 5], &[2, 4, 6]]).unwrap();
    /// assert_eq!(g.apply(1), Some(3));
    /// assert_eq!(g.to_string(), "(1,3,5)(2,4,6)");
    /// ```
    pub fn from_cycles(cycles: &[&[u8]]) -> Result<Self> {
        let mut images = Self::identity().0;
        let mut seen = [false; DEGREE];
        for cycle in cycles {
            for &label in cycle.iter() {
                let idx = label_index(label)?;
                if seen[idx] {
                    return Err(PermutationError::RepeatedIndex { index: label });
                }
                seen[idx] = true;
            }
            for (k, &label) in cycle.iter().enumerate() {
                let next = cycle[(k + 1) % cycle.len()];
                images[usize::from(label - 1)] = next - 1;
            }
        }
        Ok(Self(images))
    }

    /// Image of a 1-based label, or `None` outside `1..=6`.
    pub fn apply(&self, label: u8) -> Option<u8> {
        label_index(label).ok().map(|i| self.0[i] + 1)
    }

    /// Image of a 0-based index.
    #[inline]
    pub(crate) fn map_index(&self, index: usize) -> usize {
        usize::from(self.0[index])
    }

    /// 1-based images `(g(1), ..., g(6))`.
    pub fn images(&self) -> [u8; DEGREE] {
        self.0.map(|i| i + 1)
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; DEGREE];
        for (i, &image) in self.0.iter().enumerate() {
            inv[usize::from(image)] = i as u8;
        }
        Self(inv)
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self(other.0.map(|i| self.0[usize::from(i)]))
    }

    /// `self` composed with itself `n` times.
    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::identity(), |acc, _| acc.compose(self))
    }

    /// Conjugate `h ∘ self ∘ h⁻¹`.
    pub fn conjugate_by(&self, h: &Self) -> Self {
        h.compose(self).compose(&h.inverse())
    }

    /// Whether `self ∘ other == other ∘ self`.
    pub fn commutes_with(&self, other: &Self) -> bool {
        self.compose(other) == other.compose(self)
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Nontrivial cycles in 1-based labels, each starting at its smallest label.
    pub fn cycles(&self) -> Vec<Vec<u8>> {
        let mut seen = [false; DEGREE];
        let mut cycles = Vec::new();
        for start in 0..DEGREE {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                cycle.push(i as u8 + 1);
                i = self.map_index(i);
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }

    /// The cycle shape (conjugacy class invariant).
    pub fn shape(&self) -> CycleShape {
        let lengths: Vec<usize> = self.cycles().iter().map(Vec::len).collect();
        CycleShape::new(&lengths)
    }

    /// Fail with [`PermutationError::Shape`] unless this has shape `expected`.
    pub fn expect_shape(&self, expected: &CycleShape) -> Result<()> {
        let actual = self.shape();
        if &actual == expected {
            Ok(())
        } else {
            Err(PermutationError::Shape {
                expected: expected.clone(),
                actual,
            })
        }
    }

    /// Multiplicative order: the lcm of the cycle lengths.
    pub fn order(&self) -> usize {
        self.shape()
            .lengths()
            .iter()
            .fold(1, |acc, &l| acc / gcd(acc, l) * l)
    }

    /// The orbit of `label` in visiting order: `label, g(label), g²(label), ...`.
    pub fn orbit(&self, label: u8) -> Result<Vec<u8>> {
        let start = label_index(label)?;
        let mut orbit = vec![label];
        let mut i = self.map_index(start);
        while i != start {
            orbit.push(i as u8 + 1);
            i = self.map_index(i);
        }
        Ok(orbit)
    }

    /// Whether this is the representative kept for the pair `{g, g⁻¹}`.
    pub fn is_canonical(&self) -> bool {
        *self <= self.inverse()
    }

    /// The smaller of `{g, g⁻¹}` in the lexicographic image order.
    pub fn canonical(&self) -> Self {
        (*self).min(self.inverse())
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Permutation {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.compose(&other)
    }
}

impl<'a> Mul<&'a Permutation> for &'a Permutation {
    type Output = Permutation;

    #[inline]
    fn mul(self, other: &'a Permutation) -> Permutation {
        self.compose(other)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (k, label) in cycle.iter().enumerate() {
                if k > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", label)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation{}", self)
    }
}

impl FromStr for Permutation {
    type Err = PermutationError;

    /// Parse cycle notation such as `(1,3,5)(2,4,6)`; `()` is the identity.
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() || compact == "()" {
            return Ok(Self::identity());
        }
        let parse_error = || PermutationError::Parse(s.to_string());
        let inner = compact
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(parse_error)?;

        let mut cycles: Vec<Vec<u8>> = Vec::new();
        for part in inner.split(")(") {
            let cycle = part
                .split(',')
                .map(|token| token.parse::<u8>().map_err(|_| parse_error()))
                .collect::<Result<Vec<u8>>>()?;
            cycles.push(cycle);
        }
        let cycles: Vec<&[u8]> = cycles.iter().map(Vec::as_slice).collect();
        Self::from_cycles(&cycles)
    }
}

impl From<Permutation> for String {
    fn from(g: Permutation) -> Self {
        g.to_string()
    }
}

impl TryFrom<String> for Permutation {
    type Error = PermutationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(s: &str) -> Permutation {
        s.parse().unwrap()
    }

    #[test]
    fn identity_has_no_cycles() {
        let id = Permutation::identity();
        assert!(id.is_identity());
        assert!(id.cycles().is_empty());
        assert!(id.shape().is_identity());
        assert_eq!(id.order(), 1);
        assert_eq!(id.to_string(), "()");
    }

    #[test]
    fn from_cycles_and_images_agree() {
        let by_cycles = Permutation::from_cycles(&[&[1, 2, 3, 4, 5, 6]]).unwrap();
        let by_images = Permutation::from_images([2, 3, 4, 5, 6, 1]).unwrap();
        assert_eq!(by_cycles, by_images);
        assert_eq!(by_cycles.images(), [2, 3, 4, 5, 6, 1]);
    }

    #[test]
    fn representatives_have_their_shapes() {
        assert_eq!(Permutation::SIX_CYCLE, perm("(1,2,3,4,5,6)"));
        assert_eq!(Permutation::DOUBLE_TRIPLE, perm("(1,2,3)(4,5,6)"));
        assert_eq!(Permutation::TRIPLE_TRANSPOSITION, perm("(1,2)(3,4)(5,6)"));

        assert_eq!(Permutation::SIX_CYCLE.shape(), CycleShape::six_cycle());
        assert_eq!(Permutation::DOUBLE_TRIPLE.shape(), CycleShape::double_triple());
        assert_eq!(
            Permutation::TRIPLE_TRANSPOSITION.shape(),
            CycleShape::triple_transposition()
        );
    }

    #[test]
    fn rejects_out_of_range_labels() {
        assert_eq!(
            Permutation::from_cycles(&[&[1, 7]]).unwrap_err(),
            PermutationError::IndexOutOfRange { index: 7 }
        );
        assert_eq!(
            Permutation::from_images([0, 1, 2, 3, 4, 5]).unwrap_err(),
            PermutationError::IndexOutOfRange { index: 0 }
        );
    }

    #[test]
    fn rejects_repeated_labels() {
        assert_eq!(
            Permutation::from_cycles(&[&[1, 2], &[2, 3]]).unwrap_err(),
            PermutationError::RepeatedIndex { index: 2 }
        );
        assert_eq!(
            Permutation::from_images([1, 1, 3, 4, 5, 6]).unwrap_err(),
            PermutationError::RepeatedIndex { index: 1 }
        );
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let a = perm("(1,2)");
        let b = perm("(2,3)");
        // (a ∘ b)(2) = a(3) = 3, (a ∘ b)(3) = a(2) = 1
        let ab = a * b;
        assert_eq!(ab.apply(2), Some(3));
        assert_eq!(ab.apply(3), Some(1));
        assert_eq!(ab, perm("(1,2,3)"));
        assert_eq!(&a * &b, ab);
    }

    #[test]
    fn inverse_undoes() {
        let g = perm("(1,4,2,6)(3,5)");
        assert!((g * g.inverse()).is_identity());
        assert!((g.inverse() * g).is_identity());
        assert_eq!(g.inverse().inverse(), g);
    }

    #[test]
    fn order_is_lcm_of_cycle_lengths() {
        assert_eq!(perm("(1,2,3,4,5,6)").order(), 6);
        assert_eq!(perm("(1,2,3)(4,5)").order(), 6);
        assert_eq!(perm("(1,2)(3,4)(5,6)").order(), 2);
        assert_eq!(perm("(1,2,3,4)(5,6)").order(), 4);
        let g = perm("(1,2,3)(4,5)");
        assert!(g.pow(6).is_identity());
        assert!(!g.pow(3).is_identity());
    }

    #[test]
    fn shape_ignores_fixed_points() {
        assert_eq!(perm("(1,3,5)(2,4,6)").shape(), CycleShape::double_triple());
        assert_eq!(perm("(1,2)(3,4)(5,6)").shape(), CycleShape::triple_transposition());
        assert_eq!(perm("(2,5)").shape(), CycleShape::new(&[2, 1, 1, 1, 1]));
        assert_eq!(CycleShape::six_cycle().to_string(), "[6]");
    }

    #[test]
    fn expect_shape_reports_mismatch() {
        let g = perm("(1,2,3)(4,5,6)");
        assert!(g.expect_shape(&CycleShape::double_triple()).is_ok());
        assert_eq!(
            g.expect_shape(&CycleShape::six_cycle()).unwrap_err(),
            PermutationError::Shape {
                expected: CycleShape::six_cycle(),
                actual: CycleShape::double_triple(),
            }
        );
    }

    #[test]
    fn orbit_walks_in_visiting_order() {
        let g = perm("(1,3,5,2,4,6)");
        assert_eq!(g.orbit(1).unwrap(), vec![1, 3, 5, 2, 4, 6]);
        assert_eq!(g.orbit(4).unwrap(), vec![4, 6, 1, 3, 5, 2]);
        assert_eq!(perm("(2,3)").orbit(1).unwrap(), vec![1]);
        assert!(g.orbit(9).is_err());
    }

    #[test]
    fn canonical_picks_lexicographically_smaller() {
        let g = perm("(1,2,3,4,5,6)");
        let inv = g.inverse();
        assert_eq!(inv, perm("(1,6,5,4,3,2)"));
        // images (2,3,4,5,6,1) < (6,1,2,3,4,5)
        assert!(g.is_canonical());
        assert!(!inv.is_canonical());
        assert_eq!(inv.canonical(), g);

        // Involutions are their own representative
        let t = perm("(1,2)(3,4)(5,6)");
        assert!(t.is_canonical());
        assert_eq!(t.canonical(), t);
    }

    #[test]
    fn display_and_parse() {
        for text in ["(1,2,3,4,5,6)", "(1,3,5)(2,4,6)", "(1,2)(3,4)(5,6)", "(2,6)", "()"] {
            assert_eq!(perm(text).to_string(), text);
        }
        assert_eq!(perm(" (1, 3, 5) (2, 4, 6) "), perm("(1,3,5)(2,4,6)"));
        assert_eq!(perm("(3,5,1)"), perm("(1,3,5)"));
        assert_eq!(format!("{:?}", perm("(1,2)")), "Permutation(1,2)");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("1,2,3".parse::<Permutation>(), Err(PermutationError::Parse(_))));
        assert!(matches!("(1,x)".parse::<Permutation>(), Err(PermutationError::Parse(_))));
        assert!(matches!("(1,2)(".parse::<Permutation>(), Err(PermutationError::Parse(_))));
        assert_eq!(
            "(1,2)(2,3)".parse::<Permutation>().unwrap_err(),
            PermutationError::RepeatedIndex { index: 2 }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_cycle_notation() {
        let g = perm("(1,3,5)(2,4,6)");
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#""(1,3,5)(2,4,6)""#);
        let back: Permutation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
