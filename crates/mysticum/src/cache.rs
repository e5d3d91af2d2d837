//! Memo tables keyed by object kind and canonical permutation.

use std::collections::HashMap;
use std::fmt;

use mysticum_group::{CycleShape, Permutation};
use mysticum_projective::{Line, Point};

/// The five families of objects in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjectKind {
    /// Line through the meeting points of opposite sides of a hexagon.
    PascalLine,
    /// Common point of three Pascal lines.
    KirkmanNode,
    /// Common point of three Pascal lines of hexagons squaring to one 3+3 element.
    SteinerNode,
    /// Line through three Kirkman nodes.
    CayleyLine,
    /// Line through four Steiner nodes.
    PlueckerLine,
}

impl ObjectKind {
    /// Every kind, from lowest to highest order.
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::PascalLine,
        ObjectKind::KirkmanNode,
        ObjectKind::SteinerNode,
        ObjectKind::CayleyLine,
        ObjectKind::PlueckerLine,
    ];

    /// Cycle shape of the permutations indexing this kind.
    pub fn shape(&self) -> CycleShape {
        match self {
            ObjectKind::PascalLine | ObjectKind::KirkmanNode => CycleShape::six_cycle(),
            ObjectKind::SteinerNode | ObjectKind::CayleyLine => CycleShape::double_triple(),
            ObjectKind::PlueckerLine => CycleShape::triple_transposition(),
        }
    }

    /// Snake-case name, as used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectKind::PascalLine => "pascal_line",
            ObjectKind::KirkmanNode => "kirkman_node",
            ObjectKind::SteinerNode => "steiner_node",
            ObjectKind::CayleyLine => "cayley_line",
            ObjectKind::PlueckerLine => "pluecker_line",
        }
    }

    const fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cache key: an object kind and the canonical representative of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub kind: ObjectKind,
    pub permutation: Permutation,
}

/// Per-kind computation and hit counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    computed: [usize; 5],
    hits: [usize; 5],
}

impl CacheStats {
    /// Number of times an object of `kind` was computed from scratch.
    pub fn computed(&self, kind: ObjectKind) -> usize {
        self.computed[kind.slot()]
    }

    /// Number of queries for `kind` answered from the cache.
    pub fn hits(&self, kind: ObjectKind) -> usize {
        self.hits[kind.slot()]
    }

    /// Computations across all kinds.
    pub fn total_computed(&self) -> usize {
        self.computed.iter().sum()
    }

    /// Cache hits across all kinds.
    pub fn total_hits(&self) -> usize {
        self.hits.iter().sum()
    }

    pub(crate) fn record_computed(&mut self, kind: ObjectKind) {
        self.computed[kind.slot()] += 1;
    }

    pub(crate) fn record_hit(&mut self, kind: ObjectKind) {
        self.hits[kind.slot()] += 1;
    }
}

/// Everything behind the model's lock.
#[derive(Debug, Default)]
pub(crate) struct CacheState {
    points: HashMap<CacheKey, Point>,
    lines: HashMap<CacheKey, Line>,
    pub stats: CacheStats,
}

impl CacheState {
    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len()
    }
}

/// A value type with its own memo table.
pub(crate) trait Cached: Clone + fmt::Display + Sized {
    fn table(state: &mut CacheState) -> &mut HashMap<CacheKey, Self>;
}

impl Cached for Point {
    fn table(state: &mut CacheState) -> &mut HashMap<CacheKey, Self> {
        &mut state.points
    }
}

impl Cached for Line {
    fn table(state: &mut CacheState) -> &mut HashMap<CacheKey, Self> {
        &mut state.lines
    }
}
