//! The memoized Mysticum model.
//!
//! One [`Mysticum`] owns one hexagon. Each query canonicalizes its
//! permutation, looks it up, and on a miss builds the object from
//! lower-order ones:
//!
//! ```text
//! pascal_line(g)    hexagon reordered by g, Pascal construction
//! kirkman_node(g)   ∩ pascal_line(h)   for h in cycles_disjoint(g)
//! steiner_node(s)   ∩ pascal_line(h)   for h in cycles_squaring_to(s)
//! cayley_line(s)    ∨ kirkman_node(h)  for h in cycles_squaring_to(s)
//! pluecker_line(t)  ∨ steiner_node(s)  for s in 3+3 class commuting with t
//! ```
//!
//! The cache lock is never held while computing: a miss on a derived object
//! recurses into lower-order lookups. When two threads race on one key, both
//! compute and the first insertion is what both return.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use mysticum_group::{
    apply_cycle, EquivalenceEngine, Permutation, PermutationGroup, SymmetricGroup,
};
use mysticum_projective::{line_intersection, line_through_points, Hexagon, Line, Point};
use tracing::{debug, instrument, trace, warn};

use crate::cache::{CacheKey, CacheState, Cached};
use crate::{CacheStats, MysticumConfig, MysticumError, ObjectKind, Result};

/// Pascal's hexagrammum mysticum for one hexagon inscribed in a conic.
#[derive(Debug)]
pub struct Mysticum<G = SymmetricGroup> {
    hexagon: Hexagon,
    config: MysticumConfig,
    engine: EquivalenceEngine<G>,
    state: Mutex<CacheState>,
}

impl Mysticum<SymmetricGroup> {
    /// Create a model over the bundled S6 backend with default config.
    pub fn new(hexagon: Hexagon) -> Self {
        Self::with_config(hexagon, MysticumConfig::default())
    }

    /// Create a model over the bundled S6 backend.
    pub fn with_config(hexagon: Hexagon, config: MysticumConfig) -> Self {
        Self::with_engine(hexagon, config, EquivalenceEngine::symmetric())
    }
}

impl<G: PermutationGroup> Mysticum<G> {
    /// Create a model over a caller-supplied group backend.
    pub fn with_engine(hexagon: Hexagon, config: MysticumConfig, engine: EquivalenceEngine<G>) -> Self {
        debug!(%hexagon, ?config, "mysticum created");
        Self {
            hexagon,
            config,
            engine,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// The hexagon this model was built from.
    pub fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    /// The model's configuration.
    pub fn config(&self) -> &MysticumConfig {
        &self.config
    }

    /// The permutation-equivalence engine.
    pub fn engine(&self) -> &EquivalenceEngine<G> {
        &self.engine
    }

    /// Snapshot of the computation and hit counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Number of cached objects across all kinds.
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    /// The Pascal line of the hexagon reordered by the 6-cycle `g`.
    #[instrument(level = "trace", skip(self))]
    pub fn pascal_line(&self, g: &Permutation) -> Result<Line> {
        self.memoized(ObjectKind::PascalLine, g, |g| {
            let vertices = apply_cycle(g, self.hexagon.vertices())?;
            self.construct(ObjectKind::PascalLine, g, Hexagon::new(vertices).pascal_line())
        })
    }

    /// The Kirkman node of the 6-cycle `g`: where the Pascal lines of the
    /// three hexagons edge-disjoint from `g` meet.
    #[instrument(level = "trace", skip(self))]
    pub fn kirkman_node(&self, g: &Permutation) -> Result<Point> {
        self.memoized(ObjectKind::KirkmanNode, g, |g| {
            let lines = self.gather(self.engine.cycles_disjoint(g)?, Self::pascal_line)?;
            self.construct(ObjectKind::KirkmanNode, g, line_intersection(&lines))
        })
    }

    /// The Steiner node of the 3+3 permutation `s`: where the Pascal lines
    /// of the three hexagons squaring to `s` meet.
    #[instrument(level = "trace", skip(self))]
    pub fn steiner_node(&self, s: &Permutation) -> Result<Point> {
        self.memoized(ObjectKind::SteinerNode, s, |s| {
            let lines = self.gather(self.engine.cycles_squaring_to(s)?, Self::pascal_line)?;
            self.construct(ObjectKind::SteinerNode, s, line_intersection(&lines))
        })
    }

    /// The Cayley line of the 3+3 permutation `s`: through the Kirkman nodes
    /// of the three hexagons squaring to `s`.
    #[instrument(level = "trace", skip(self))]
    pub fn cayley_line(&self, s: &Permutation) -> Result<Line> {
        self.memoized(ObjectKind::CayleyLine, s, |s| {
            let nodes = self.gather(self.engine.cycles_squaring_to(s)?, Self::kirkman_node)?;
            self.construct(ObjectKind::CayleyLine, s, line_through_points(&nodes))
        })
    }

    /// The Plücker line of the 2+2+2 permutation `t`: through the Steiner
    /// nodes of the four 3+3 permutations commuting with `t`.
    #[instrument(level = "trace", skip(self))]
    pub fn pluecker_line(&self, t: &Permutation) -> Result<Line> {
        self.memoized(ObjectKind::PlueckerLine, t, |t| {
            let commuting = self.engine.double_triples_commuting_with(t)?;
            let nodes = self.gather(commuting, Self::steiner_node)?;
            self.construct(ObjectKind::PlueckerLine, t, line_through_points(&nodes))
        })
    }

    /// All 60 Pascal lines, keyed by canonical 6-cycle.
    pub fn pascal_lines(&self) -> Result<BTreeMap<Permutation, Line>> {
        self.batch(ObjectKind::PascalLine, self.engine.six_cycles(), Self::pascal_line)
    }

    /// All 60 Kirkman nodes, keyed by canonical 6-cycle.
    pub fn kirkman_nodes(&self) -> Result<BTreeMap<Permutation, Point>> {
        self.batch(ObjectKind::KirkmanNode, self.engine.six_cycles(), Self::kirkman_node)
    }

    /// All 20 Steiner nodes, keyed by canonical 3+3 permutation.
    pub fn steiner_nodes(&self) -> Result<BTreeMap<Permutation, Point>> {
        self.batch(ObjectKind::SteinerNode, self.engine.double_triples(), Self::steiner_node)
    }

    /// All 20 Cayley lines, keyed by canonical 3+3 permutation.
    pub fn cayley_lines(&self) -> Result<BTreeMap<Permutation, Line>> {
        self.batch(ObjectKind::CayleyLine, self.engine.double_triples(), Self::cayley_line)
    }

    /// All 15 Plücker lines, keyed by 2+2+2 permutation.
    pub fn pluecker_lines(&self) -> Result<BTreeMap<Permutation, Line>> {
        self.batch(
            ObjectKind::PlueckerLine,
            self.engine.triple_transpositions(),
            Self::pluecker_line,
        )
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Entries are only ever inserted whole, so a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `(kind, canonical g)`, computing and storing it on a miss.
    fn memoized<E, F>(&self, kind: ObjectKind, g: &Permutation, compute: F) -> Result<E>
    where
        E: Cached,
        F: FnOnce(&Permutation) -> Result<E>,
    {
        g.expect_shape(&kind.shape())?;
        let key = CacheKey {
            kind,
            permutation: g.canonical(),
        };

        if self.config.memoize {
            let mut state = self.lock();
            if let Some(hit) = E::table(&mut state).get(&key).cloned() {
                state.stats.record_hit(kind);
                trace!(%kind, permutation = %key.permutation, "cache hit");
                return Ok(hit);
            }
        }

        let value = compute(&key.permutation).map_err(|e| {
            debug!(%kind, permutation = %key.permutation, error = %e, "derivation failed");
            e
        })?;

        let mut state = self.lock();
        state.stats.record_computed(kind);
        debug!(%kind, permutation = %key.permutation, %value, "computed");
        if !self.config.memoize {
            return Ok(value);
        }
        Ok(E::table(&mut state).entry(key).or_insert(value).clone())
    }

    /// Query `each` for every index, in order, stopping at the first error.
    fn gather<E>(
        &self,
        indices: Vec<Permutation>,
        each: impl Fn(&Self, &Permutation) -> Result<E>,
    ) -> Result<Vec<E>> {
        indices.iter().map(|h| each(self, h)).collect()
    }

    fn batch<E>(
        &self,
        kind: ObjectKind,
        indices: &[Permutation],
        each: impl Fn(&Self, &Permutation) -> Result<E>,
    ) -> Result<BTreeMap<Permutation, E>> {
        let objects = indices
            .iter()
            .map(|g| Ok((*g, each(self, g)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        debug!(%kind, count = objects.len(), "batch complete");
        Ok(objects)
    }

    /// Surface a failed join or meet, warning only where it happened.
    fn construct<T>(
        &self,
        kind: ObjectKind,
        g: &Permutation,
        result: mysticum_projective::Result<T>,
    ) -> Result<T> {
        result.map_err(|e| {
            warn!(%kind, permutation = %g, error = %e, "construction failed");
            MysticumError::Geometry(e)
        })
    }
}
