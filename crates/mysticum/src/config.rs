//! Model configuration.

/// Configuration for a [`Mysticum`](crate::Mysticum).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MysticumConfig {
    /// Keep computed objects for the lifetime of the model.
    /// When false every query recomputes from the hexagon.
    pub memoize: bool,
}

impl Default for MysticumConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}

impl MysticumConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// - `MYSTICUM_MEMOIZE` (`true`/`false`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let memoize = std::env::var("MYSTICUM_MEMOIZE")
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(defaults.memoize);
        Self { memoize }
    }

    /// Config that recomputes every query.
    #[must_use]
    pub fn uncached() -> Self {
        Self { memoize: false }
    }

    /// Enable or disable memoization.
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
