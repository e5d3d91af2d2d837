//! Error types for the Mysticum model.

use mysticum_group::PermutationError;
use mysticum_projective::GeometryError;
use thiserror::Error;

/// Result type for Mysticum queries.
pub type Result<T> = std::result::Result<T, MysticumError>;

/// Errors that can occur while deriving an object of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MysticumError {
    /// The hexagon is degenerate or not on a conic.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The permutation backend rejected the index.
    #[error("permutation error: {0}")]
    Group(#[from] PermutationError),
}
