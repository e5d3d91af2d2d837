//! Error types for mysticum-projective.

use thiserror::Error;

/// Result type for projective algebra operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// A degenerate linear-algebra configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// No single line (or point) satisfies every constraint: the kernel is trivial.
    #[error("over-determined: no common solution for the given constraints")]
    OverDetermined,

    /// The constraints leave a kernel of dimension two or more.
    #[error("under-determined: solution space has dimension {dimension}")]
    UnderDetermined { dimension: usize },

    /// The zero vector does not represent a point or line of the projective plane.
    #[error("the zero vector is not a projective entity")]
    ZeroVector,

    /// A serialized coordinate could not be read as a rational number.
    #[error("invalid rational coordinate: {0}")]
    InvalidCoordinate(String),
}
