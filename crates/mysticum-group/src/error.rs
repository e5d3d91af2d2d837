//! Error types for mysticum-group.

use thiserror::Error;

use crate::CycleShape;

/// Result type for permutation operations.
pub type Result<T> = std::result::Result<T, PermutationError>;

/// Errors raised by the permutation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// A label outside `1..=6`.
    #[error("index {index} outside 1..=6")]
    IndexOutOfRange { index: u8 },

    /// A label appearing twice in a cycle list or image list.
    #[error("index {index} appears more than once")]
    RepeatedIndex { index: u8 },

    /// Cycle notation that could not be parsed.
    #[error("invalid cycle notation: {0}")]
    Parse(String),

    /// A permutation of the wrong cycle shape for the requested relation.
    #[error("expected cycle shape {expected}, got {actual}")]
    Shape {
        expected: CycleShape,
        actual: CycleShape,
    },
}
