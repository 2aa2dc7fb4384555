//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while constructing a LUT atlas.
///
/// Sampling itself never fails; malformed layouts are rejected up front
/// so a bad asset cannot be silently sampled.
#[derive(Debug, Error)]
pub enum LutError {
    /// Atlas dimensions do not describe a tiled cube.
    #[error("invalid atlas dimensions: {0}")]
    InvalidDimensions(String),

    /// Texel data length does not match the dimensions.
    #[error("texel count mismatch: expected {expected}, got {actual}")]
    TexelCountMismatch {
        /// width * height
        expected: usize,
        /// Provided data length
        actual: usize,
    },
}
