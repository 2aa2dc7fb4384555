//! Pipeline error types.

use thiserror::Error;

/// Result type for pipeline operations.
pub type GradeResult<T> = Result<T, GradeError>;

/// Errors from configuration validation and frame processing.
#[derive(Debug, Error)]
pub enum GradeError {
    /// A configuration field is outside its documented range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Frame buffer length does not match the stated dimensions.
    #[error("invalid frame dimensions: {0}")]
    InvalidDimensions(String),
}
