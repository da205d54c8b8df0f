//! Error types for the sketch pipeline and its file-facing collaborators

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all sketch operations
///
/// A sensitivity change with no image loaded is not represented here: the
/// controller reports it as "no run happened" rather than as a failure.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Pixel data handed to the pipeline has the wrong shape
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode a source image from the filesystem
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered sketch to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The drawing surface could not be created or exported
    #[error("Drawing surface error: {reason}")]
    Surface {
        /// Description of the failure
        reason: String,
    },

    /// Draw command export could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for sketch results
pub type Result<T> = std::result::Result<T, SketchError>;

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> SketchError {
    SketchError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SketchError {
    SketchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
