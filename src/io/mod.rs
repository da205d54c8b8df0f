//! Input/output operations, configuration and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Fixed constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and sketch export
pub mod image;
/// Batch progress display
pub mod progress;
