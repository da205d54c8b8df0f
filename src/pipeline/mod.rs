//! Pipeline orchestration from source image to rendered sketch

/// Event entry points and per-run state
pub mod controller;
/// Resamplable image sources
pub mod source;

pub use controller::{
    PipelineConfig, PipelineController, PipelineState, PipelineVariant, RenderSet, Sensitivity,
};
pub use source::{ImageSource, PixelBuffer};
