//! Sketch rendering onto pluggable drawing surfaces

/// Tiny-skia backed raster canvas
pub mod raster;
/// Draw command recorder
pub mod recorder;
/// Dot grid and stroke rendering
pub mod sketch;
/// Drawing surface trait and colors
pub mod surface;

pub use raster::RasterSurface;
pub use recorder::{DrawCommand, RecordingSurface};
pub use sketch::{Strokes, render_sketch};
pub use surface::{Color, DrawingSurface};
