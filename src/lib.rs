//! Connect-the-dots sketches from images on a fixed 9x9 grid
//!
//! An image is downsampled to a grayscale grid, cells with a strong local
//! gradient are flagged as edges, and the edges are traced as red polylines
//! over a grid of black dots. A single sensitivity value picks the edge
//! detector and, for the segmented variant, how many segments survive.

#![forbid(unsafe_code)]

/// Grayscale reduction, edge detection and segmentation
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Event-driven pipeline controller and image sources
pub mod pipeline;
/// Drawing surfaces and sketch rendering
pub mod render;

pub use io::error::{Result, SketchError};
