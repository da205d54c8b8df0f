//! Image-to-edge-graph analysis: grayscale reduction, edge detection and segmentation

/// Edge detection with threshold-selected algorithms
pub mod edges;
/// RGBA to intensity grid reduction
pub mod grayscale;
/// Scan-order segmentation of edge points
pub mod segments;

pub use edges::{EdgeMethod, GridPoint, detect};
pub use grayscale::IntensityGrid;
pub use segments::{Segment, segment_edges};
