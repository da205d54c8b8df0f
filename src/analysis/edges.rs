//! Threshold-driven edge detection over the intensity grid
//!
//! Two detectors share one entry point. Low thresholds compare each cell with
//! its right and bottom neighbours; high thresholds use a central difference
//! across all four neighbours. Both scan rows top to bottom and columns left
//! to right, and that scan order is the only ordering guarantee downstream
//! segmentation relies on.

use crate::analysis::grayscale::IntensityGrid;
use crate::io::configuration::MID_THRESHOLD;
use serde::Serialize;

/// Grid cell flagged as an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl GridPoint {
    /// Create a point at column `x`, row `y`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Edge detection algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMethod {
    /// Forward difference against the right and bottom neighbours
    Simple,
    /// Central difference across left/right and top/bottom neighbours
    Gradient,
}

impl EdgeMethod {
    /// Select the detector for a threshold; exactly [`MID_THRESHOLD`] is simple
    pub const fn for_threshold(threshold: u32) -> Self {
        if threshold <= MID_THRESHOLD {
            Self::Simple
        } else {
            Self::Gradient
        }
    }

    /// Run this detector regardless of what the threshold would select
    pub fn apply(self, grid: &IntensityGrid, threshold: u32) -> Vec<GridPoint> {
        match self {
            Self::Simple => scan(grid, threshold, simple_gradient),
            Self::Gradient => scan(grid, threshold, central_gradient),
        }
    }
}

/// Detect edge cells, dispatching on the threshold
///
/// Points come back in row-major scan order.
pub fn detect(grid: &IntensityGrid, threshold: u32) -> Vec<GridPoint> {
    EdgeMethod::for_threshold(threshold).apply(grid, threshold)
}

fn scan(
    grid: &IntensityGrid,
    threshold: u32,
    gradient_at: fn(&IntensityGrid, usize, usize, f64) -> f64,
) -> Vec<GridPoint> {
    let limit = f64::from(threshold);
    let resolution = grid.resolution();
    let mut edges = Vec::new();

    for y in 0..resolution {
        for x in 0..resolution {
            let Some(current) = grid.get(x, y) else {
                continue;
            };
            if gradient_at(grid, x, y, current) > limit {
                edges.push(GridPoint::new(x, y));
            }
        }
    }

    edges
}

// Missing neighbours fall back to the cell itself so borders never trigger on the absent side
fn simple_gradient(grid: &IntensityGrid, x: usize, y: usize, current: f64) -> f64 {
    let right = grid.get(x + 1, y).unwrap_or(current);
    let bottom = grid.get(x, y + 1).unwrap_or(current);

    (current - right).hypot(current - bottom)
}

fn central_gradient(grid: &IntensityGrid, x: usize, y: usize, current: f64) -> f64 {
    let left = x
        .checked_sub(1)
        .and_then(|lx| grid.get(lx, y))
        .unwrap_or(current);
    let right = grid.get(x + 1, y).unwrap_or(current);
    let top = y
        .checked_sub(1)
        .and_then(|ty| grid.get(x, ty))
        .unwrap_or(current);
    let bottom = grid.get(x, y + 1).unwrap_or(current);

    let gradient_x = right - left;
    let gradient_y = bottom - top;
    gradient_x.hypot(gradient_y)
}
