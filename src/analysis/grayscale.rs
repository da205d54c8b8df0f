//! Reduction of RGBA pixel buffers to a single-channel intensity grid

use crate::io::error::{Result, invalid_input};
use ndarray::Array2;

/// Bytes per RGBA pixel
const CHANNELS: usize = 4;

/// Square grid of luminance values indexed by `(x, y)`
///
/// Backed by a row-major `[row, col]` array. Built once per pipeline run and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    cells: Array2<f64>,
}

impl IntensityGrid {
    /// Build a grid from a row-major RGBA buffer of `resolution`² pixels
    ///
    /// Each cell is the mean of the pixel's red, green and blue channels;
    /// alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SketchError::InvalidInput`] if:
    /// - The buffer length is not a multiple of 4
    /// - The buffer does not hold exactly `resolution`² pixels
    pub fn from_rgba(pixels: &[u8], resolution: usize) -> Result<Self> {
        if pixels.len() % CHANNELS != 0 {
            return Err(invalid_input(&format!(
                "pixel buffer length {} is not a multiple of {CHANNELS}",
                pixels.len()
            )));
        }

        let expected = resolution * resolution * CHANNELS;
        if pixels.len() != expected {
            return Err(invalid_input(&format!(
                "pixel buffer length {} does not match {resolution}x{resolution} grid ({expected} bytes)",
                pixels.len()
            )));
        }

        let values: Vec<f64> = pixels
            .chunks_exact(CHANNELS)
            .map(|pixel| match pixel {
                [r, g, b, _] => (f64::from(*r) + f64::from(*g) + f64::from(*b)) / 3.0,
                _ => 0.0,
            })
            .collect();

        let cells = Array2::from_shape_vec((resolution, resolution), values)
            .map_err(|e| invalid_input(&e))?;

        Ok(Self { cells })
    }

    /// Number of cells along each side
    pub fn resolution(&self) -> usize {
        self.cells.nrows()
    }

    /// Intensity at column `x`, row `y`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.cells.get((y, x)).copied()
    }

    /// Row-major view of every cell
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().copied()
    }
}
