//! Image sources the pipeline can sample at grid resolution

use crate::io::error::{Result, invalid_input};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// A decoded image that can be rescaled into an RGBA buffer on request
pub trait ImageSource {
    /// Natural `(width, height)` of the image
    fn natural_size(&self) -> (u32, u32);

    /// Draw the image scaled to `width` x `height` and read back its RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the image data cannot be resampled
    fn sample(&self, width: u32, height: u32) -> Result<Vec<u8>>;
}

impl ImageSource for DynamicImage {
    fn natural_size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn sample(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        Ok(self
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgba8()
            .into_raw())
    }
}

/// Raw row-major RGBA pixels with known dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` RGBA image
    ///
    /// # Errors
    ///
    /// Returns [`crate::SketchError::InvalidInput`] if `data` does not hold
    /// exactly `width * height` four-byte pixels
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(invalid_input(&format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image filled with one color
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(pixels),
        }
    }

    /// Image whose pixel colors come from `f(x, y)`
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ImageSource for PixelBuffer {
    fn natural_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn sample(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        if (width, height) == (self.width, self.height) {
            return Ok(self.data.clone());
        }

        let img = RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| invalid_input(&"pixel buffer does not match its dimensions"))?;
        Ok(imageops::resize(&img, width, height, FilterType::Triangle).into_raw())
    }
}
