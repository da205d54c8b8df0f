//! Drawing surface abstraction used by the sketch renderer

use serde::Serialize;

/// Straight RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Primitive drawing operations in device coordinates
///
/// Paths are built with [`move_to`](Self::move_to) and
/// [`line_to`](Self::line_to), and [`stroke`](Self::stroke) consumes the
/// pending path.
pub trait DrawingSurface {
    /// Device dimensions as `(width, height)`
    fn size(&self) -> (f32, f32);

    /// Erase the `width` x `height` area starting at the origin
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle centred at `(cx, cy)`
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    /// Start a new subpath at `(x, y)`
    fn move_to(&mut self, x: f32, y: f32);

    /// Extend the current subpath with a straight line to `(x, y)`
    fn line_to(&mut self, x: f32, y: f32);

    /// Stroke and discard the pending path
    fn stroke(&mut self, color: Color, width: f32);
}
