//! Anti-aliased raster surface backed by a tiny-skia pixmap

use crate::io::error::{Result, SketchError};
use crate::render::surface::{Color, DrawingSurface};
use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Pixel canvas implementing [`DrawingSurface`]
///
/// Clearing makes the canvas transparent unless a background color is set.
pub struct RasterSurface {
    pixmap: Pixmap,
    path: PathBuilder,
    background: Option<Color>,
}

impl RasterSurface {
    /// Allocate a `width` x `height` canvas
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] if either dimension is zero or the
    /// pixmap cannot be allocated
    pub fn new(width: u32, height: u32, background: Option<Color>) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| SketchError::Surface {
            reason: format!("cannot allocate {width}x{height} canvas"),
        })?;

        Ok(Self {
            pixmap,
            path: PathBuilder::new(),
            background,
        })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|premultiplied| {
            let c = premultiplied.demultiply();
            Color {
                r: c.red(),
                g: c.green(),
                b: c.blue(),
                a: c.alpha(),
            }
        })
    }

    /// Copy the canvas into a straight-alpha image buffer for encoding
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (x, y, out) in img.enumerate_pixels_mut() {
            if let Some(color) = self.pixel(x, y) {
                *out = Rgba([color.r, color.g, color.b, color.a]);
            }
        }
        img
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (f32, f32) {
        (self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.path = PathBuilder::new();
        let fill = self.background.map_or(tiny_skia::Color::TRANSPARENT, |c| {
            tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
        });

        let (full_width, full_height) = self.size();
        if width >= full_width && height >= full_height {
            self.pixmap.fill(fill);
            return;
        }

        // Partial clears replace pixels rather than blending over them
        if let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, width, height) {
            let mut paint = Paint::default();
            paint.set_color(fill);
            paint.blend_mode = tiny_skia::BlendMode::Source;
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if let Some(circle) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap.fill_path(
                &circle,
                &paint_for(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x, y);
    }

    fn stroke(&mut self, color: Color, width: f32) {
        let builder = std::mem::replace(&mut self.path, PathBuilder::new());
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
