//! Surface that records draw calls instead of rasterizing them

use crate::render::surface::{Color, DrawingSurface};
use serde::Serialize;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Surface area was erased
    Clear {
        /// Cleared width
        width: f32,
        /// Cleared height
        height: f32,
    },
    /// Filled dot
    FillCircle {
        /// Centre x
        cx: f32,
        /// Centre y
        cy: f32,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Subpath start
    MoveTo {
        /// Target x
        x: f32,
        /// Target y
        y: f32,
    },
    /// Straight line segment
    LineTo {
        /// Target x
        x: f32,
        /// Target y
        y: f32,
    },
    /// Pending path stroked
    Stroke {
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
}

/// In-memory [`DrawingSurface`] keeping every command since the last clear
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder reporting the given device size
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Commands recorded since the most recent clear, including that clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of filled dots currently on the surface
    pub fn dot_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Number of strokes currently on the surface
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    // Everything before a clear is gone from the canvas, so drop it here too
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self, color: Color, width: f32) {
        self.commands.push(DrawCommand::Stroke { color, width });
    }
}
