//! Dot grid and edge stroke rendering

use crate::analysis::edges::GridPoint;
use crate::analysis::segments::Segment;
use crate::io::configuration::{DOT_RADIUS, GRID_RESOLUTION, STROKE_WIDTH};
use crate::render::surface::{Color, DrawingSurface};
use serde::Serialize;

/// Edge geometry handed to the renderer, one shape per pipeline variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum Strokes {
    /// Independent polylines, one per segment
    Segments(Vec<Segment>),
    /// One continuous polyline through every edge point in scan order
    Path(Vec<GridPoint>),
}

impl Strokes {
    /// Number of polylines that will actually be stroked
    pub fn stroked_count(&self) -> usize {
        match self {
            Self::Segments(segments) => segments.iter().filter(|s| s.len() >= 2).count(),
            Self::Path(points) => usize::from(points.len() >= 2),
        }
    }
}

/// Maps grid coordinates to device-space cell centres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    cell_width: f32,
    cell_height: f32,
}

impl CellLayout {
    /// Layout for a `width` x `height` canvas split into `resolution` cells per side
    pub fn new(width: f32, height: f32, resolution: usize) -> Self {
        let cells = resolution.max(1) as f32;
        Self {
            cell_width: width / cells,
            cell_height: height / cells,
        }
    }

    /// Device coordinates of the centre of cell `(x, y)`
    pub fn center(&self, x: usize, y: usize) -> (f32, f32) {
        (
            (x as f32).mul_add(self.cell_width, self.cell_width / 2.0),
            (y as f32).mul_add(self.cell_height, self.cell_height / 2.0),
        )
    }
}

/// Clear the surface, draw the fixed dot grid, then stroke the edges
pub fn render_sketch<S: DrawingSurface + ?Sized>(surface: &mut S, strokes: &Strokes) {
    let (width, height) = surface.size();
    let layout = CellLayout::new(width, height, GRID_RESOLUTION);

    surface.clear(width, height);

    for y in 0..GRID_RESOLUTION {
        for x in 0..GRID_RESOLUTION {
            let (cx, cy) = layout.center(x, y);
            surface.fill_circle(cx, cy, DOT_RADIUS, Color::BLACK);
        }
    }

    match strokes {
        Strokes::Segments(segments) => {
            for segment in segments {
                draw_polyline(surface, &layout, segment.points());
            }
        }
        Strokes::Path(points) => draw_polyline(surface, &layout, points),
    }
}

fn draw_polyline<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &CellLayout,
    points: &[GridPoint],
) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let (start_x, start_y) = layout.center(first.x, first.y);
    surface.move_to(start_x, start_y);
    for point in rest {
        let (px, py) = layout.center(point.x, point.y);
        surface.line_to(px, py);
    }
    surface.stroke(Color::RED, STROKE_WIDTH);
}
