//! Grouping of scan-ordered edge points into drawable polylines

use crate::analysis::edges::GridPoint;
use crate::io::configuration::{MAX_LOW_SENSITIVITY_SEGMENTS, MID_THRESHOLD};
use serde::Serialize;

/// Run of consecutive edge points drawn as one polyline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Segment {
    points: Vec<GridPoint>,
}

impl Segment {
    /// Wrap an ordered list of points
    pub const fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    /// Points in draw order
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Number of points in the segment
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the segment holds no points
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Split scan-ordered points wherever the column jumps by more than one
///
/// The break goes before the point that jumped, so every point lands in
/// exactly one segment and input order is preserved.
pub fn build_segments(edges: &[GridPoint]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Vec<GridPoint> = Vec::new();

    for point in edges {
        let jumped = current
            .last()
            .is_some_and(|previous| previous.x.abs_diff(point.x) > 1);
        if jumped {
            segments.push(Segment::new(std::mem::take(&mut current)));
        }
        current.push(*point);
    }

    if !current.is_empty() {
        segments.push(Segment::new(current));
    }

    segments
}

/// Drop all but the leading segments when sensitivity is below the mid-threshold
pub fn prune_segments(mut segments: Vec<Segment>, sensitivity: u32) -> Vec<Segment> {
    if sensitivity < MID_THRESHOLD {
        segments.truncate(MAX_LOW_SENSITIVITY_SEGMENTS);
    }
    segments
}

/// Build segments and apply sensitivity pruning in one pass
pub fn segment_edges(edges: &[GridPoint], sensitivity: u32) -> Vec<Segment> {
    prune_segments(build_segments(edges), sensitivity)
}
