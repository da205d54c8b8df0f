//! Fixed sketch constants and runtime configuration defaults

// Grid geometry is fixed; nothing downstream supports other resolutions
/// Number of grid cells along each side of the sketch
pub const GRID_RESOLUTION: usize = 9;

/// Sensitivity at or below which the simple detector runs and segments are pruned
pub const MID_THRESHOLD: u32 = 50;

/// Largest accepted sensitivity value
pub const MAX_SENSITIVITY: u32 = 100;

/// Sensitivity used when none is supplied
pub const DEFAULT_SENSITIVITY: u32 = 50;

/// Segments kept when sensitivity is below [`MID_THRESHOLD`]
pub const MAX_LOW_SENSITIVITY_SEGMENTS: usize = 2;

// Rendering styles
/// Radius of each grid dot in device units
pub const DOT_RADIUS: f32 = 3.0;
/// Width of edge strokes in device units
pub const STROKE_WIDTH: f32 = 2.0;

/// Default square canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 450;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_sketch";
/// Input file extensions picked up when scanning a directory
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];
