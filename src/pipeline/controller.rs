//! Event-driven controller running the full sketch pipeline
//!
//! The controller owns the loaded image, the current sensitivity and the
//! drawing surface. Each of its two entry points reruns every stage from a
//! fresh resample of the source; nothing carries over between runs except
//! what is already painted on the surface.

use crate::analysis::edges::{EdgeMethod, GridPoint, detect};
use crate::analysis::grayscale::IntensityGrid;
use crate::analysis::segments::segment_edges;
use crate::io::configuration::{DEFAULT_SENSITIVITY, GRID_RESOLUTION, MAX_SENSITIVITY};
use crate::io::error::{Result, invalid_parameter};
use crate::pipeline::source::ImageSource;
use crate::render::sketch::{Strokes, render_sketch};
use crate::render::surface::DrawingSurface;
use serde::Serialize;
use tracing::debug;

/// How edge points are turned into strokes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PipelineVariant {
    /// Split edges into segments and prune them at low sensitivity
    #[default]
    Segmented,
    /// Trace every edge point as one continuous polyline
    Direct,
}

/// Edge sensitivity in `0..=MAX_SENSITIVITY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Sensitivity(u32);

impl Sensitivity {
    /// Validate a raw control value
    ///
    /// # Errors
    ///
    /// Returns [`crate::SketchError::InvalidParameter`] if `value` exceeds
    /// [`MAX_SENSITIVITY`]
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_SENSITIVITY {
            return Err(invalid_parameter(
                "sensitivity",
                &value,
                &format!("must be between 0 and {MAX_SENSITIVITY}"),
            ));
        }
        Ok(Self(value))
    }

    /// Raw threshold value
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(DEFAULT_SENSITIVITY)
    }
}

/// Controller settings fixed for its lifetime, apart from the initial sensitivity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Stroke grouping strategy
    pub variant: PipelineVariant,
    /// Sensitivity in effect before the first change event
    pub sensitivity: Sensitivity,
}

/// Everything computed by one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSet {
    /// Sensitivity the run used
    pub sensitivity: Sensitivity,
    /// Detector selected by the sensitivity
    pub method: EdgeMethod,
    /// Edge points in scan order
    pub edges: Vec<GridPoint>,
    /// Geometry handed to the renderer
    pub strokes: Strokes,
}

/// Compute edges and strokes from a grid-sized RGBA buffer without drawing
///
/// # Errors
///
/// Returns [`crate::SketchError::InvalidInput`] if `pixels` is not a
/// `GRID_RESOLUTION`² RGBA buffer
pub fn build_render_set(
    pixels: &[u8],
    sensitivity: Sensitivity,
    variant: PipelineVariant,
) -> Result<RenderSet> {
    let grid = IntensityGrid::from_rgba(pixels, GRID_RESOLUTION)?;
    let threshold = sensitivity.value();
    let method = EdgeMethod::for_threshold(threshold);
    let edges = detect(&grid, threshold);

    let strokes = match variant {
        PipelineVariant::Segmented => Strokes::Segments(segment_edges(&edges, threshold)),
        PipelineVariant::Direct => Strokes::Path(edges.clone()),
    };

    debug!(
        threshold,
        ?method,
        ?variant,
        edge_count = edges.len(),
        stroke_count = strokes.stroked_count(),
        "Built render set"
    );

    Ok(RenderSet {
        sensitivity,
        method,
        edges,
        strokes,
    })
}

/// Inputs the controller reacts to
#[derive(Default)]
pub struct PipelineState {
    image: Option<Box<dyn ImageSource>>,
    sensitivity: Sensitivity,
}

impl PipelineState {
    /// Whether a source image has been delivered
    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Sensitivity the next run will use
    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }
}

/// Runs the pipeline on image and sensitivity events, painting onto `S`
pub struct PipelineController<S: DrawingSurface> {
    variant: PipelineVariant,
    state: PipelineState,
    surface: S,
}

impl<S: DrawingSurface> PipelineController<S> {
    /// Create a controller with no image loaded
    pub fn new(config: PipelineConfig, surface: S) -> Self {
        Self {
            variant: config.variant,
            state: PipelineState {
                image: None,
                sensitivity: config.sensitivity,
            },
            surface,
        }
    }

    /// Accept a newly decoded image and render it at the current sensitivity
    ///
    /// # Errors
    ///
    /// Returns [`crate::SketchError::InvalidInput`] if the image cannot be
    /// reduced to a grid; the surface keeps its previous contents
    pub fn on_image_ready(&mut self, image: impl ImageSource + 'static) -> Result<RenderSet> {
        let (width, height) = image.natural_size();
        debug!(width, height, "Image ready");

        let image = self.state.image.insert(Box::new(image));
        let render_set = Self::run(&**image, self.state.sensitivity, self.variant)?;
        render_sketch(&mut self.surface, &render_set.strokes);
        Ok(render_set)
    }

    /// Record a new sensitivity and re-render if an image is loaded
    ///
    /// Returns `Ok(None)` when no image has been delivered yet.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SketchError::InvalidParameter`] for out-of-range
    /// values, or [`crate::SketchError::InvalidInput`] if the image cannot
    /// be reduced to a grid; the surface keeps its previous contents
    pub fn on_sensitivity_changed(&mut self, value: u32) -> Result<Option<RenderSet>> {
        self.state.sensitivity = Sensitivity::new(value)?;

        let Some(image) = self.state.image.as_deref() else {
            debug!(value, "Sensitivity changed with no image loaded");
            return Ok(None);
        };

        let render_set = Self::run(image, self.state.sensitivity, self.variant)?;
        render_sketch(&mut self.surface, &render_set.strokes);
        Ok(Some(render_set))
    }

    // Everything fallible happens before the surface is touched
    fn run(
        image: &dyn ImageSource,
        sensitivity: Sensitivity,
        variant: PipelineVariant,
    ) -> Result<RenderSet> {
        let side = GRID_RESOLUTION as u32;
        let pixels = image.sample(side, side)?;
        build_render_set(&pixels, sensitivity, variant)
    }

    /// Current inputs
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Configured stroke grouping strategy
    pub const fn variant(&self) -> PipelineVariant {
        self.variant
    }

    /// Surface the controller paints onto
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
