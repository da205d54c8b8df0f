//! Source image decoding and sketch export

use crate::io::error::{Result, SketchError};
use crate::pipeline::controller::{PipelineVariant, RenderSet};
use crate::render::raster::RasterSurface;
use crate::render::recorder::{DrawCommand, RecordingSurface};
use crate::render::sketch::render_sketch;
use image::DynamicImage;
use serde::Serialize;
use std::path::Path;

/// Decode an image file in any format the `image` crate recognizes
///
/// # Errors
///
/// Returns [`SketchError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SketchError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Write the canvas as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_sketch_png(surface: &RasterSurface, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    surface
        .to_rgba_image()
        .save(output_path)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

#[derive(Serialize)]
struct CommandExport<'a> {
    variant: PipelineVariant,
    #[serde(flatten)]
    render_set: &'a RenderSet,
    canvas: (f32, f32),
    commands: &'a [DrawCommand],
}

/// Replay a render set onto a recorder and write it, with its draw commands, as JSON
///
/// # Errors
///
/// Returns an error if:
/// - Serialization fails
/// - The parent directory cannot be created or the file cannot be written
pub fn export_commands_json(
    render_set: &RenderSet,
    variant: PipelineVariant,
    canvas: (f32, f32),
    output_path: &Path,
) -> Result<()> {
    let mut recorder = RecordingSurface::new(canvas.0, canvas.1);
    render_sketch(&mut recorder, &render_set.strokes);

    let export = CommandExport {
        variant,
        render_set,
        canvas,
        commands: recorder.commands(),
    };
    let json = serde_json::to_string_pretty(&export)?;

    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, json).map_err(|e| SketchError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
