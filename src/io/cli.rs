//! Command-line interface for batch sketching of image files

use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_SENSITIVITY, MAX_SENSITIVITY, OUTPUT_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::io::image::{export_commands_json, export_sketch_png, load_source_image};
use crate::io::progress::ProgressManager;
use crate::pipeline::controller::{
    PipelineConfig, PipelineController, PipelineVariant, RenderSet, Sensitivity,
};
use crate::render::raster::RasterSurface;
use crate::render::surface::{Color, DrawingSurface};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dotsketch")]
#[command(
    author,
    version,
    about = "Turn images into connect-the-dots sketches on a 9x9 grid"
)]
/// Command-line arguments for the sketch tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Edge sensitivity (0-100); repeat or comma-separate to render several
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [DEFAULT_SENSITIVITY],
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_SENSITIVITY))
    )]
    pub complexity: Vec<u32>,

    /// How edge points are grouped into strokes
    #[arg(long, value_enum, default_value_t = PipelineVariant::Segmented)]
    pub variant: PipelineVariant,

    /// Canvas edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub size: u32,

    /// Fill the background white instead of leaving it transparent
    #[arg(long)]
    pub opaque: bool,

    /// Also write the draw commands of each render as JSON
    #[arg(long)]
    pub commands: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter directive for the chosen verbosity
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "dotsketch=debug"
        } else {
            "dotsketch=warn"
        }
    }
}

/// Orchestrates batch sketching of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, decoding, rendering or export fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &"canvas size must be positive",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let job_count = files.len() * self.cli.complexity.len();
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(job_count);
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !has_supported_extension(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| SketchError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| SketchError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.is_file()
                    && has_supported_extension(&path)
                    && !is_sketch_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let all_exist = self
            .cli
            .complexity
            .iter()
            .all(|&value| Self::get_output_path(input_path, value).exists());
        if all_exist {
            warn!(path = %input_path.display(), "Skipping: outputs exist");
        }
        !all_exist
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let complexities = self.cli.complexity.clone();
        let Some((&first, rest)) = complexities.split_first() else {
            return Ok(());
        };

        let image = load_source_image(input_path)?;
        let background = self.cli.opaque.then_some(Color::WHITE);
        let surface = RasterSurface::new(self.cli.size, self.cli.size, background)?;

        let config = PipelineConfig {
            variant: self.cli.variant,
            sensitivity: Sensitivity::new(first)?,
        };
        let mut controller = PipelineController::new(config, surface);

        let render_set = controller.on_image_ready(image)?;
        self.write_outputs(input_path, &controller, &render_set)?;

        for &value in rest {
            if let Some(updated) = controller.on_sensitivity_changed(value)? {
                self.write_outputs(input_path, &controller, &updated)?;
            }
        }

        Ok(())
    }

    fn write_outputs(
        &mut self,
        input_path: &Path,
        controller: &PipelineController<RasterSurface>,
        render_set: &RenderSet,
    ) -> Result<()> {
        let value = render_set.sensitivity.value();
        let output_path = Self::get_output_path(input_path, value);
        export_sketch_png(controller.surface(), &output_path)?;

        if self.cli.commands {
            export_commands_json(
                render_set,
                controller.variant(),
                controller.surface().size(),
                &output_path.with_extension("json"),
            )?;
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            sensitivity = value,
            edges = render_set.edges.len(),
            strokes = render_set.strokes.stroked_count(),
            "Rendered sketch"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job();
        }

        Ok(())
    }

    /// Output PNG path for `input_path` rendered at `complexity`
    pub fn get_output_path(input_path: &Path, complexity: u32) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}_c{complexity}.png",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Earlier runs leave their PNGs beside the inputs
fn is_sketch_output(path: &Path) -> bool {
    let marker = format!("{OUTPUT_SUFFIX}_c");
    path.file_stem().is_some_and(|stem| {
        stem.to_string_lossy()
            .rsplit_once(marker.as_str())
            .is_some_and(|(_, tail)| !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()))
    })
}
