//! Batch progress display for multi-file, multi-complexity renders

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sketches: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks render jobs across files
///
/// A job is one (file, complexity) pair. Single-job runs show nothing.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no display attached yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Prepare the display for `job_count` renders
    pub fn initialize(&mut self, job_count: usize) {
        self.completed = 0;
        if job_count > 1 {
            let bar = ProgressBar::new(job_count as u64);
            bar.set_style(JOB_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show which file is being rendered
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(display_name.to_string());
        }
    }

    /// Count one finished render
    pub fn complete_job(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Renders finished since the last [`initialize`](Self::initialize)
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Tear down the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
