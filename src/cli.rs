//! CLI surface and pipeline entrypoint, extracted from `main.rs` for
//! testability.
//!
//! The tool takes no configuration flags: input paths, output paths, and
//! the hardware profile are fixed constants (see [`defaults`]). Tests use
//! [`PlotConfig`] to redirect the pipeline at a fixture directory; the
//! binary always runs with [`PlotConfig::default`].

use std::path::PathBuf;

use clap::Parser;

use crate::dataset::BenchmarkSuite;
use crate::error::{Result, TrazarError};
use crate::kernel::KernelKind;
use crate::metrics::{self, HardwareProfile, MetricKind};
use crate::plot;
use crate::report;

/// Fixed pipeline parameters
pub mod defaults {
    /// Directory holding the three kernel measurement tables
    pub const DATA_DIR: &str = "build";

    /// Directory the chart files are written to (created if absent)
    pub const IMAGES_DIR: &str = "images";
}

/// Trazar - benchmark comparison plotter for summation kernels
///
/// Reads the three kernel measurement tables from `build/`, derives four
/// performance metrics, and writes one comparison chart per metric to
/// `images/`.
#[derive(Debug, Parser)]
#[command(name = "trazar")]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Pipeline configuration: fixed paths plus the hardware profile.
///
/// The binary runs with the defaults; tests substitute fixture paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Directory holding the measurement tables
    pub data_dir: PathBuf,
    /// Directory the charts are written to
    pub images_dir: PathBuf,
    /// Peak-bandwidth profile for the bandwidth metric
    pub hardware: HardwareProfile,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            images_dir: PathBuf::from(defaults::IMAGES_DIR),
            hardware: HardwareProfile::default(),
        }
    }
}

/// Main CLI entrypoint: run the pipeline with the fixed configuration
///
/// # Errors
///
/// Propagates any [`run_pipeline`] failure.
pub fn entrypoint(_cli: &Cli) -> Result<()> {
    run_pipeline(&PlotConfig::default())
}

/// Load, validate, and plot: the whole pipeline.
///
/// Loads the three kernel tables, validates problem-size alignment, then
/// for each metric prints the diagnostic block and renders the comparison
/// chart. Sequential and fail-fast: the first error aborts the run, and
/// charts already written stay on disk.
///
/// # Errors
///
/// Propagates load, validation, directory-creation, and render failures.
pub fn run_pipeline(config: &PlotConfig) -> Result<()> {
    let suite = BenchmarkSuite::load_dir(&config.data_dir)?;

    std::fs::create_dir_all(&config.images_dir).map_err(|e| TrazarError::Io {
        path: config.images_dir.display().to_string(),
        message: format!("failed to create images directory: {e}"),
    })?;

    let problem_sizes = suite.problem_sizes();

    for metric in MetricKind::all() {
        let series: Vec<(KernelKind, Vec<f64>)> = KernelKind::all()
            .iter()
            .map(|&kernel| {
                (
                    kernel,
                    metrics::compute(metric, suite.dataset(kernel), &config.hardware),
                )
            })
            .collect();

        print!(
            "{}",
            report::render_metric_report(metric, &series[0].1, &series[1].1, &series[2].1)
        );

        let path = config.images_dir.join(format!("{metric}.png"));
        plot::render_chart(metric, &problem_sizes, &series, &path)?;
    }

    Ok(())
}
