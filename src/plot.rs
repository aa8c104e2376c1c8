//! Chart rendering for metric comparisons.
//!
//! One PNG line chart per metric: three series (one per kernel) over the
//! shared problem-size axis, log-scaled y-axis, power-of-two x labels,
//! legend and grid. Each chart gets a fresh drawing backend, so nothing
//! bleeds between metrics.
//!
//! Log axes cannot place zero or non-finite values, so points where a
//! metric is inapplicable (direct-kernel bandwidth and latency) are
//! omitted from the drawn series. They still appear, unfiltered, in the
//! console diagnostics.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Result, TrazarError};
use crate::kernel::KernelKind;
use crate::metrics::MetricKind;

/// Chart title shared by all four metrics
pub const CHART_TITLE: &str = "Comparison of ways to compute 0 + 1 + ... + N-1";

/// Chart width in pixels (6.4 in at 300 DPI)
pub const IMAGE_WIDTH: u32 = 1920;

/// Chart height in pixels (4.8 in at 300 DPI)
pub const IMAGE_HEIGHT: u32 = 1440;

/// Line and marker color for a kernel's series.
///
/// Fixed styling: direct is red with circle markers, vector is blue with
/// cross markers, indirect is green with triangle markers.
#[must_use]
pub fn series_color(kernel: KernelKind) -> RGBColor {
    match kernel {
        KernelKind::Direct => RED,
        KernelKind::Vector => BLUE,
        KernelKind::Indirect => GREEN,
    }
}

/// X-axis tick label: `2^k` for the problem size at an integer position.
///
/// Positions between ticks and positions outside the data range get an
/// empty label. Problem sizes are assumed to be exact powers of two; a
/// non-power-of-two size gets the nearest exponent.
#[must_use]
pub fn power_of_two_label(position: f64, problem_sizes: &[u64]) -> String {
    if position < -0.25 {
        return String::new();
    }
    let index = position.round() as usize;
    if (position - index as f64).abs() > 0.25 || index >= problem_sizes.len() {
        return String::new();
    }
    let exponent = (problem_sizes[index] as f64).log2().round() as i64;
    format!("2^{exponent}")
}

/// Series points that a log-scale chart can place: finite and positive,
/// paired with their x position
#[must_use]
pub fn plottable_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && **v > 0.0)
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// Render one metric's comparison chart to a PNG file.
///
/// `series` pairs each kernel with its metric values, aligned to
/// `problem_sizes`.
///
/// # Errors
///
/// Returns [`TrazarError::Render`] if the drawing backend fails (file
/// creation, font loading, or chart construction).
pub fn render_chart(
    metric: MetricKind,
    problem_sizes: &[u64],
    series: &[(KernelKind, Vec<f64>)],
    path: &Path,
) -> Result<()> {
    draw_chart(metric, problem_sizes, series, path).map_err(|e| TrazarError::Render {
        metric,
        reason: e.to_string(),
    })
}

/// Y-axis range covering every plottable value, padded one octave each way
fn y_axis_range(series: &[(KernelKind, Vec<f64>)]) -> std::ops::Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (_, values) in series {
        for &v in values {
            if v.is_finite() && v > 0.0 {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        // Nothing plottable at all; an arbitrary non-degenerate range keeps
        // the empty chart renderable.
        return 1.0e-12..1.0;
    }
    (lo / 2.0)..(hi * 2.0)
}

fn draw_chart(
    metric: MetricKind,
    problem_sizes: &[u64],
    series: &[(KernelKind, Vec<f64>)],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = problem_sizes.len();
    let x_max = n.saturating_sub(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 40))
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..x_max + 0.5, y_axis_range(series).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Problem Sizes")
        .y_desc(format!("{} ({})", metric.name(), metric.unit()))
        .x_labels(n.max(2))
        .x_label_formatter(&|x| power_of_two_label(*x, problem_sizes))
        .draw()?;

    for (kernel, values) in series {
        let color = series_color(*kernel);
        let points = plottable_points(values);

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(kernel.legend_label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        match kernel {
            KernelKind::Direct => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
                )?;
            },
            KernelKind::Vector => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Cross::new((x, y), 5, color.stroke_width(2))),
                )?;
            },
            KernelKind::Indirect => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| TriangleMarker::new((x, y), 6, color.filled())),
                )?;
            },
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
