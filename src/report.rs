//! Console diagnostics for metric comparisons.
//!
//! For each metric the report states the mean vector/indirect ratio, then
//! each kernel's full series with its mean, then a separator. Rendered into
//! a `String` so the output is deterministic and testable; the CLI layer
//! prints it. This is the only user-visible output besides the chart files.

use std::fmt::Write as FmtWrite;

use crate::metrics::{mean, MetricKind};

/// Width of the separator line between metric blocks
const SEPARATOR_WIDTH: usize = 50;

/// Render one metric's diagnostic block.
///
/// The three series are printed in comparison order (direct, vector,
/// indirect). Inapplicable values (`0`, `inf`) are printed as-is so the
/// reader can see where a metric does not apply.
#[must_use]
pub fn render_metric_report(
    metric: MetricKind,
    direct: &[f64],
    vector: &[f64],
    indirect: &[f64],
) -> String {
    let mut out = String::new();

    let ratios: Vec<f64> = vector
        .iter()
        .zip(indirect)
        .map(|(v, i)| v / i)
        .collect();
    writeln!(
        out,
        "{metric} vector/indirect = {:.4}",
        mean(&ratios)
    )
    .expect("failed to write report output");

    for series in [direct, vector, indirect] {
        writeln!(out, "{series:?} {}", mean(series)).expect("failed to write report output");
    }

    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH)).expect("failed to write report output");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_structure() {
        let report = render_metric_report(
            MetricKind::Time,
            &[0.001, 0.002],
            &[0.002, 0.004],
            &[0.004, 0.008],
        );

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "time vector/indirect = 0.5000");
        assert!(lines[1].starts_with("[0.001, 0.002]"));
        assert_eq!(lines[4], "=".repeat(50));
    }

    #[test]
    fn test_ratio_is_mean_of_elementwise_ratios() {
        // Ratios 2.0 and 0.5 have mean 1.25: not the ratio of the means.
        let report = render_metric_report(
            MetricKind::Mflops,
            &[1.0, 1.0],
            &[2.0, 1.0],
            &[1.0, 2.0],
        );
        assert!(report.starts_with("mflops vector/indirect = 1.2500"));
    }

    #[test]
    fn test_series_line_holds_values_and_mean() {
        let report = render_metric_report(MetricKind::Latency, &[1.0, 3.0], &[1.0, 1.0], &[1.0, 1.0]);
        assert!(report.contains("[1.0, 3.0] 2"));
    }

    #[test]
    fn test_inapplicable_values_are_printed_verbatim() {
        let report = render_metric_report(
            MetricKind::Latency,
            &[f64::INFINITY, f64::INFINITY],
            &[0.0005, 0.0005],
            &[0.001, 0.001],
        );
        assert!(report.contains("[inf, inf] inf"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let args = (
            MetricKind::Bandwidth,
            [0.0, 0.0],
            [0.125, 0.25],
            [0.0625, 0.125],
        );
        let first = render_metric_report(args.0, &args.1, &args.2, &args.3);
        let second = render_metric_report(args.0, &args.1, &args.2, &args.3);
        assert_eq!(first, second);
    }
}
