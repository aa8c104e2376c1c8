//! # Trazar
//!
//! Benchmark comparison plotter for three summation kernels.
//!
//! Trazar (Spanish: "to plot, to trace") reads the measurement tables
//! produced by benchmarking three ways of computing `0 + 1 + ... + N-1`
//! (direct register accumulation, vectorized summation, and indirect
//! summation through an index vector), derives four performance metrics,
//! and renders one comparison chart per metric.
//!
//! ## Pipeline
//!
//! - **Load**: one CSV table per kernel (`problem_size`, `elapsed_time`)
//! - **Validate**: all three tables must share one problem-size sequence
//! - **Compute**: runtime, MFLOP/s, bandwidth utilization, memory latency
//! - **Render**: one log-scale PNG line chart per metric, plus console
//!   diagnostics
//!
//! Strictly single-threaded and fail-fast: any missing file, malformed
//! row, or misaligned dataset aborts the run before further output.
//!
//! ## Example
//!
//! ```rust
//! use trazar::dataset::{Dataset, Measurement};
//! use trazar::kernel::KernelKind;
//! use trazar::metrics;
//!
//! let ds = Dataset {
//!     kernel: KernelKind::Vector,
//!     rows: vec![Measurement {
//!         problem_size: 1024,
//!         elapsed_time: 0.5,
//!     }],
//! };
//!
//! // 1024 elements in half a second: 0.002048 MFLOP/s
//! let throughput = metrics::mflops(&ds);
//! assert!((throughput[0] - 0.002048).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Metric arithmetic converts u64 problem sizes to f64; precision loss is
// acceptable for plotting.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]

/// CLI surface and the load-validate-compute-plot pipeline
pub mod cli;
/// Measurement loading and alignment validation
pub mod dataset;
pub mod error;
/// Summation kernel identification
pub mod kernel;
/// The four derived performance metrics and the hardware profile
pub mod metrics;
/// Per-metric PNG chart rendering
pub mod plot;
/// Console diagnostics
pub mod report;

pub use error::{Result, TrazarError};
