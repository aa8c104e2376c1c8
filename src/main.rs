//! Trazar CLI - benchmark comparison plotter
//!
//! Reads the three summation-kernel measurement tables from `build/`,
//! derives runtime, throughput, bandwidth-utilization and memory-latency
//! metrics, prints per-metric diagnostics, and writes one comparison
//! chart per metric to `images/`.
//!
//! Exits 0 on success; any fatal condition (missing input, misaligned
//! datasets, render failure) prints a diagnostic to stderr and exits 1.

use clap::Parser;

use trazar::cli::{entrypoint, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = entrypoint(&cli) {
        eprintln!("trazar: {e}");
        std::process::exit(1);
    }
}
