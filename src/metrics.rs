//! Derived performance metrics.
//!
//! Four pure functions map a kernel's dataset to an aligned series of
//! values, one per problem size:
//! - runtime (seconds)
//! - throughput (MFLOP/s, element count as the operation-count proxy)
//! - memory-bandwidth utilization (fraction of theoretical peak)
//! - average memory latency (seconds per access)
//!
//! The direct kernel is defined to touch no addressable memory, so its
//! bandwidth is exactly zero and its latency divides a positive time by
//! zero accesses. The division is computed honestly under IEEE-754 and
//! yields `f64::INFINITY`: that infinity is the "metric inapplicable"
//! signal, visible in console diagnostics and omitted from log-scale
//! charts rather than silently guessed around.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Size of one summed element in bytes (64-bit values)
pub const ELEMENT_SIZE_BYTES: f64 = 8.0;

/// Default memory clock in Hz (DDR4-2400)
pub const DEFAULT_MEMORY_SPEED_HZ: f64 = 2400.0e6;

/// Default bus width of one channel in bytes (64-bit bus)
pub const DEFAULT_BUS_WIDTH_BYTES: f64 = 8.0;

/// Default number of memory channels (dual channel)
pub const DEFAULT_CHANNEL_COUNT: f64 = 2.0;

// ============================================================================
// Metric Identification
// ============================================================================

/// The four derived metrics, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Wall-clock runtime
    Time,
    /// Throughput in millions of operations per second
    Mflops,
    /// Fraction of theoretical peak memory bandwidth utilized
    Bandwidth,
    /// Average time per memory access
    Latency,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl MetricKind {
    /// All metrics, in rendering order
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Time, Self::Mflops, Self::Bandwidth, Self::Latency]
    }

    /// Short name, also the chart file stem
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Mflops => "mflops",
            Self::Bandwidth => "bandwidth",
            Self::Latency => "latency",
        }
    }

    /// Unit label for the chart's y-axis
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Time => "sec",
            Self::Mflops => "MFLOP/s",
            Self::Bandwidth => "% Bandwidth",
            Self::Latency => "sec per access",
        }
    }
}

// ============================================================================
// Hardware Capacity Configuration
// ============================================================================

/// Theoretical peak memory bandwidth of the benchmarked machine.
///
/// Passed explicitly into the bandwidth computation; there is no ambient
/// global. The default describes a dual-channel DDR4-2400 laptop:
/// 2400 MHz x 8 bytes x 2 channels = 38.4 GB/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Memory clock in Hz
    pub memory_speed_hz: f64,
    /// Bus width of one channel in bytes
    pub bus_width_bytes: f64,
    /// Number of memory channels
    pub channel_count: f64,
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            memory_speed_hz: DEFAULT_MEMORY_SPEED_HZ,
            bus_width_bytes: DEFAULT_BUS_WIDTH_BYTES,
            channel_count: DEFAULT_CHANNEL_COUNT,
        }
    }
}

impl HardwareProfile {
    /// Peak memory bandwidth in bytes per second
    #[must_use]
    pub fn capacity_bytes_per_sec(&self) -> f64 {
        self.memory_speed_hz * self.bus_width_bytes * self.channel_count
    }
}

// ============================================================================
// Metric Functions
// ============================================================================

/// Runtime series: the elapsed-time column. Unit: seconds.
#[must_use]
pub fn kernel_time(dataset: &Dataset) -> Vec<f64> {
    dataset.rows.iter().map(|m| m.elapsed_time).collect()
}

/// Throughput series: (problem_size / 1e6) / elapsed_time. Unit: MFLOP/s.
///
/// The element count stands in for the operation count.
#[must_use]
pub fn mflops(dataset: &Dataset) -> Vec<f64> {
    dataset
        .rows
        .iter()
        .map(|m| (m.problem_size as f64 / 1.0e6) / m.elapsed_time)
        .collect()
}

/// Bandwidth-utilization series: (bytes / elapsed_time) / capacity.
/// Unit: fraction of theoretical peak.
///
/// Bytes accessed are zero for the direct kernel and
/// `problem_size * 8` otherwise.
#[must_use]
pub fn bandwidth(dataset: &Dataset, hardware: &HardwareProfile) -> Vec<f64> {
    let capacity = hardware.capacity_bytes_per_sec();
    dataset
        .rows
        .iter()
        .map(|m| {
            let bytes = if dataset.kernel.touches_memory() {
                m.problem_size as f64 * ELEMENT_SIZE_BYTES
            } else {
                0.0
            };
            (bytes / m.elapsed_time) / capacity
        })
        .collect()
}

/// Average-latency series: elapsed_time / accesses. Unit: sec/access.
///
/// Accesses are zero for the direct kernel, which makes every value of
/// its series `f64::INFINITY` (see module docs).
#[must_use]
pub fn latency(dataset: &Dataset) -> Vec<f64> {
    dataset
        .rows
        .iter()
        .map(|m| {
            let accesses = if dataset.kernel.touches_memory() {
                m.problem_size as f64
            } else {
                0.0
            };
            m.elapsed_time / accesses
        })
        .collect()
}

/// Compute the series for any metric against one kernel's dataset
#[must_use]
pub fn compute(metric: MetricKind, dataset: &Dataset, hardware: &HardwareProfile) -> Vec<f64> {
    match metric {
        MetricKind::Time => kernel_time(dataset),
        MetricKind::Mflops => mflops(dataset),
        MetricKind::Bandwidth => bandwidth(dataset, hardware),
        MetricKind::Latency => latency(dataset),
    }
}

/// Arithmetic mean of a series; 0.0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
