//! Summation kernel identification.
//!
//! The benchmark compares three implementations of the same sum
//! (0 + 1 + ... + N-1):
//! - Direct: accumulation in a register, no addressable memory traffic
//! - Vector: sequential reads from a contiguous buffer
//! - Indirect: reads through an index vector (pointer chasing)

use serde::{Deserialize, Serialize};

/// The three summation kernels being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelKind {
    /// Register-only accumulation loop
    Direct,
    /// Sequential summation over a contiguous buffer
    Vector,
    /// Summation through an index vector
    Indirect,
}

impl std::fmt::Display for KernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Vector => write!(f, "vector"),
            Self::Indirect => write!(f, "indirect"),
        }
    }
}

impl KernelKind {
    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "direct" => Some(Self::Direct),
            "vector" => Some(Self::Vector),
            "indirect" => Some(Self::Indirect),
            _ => None,
        }
    }

    /// All kernels, in comparison order (direct first)
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Direct, Self::Vector, Self::Indirect]
    }

    /// Legend label used on the comparison charts
    #[must_use]
    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Direct => "direct sum",
            Self::Vector => "vector sum",
            Self::Indirect => "indirect sum",
        }
    }

    /// File name of this kernel's measurement table
    #[must_use]
    pub fn csv_file_name(self) -> &'static str {
        match self {
            Self::Direct => "sum_direct.csv",
            Self::Vector => "sum_vector.csv",
            Self::Indirect => "sum_indirect.csv",
        }
    }

    /// Whether this kernel touches addressable memory.
    ///
    /// The direct kernel is defined to run entirely out of a scalar
    /// accumulator, so its memory traffic is zero by policy. This drives
    /// the bandwidth and latency metrics.
    #[must_use]
    pub fn touches_memory(self) -> bool {
        !matches!(self, Self::Direct)
    }
}
