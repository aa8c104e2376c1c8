//! Error types for the trazar pipeline.
//!
//! Every failure in the pipeline is fatal by design: a missing input file,
//! a malformed row, or misaligned datasets abort the run before any further
//! chart is produced. There is no recoverable-error path.

use thiserror::Error;

use crate::kernel::KernelKind;
use crate::metrics::MetricKind;

/// Errors raised while loading, validating, or rendering benchmark data
#[derive(Debug, Error)]
pub enum TrazarError {
    /// File or directory could not be opened or created
    #[error("I/O error at {path}: {message}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying OS error description
        message: String,
    },

    /// CSV header or row could not be parsed
    #[error("CSV parse error in {path} at line {line}: {message}")]
    CsvParse {
        /// Input file
        path: String,
        /// 1-based line number (line 1 is the header)
        line: usize,
        /// Description of the parse failure
        message: String,
    },

    /// A required column is absent from the header row
    #[error("missing column '{column}' in {path}")]
    MissingColumn {
        /// Input file
        path: String,
        /// The column that was expected
        column: String,
    },

    /// The table has a header but no measurement rows
    #[error("no measurement rows in {path}")]
    EmptyDataset {
        /// Input file
        path: String,
    },

    /// A row holds a value outside the measurement domain
    #[error("invalid measurement in {path} at line {line}: {reason}")]
    InvalidMeasurement {
        /// Input file
        path: String,
        /// 1-based line number of the offending row
        line: usize,
        /// Why the row was rejected
        reason: String,
    },

    /// Two datasets differ in row count
    #[error("dataset length mismatch for {kernel}: expected {expected} rows, got {actual}")]
    LengthMismatch {
        /// Kernel whose dataset disagrees with the reference
        kernel: KernelKind,
        /// Row count of the reference (direct) dataset
        expected: usize,
        /// Row count actually found
        actual: usize,
    },

    /// Two datasets disagree on a problem size
    #[error("problem size mismatch for {kernel} at row {index}: expected {expected}, got {actual}")]
    AlignmentMismatch {
        /// Kernel whose dataset disagrees with the reference
        kernel: KernelKind,
        /// 0-based row index of the first disagreement
        index: usize,
        /// Problem size in the reference (direct) dataset
        expected: u64,
        /// Problem size actually found
        actual: u64,
    },

    /// Chart could not be drawn or written
    #[error("failed to render {metric} chart: {reason}")]
    Render {
        /// Metric whose chart failed
        metric: MetricKind,
        /// Description from the drawing backend
        reason: String,
    },
}

/// Result type for trazar operations
pub type Result<T> = std::result::Result<T, TrazarError>;
