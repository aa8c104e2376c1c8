//! Measurement loading and alignment validation.
//!
//! Each kernel's benchmark run produces one CSV table with a header row and
//! two required columns: `problem_size` (elements summed) and `elapsed_time`
//! (seconds). Row order is significant: the three tables must list the same
//! problem sizes in the same order, and [`BenchmarkSuite::new`] refuses to
//! construct a suite that violates that invariant. Metrics are only ever
//! computed against a validated suite.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrazarError};
use crate::kernel::KernelKind;

/// One benchmark measurement: a problem size and the time it took
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Number of elements summed (assumed to be a power of two)
    pub problem_size: u64,
    /// Wall-clock runtime in seconds, strictly positive
    pub elapsed_time: f64,
}

/// Ordered measurements for a single kernel, immutable after load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Kernel these measurements belong to
    pub kernel: KernelKind,
    /// Measurement rows in file order
    pub rows: Vec<Measurement>,
}

impl Dataset {
    /// Load a kernel's measurement table from a CSV file.
    ///
    /// Fails on a missing file, a missing required column, an unparsable
    /// row, a non-positive or non-finite elapsed time, a zero problem size,
    /// or an empty table. No partial load: the first bad row aborts.
    ///
    /// # Errors
    ///
    /// Returns [`TrazarError::Io`], [`TrazarError::CsvParse`],
    /// [`TrazarError::MissingColumn`], [`TrazarError::InvalidMeasurement`],
    /// or [`TrazarError::EmptyDataset`].
    pub fn from_csv_path<P: AsRef<Path>>(kernel: KernelKind, path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let mut reader = csv::Reader::from_path(path).map_err(|e| TrazarError::Io {
            path: display.clone(),
            message: format!("failed to open CSV: {e}"),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| TrazarError::CsvParse {
                path: display.clone(),
                line: 1,
                message: format!("failed to read headers: {e}"),
            })?
            .clone();

        for column in ["problem_size", "elapsed_time"] {
            if !headers.iter().any(|h| h == column) {
                return Err(TrazarError::MissingColumn {
                    path: display.clone(),
                    column: column.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for (i, record) in reader.deserialize::<Measurement>().enumerate() {
            let line = i + 2;
            let row = record.map_err(|e| TrazarError::CsvParse {
                path: display.clone(),
                line,
                message: e.to_string(),
            })?;
            Self::check_row(&row, &display, line)?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(TrazarError::EmptyDataset { path: display });
        }

        Ok(Self { kernel, rows })
    }

    /// Reject rows outside the measurement domain
    fn check_row(row: &Measurement, path: &str, line: usize) -> Result<()> {
        if row.problem_size == 0 {
            return Err(TrazarError::InvalidMeasurement {
                path: path.to_string(),
                line,
                reason: "problem_size must be positive".to_string(),
            });
        }
        if !row.elapsed_time.is_finite() || row.elapsed_time <= 0.0 {
            return Err(TrazarError::InvalidMeasurement {
                path: path.to_string(),
                line,
                reason: format!(
                    "elapsed_time must be a positive number of seconds, got {}",
                    row.elapsed_time
                ),
            });
        }
        Ok(())
    }

    /// Problem-size column, in row order
    #[must_use]
    pub fn problem_sizes(&self) -> Vec<u64> {
        self.rows.iter().map(|m| m.problem_size).collect()
    }

    /// Elapsed-time column in seconds, in row order
    #[must_use]
    pub fn elapsed_times(&self) -> Vec<f64> {
        self.rows.iter().map(|m| m.elapsed_time).collect()
    }

    /// Number of measurement rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The three kernel datasets, validated to share one problem-size sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    /// Direct kernel measurements
    pub direct: Dataset,
    /// Vector kernel measurements
    pub vector: Dataset,
    /// Indirect kernel measurements
    pub indirect: Dataset,
}

impl BenchmarkSuite {
    /// Assemble a suite, enforcing the alignment invariant.
    ///
    /// The vector and indirect datasets must match the direct dataset's
    /// problem-size sequence exactly: same length, same values, same order.
    /// Metrics computed against misaligned problem sizes would be
    /// meaningless, so a mismatch is fatal.
    ///
    /// # Errors
    ///
    /// Returns [`TrazarError::LengthMismatch`] or
    /// [`TrazarError::AlignmentMismatch`] naming the offending kernel and
    /// the first differing row.
    pub fn new(direct: Dataset, vector: Dataset, indirect: Dataset) -> Result<Self> {
        Self::check_aligned(&direct, &vector)?;
        Self::check_aligned(&direct, &indirect)?;
        Ok(Self {
            direct,
            vector,
            indirect,
        })
    }

    /// Load all three kernel tables from a directory and validate alignment.
    ///
    /// File names are fixed per kernel (`sum_direct.csv`, `sum_vector.csv`,
    /// `sum_indirect.csv`).
    ///
    /// # Errors
    ///
    /// Propagates any [`Dataset::from_csv_path`] failure, then any
    /// alignment failure from [`BenchmarkSuite::new`].
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let load = |kernel: KernelKind| Dataset::from_csv_path(kernel, dir.join(kernel.csv_file_name()));
        Self::new(
            load(KernelKind::Direct)?,
            load(KernelKind::Vector)?,
            load(KernelKind::Indirect)?,
        )
    }

    fn check_aligned(reference: &Dataset, other: &Dataset) -> Result<()> {
        if reference.len() != other.len() {
            return Err(TrazarError::LengthMismatch {
                kernel: other.kernel,
                expected: reference.len(),
                actual: other.len(),
            });
        }
        for (index, (r, o)) in reference.rows.iter().zip(&other.rows).enumerate() {
            if r.problem_size != o.problem_size {
                return Err(TrazarError::AlignmentMismatch {
                    kernel: other.kernel,
                    index,
                    expected: r.problem_size,
                    actual: o.problem_size,
                });
            }
        }
        Ok(())
    }

    /// Dataset for the given kernel
    #[must_use]
    pub fn dataset(&self, kernel: KernelKind) -> &Dataset {
        match kernel {
            KernelKind::Direct => &self.direct,
            KernelKind::Vector => &self.vector,
            KernelKind::Indirect => &self.indirect,
        }
    }

    /// The shared problem-size sequence (taken from the direct dataset)
    #[must_use]
    pub fn problem_sizes(&self) -> Vec<u64> {
        self.direct.problem_sizes()
    }

    /// Number of rows in each dataset
    #[must_use]
    pub fn len(&self) -> usize {
        self.direct.len()
    }

    /// Whether the suite holds no measurements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    // ========================================================================
    // Helpers
    // ========================================================================

    fn dataset(kernel: KernelKind, rows: &[(u64, f64)]) -> Dataset {
        Dataset {
            kernel,
            rows: rows
                .iter()
                .map(|&(problem_size, elapsed_time)| Measurement {
                    problem_size,
                    elapsed_time,
                })
                .collect(),
        }
    }

    fn write_csv(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create csv");
        write!(file, "{body}").expect("write csv");
        path
    }

    // ========================================================================
    // CSV Loading
    // ========================================================================

    #[test]
    fn test_load_well_formed_table() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(
            &dir,
            "sum_vector.csv",
            "problem_size,elapsed_time\n64,0.001\n128,0.002\n",
        );

        let ds = Dataset::from_csv_path(KernelKind::Vector, &path).expect("load");
        assert_eq!(ds.kernel, KernelKind::Vector);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.problem_sizes(), vec![64, 128]);
        assert!((ds.elapsed_times()[1] - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(
            &dir,
            "extra.csv",
            "problem_size,elapsed_time,iterations\n64,0.001,5\n",
        );

        let ds = Dataset::from_csv_path(KernelKind::Direct, &path).expect("load");
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::from_csv_path(KernelKind::Direct, "no/such/file.csv").unwrap_err();
        assert!(matches!(err, TrazarError::Io { .. }));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(&dir, "bad.csv", "problem_size,runtime\n64,0.001\n");

        let err = Dataset::from_csv_path(KernelKind::Direct, &path).unwrap_err();
        match err {
            TrazarError::MissingColumn { column, .. } => assert_eq!(column, "elapsed_time"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(
            &dir,
            "bad.csv",
            "problem_size,elapsed_time\n64,0.001\nnot_a_number,0.002\n",
        );

        let err = Dataset::from_csv_path(KernelKind::Direct, &path).unwrap_err();
        match err {
            TrazarError::CsvParse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected CsvParse, got {other}"),
        }
    }

    #[test]
    fn test_nonpositive_elapsed_time_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        for bad in ["0.0", "-1.5", "NaN", "inf"] {
            let path = write_csv(
                &dir,
                "bad.csv",
                &format!("problem_size,elapsed_time\n64,{bad}\n"),
            );
            let err = Dataset::from_csv_path(KernelKind::Direct, &path).unwrap_err();
            assert!(
                matches!(err, TrazarError::InvalidMeasurement { line: 2, .. }),
                "elapsed_time={bad} should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn test_zero_problem_size_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(&dir, "bad.csv", "problem_size,elapsed_time\n0,0.001\n");

        let err = Dataset::from_csv_path(KernelKind::Direct, &path).unwrap_err();
        assert!(matches!(err, TrazarError::InvalidMeasurement { .. }));
    }

    #[test]
    fn test_header_only_table_is_empty_dataset() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_csv(&dir, "empty.csv", "problem_size,elapsed_time\n");

        let err = Dataset::from_csv_path(KernelKind::Direct, &path).unwrap_err();
        assert!(matches!(err, TrazarError::EmptyDataset { .. }));
    }

    // ========================================================================
    // Alignment Validation
    // ========================================================================

    #[test]
    fn test_aligned_suite_constructs() {
        let rows = [(64, 0.001), (128, 0.002)];
        let suite = BenchmarkSuite::new(
            dataset(KernelKind::Direct, &rows),
            dataset(KernelKind::Vector, &rows),
            dataset(KernelKind::Indirect, &rows),
        )
        .expect("aligned suite");

        assert_eq!(suite.len(), 2);
        assert_eq!(suite.problem_sizes(), vec![64, 128]);
        assert!(!suite.is_empty());
    }

    #[test]
    fn test_extra_row_is_length_mismatch() {
        let err = BenchmarkSuite::new(
            dataset(KernelKind::Direct, &[(64, 0.001)]),
            dataset(KernelKind::Vector, &[(64, 0.001), (128, 0.002)]),
            dataset(KernelKind::Indirect, &[(64, 0.001)]),
        )
        .unwrap_err();

        match err {
            TrazarError::LengthMismatch {
                kernel,
                expected,
                actual,
            } => {
                assert_eq!(kernel, KernelKind::Vector);
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            },
            other => panic!("expected LengthMismatch, got {other}"),
        }
    }

    #[test]
    fn test_differing_size_is_alignment_mismatch() {
        let err = BenchmarkSuite::new(
            dataset(KernelKind::Direct, &[(64, 0.001), (128, 0.002)]),
            dataset(KernelKind::Vector, &[(64, 0.001), (128, 0.002)]),
            dataset(KernelKind::Indirect, &[(64, 0.001), (256, 0.002)]),
        )
        .unwrap_err();

        match err {
            TrazarError::AlignmentMismatch {
                kernel,
                index,
                expected,
                actual,
            } => {
                assert_eq!(kernel, KernelKind::Indirect);
                assert_eq!(index, 1);
                assert_eq!(expected, 128);
                assert_eq!(actual, 256);
            },
            other => panic!("expected AlignmentMismatch, got {other}"),
        }
    }

    #[test]
    fn test_elapsed_times_may_differ_across_kernels() {
        let suite = BenchmarkSuite::new(
            dataset(KernelKind::Direct, &[(64, 0.001)]),
            dataset(KernelKind::Vector, &[(64, 0.005)]),
            dataset(KernelKind::Indirect, &[(64, 0.020)]),
        )
        .expect("times differ, sizes align");

        assert!((suite.dataset(KernelKind::Indirect).rows[0].elapsed_time - 0.020).abs() < 1e-12);
    }

    #[test]
    fn test_dataset_lookup_by_kernel() {
        let rows = [(64, 0.001)];
        let suite = BenchmarkSuite::new(
            dataset(KernelKind::Direct, &rows),
            dataset(KernelKind::Vector, &rows),
            dataset(KernelKind::Indirect, &rows),
        )
        .expect("suite");

        for kernel in KernelKind::all() {
            assert_eq!(suite.dataset(kernel).kernel, kernel);
        }
    }

    // ========================================================================
    // Directory Loading
    // ========================================================================

    #[test]
    fn test_load_dir_reads_all_three_tables() {
        let dir = TempDir::new().expect("tempdir");
        for kernel in KernelKind::all() {
            write_csv(
                &dir,
                kernel.csv_file_name(),
                "problem_size,elapsed_time\n64,0.001\n128,0.002\n",
            );
        }

        let suite = BenchmarkSuite::load_dir(dir.path()).expect("load_dir");
        assert_eq!(suite.len(), 2);
    }

    #[test]
    fn test_load_dir_fails_on_missing_table() {
        let dir = TempDir::new().expect("tempdir");
        write_csv(
            &dir,
            KernelKind::Direct.csv_file_name(),
            "problem_size,elapsed_time\n64,0.001\n",
        );

        let err = BenchmarkSuite::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TrazarError::Io { .. }));
    }

    #[test]
    fn test_load_dir_rejects_misaligned_tables() {
        let dir = TempDir::new().expect("tempdir");
        write_csv(
            &dir,
            KernelKind::Direct.csv_file_name(),
            "problem_size,elapsed_time\n64,0.001\n",
        );
        write_csv(
            &dir,
            KernelKind::Vector.csv_file_name(),
            "problem_size,elapsed_time\n64,0.001\n128,0.002\n",
        );
        write_csv(
            &dir,
            KernelKind::Indirect.csv_file_name(),
            "problem_size,elapsed_time\n64,0.001\n",
        );

        let err = BenchmarkSuite::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TrazarError::LengthMismatch { .. }));
    }
}
