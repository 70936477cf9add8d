//! Benchmark data structures and CSV/JSON export.

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::Key;
use crate::registry::Algorithm;

/// Why a cell holds no measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// N is above the configured ceiling for this algorithm
    AboveCeiling { ceiling: usize },
    /// The recursive variant ran out of recursion budget
    StackExhausted,
    /// The run deadline passed before the cell started
    Deadline,
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::AboveCeiling { .. } => "above_ceiling",
            SkipReason::StackExhausted => "stack_exhausted",
            SkipReason::Deadline => "deadline",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AboveCeiling { ceiling } => write!(f, "N above ceiling {}", ceiling),
            SkipReason::StackExhausted => f.write_str("recursion budget exhausted"),
            SkipReason::Deadline => f.write_str("deadline reached"),
        }
    }
}

/// A measured duration or an explicit skip sentinel. Never zero for "skipped".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Measured { millis: f64 },
    Skipped { reason: SkipReason },
}

impl Cell {
    pub fn millis(&self) -> Option<f64> {
        match self {
            Cell::Measured { millis } => Some(*millis),
            Cell::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Cell::Skipped { .. })
    }
}

/// One (algorithm, N) measurement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub algorithm: Algorithm,
    pub size: usize,
    pub cell: Cell,
}

/// All samples taken for one input size, in column order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub size: usize,
    pub samples: Vec<TimingSample>,
}

impl BenchmarkRow {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            samples: Vec::new(),
        }
    }

    pub fn cell(&self, algorithm: Algorithm) -> Option<&Cell> {
        self.samples
            .iter()
            .find(|s| s.algorithm == algorithm)
            .map(|s| &s.cell)
    }
}

/// The full table: one row per requested size, one column per algorithm
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub key: Key,
    pub search_target: f64,
    pub columns: Vec<Algorithm>,
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkResult {
    pub fn new(key: Key, search_target: f64, columns: Vec<Algorithm>) -> Self {
        Self {
            key,
            search_target,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.size).collect()
    }

    /// `(N, ms)` points for one algorithm, `None` where the cell was skipped
    pub fn series(&self, algorithm: Algorithm) -> Vec<(usize, Option<f64>)> {
        self.rows
            .iter()
            .map(|row| (row.size, row.cell(algorithm).and_then(Cell::millis)))
            .collect()
    }

    pub fn samples(&self) -> impl Iterator<Item = &TimingSample> {
        self.rows.iter().flat_map(|r| r.samples.iter())
    }

    /// Write raw samples as CSV: `algorithm,input_size,elapsed_ms,status`
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "algorithm,input_size,elapsed_ms,status")?;

        for sample in self.samples() {
            match sample.cell {
                Cell::Measured { millis } => {
                    writeln!(out, "{},{},{:.6},measured", sample.algorithm, sample.size, millis)?
                }
                Cell::Skipped { reason } => {
                    writeln!(out, "{},{},,{}", sample.algorithm, sample.size, reason.code())?
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Export raw samples to a CSV file
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }

    /// Export the whole result as pretty JSON
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> BenchmarkResult {
        let mut result = BenchmarkResult::new(
            Key::Rating,
            8.5,
            vec![Algorithm::QuickIterative, Algorithm::InsertionRecursive],
        );
        for (size, skipped) in [(100, false), (2000, true)] {
            let mut row = BenchmarkRow::new(size);
            row.samples.push(TimingSample {
                algorithm: Algorithm::QuickIterative,
                size,
                cell: Cell::Measured { millis: 0.25 },
            });
            row.samples.push(TimingSample {
                algorithm: Algorithm::InsertionRecursive,
                size,
                cell: if skipped {
                    Cell::Skipped {
                        reason: SkipReason::AboveCeiling { ceiling: 1500 },
                    }
                } else {
                    Cell::Measured { millis: 1.5 }
                },
            });
            result.rows.push(row);
        }
        result
    }

    #[test]
    fn test_series_marks_skips() {
        let result = sample_result();
        assert_eq!(
            result.series(Algorithm::InsertionRecursive),
            vec![(100, Some(1.5)), (2000, None)]
        );
        assert_eq!(result.series(Algorithm::BinarySearch), vec![(100, None), (2000, None)]);
        assert_eq!(result.sizes(), vec![100, 2000]);
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        sample_result().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "algorithm,input_size,elapsed_ms,status");
        assert_eq!(lines[1], "quick-iterative,100,0.250000,measured");
        assert_eq!(lines[4], "insertion-recursive,2000,,above_ceiling");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_json_keeps_skip_sentinel() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"skipped\""));
        assert!(json.contains("\"above_ceiling\""));
        let back: BenchmarkResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_export_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = sample_result();

        let csv_path = dir.path().join("bench.csv");
        result.export_csv(&csv_path).unwrap();
        assert_eq!(std::fs::read_to_string(&csv_path).unwrap().lines().count(), 5);

        let json_path = dir.path().join("bench.json");
        result.export_json(&json_path).unwrap();
        let text = std::fs::read_to_string(&json_path).unwrap();
        let back: BenchmarkResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.rows.len(), 2);
    }
}
