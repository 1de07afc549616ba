//! Aerodynamic coefficient results file.
//!
//! One comma-separated row per solved flow condition, appended as results
//! come in:
//!
//! ```text
//! 6000000, 0, 0.0001, 0.0082, 0.0000
//! 6000000, 2, 0.2201, 0.0085, -0.0012
//! ```
//!
//! Columns: Reynolds number, angle of attack (degrees), CL, CD, CM.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Error type for results file operations.
#[derive(Debug, Error)]
pub enum ResultsFileError {
    /// IO error opening, reading or appending.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed row.
    #[error("Parse error on line {line}: {reason}")]
    ParseError { line: usize, reason: String },
}

/// Lift, drag and moment coefficients returned by a flow solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coefficients {
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,
}

/// One row of the results file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientRecord {
    pub reynolds: f64,
    pub aoa_degrees: f64,
    pub coefficients: Coefficients,
}

impl CoefficientRecord {
    pub fn new(reynolds: f64, aoa_degrees: f64, coefficients: Coefficients) -> Self {
        Self {
            reynolds,
            aoa_degrees,
            coefficients,
        }
    }

    /// Row text without the trailing newline.
    pub fn to_row(&self) -> String {
        let c = &self.coefficients;
        format!(
            "{}, {}, {}, {}, {}",
            self.reynolds, self.aoa_degrees, c.cl, c.cd, c.cm
        )
    }
}

/// Append one record to the results file, creating it if needed.
pub fn append_coefficients(path: &Path, record: &CoefficientRecord) -> Result<(), ResultsFileError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", record.to_row())?;
    Ok(())
}

/// Read every record from a results file.
pub fn read_coefficients(path: &Path) -> Result<Vec<CoefficientRecord>, ResultsFileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|s| s.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ResultsFileError::ParseError {
                line: idx + 1,
                reason: e.to_string(),
            })?;

        let &[reynolds, aoa, cl, cd, cm] = values.as_slice() else {
            return Err(ResultsFileError::ParseError {
                line: idx + 1,
                reason: format!("expected 5 columns, found {}", values.len()),
            });
        };

        records.push(CoefficientRecord::new(
            reynolds,
            aoa,
            Coefficients { cl, cd, cm },
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_row_format() {
        let record = CoefficientRecord::new(
            6e6,
            4.0,
            Coefficients {
                cl: 0.44,
                cd: 0.0087,
                cm: -0.001,
            },
        );
        assert_eq!(record.to_row(), "6000000, 4, 0.44, 0.0087, -0.001");
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        for aoa in [0.0, 2.0] {
            let record = CoefficientRecord::new(
                1e6,
                aoa,
                Coefficients {
                    cl: 0.11 * aoa,
                    cd: 0.008,
                    cm: 0.0,
                },
            );
            append_coefficients(&path, &record).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        let records = read_coefficients(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].aoa_degrees, 2.0);
        assert_eq!(records[1].coefficients.cl, 0.22);
    }

    #[test]
    fn test_read_rejects_short_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "1e6, 0, 0.1, 0.01\n").unwrap();

        let err = read_coefficients(&path).unwrap_err();
        assert!(matches!(err, ResultsFileError::ParseError { line: 1, .. }));
    }
}
