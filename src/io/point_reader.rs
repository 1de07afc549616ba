//! Coordinate point file reader.
//!
//! Reads FFD control points or airfoil profile points stored one per line as
//! whitespace-separated `x y z` columns.
//!
//! ```text
//! # NACA 0012 FFD box
//! -0.0200  -0.0800  0.0000
//!  1.0200  -0.0800  0.0000
//!  ...
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Columns beyond the
//! third are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::mesh::MeshError;

/// Points read from a coordinate file, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Axis-aligned bounds as `([x_min, y_min, z_min], [x_max, y_max, z_max])`.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        if self.is_empty() {
            return None;
        }
        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        for (axis, values) in [&self.x, &self.y, &self.z].into_iter().enumerate() {
            for &v in values {
                lo[axis] = lo[axis].min(v);
                hi[axis] = hi[axis].max(v);
            }
        }
        Some((lo, hi))
    }
}

/// Read a coordinate point file.
pub fn read_point_file(path: &Path) -> Result<PointCloud, MeshError> {
    let file = File::open(path).map_err(|e| MeshError::file_read(path, e))?;
    parse_points(BufReader::new(file), &path.display().to_string())
}

/// Parse coordinate points from a reader.
///
/// `origin` names the input in error messages.
pub fn parse_points<R: BufRead>(reader: R, origin: &str) -> Result<PointCloud, MeshError> {
    let mut points = PointCloud::default();
    let mut n_lines = 0;

    for (idx, line_result) in reader.lines().enumerate() {
        let line_num = idx + 1;
        n_lines = line_num;
        let line = line_result
            .map_err(|e| MeshError::file_parse(origin, line_num, format!("read failed: {}", e)))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(MeshError::file_parse(
                origin,
                line_num,
                format!("expected 3 columns (x y z), found {}", parts.len()),
            ));
        }

        let mut xyz = [0.0; 3];
        for (value, token) in xyz.iter_mut().zip(&parts) {
            *value = token.parse().map_err(|_| {
                MeshError::file_parse(origin, line_num, format!("invalid number: {}", token))
            })?;
        }

        points.x.push(xyz[0]);
        points.y.push(xyz[1]);
        points.z.push(xyz[2]);
    }

    if points.is_empty() {
        return Err(MeshError::file_parse(
            origin,
            n_lines.max(1),
            "no points found",
        ));
    }

    debug!(origin, n_points = points.len(), "parsed point file");
    Ok(points)
}
