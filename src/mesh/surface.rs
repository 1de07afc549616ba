//! Structured surface mesh.
//!
//! A surface mesh is a single structured block of `x_num * y_num * z_num`
//! points stored as three flattened coordinate arrays.
//!
//! # Index ordering
//!
//! Point `(i, j, k)` lives at flat position `i + x_num * (j + y_num * k)`:
//! the spanwise index `k` varies slowest, the surface side `j` next, and the
//! chordwise index `i` fastest. The hyperbolic extruder reads the arrays in
//! exactly this order, so every constructor here fills them that way.
//!
//! ```text
//! k = 0: j = 0 (lower)  i = 0 .. x_num-1
//!        j = 1 (upper)  i = 0 .. x_num-1
//! k = 1: j = 0 (lower)  i = 0 .. x_num-1
//!        ...
//! ```

use serde::Serialize;
use tracing::debug;

use super::{MeshError, SurfaceMeshConfig};
use crate::airfoil::{compute_profile, uniform_samples};

/// Dimensions of a structured block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    /// Chordwise points (fastest index).
    pub x_num: usize,
    /// Surface sides.
    pub y_num: usize,
    /// Spanwise stations (slowest index).
    pub z_num: usize,
}

impl GridDimensions {
    pub fn new(x_num: usize, y_num: usize, z_num: usize) -> Self {
        Self {
            x_num,
            y_num,
            z_num,
        }
    }

    /// Total number of points in the block.
    pub fn n_points(&self) -> usize {
        self.x_num * self.y_num * self.z_num
    }

    /// Total number of points, or `None` if the product overflows `usize`.
    pub fn checked_n_points(&self) -> Option<usize> {
        self.x_num
            .checked_mul(self.y_num)?
            .checked_mul(self.z_num)
    }

    /// Flat array position of point `(i, j, k)`.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.x_num && j < self.y_num && k < self.z_num);
        i + self.x_num * (j + self.y_num * k)
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    ///
    /// # Panics
    ///
    /// Panics if `x_num` or `y_num` is zero.
    pub fn ijk(&self, index: usize) -> (usize, usize, usize) {
        let i = index % self.x_num;
        let rest = index / self.x_num;
        (i, rest % self.y_num, rest / self.y_num)
    }
}

/// Surface side selected by the side index `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSide {
    Lower,
    Upper,
}

impl SurfaceSide {
    /// Even side indices are the lower surface, odd ones the upper.
    pub fn from_index(j: usize) -> Self {
        if j % 2 == 0 {
            SurfaceSide::Lower
        } else {
            SurfaceSide::Upper
        }
    }
}

/// Single-block structured surface mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub dims: GridDimensions,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SurfaceMesh {
    /// Wrap flattened arrays, checking their lengths against `dims`.
    pub fn from_arrays(
        dims: GridDimensions,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    ) -> Result<Self, MeshError> {
        let n = dims.checked_n_points().ok_or_else(|| {
            MeshError::invalid_argument("dims", format!("{:?} overflows the point count", dims))
        })?;
        for (name, len) in [("x", x.len()), ("y", y.len()), ("z", z.len())] {
            if len != n {
                return Err(MeshError::invalid_argument(
                    "arrays",
                    format!("{} has {} values, dimensions require {}", name, len, n),
                ));
            }
        }
        Ok(Self { dims, x, y, z })
    }

    /// NACA 0012 surface described by `config`.
    pub fn naca0012(config: &SurfaceMeshConfig) -> Result<Self, MeshError> {
        config.validate()?;

        let x_positions = uniform_samples(config.x_num, config.chord);
        let y_upper = compute_profile(&x_positions, config.chord)?;

        let mesh = Self::from_profile(
            &x_positions,
            &y_upper,
            config.y_num,
            config.z_num,
            config.span_pitch,
        )?;
        debug!(
            x_num = config.x_num,
            y_num = config.y_num,
            z_num = config.z_num,
            chord = config.chord,
            "built NACA 0012 surface"
        );
        Ok(mesh)
    }

    /// Replicate a symmetric profile over sides and spanwise stations.
    ///
    /// Side `j` takes `-y_upper` when even and `y_upper` when odd; station
    /// `k` sits at `z = span_pitch * k`.
    pub fn from_profile(
        x_positions: &[f64],
        y_upper: &[f64],
        y_num: usize,
        z_num: usize,
        span_pitch: f64,
    ) -> Result<Self, MeshError> {
        if x_positions.len() != y_upper.len() {
            return Err(MeshError::invalid_argument(
                "profile",
                format!(
                    "{} x values but {} y values",
                    x_positions.len(),
                    y_upper.len()
                ),
            ));
        }

        let dims = GridDimensions::new(x_positions.len(), y_num, z_num);
        let n = dims.n_points();
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);

        for k in 0..z_num {
            let z_k = span_pitch * k as f64;
            for j in 0..y_num {
                let side = SurfaceSide::from_index(j);
                for (&x_i, &y_i) in x_positions.iter().zip(y_upper) {
                    x.push(x_i);
                    y.push(match side {
                        SurfaceSide::Lower => -y_i,
                        SurfaceSide::Upper => y_i,
                    });
                    z.push(z_k);
                }
            }
        }

        Ok(Self { dims, x, y, z })
    }

    /// Extrude an ordered set of profile points along the span.
    ///
    /// Produces a `(n_points, 1, n_span)` block whose stations are spread
    /// evenly over `[0, z_span]`. A single station sits at `z = 0`.
    pub fn extrude_points(
        x: &[f64],
        y: &[f64],
        z_span: f64,
        n_span: usize,
    ) -> Result<Self, MeshError> {
        if x.is_empty() {
            return Err(MeshError::invalid_argument("points", "no profile points"));
        }
        if x.len() != y.len() {
            return Err(MeshError::invalid_argument(
                "points",
                format!("{} x values but {} y values", x.len(), y.len()),
            ));
        }
        if n_span < 1 {
            return Err(MeshError::invalid_argument(
                "n_span",
                "need at least 1 spanwise station",
            ));
        }
        if !(z_span.is_finite() && z_span >= 0.0) {
            return Err(MeshError::invalid_argument(
                "z_span",
                format!("must be non-negative and finite, got {}", z_span),
            ));
        }

        let stations = uniform_samples(n_span, z_span);
        let dims = GridDimensions::new(x.len(), 1, n_span);
        let n = dims.n_points();
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let mut zs = Vec::with_capacity(n);

        for &z_k in &stations {
            xs.extend_from_slice(x);
            ys.extend_from_slice(y);
            zs.extend(std::iter::repeat_n(z_k, x.len()));
        }

        debug!(n_points = x.len(), n_span, z_span, "extruded profile points");
        Ok(Self {
            dims,
            x: xs,
            y: ys,
            z: zs,
        })
    }

    pub fn n_points(&self) -> usize {
        self.dims.n_points()
    }

    /// Coordinates of point `(i, j, k)`.
    pub fn point(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        let idx = self.dims.linear_index(i, j, k);
        [self.x[idx], self.y[idx], self.z[idx]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_index_ordering() {
        let dims = GridDimensions::new(4, 2, 3);
        assert_eq!(dims.linear_index(0, 0, 0), 0);
        assert_eq!(dims.linear_index(1, 0, 0), 1);
        assert_eq!(dims.linear_index(0, 1, 0), 4);
        assert_eq!(dims.linear_index(0, 0, 1), 8);
        assert_eq!(dims.linear_index(3, 1, 2), 23);
        assert_eq!(dims.n_points(), 24);

        for idx in 0..dims.n_points() {
            let (i, j, k) = dims.ijk(idx);
            assert_eq!(dims.linear_index(i, j, k), idx);
        }
    }

    #[test]
    fn test_point_count_and_layout() {
        let config = SurfaceMeshConfig::new(15, 2, 1.0);
        let mesh = SurfaceMesh::naca0012(&config).unwrap();

        assert_eq!(mesh.n_points(), 60);
        assert_eq!(mesh.x.len(), 60);
        assert_eq!(mesh.y.len(), 60);
        assert_eq!(mesh.z.len(), 60);
    }

    #[test]
    fn test_rigid_extrusion() {
        let config = SurfaceMeshConfig::new(9, 4, 1.0);
        let mesh = SurfaceMesh::naca0012(&config).unwrap();

        for k in 0..4 {
            for j in 0..2 {
                for i in 0..9 {
                    let p = mesh.point(i, j, k);
                    let base = mesh.point(i, j, 0);
                    assert_eq!(p[0], base[0]);
                    assert_eq!(p[1], base[1]);
                    assert_relative_eq!(p[2], 0.1 * k as f64);
                }
            }
        }
    }

    #[test]
    fn test_sides_are_mirrored() {
        let mesh = SurfaceMesh::naca0012(&SurfaceMeshConfig::default()).unwrap();
        for i in 0..mesh.dims.x_num {
            let lower = mesh.point(i, 0, 0);
            let upper = mesh.point(i, 1, 0);
            assert_eq!(upper[1], -lower[1]);
            assert!(lower[1] <= 0.0);
        }
    }

    #[test]
    fn test_single_side_is_lower() {
        let config = SurfaceMeshConfig::new(5, 1, 1.0).with_y_num(1);
        let mesh = SurfaceMesh::naca0012(&config).unwrap();
        assert_eq!(mesh.n_points(), 5);
        assert!(mesh.y.iter().all(|&y| y <= 0.0));
        assert!(mesh.y[2] < 0.0);
    }

    #[test]
    fn test_two_chord_points() {
        let config = SurfaceMeshConfig::new(2, 1, 2.5);
        let mesh = SurfaceMesh::naca0012(&config).unwrap();
        assert_eq!(mesh.x, vec![0.0, 2.5, 0.0, 2.5]);
    }

    #[test]
    fn test_extrude_points() {
        let x = [1.0, 0.5, 0.0, 0.5, 1.0];
        let y = [0.0, 0.05, 0.0, -0.05, 0.0];
        let mesh = SurfaceMesh::extrude_points(&x, &y, 0.1, 3).unwrap();

        assert_eq!(mesh.dims, GridDimensions::new(5, 1, 3));
        assert_eq!(&mesh.x[5..10], &x);
        assert_eq!(&mesh.y[10..15], &y);
        assert_relative_eq!(mesh.point(0, 0, 1)[2], 0.05);
        assert_relative_eq!(mesh.point(4, 0, 2)[2], 0.1);
    }

    #[test]
    fn test_extrude_points_rejects_bad_input() {
        assert!(SurfaceMesh::extrude_points(&[], &[], 0.1, 2).is_err());
        assert!(SurfaceMesh::extrude_points(&[0.0], &[0.0, 1.0], 0.1, 2).is_err());
        assert!(SurfaceMesh::extrude_points(&[0.0], &[0.0], 0.1, 0).is_err());
        assert!(SurfaceMesh::extrude_points(&[0.0], &[0.0], -0.1, 2).is_err());
    }

    #[test]
    fn test_checked_n_points() {
        assert_eq!(GridDimensions::new(15, 2, 2).checked_n_points(), Some(60));
        let huge = GridDimensions::new(1 << 32, 1 << 32, 1 << 32);
        assert_eq!(huge.checked_n_points(), None);
    }

    #[test]
    fn test_from_profile_rejects_mismatched_lengths() {
        let err = SurfaceMesh::from_profile(&[0.0, 1.0], &[0.0], 2, 1, 0.1).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { name: "profile", .. }));

        let mesh = SurfaceMesh::from_profile(&[0.0, 1.0], &[0.0, 0.0], 2, 3, 0.1).unwrap();
        assert_eq!(mesh.dims, GridDimensions::new(2, 2, 3));
    }

    #[test]
    fn test_from_arrays_checks_lengths() {
        let dims = GridDimensions::new(2, 1, 1);
        assert!(SurfaceMesh::from_arrays(dims, vec![0.0; 2], vec![0.0; 2], vec![0.0; 2]).is_ok());
        assert!(SurfaceMesh::from_arrays(dims, vec![0.0; 2], vec![0.0; 3], vec![0.0; 2]).is_err());
    }
}
