//! I/O utilities for reading and writing mesh and result files.
//!
//! This module provides:
//! - **Surface meshes**: PLOT3D-style ASCII `.xyz` writer and reader
//! - **Point files**: FFD control points or profile points as `x y z` rows
//! - **Results**: appended `Re, aoa, CL, CD, CM` rows from flow solves
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use naca_mesh::SurfaceMeshConfig;
//! use naca_mesh::io::{generate_mesh_file, read_plot3d};
//!
//! let config = SurfaceMeshConfig::default();
//! generate_mesh_file(Path::new("naca0012.xyz"), &config).unwrap();
//!
//! let mesh = read_plot3d(Path::new("naca0012.xyz")).unwrap();
//! assert_eq!(mesh.n_points(), 60);
//! ```

mod plot3d;
mod point_reader;
mod results;

pub use plot3d::{generate_mesh_file, parse_plot3d, read_plot3d, write_plot3d, write_plot3d_to};
pub use point_reader::{PointCloud, parse_points, read_point_file};
pub use results::{
    CoefficientRecord, Coefficients, ResultsFileError, append_coefficients, read_coefficients,
};
