//! # naca-mesh
//!
//! Surface mesh generation for the NACA 0012 airfoil and typed configuration
//! for the external CFD tools that consume it.
//!
//! This crate provides:
//! - The NACA 0012 half-thickness distribution and uniform chordwise sampling
//! - Structured single-block surface meshes with a fixed index ordering
//! - PLOT3D-style ASCII `.xyz` mesh writer and reader
//! - Coordinate point file (FFD) reader and spanwise extrusion of point sets
//! - Validated option bundles for the volume-mesh extruder, the adjoint
//!   solver and the geometry parameterisation
//! - An angle-of-attack sweep driver that records CL, CD and CM
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use naca_mesh::{SurfaceMeshConfig, generate_mesh_file};
//!
//! let config = SurfaceMeshConfig::new(15, 2, 1.0);
//! let mesh = generate_mesh_file(Path::new("naca0012.xyz"), &config).unwrap();
//! assert_eq!(mesh.n_points(), 60);
//! ```

pub mod airfoil;
pub mod collaborators;
pub mod io;
pub mod mesh;
pub mod sweep;

// Re-export main types for convenience
pub use airfoil::{compute_profile, naca0012_half_thickness, uniform_samples};
pub use collaborators::{
    AdjointSolverConfig, AerodynamicSolver, ConfigError, DesignVariable, ExtrusionConfig,
    FfdGeometry, FlowConditions, MeshDeformationConfig, MeshExtruder, SolverOutput,
};
pub use io::{
    CoefficientRecord, Coefficients, PointCloud, ResultsFileError, append_coefficients,
    generate_mesh_file, read_coefficients, read_plot3d, read_point_file, write_plot3d,
};
pub use mesh::{GridDimensions, MeshError, SurfaceMesh, SurfaceMeshConfig, SurfaceSide};
pub use sweep::{AoaSweep, SweepError, SweepResult, extrude_volume_mesh};
