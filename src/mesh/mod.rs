//! Surface mesh representation.
//!
//! Provides the data structures for the airfoil surface:
//! - Grid dimensions and the flattened index-ordering contract
//! - Structured single-block surface mesh (NACA 0012 or extruded point sets)
//! - Generation options with enumerated defaults
//! - The shared error type for mesh construction and mesh file I/O

mod config;
mod error;
mod surface;

pub use config::SurfaceMeshConfig;
pub use error::MeshError;
pub use surface::{GridDimensions, SurfaceMesh, SurfaceSide};
