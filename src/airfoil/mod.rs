//! Airfoil thickness profiles.
//!
//! Provides the NACA 0012 half-thickness distribution and the uniform
//! chordwise sampling used to build surface meshes.

mod naca0012;

pub use naca0012::{
    NACA0012_COEFFICIENTS, NACA0012_SCALE, compute_profile, naca0012_half_thickness,
    uniform_samples,
};
