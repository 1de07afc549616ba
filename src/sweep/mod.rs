//! Flow-condition sweeps.
//!
//! Extrudes the volume mesh through an external extruder, then runs an
//! external solver over a list of angles of attack at a fixed
//! Reynolds number and records CL, CD and CM for each.
//!
//! # Example
//! ```ignore
//! use naca_mesh::collaborators::FlowConditions;
//! use naca_mesh::sweep::AoaSweep;
//!
//! let result = AoaSweep::new(FlowConditions::new(6e6))
//!     .with_angles(vec![0.0, 2.0, 4.0])
//!     .run(&mut solver, Path::new("results.txt"))?;
//! ```

mod runner;

pub use runner::{AoaSweep, SweepError, SweepResult, extrude_volume_mesh};
