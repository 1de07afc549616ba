//! External collaborator interfaces.
//!
//! The volume-mesh extruder, the adjoint flow solver and the geometry
//! parameterisation are separate tools. This module provides:
//! - Typed, validated option bundles for each of them
//! - Traits through which a driver hands those bundles over
//!
//! Bundles serialise to JSON with the option names the tools expect.

mod extrusion;
mod flow;
mod geometry;
mod solver;

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::io::Coefficients;

pub use extrusion::{BlockFace, ExtrusionConfig, FaceBc, OuterFaceBc};
pub use flow::FlowConditions;
pub use geometry::{DesignVariable, FfdGeometry, MeshDeformationConfig, SymmetryPlane};
pub use solver::{
    AdjointEquationOptions, AdjointSolverConfig, AoaDesignVariable, Axis, DirectionMode,
    FARFIELD_PATCH, ObjectiveFunction, ObjectiveKind, ObjectivePart, PrimalBoundaryConditions,
    PrimalBoundaryValue, StateNormalization, WALL_PATCH,
};

/// Error type for collaborator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option is out of range or inconsistent.
    #[error("Invalid option `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The bundle could not be serialised.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Hyperbolic volume-mesh extruder.
pub trait MeshExtruder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extrude `config.input_file` and return the written volume mesh path.
    fn extrude(&mut self, config: &ExtrusionConfig) -> Result<PathBuf, Self::Error>;
}

/// Objective values and their sensitivities from one flow + adjoint solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverOutput {
    pub coefficients: Coefficients,
    /// `sensitivities[objective][design_variable]` = d objective / d variable.
    pub sensitivities: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Adjoint CFD solver evaluating force coefficients.
pub trait AerodynamicSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Solve the flow described by `config` at `aoa_degrees`.
    fn evaluate(
        &mut self,
        config: &AdjointSolverConfig,
        aoa_degrees: f64,
    ) -> Result<SolverOutput, Self::Error>;
}
