//! Mesh deformation and geometry parameterisation options.
//!
//! The deformation layer moves the volume mesh when design variables change;
//! the FFD parameterisation exposes the design variables themselves.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::ConfigError;

/// Plane given by a point and its normal, serialised as `[[point], [normal]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SymmetryPlane(pub [f64; 3], pub [f64; 3]);

impl SymmetryPlane {
    /// Plane `z = z0` with normal +z.
    pub fn z_plane(z0: f64) -> Self {
        Self([0.0, 0.0, z0], [0.0, 0.0, 1.0])
    }
}

/// Options for the volume mesh deformation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshDeformationConfig {
    /// Case directory holding the volume mesh.
    pub grid_file: PathBuf,
    pub file_type: String,
    pub symmetry_planes: Vec<SymmetryPlane>,
}

impl MeshDeformationConfig {
    /// Quasi-2D case bounded by symmetry planes at `z = 0` and `z = span`.
    pub fn for_span(case_dir: impl Into<PathBuf>, span: f64) -> Self {
        Self {
            grid_file: case_dir.into(),
            file_type: "OpenFOAM".to_string(),
            symmetry_planes: vec![SymmetryPlane::z_plane(0.0), SymmetryPlane::z_plane(span)],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for plane in &self.symmetry_planes {
            let n = plane.1;
            if n.iter().map(|c| c * c).sum::<f64>() == 0.0 {
                return Err(ConfigError::invalid("symmetryPlanes", "zero normal vector"));
            }
        }
        Ok(())
    }
}

/// Design variable exposed by the geometry parameterisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DesignVariable {
    /// Single scalar such as the angle of attack.
    Global {
        name: String,
        value: f64,
        lower: f64,
        upper: f64,
        scaler: f64,
    },
    /// Local displacement of a set of FFD control points.
    #[serde(rename_all = "camelCase")]
    LocalShape {
        name: String,
        point_indices: Vec<usize>,
        lower: f64,
        upper: f64,
    },
}

impl DesignVariable {
    /// Angle of attack in degrees, bounded to `[0, 10]`.
    pub fn aoa(value: f64) -> Self {
        DesignVariable::Global {
            name: "aoa".to_string(),
            value,
            lower: 0.0,
            upper: 10.0,
            scaler: 1.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DesignVariable::Global { name, .. } | DesignVariable::LocalShape { name, .. } => name,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            DesignVariable::Global {
                name,
                value,
                lower,
                upper,
                scaler,
            } => {
                if lower > upper {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!("{}: lower bound {} above upper bound {}", name, lower, upper),
                    ));
                }
                if value < lower || value > upper {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!("{}: value {} outside [{}, {}]", name, value, lower, upper),
                    ));
                }
                if *scaler == 0.0 {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!("{}: zero scaler", name),
                    ));
                }
            }
            DesignVariable::LocalShape {
                name,
                point_indices,
                lower,
                upper,
            } => {
                if lower > upper {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!("{}: lower bound {} above upper bound {}", name, lower, upper),
                    ));
                }
                if point_indices.is_empty() {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!("{}: no control points selected", name),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// FFD-based geometry parameterisation: control point file plus design variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FfdGeometry {
    pub ffd_file: PathBuf,
    design_variables: Vec<DesignVariable>,
}

impl FfdGeometry {
    pub fn new(ffd_file: impl Into<PathBuf>) -> Self {
        Self {
            ffd_file: ffd_file.into(),
            design_variables: Vec::new(),
        }
    }

    pub fn ffd_file(&self) -> &Path {
        &self.ffd_file
    }

    /// Register a design variable; names must be unique.
    pub fn add_design_variable(&mut self, dv: DesignVariable) -> Result<(), ConfigError> {
        dv.validate()?;
        if self.find(dv.name()).is_some() {
            return Err(ConfigError::invalid(
                "designVar",
                format!("duplicate design variable {}", dv.name()),
            ));
        }
        self.design_variables.push(dv);
        Ok(())
    }

    pub fn design_variables(&self) -> &[DesignVariable] {
        &self.design_variables
    }

    pub fn find(&self, name: &str) -> Option<&DesignVariable> {
        self.design_variables.iter().find(|dv| dv.name() == name)
    }

    /// Check every local variable addresses a control point that exists.
    pub fn validate_against(&self, n_control_points: usize) -> Result<(), ConfigError> {
        for dv in &self.design_variables {
            if let DesignVariable::LocalShape {
                name,
                point_indices,
                ..
            } = dv
            {
                if let Some(&bad) = point_indices.iter().find(|&&i| i >= n_control_points) {
                    return Err(ConfigError::invalid(
                        "designVar",
                        format!(
                            "{}: control point {} out of range ({} points)",
                            name, bad, n_control_points
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
