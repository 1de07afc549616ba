//! Adjoint CFD solver options.
//!
//! Typed replacement for the nested option dictionary handed to the adjoint
//! solver: inlet boundary values, force and moment objectives, adjoint
//! linear-solver tolerances, state normalisation and design variables.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ConfigError, FlowConditions};

/// Patch carrying the farfield inlet/outlet conditions.
pub const FARFIELD_PATCH: &str = "inout";
/// Patch on the airfoil surface.
pub const WALL_PATCH: &str = "wing";

/// Fixed value for one field on a set of patches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimalBoundaryValue {
    pub variable: String,
    pub patches: Vec<String>,
    pub value: Vec<f64>,
}

impl PrimalBoundaryValue {
    fn new(variable: &str, patch: &str, value: Vec<f64>) -> Self {
        Self {
            variable: variable.to_string(),
            patches: vec![patch.to_string()],
            value,
        }
    }
}

/// Inlet boundary values for velocity, pressure and turbulence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimalBoundaryConditions {
    #[serde(rename = "U0")]
    pub u0: PrimalBoundaryValue,
    pub p0: PrimalBoundaryValue,
    #[serde(rename = "nuTilda0")]
    pub nu_tilda0: PrimalBoundaryValue,
    pub use_wall_function: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveKind {
    Force,
    Moment,
}

/// Force projection direction relative to the inflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectionMode {
    ParallelToFlow,
    NormalToFlow,
}

/// One integrated contribution to an objective function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivePart {
    #[serde(rename = "type")]
    pub kind: ObjectiveKind,
    pub source: String,
    pub patches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_mode: Option<DirectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 3]>,
    pub scale: f64,
    pub add_to_adjoint: bool,
}

impl ObjectivePart {
    /// Surface force on `patch` projected along `direction`.
    pub fn force(patch: &str, direction: DirectionMode, scale: f64) -> Self {
        Self {
            kind: ObjectiveKind::Force,
            source: "patchToFace".to_string(),
            patches: vec![patch.to_string()],
            direction_mode: Some(direction),
            alpha_name: Some("aoa".to_string()),
            axis: None,
            center: None,
            scale,
            add_to_adjoint: true,
        }
    }

    /// Moment on `patch` about `axis` through `center`.
    pub fn moment(patch: &str, axis: [f64; 3], center: [f64; 3], scale: f64) -> Self {
        Self {
            kind: ObjectiveKind::Moment,
            source: "patchToFace".to_string(),
            patches: vec![patch.to_string()],
            direction_mode: None,
            alpha_name: None,
            axis: Some(axis),
            center: Some(center),
            scale,
            add_to_adjoint: true,
        }
    }
}

/// Named objective built from one or more parts (`part1`, `part2`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObjectiveFunction {
    pub parts: BTreeMap<String, ObjectivePart>,
}

impl ObjectiveFunction {
    pub fn single(part: ObjectivePart) -> Self {
        let mut parts = BTreeMap::new();
        parts.insert("part1".to_string(), part);
        Self { parts }
    }
}

/// Adjoint linear-solver settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjointEquationOptions {
    pub gmres_rel_tol: f64,
    pub pc_fill_level: u32,
    pub jac_mat_re_ordering: String,
}

impl Default for AdjointEquationOptions {
    fn default() -> Self {
        Self {
            gmres_rel_tol: 1.0e-6,
            pc_fill_level: 1,
            jac_mat_re_ordering: "rcm".to_string(),
        }
    }
}

/// Reference magnitudes used to normalise state residuals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateNormalization {
    #[serde(rename = "U")]
    pub u: f64,
    pub p: f64,
    #[serde(rename = "nuTilda")]
    pub nu_tilda: f64,
    pub phi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Solver-side description of the angle-of-attack design variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AoaDesignVariable {
    pub design_var_type: String,
    pub patches: Vec<String>,
    pub flow_axis: Axis,
    pub normal_axis: Axis,
}

impl Default for AoaDesignVariable {
    fn default() -> Self {
        Self {
            design_var_type: "AOA".to_string(),
            patches: vec![FARFIELD_PATCH.to_string()],
            flow_axis: Axis::X,
            normal_axis: Axis::Y,
        }
    }
}

/// Complete option bundle for the adjoint solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjointSolverConfig {
    pub design_surfaces: Vec<String>,
    pub solver_name: String,
    pub primal_min_res_tol: f64,
    #[serde(rename = "primalBC")]
    pub primal_bc: PrimalBoundaryConditions,
    #[serde(rename = "objFunc")]
    pub objectives: BTreeMap<String, ObjectiveFunction>,
    #[serde(rename = "adjEqnOption")]
    pub adjoint: AdjointEquationOptions,
    pub normalize_states: StateNormalization,
    #[serde(rename = "designVar")]
    pub design_vars: BTreeMap<String, AoaDesignVariable>,
    /// Flow state the bundle was built from.
    #[serde(skip)]
    pub flow: FlowConditions,
}

impl AdjointSolverConfig {
    /// Steady incompressible setup computing CD, CL and CM for `flow`.
    ///
    /// The inlet velocity points along +x; the angle of attack is applied
    /// afterwards with [`set_angle_of_attack`](Self::set_angle_of_attack).
    pub fn for_flow(flow: &FlowConditions) -> Result<Self, ConfigError> {
        flow.validate()?;

        let u0 = flow.freestream_velocity();
        let force_scale = flow.force_scale();
        // Moment is additionally normalised by the reference chord 0.1
        let moment_scale = force_scale / 0.1;

        let mut objectives = BTreeMap::new();
        objectives.insert(
            "CD".to_string(),
            ObjectiveFunction::single(ObjectivePart::force(
                WALL_PATCH,
                DirectionMode::ParallelToFlow,
                force_scale,
            )),
        );
        objectives.insert(
            "CL".to_string(),
            ObjectiveFunction::single(ObjectivePart::force(
                WALL_PATCH,
                DirectionMode::NormalToFlow,
                force_scale,
            )),
        );
        objectives.insert(
            "CM".to_string(),
            ObjectiveFunction::single(ObjectivePart::moment(
                WALL_PATCH,
                [0.0, 0.0, 1.0],
                [0.25, 0.0, 0.0],
                moment_scale,
            )),
        );

        let mut design_vars = BTreeMap::new();
        design_vars.insert("aoa".to_string(), AoaDesignVariable::default());

        Ok(Self {
            design_surfaces: vec![WALL_PATCH.to_string()],
            solver_name: "DASimpleFoam".to_string(),
            primal_min_res_tol: 1.0e-4,
            primal_bc: PrimalBoundaryConditions {
                u0: PrimalBoundaryValue::new("U", FARFIELD_PATCH, vec![u0, 0.0, 0.0]),
                p0: PrimalBoundaryValue::new("p", FARFIELD_PATCH, vec![flow.p0]),
                nu_tilda0: PrimalBoundaryValue::new(
                    "nuTilda",
                    FARFIELD_PATCH,
                    vec![flow.nu_tilda0],
                ),
                use_wall_function: true,
            },
            objectives,
            adjoint: AdjointEquationOptions::default(),
            normalize_states: StateNormalization {
                u: u0,
                p: u0 * u0 / 2.0,
                nu_tilda: flow.nu_tilda0 * 10.0,
                phi: 1.0,
            },
            design_vars,
            flow: *flow,
        })
    }

    /// Rotate the inlet velocity to the given angle of attack.
    pub fn set_angle_of_attack(&mut self, aoa_degrees: f64) {
        self.primal_bc.u0.value = self.flow.velocity_vector(aoa_degrees).to_vec();
    }

    /// Names of the objective functions, in sorted order.
    pub fn objective_names(&self) -> impl Iterator<Item = &str> {
        self.objectives.keys().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flow.validate()?;
        if self.design_surfaces.is_empty() {
            return Err(ConfigError::invalid("designSurfaces", "no design surfaces"));
        }
        if !(self.primal_min_res_tol > 0.0 && self.primal_min_res_tol < 1.0) {
            return Err(ConfigError::invalid("primalMinResTol", "must lie in (0, 1)"));
        }
        if !(self.adjoint.gmres_rel_tol > 0.0 && self.adjoint.gmres_rel_tol < 1.0) {
            return Err(ConfigError::invalid("gmresRelTol", "must lie in (0, 1)"));
        }
        if self.primal_bc.u0.value.len() != 3 {
            return Err(ConfigError::invalid("primalBC.U0", "velocity needs 3 components"));
        }
        for (name, objective) in &self.objectives {
            if objective.parts.is_empty() {
                return Err(ConfigError::invalid(
                    "objFunc",
                    format!("objective {} has no parts", name),
                ));
            }
            for part in objective.parts.values() {
                if part.patches.is_empty() {
                    return Err(ConfigError::invalid(
                        "objFunc",
                        format!("objective {} integrates over no patches", name),
                    ));
                }
                if !(part.scale.is_finite() && part.scale > 0.0) {
                    return Err(ConfigError::invalid(
                        "objFunc",
                        format!("objective {} has scale {}", name, part.scale),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Options as a JSON value for the solver.
    pub fn to_json(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }
}
