//! Angle-of-attack sweep runner.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::collaborators::{
    AdjointSolverConfig, AerodynamicSolver, ConfigError, ExtrusionConfig, FlowConditions,
    MeshExtruder,
};
use crate::io::{CoefficientRecord, ResultsFileError, append_coefficients};

/// Error type for sweeps.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The solver configuration could not be built.
    #[error("Invalid solver configuration: {0}")]
    Config(#[from] ConfigError),

    /// The solver failed at one angle.
    #[error("Solver failed at aoa = {aoa_degrees}°: {source}")]
    Solver {
        aoa_degrees: f64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The volume-mesh extruder failed.
    #[error("Extrusion of {input} failed: {source}")]
    Extruder {
        input: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The extruder reported success but wrote no volume mesh.
    #[error("Extruder did not write {0}")]
    MissingVolumeMesh(PathBuf),

    /// A result row could not be appended.
    #[error("Results file error: {0}")]
    Results(#[from] ResultsFileError),
}

/// Outcome of a completed sweep.
#[derive(Clone, Debug)]
pub struct SweepResult {
    /// One record per angle, in sweep order.
    pub records: Vec<CoefficientRecord>,
    /// Solver sensitivities per angle, `sensitivities[angle][objective][variable]`.
    pub sensitivities: Vec<BTreeMap<String, BTreeMap<String, f64>>>,
    /// Total wall-clock time in seconds.
    pub wall_time: f64,
}

/// Fixed-Reynolds sweep over a list of angles of attack.
///
/// The solver configuration is built once from the flow conditions; each
/// angle rotates the inlet velocity and triggers one solve. Every result is
/// appended to the results file as soon as it is available, so a failed
/// sweep keeps the rows of the angles that completed.
#[derive(Clone, Debug)]
pub struct AoaSweep {
    flow: FlowConditions,
    angles: Vec<f64>,
}

impl Default for AoaSweep {
    fn default() -> Self {
        Self {
            flow: FlowConditions::new(6e6),
            angles: vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
        }
    }
}

impl AoaSweep {
    /// Sweep the default angles at `flow`.
    pub fn new(flow: FlowConditions) -> Self {
        Self {
            flow,
            ..Default::default()
        }
    }

    /// Set the angles of attack (degrees), solved in the given order.
    pub fn with_angles(mut self, angles: impl Into<Vec<f64>>) -> Self {
        self.angles = angles.into();
        self
    }

    pub fn flow(&self) -> &FlowConditions {
        &self.flow
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Run the sweep, appending one row per angle to `results_path`.
    pub fn run<S: AerodynamicSolver>(
        &self,
        solver: &mut S,
        results_path: &Path,
    ) -> Result<SweepResult, SweepError> {
        let start_wall = Instant::now();
        let base = AdjointSolverConfig::for_flow(&self.flow)?;
        base.validate()?;

        info!(
            reynolds = self.flow.reynolds,
            n_angles = self.angles.len(),
            "starting angle-of-attack sweep"
        );

        let mut records = Vec::with_capacity(self.angles.len());
        let mut sensitivities = Vec::with_capacity(self.angles.len());
        for &aoa in &self.angles {
            let mut config = base.clone();
            config.set_angle_of_attack(aoa);

            let output = solver
                .evaluate(&config, aoa)
                .map_err(|e| SweepError::Solver {
                    aoa_degrees: aoa,
                    source: Box::new(e),
                })?;

            let record = CoefficientRecord::new(self.flow.reynolds, aoa, output.coefficients);
            append_coefficients(results_path, &record)?;
            info!(
                aoa,
                cl = record.coefficients.cl,
                cd = record.coefficients.cd,
                cm = record.coefficients.cm,
                "solved"
            );
            debug!(
                aoa,
                n_objectives = output.sensitivities.len(),
                "received sensitivities"
            );
            records.push(record);
            sensitivities.push(output.sensitivities);
        }

        Ok(SweepResult {
            records,
            sensitivities,
            wall_time: start_wall.elapsed().as_secs_f64(),
        })
    }
}

/// Validate `options`, run the extruder and check that the volume mesh exists.
///
/// Returns the path of the written volume mesh.
pub fn extrude_volume_mesh<E: MeshExtruder>(
    extruder: &mut E,
    options: &ExtrusionConfig,
) -> Result<PathBuf, SweepError> {
    options.validate()?;

    let volume = extruder
        .extrude(options)
        .map_err(|e| SweepError::Extruder {
            input: options.input_file.clone(),
            source: Box::new(e),
        })?;
    if !volume.is_file() {
        return Err(SweepError::MissingVolumeMesh(volume));
    }

    info!(
        input = %options.input_file.display(),
        volume = %volume.display(),
        n_layers = options.n_layers,
        "extruded volume mesh"
    );
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::SolverOutput;
    use crate::io::{Coefficients, read_coefficients};
    use tempfile::tempdir;

    /// Thin-airfoil stand-in: CL = 2π α, constant CD.
    struct ThinAirfoil {
        calls: Vec<f64>,
        fail_above: Option<f64>,
    }

    #[derive(Debug, Error)]
    #[error("diverged")]
    struct Diverged;

    impl AerodynamicSolver for ThinAirfoil {
        type Error = Diverged;

        fn evaluate(
            &mut self,
            config: &AdjointSolverConfig,
            aoa_degrees: f64,
        ) -> Result<SolverOutput, Self::Error> {
            if self.fail_above.is_some_and(|limit| aoa_degrees > limit) {
                return Err(Diverged);
            }
            self.calls.push(aoa_degrees);
            let u = &config.primal_bc.u0.value;
            let alpha = u[1].atan2(u[0]);
            let lift_slope = 2.0 * std::f64::consts::PI;

            let mut sensitivities = BTreeMap::new();
            sensitivities.insert(
                "CL".to_string(),
                BTreeMap::from([("alpha".to_string(), lift_slope.to_radians())]),
            );
            Ok(SolverOutput {
                coefficients: Coefficients {
                    cl: lift_slope * alpha,
                    cd: 0.008,
                    cm: 0.0,
                },
                sensitivities,
            })
        }
    }

    /// Extruder stand-in that copies the surface mesh to the volume path.
    struct CopyExtruder {
        calls: usize,
        write_output: bool,
    }

    impl MeshExtruder for CopyExtruder {
        type Error = std::io::Error;

        fn extrude(&mut self, config: &ExtrusionConfig) -> Result<PathBuf, Self::Error> {
            self.calls += 1;
            if self.write_output {
                std::fs::copy(&config.input_file, &config.output_file)?;
            }
            Ok(config.output_file.clone())
        }
    }

    #[test]
    fn test_extrude_volume_mesh() {
        let dir = tempdir().unwrap();
        let surface = dir.path().join("surfaceMesh.xyz");
        std::fs::write(&surface, "1\n2 1 1\n0 1\n0 0\n0 0\n").unwrap();
        let options = ExtrusionConfig::new(&surface, dir.path().join("volumeMesh.xyz"));

        let mut extruder = CopyExtruder {
            calls: 0,
            write_output: true,
        };
        let volume = extrude_volume_mesh(&mut extruder, &options).unwrap();
        assert_eq!(volume, options.output_file);
        assert!(volume.is_file());
        assert_eq!(extruder.calls, 1);
    }

    #[test]
    fn test_extrude_volume_mesh_errors() {
        let dir = tempdir().unwrap();
        let options = ExtrusionConfig::new(
            dir.path().join("missing.xyz"),
            dir.path().join("volumeMesh.xyz"),
        );

        let mut extruder = CopyExtruder {
            calls: 0,
            write_output: true,
        };
        let err = extrude_volume_mesh(&mut extruder, &options).unwrap_err();
        assert!(matches!(err, SweepError::Extruder { .. }));

        let mut silent = CopyExtruder {
            calls: 0,
            write_output: false,
        };
        let err = extrude_volume_mesh(&mut silent, &options).unwrap_err();
        assert!(matches!(err, SweepError::MissingVolumeMesh(_)));

        let bad = options.clone().with_marching(1, 4e-3, 20.0);
        let err = extrude_volume_mesh(&mut silent, &bad).unwrap_err();
        assert!(matches!(err, SweepError::Config(_)));
        assert_eq!(silent.calls, 1);
    }

    #[test]
    fn test_sweep_writes_one_row_per_angle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let mut solver = ThinAirfoil {
            calls: Vec::new(),
            fail_above: None,
        };

        let result = AoaSweep::default().run(&mut solver, &path).unwrap();

        assert_eq!(solver.calls, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(result.records.len(), 6);

        let rows = read_coefficients(&path).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].reynolds, 6e6);
        assert!(rows.windows(2).all(|w| w[1].coefficients.cl > w[0].coefficients.cl));
        assert!((rows[1].coefficients.cl - 2.0 * std::f64::consts::PI * 2f64.to_radians()).abs() < 1e-9);

        assert_eq!(result.sensitivities.len(), 6);
        let dcl = result.sensitivities[3]["CL"]["alpha"];
        assert!((dcl - 2.0 * std::f64::consts::PI * std::f64::consts::PI / 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_stops_on_solver_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let mut solver = ThinAirfoil {
            calls: Vec::new(),
            fail_above: Some(5.0),
        };

        let err = AoaSweep::new(FlowConditions::new(1e6))
            .with_angles(vec![0.0, 4.0, 6.0, 8.0])
            .run(&mut solver, &path)
            .unwrap_err();

        assert!(matches!(err, SweepError::Solver { aoa_degrees, .. } if aoa_degrees == 6.0));
        assert_eq!(read_coefficients(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_sweep_rejects_invalid_flow() {
        let dir = tempdir().unwrap();
        let mut solver = ThinAirfoil {
            calls: Vec::new(),
            fail_above: None,
        };

        let err = AoaSweep::new(FlowConditions::new(0.0))
            .run(&mut solver, &dir.path().join("r.txt"))
            .unwrap_err();
        assert!(matches!(err, SweepError::Config(_)));
        assert!(solver.calls.is_empty());
    }
}
