//! Command-line front end for NACA 0012 mesh and solver-input generation.
//!
//! ```text
//! naca-mesh surface --x-num 15 --z-num 2 --chord 1.0 --output naca0012.xyz
//! naca-mesh ffd --ffd-file ffd.xyz --output-surface surfaceMesh.xyz
//! naca-mesh solver-config --re 6e6 --aoa 2
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use naca_mesh::collaborators::{
    AdjointSolverConfig, DesignVariable, ExtrusionConfig, FfdGeometry, FlowConditions,
    MeshDeformationConfig,
};
use naca_mesh::io::{generate_mesh_file, read_point_file, write_plot3d};
use naca_mesh::mesh::{SurfaceMesh, SurfaceMeshConfig};

#[derive(Parser, Debug)]
#[command(name = "naca-mesh")]
#[command(version)]
#[command(about = "NACA 0012 surface meshes and CFD tool inputs")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the NACA 0012 surface mesh
    Surface {
        /// Output mesh file
        #[arg(short, long, default_value = "naca0012.xyz")]
        output: PathBuf,
        /// Chordwise points
        #[arg(long, default_value_t = 15)]
        x_num: usize,
        /// Spanwise stations
        #[arg(long, default_value_t = 2)]
        z_num: usize,
        /// Chord length
        #[arg(long, default_value_t = 1.0)]
        chord: f64,
        /// Surface sides per station (2 = lower + upper)
        #[arg(long, default_value_t = 2)]
        y_num: usize,
        /// Distance between spanwise stations
        #[arg(long, default_value_t = 0.1)]
        span_pitch: f64,
    },
    /// Build a surface mesh from a point file and write the extruder options
    Ffd {
        /// Point file with x y z columns
        #[arg(long)]
        ffd_file: PathBuf,
        /// Surface mesh output
        #[arg(long, default_value = "surfaceMesh.xyz")]
        output_surface: PathBuf,
        /// Volume mesh the extruder should write
        #[arg(long, default_value = "volumeMesh.xyz")]
        output_volume: PathBuf,
        /// Extruder options output (JSON)
        #[arg(long, default_value = "extrusion.json")]
        extrusion_config: PathBuf,
        /// Width in the spanwise direction
        #[arg(long, default_value_t = 0.1)]
        z_span: f64,
        /// Spanwise stations
        #[arg(long, default_value_t = 2)]
        n_span: usize,
        /// Layers in the extrusion direction
        #[arg(long, default_value_t = 33)]
        n_extrude: usize,
        /// First layer thickness
        #[arg(long, default_value_t = 4e-3)]
        y_wall: f64,
        /// Marching distance
        #[arg(long, default_value_t = 20.0)]
        march_dist: f64,
    },
    /// Print the adjoint solver, mesh deformation and design variable options
    SolverConfig {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Initial angle of attack in degrees
        #[arg(long, default_value_t = 0.0)]
        aoa: f64,
        /// Chord length
        #[arg(long, default_value_t = 1.0)]
        chord: f64,
        /// FFD control point file for the geometry parameterisation
        #[arg(long, default_value = "naca0012.xyz")]
        ffd_file: PathBuf,
        /// Case directory holding the volume mesh
        #[arg(long, default_value = ".")]
        case_dir: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_level(true)
        .init();

    match args.command {
        Command::Surface {
            output,
            x_num,
            z_num,
            chord,
            y_num,
            span_pitch,
        } => {
            let config = SurfaceMeshConfig::new(x_num, z_num, chord)
                .with_y_num(y_num)
                .with_span_pitch(span_pitch)
                .with_file_name(output);
            let mesh = generate_mesh_file(&config.file_name, &config)
                .with_context(|| format!("generating {}", config.file_name.display()))?;
            info!(
                "Surface mesh with {} points written to {}",
                mesh.n_points(),
                config.file_name.display()
            );
        }
        Command::Ffd {
            ffd_file,
            output_surface,
            output_volume,
            extrusion_config,
            z_span,
            n_span,
            n_extrude,
            y_wall,
            march_dist,
        } => {
            let points = read_point_file(&ffd_file)
                .with_context(|| format!("reading {}", ffd_file.display()))?;
            let mesh = SurfaceMesh::extrude_points(&points.x, &points.y, z_span, n_span)?;
            write_plot3d(&mesh, &output_surface)?;
            info!("Surface mesh file written to {}", output_surface.display());

            let options = ExtrusionConfig::new(&output_surface, &output_volume).with_marching(
                n_extrude,
                y_wall,
                march_dist,
            );
            options.validate()?;
            let text = serde_json::to_string_pretty(&options)?;
            fs::write(&extrusion_config, text)
                .with_context(|| format!("writing {}", extrusion_config.display()))?;
            info!(
                "Extruder options written to {} (volume mesh: {})",
                extrusion_config.display(),
                output_volume.display()
            );
        }
        Command::SolverConfig {
            re,
            aoa,
            chord,
            ffd_file,
            case_dir,
            output,
        } => {
            let flow = FlowConditions::new(re).with_chord(chord);
            let mut solver = AdjointSolverConfig::for_flow(&flow)?;
            solver.set_angle_of_attack(aoa);
            solver.validate()?;

            let deformation = MeshDeformationConfig::for_span(case_dir, 0.1);
            deformation.validate()?;

            let mut geometry = FfdGeometry::new(ffd_file);
            geometry.add_design_variable(DesignVariable::aoa(aoa))?;

            let bundle = json!({
                "solver": solver,
                "meshDeformation": deformation,
                "geometry": geometry,
                "flow": flow,
            });
            let text = serde_json::to_string_pretty(&bundle)?;
            match output {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Solver options written to {}", path.display());
                }
                None => println!("{}", text),
            }
        }
    }

    Ok(())
}
