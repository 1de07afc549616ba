//! PLOT3D-style ASCII surface mesh files (`.xyz`).
//!
//! # Format
//!
//! ```text
//! 1
//! <x_num> <y_num> <z_num>
//! <x_1> <x_2> ... <x_N>
//! <y_1> <y_2> ... <y_N>
//! <z_1> <z_2> ... <z_N>
//! ```
//!
//! One block, `N = x_num * y_num * z_num`. Every value is written with six
//! decimals and followed by a single space; each array ends with a newline.
//! Arrays follow the index ordering of [`SurfaceMesh`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::mesh::{GridDimensions, MeshError, SurfaceMesh, SurfaceMeshConfig};

/// Write a mesh in PLOT3D ASCII layout to any writer.
pub fn write_plot3d_to<W: Write>(mesh: &SurfaceMesh, mut writer: W) -> std::io::Result<()> {
    let dims = mesh.dims;
    writeln!(writer, "1")?;
    writeln!(writer, "{} {} {}", dims.x_num, dims.y_num, dims.z_num)?;

    for values in [&mesh.x, &mesh.y, &mesh.z] {
        for v in values.iter() {
            write!(writer, "{:.6} ", v)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write a mesh to `path`, replacing any existing file.
///
/// The mesh is written to a temporary file next to `path` and renamed over
/// it once complete. On failure the temporary file is discarded and any
/// previous file at `path` is left untouched.
pub fn write_plot3d(mesh: &SurfaceMesh, path: &Path) -> Result<(), MeshError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MeshError::file_write(path, e))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_plot3d_to(mesh, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| MeshError::file_write(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| MeshError::file_write(path, e.error))?;

    info!(
        path = %path.display(),
        n_points = mesh.n_points(),
        "wrote surface mesh"
    );
    Ok(())
}

/// Generate the NACA 0012 surface mesh described by `config` and write it to `path`.
///
/// Returns the in-memory mesh that was written.
pub fn generate_mesh_file(
    path: &Path,
    config: &SurfaceMeshConfig,
) -> Result<SurfaceMesh, MeshError> {
    let mesh = SurfaceMesh::naca0012(config)?;
    write_plot3d(&mesh, path)?;
    Ok(mesh)
}

/// Read a PLOT3D ASCII surface mesh file.
pub fn read_plot3d(path: &Path) -> Result<SurfaceMesh, MeshError> {
    let file = File::open(path).map_err(|e| MeshError::file_read(path, e))?;
    parse_plot3d(BufReader::new(file), &path.display().to_string())
}

/// Parse a PLOT3D ASCII surface mesh.
///
/// `origin` names the input in error messages.
pub fn parse_plot3d<R: BufRead>(reader: R, origin: &str) -> Result<SurfaceMesh, MeshError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let mut last_line = 0;
    let mut next_line = |what: &str| -> Result<(usize, String), MeshError> {
        match lines.next() {
            Some((line_num, Ok(line))) => {
                last_line = line_num;
                Ok((line_num, line))
            }
            Some((line_num, Err(e))) => Err(MeshError::file_parse(
                origin,
                line_num,
                format!("read failed: {}", e),
            )),
            None => Err(MeshError::file_parse(
                origin,
                last_line + 1,
                format!("unexpected end of file, missing {}", what),
            )),
        }
    };

    let (line_num, line) = next_line("block count")?;
    let n_blocks: usize = line.trim().parse().map_err(|_| {
        MeshError::file_parse(origin, line_num, format!("invalid block count: {}", line.trim()))
    })?;
    if n_blocks != 1 {
        return Err(MeshError::file_parse(
            origin,
            line_num,
            format!("expected 1 block, found {}", n_blocks),
        ));
    }

    let (line_num, line) = next_line("block dimensions")?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(MeshError::file_parse(
            origin,
            line_num,
            format!("expected 3 dimensions, found {}", parts.len()),
        ));
    }
    let mut sizes = [0usize; 3];
    for (size, token) in sizes.iter_mut().zip(&parts) {
        *size = token
            .parse()
            .ok()
            .filter(|&n: &usize| n > 0)
            .ok_or_else(|| {
                MeshError::file_parse(origin, line_num, format!("invalid dimension: {}", token))
            })?;
    }
    let dims = GridDimensions::new(sizes[0], sizes[1], sizes[2]);
    let n = dims
        .checked_n_points()
        .ok_or_else(|| MeshError::file_parse(origin, line_num, "dimensions overflow"))?;

    let mut arrays: [Vec<f64>; 3] = Default::default();
    for (array, axis) in arrays.iter_mut().zip(["x", "y", "z"]) {
        let (line_num, line) = next_line(&format!("{} coordinates", axis))?;
        *array = parse_values(&line, origin, line_num)?;
        if array.len() != n {
            return Err(MeshError::file_parse(
                origin,
                line_num,
                format!("{} array has {} values, header declares {}", axis, array.len(), n),
            ));
        }
    }

    let [x, y, z] = arrays;
    debug!(origin, n_points = n, "parsed surface mesh");
    SurfaceMesh::from_arrays(dims, x, y, z)
}

fn parse_values(line: &str, origin: &str, line_num: usize) -> Result<Vec<f64>, MeshError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                MeshError::file_parse(origin, line_num, format!("invalid number: {}", token))
            })
        })
        .collect()
}
