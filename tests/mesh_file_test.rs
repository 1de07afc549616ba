//! End-to-end tests for NACA 0012 surface mesh files.
//!
//! Verifies the written `.xyz` layout, round-tripping through the reader,
//! and byte-for-byte reproducibility.

use std::fs;

use naca_mesh::io::read_plot3d;
use naca_mesh::{
    GridDimensions, MeshError, SurfaceMeshConfig, compute_profile, generate_mesh_file,
    uniform_samples,
};
use tempfile::tempdir;

#[test]
fn test_reference_scenario_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("t.xyz");

    let config = SurfaceMeshConfig::new(15, 2, 1.0).with_y_num(2);
    generate_mesh_file(&path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "15 2 2");
    assert_eq!(lines.len(), 5);
    for line in &lines[2..5] {
        let tokens: Vec<f64> = line
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(tokens.len(), 60);
    }
}

#[test]
fn test_round_trip_to_six_decimals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("naca.xyz");

    let config = SurfaceMeshConfig::new(41, 3, 2.0).with_span_pitch(0.25);
    let written = generate_mesh_file(&path, &config).unwrap();
    let read = read_plot3d(&path).unwrap();

    assert_eq!(read.dims, GridDimensions::new(41, 2, 3));
    assert_eq!(read.n_points(), 41 * 2 * 3);
    for (a, b) in [(&written.x, &read.x), (&written.y, &read.y), (&written.z, &read.z)] {
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(b.iter()) {
            assert!((va - vb).abs() <= 5e-7, "{} vs {}", va, vb);
        }
    }
}

#[test]
fn test_identical_arguments_give_identical_bytes() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.xyz");
    let second = dir.path().join("b.xyz");
    let config = SurfaceMeshConfig::default();

    generate_mesh_file(&first, &config).unwrap();
    generate_mesh_file(&second, &config).unwrap();
    let bytes_a = fs::read(&first).unwrap();
    assert_eq!(bytes_a, fs::read(&second).unwrap());

    // Regenerating over an existing file is also stable
    generate_mesh_file(&first, &config).unwrap();
    assert_eq!(bytes_a, fs::read(&first).unwrap());
}

#[test]
fn test_two_chord_points_are_endpoints() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two.xyz");

    let config = SurfaceMeshConfig::new(2, 1, 1.5).with_y_num(1);
    generate_mesh_file(&path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "2 1 1");
    assert_eq!(lines[2].trim_end(), "0.000000 1.500000");
}

#[test]
fn test_profile_symmetry_and_closure() {
    let x = uniform_samples(5, 1.0);
    assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let y_upper = compute_profile(&x, 1.0).unwrap();
    let y_lower: Vec<f64> = y_upper.iter().map(|y| -y).collect();
    for (u, l) in y_upper.iter().zip(&y_lower) {
        assert_eq!(*u, -*l);
    }
    assert!(y_upper[0].abs() < 1e-9);
    assert!((y_upper[4] - 0.00126).abs() < 1e-6);
}

#[test]
fn test_spanwise_values_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("span.xyz");

    let config = SurfaceMeshConfig::new(3, 3, 1.0).with_y_num(2);
    generate_mesh_file(&path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let z_line = content.lines().nth(4).unwrap();
    let z: Vec<&str> = z_line.split_whitespace().collect();
    assert_eq!(z.len(), 18);
    assert!(z[..6].iter().all(|&t| t == "0.000000"));
    assert!(z[6..12].iter().all(|&t| t == "0.100000"));
    assert!(z[12..].iter().all(|&t| t == "0.200000"));
}

#[test]
fn test_non_positive_sizes_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.xyz");

    for config in [
        SurfaceMeshConfig::new(15, 0, 1.0),
        SurfaceMeshConfig::new(15, 2, 0.0),
        SurfaceMeshConfig::new(15, 2, 1.0).with_y_num(0),
    ] {
        let err = generate_mesh_file(&path, &config).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { .. }));
    }
    assert!(!path.exists());
}
