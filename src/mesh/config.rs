//! Surface mesh generation options.

use std::path::PathBuf;

use serde::Serialize;

use super::MeshError;
use super::surface::GridDimensions;

/// Every option recognised when generating the NACA 0012 surface mesh.
///
/// Defaults reproduce the reference surface: 15 chordwise points, lower and
/// upper side, two spanwise stations 0.1 apart on a unit chord.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceMeshConfig {
    /// Output file.
    pub file_name: PathBuf,
    /// Chordwise sample count (>= 2).
    pub x_num: usize,
    /// Spanwise station count (>= 1).
    pub z_num: usize,
    /// Chord length (> 0).
    pub chord: f64,
    /// Surface-side repetitions per station; 2 gives lower + upper.
    pub y_num: usize,
    /// Spanwise distance between stations (>= 0).
    pub span_pitch: f64,
}

impl Default for SurfaceMeshConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("naca0012.xyz"),
            x_num: 15,
            z_num: 2,
            chord: 1.0,
            y_num: 2,
            span_pitch: 0.1,
        }
    }
}

impl SurfaceMeshConfig {
    /// Config with the given chordwise/spanwise counts and chord, other options default.
    pub fn new(x_num: usize, z_num: usize, chord: f64) -> Self {
        Self {
            x_num,
            z_num,
            chord,
            ..Default::default()
        }
    }

    /// Set the output file.
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the number of surface sides.
    pub fn with_y_num(mut self, y_num: usize) -> Self {
        self.y_num = y_num;
        self
    }

    /// Set the spanwise pitch.
    pub fn with_span_pitch(mut self, span_pitch: f64) -> Self {
        self.span_pitch = span_pitch;
        self
    }

    /// Grid dimensions implied by this config.
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.x_num, self.y_num, self.z_num)
    }

    /// Check every option, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.x_num < 2 {
            return Err(MeshError::invalid_argument(
                "x_num",
                format!("need at least 2 chordwise points, got {}", self.x_num),
            ));
        }
        if self.z_num < 1 {
            return Err(MeshError::invalid_argument(
                "z_num",
                "need at least 1 spanwise station",
            ));
        }
        if self.y_num < 1 {
            return Err(MeshError::invalid_argument(
                "y_num",
                "need at least 1 surface side",
            ));
        }
        if !(self.chord.is_finite() && self.chord > 0.0) {
            return Err(MeshError::invalid_argument(
                "chord",
                format!("must be positive and finite, got {}", self.chord),
            ));
        }
        if !(self.span_pitch.is_finite() && self.span_pitch >= 0.0) {
            return Err(MeshError::invalid_argument(
                "span_pitch",
                format!("must be non-negative and finite, got {}", self.span_pitch),
            ));
        }
        Ok(())
    }
}
