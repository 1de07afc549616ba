//! Hyperbolic volume-mesh extrusion options.
//!
//! The extruder marches the surface mesh outwards to a far-field boundary.
//! Serialises to the option names the extruder expects (`inputFile`, `N`,
//! `s0`, `marchDist`, ...).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::ConfigError;

/// Boundary condition applied to the outermost extruded face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OuterFaceBc {
    Farfield,
    Overset,
}

/// Face of a structured surface block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockFace {
    ILow,
    IHigh,
    JLow,
    JHigh,
}

/// Boundary condition tag for a block face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaceBc {
    #[serde(rename = "xSymm")]
    XSymm,
    #[serde(rename = "ySymm")]
    YSymm,
    #[serde(rename = "zSymm")]
    ZSymm,
    #[serde(rename = "splay")]
    Splay,
    #[serde(rename = "xConst")]
    XConst,
    #[serde(rename = "yConst")]
    YConst,
    #[serde(rename = "zConst")]
    ZConst,
}

/// Options for the hyperbolic extruder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrusionConfig {
    /// Surface mesh to extrude.
    pub input_file: PathBuf,
    /// Where the volume mesh is written; handed to the extruder separately.
    #[serde(skip)]
    pub output_file: PathBuf,
    pub unattached_edges_are_symmetry: bool,
    #[serde(rename = "outerFaceBC")]
    pub outer_face_bc: OuterFaceBc,
    pub auto_connect: bool,
    /// Face boundary conditions per 1-based block number.
    #[serde(rename = "BC")]
    pub block_bcs: BTreeMap<u32, BTreeMap<BlockFace, FaceBc>>,
    /// Family name given to the extruded wall.
    pub families: String,

    /// Number of layers in the marching direction.
    #[serde(rename = "N")]
    pub n_layers: usize,
    /// First off-wall layer thickness.
    #[serde(rename = "s0")]
    pub first_layer: f64,
    /// Total marching distance.
    pub march_dist: f64,

    pub ps0: f64,
    pub p_grid_ratio: f64,
    pub c_max: f64,

    pub eps_e: f64,
    pub eps_i: f64,
    pub theta: f64,
    pub vol_coef: f64,
    pub vol_blend: f64,
    pub vol_smooth_iter: usize,
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        let mut block_1 = BTreeMap::new();
        block_1.insert(BlockFace::JLow, FaceBc::ZSymm);
        block_1.insert(BlockFace::JHigh, FaceBc::ZSymm);
        let mut block_bcs = BTreeMap::new();
        block_bcs.insert(1, block_1);

        Self {
            input_file: PathBuf::from("surfaceMesh.xyz"),
            output_file: PathBuf::from("volumeMesh.xyz"),
            unattached_edges_are_symmetry: false,
            outer_face_bc: OuterFaceBc::Farfield,
            auto_connect: true,
            block_bcs,
            families: "wall".to_string(),
            n_layers: 33,
            first_layer: 4e-3,
            march_dist: 20.0,
            ps0: -1.0,
            p_grid_ratio: -1.0,
            c_max: 1.0,
            eps_e: 2.0,
            eps_i: 4.0,
            theta: 2.0,
            vol_coef: 0.20,
            vol_blend: 0.0005,
            vol_smooth_iter: 20,
        }
    }
}

impl ExtrusionConfig {
    /// Default options for extruding `input_file` into `output_file`.
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            ..Default::default()
        }
    }

    /// Set layer count, first-layer thickness and marching distance.
    pub fn with_marching(mut self, n_layers: usize, first_layer: f64, march_dist: f64) -> Self {
        self.n_layers = n_layers;
        self.first_layer = first_layer;
        self.march_dist = march_dist;
        self
    }

    /// Set the boundary condition for one face of one block.
    pub fn with_face_bc(mut self, block: u32, face: BlockFace, bc: FaceBc) -> Self {
        self.block_bcs.entry(block).or_default().insert(face, bc);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ConfigError::invalid("inputFile", "empty path"));
        }
        if self.n_layers < 2 {
            return Err(ConfigError::invalid(
                "N",
                format!("need at least 2 layers, got {}", self.n_layers),
            ));
        }
        if !(self.first_layer.is_finite() && self.first_layer > 0.0) {
            return Err(ConfigError::invalid(
                "s0",
                format!("must be positive, got {}", self.first_layer),
            ));
        }
        if !(self.march_dist.is_finite() && self.march_dist > self.first_layer) {
            return Err(ConfigError::invalid(
                "marchDist",
                format!(
                    "must exceed the first layer thickness {}, got {}",
                    self.first_layer, self.march_dist
                ),
            ));
        }
        if self.c_max <= 0.0 {
            return Err(ConfigError::invalid("cMax", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.vol_blend) {
            return Err(ConfigError::invalid("volBlend", "must lie in [0, 1]"));
        }
        if self.block_bcs.keys().any(|&b| b == 0) {
            return Err(ConfigError::invalid("BC", "block numbers start at 1"));
        }
        Ok(())
    }

    /// Options as a JSON value for the extruder.
    pub fn to_json(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }
}
