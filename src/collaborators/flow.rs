//! Freestream flow conditions.

use serde::Serialize;

use super::ConfigError;

/// Freestream state and reference quantities for an airfoil flow case.
///
/// Units are SI. The inlet speed is derived from the Reynolds number so
/// that `Re = rho * U0 * chord / mu`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowConditions {
    /// Reynolds number based on chord.
    pub reynolds: f64,
    /// Reference chord (m).
    pub chord: f64,
    /// Air density (kg/m³).
    pub rho: f64,
    /// Dynamic viscosity (kg/(m·s)).
    pub mu: f64,
    /// Freestream static pressure (Pa).
    pub p0: f64,
    /// Freestream Spalart-Allmaras working variable (m²/s).
    pub nu_tilda0: f64,
    /// Reference area used to normalise forces (m²).
    pub reference_area: f64,
    /// Reference density used to normalise forces.
    pub rho_ref: f64,
}

impl Default for FlowConditions {
    fn default() -> Self {
        Self {
            reynolds: 6e6,
            chord: 1.0,
            rho: 1.225,
            mu: 1.7894e-5,
            p0: 101_325.0,
            nu_tilda0: 4.5e-5,
            reference_area: 0.1,
            rho_ref: 1.0,
        }
    }
}

impl FlowConditions {
    /// Sea-level air at the given Reynolds number on a unit chord.
    pub fn new(reynolds: f64) -> Self {
        Self {
            reynolds,
            ..Default::default()
        }
    }

    pub fn with_chord(mut self, chord: f64) -> Self {
        self.chord = chord;
        self
    }

    /// Freestream speed `U0 = Re * mu / (rho * chord)`.
    pub fn freestream_velocity(&self) -> f64 {
        self.reynolds * self.mu / (self.rho * self.chord)
    }

    /// Force coefficient scale `1 / (0.5 * U0² * A * rho_ref)`.
    pub fn force_scale(&self) -> f64 {
        let u0 = self.freestream_velocity();
        1.0 / (0.5 * u0 * u0 * self.reference_area * self.rho_ref)
    }

    /// Inlet velocity vector for an angle of attack in degrees.
    pub fn velocity_vector(&self, aoa_degrees: f64) -> [f64; 3] {
        let u0 = self.freestream_velocity();
        let alpha = aoa_degrees.to_radians();
        [u0 * alpha.cos(), u0 * alpha.sin(), 0.0]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("reynolds", self.reynolds),
            ("chord", self.chord),
            ("rho", self.rho),
            ("mu", self.mu),
            ("reference_area", self.reference_area),
            ("rho_ref", self.rho_ref),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be positive and finite, got {}", value),
                ));
            }
        }
        if !(self.nu_tilda0.is_finite() && self.nu_tilda0 >= 0.0) {
            return Err(ConfigError::invalid("nu_tilda0", "must be non-negative"));
        }
        Ok(())
    }
}
