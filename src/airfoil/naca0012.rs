//! NACA 0012 symmetric airfoil.
//!
//! The half-thickness of a NACA 00xx section with thickness ratio `t` is
//!
//! ```text
//! y(x) = 5t (0.2969 √x − 0.1260 x − 0.3516 x² + 0.2843 x³ − 0.1015 x⁴)
//! ```
//!
//! For the 12% section `5t = 0.6`. The polynomial is evaluated directly on
//! the chord-scaled sample positions; positions are not divided by the chord
//! first. Downstream meshes were generated this way, so the same surface is
//! reproduced here.

use crate::mesh::MeshError;

/// Leading factor `5t` for a 12% thick section.
pub const NACA0012_SCALE: f64 = 0.6;

/// Coefficients of `√x, x, x², x³, x⁴` in the thickness polynomial.
pub const NACA0012_COEFFICIENTS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1015];

/// Half-thickness of the NACA 0012 section at a single position.
///
/// Callers must pass `x >= 0`; negative input yields NaN.
#[inline]
pub fn naca0012_half_thickness(x: f64) -> f64 {
    let [a0, a1, a2, a3, a4] = NACA0012_COEFFICIENTS;
    NACA0012_SCALE * (a0 * x.sqrt() + (a1 + (a2 + (a3 + a4 * x) * x) * x) * x)
}

/// Evaluate the upper-surface half-thickness at each chordwise position.
///
/// The lower surface is the negation of the returned values.
///
/// # Errors
/// `MeshError::InvalidArgument` if `chord` is not a positive finite number,
/// or if any sample is negative or non-finite.
pub fn compute_profile(x_positions: &[f64], chord: f64) -> Result<Vec<f64>, MeshError> {
    if !(chord.is_finite() && chord > 0.0) {
        return Err(MeshError::invalid_argument(
            "chord",
            format!("must be positive and finite, got {}", chord),
        ));
    }

    if let Some((idx, &x)) = x_positions
        .iter()
        .enumerate()
        .find(|(_, x)| !(x.is_finite() && **x >= 0.0))
    {
        return Err(MeshError::invalid_argument(
            "x_positions",
            format!("sample {} is {}, expected a finite value >= 0", idx, x),
        ));
    }

    Ok(x_positions
        .iter()
        .map(|&x| naca0012_half_thickness(x))
        .collect())
}

/// `n` evenly spaced positions over `[0, chord]`, both endpoints included.
///
/// The last sample is pinned to `chord` exactly. `n == 1` gives `[0.0]`,
/// `n == 0` an empty vector.
pub fn uniform_samples(n: usize, chord: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = chord / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { chord } else { i as f64 * step })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leading_edge_closed() {
        for chord in [0.1, 0.5, 1.0, 2.0, 10.0] {
            let y = compute_profile(&[0.0], chord).unwrap();
            assert!(y[0].abs() < 1e-9, "chord {}: y(0) = {}", chord, y[0]);
        }
    }

    #[test]
    fn test_trailing_edge_value() {
        let y = compute_profile(&[1.0], 1.0).unwrap();
        assert!((y[0] - 0.00126).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_samples_unit_chord() {
        let x = uniform_samples(5, 1.0);
        assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_uniform_samples_endpoints() {
        let x = uniform_samples(2, 3.7);
        assert_eq!(x, vec![0.0, 3.7]);

        let x = uniform_samples(7, 0.3);
        assert_eq!(x.len(), 7);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[6], 0.3);
    }

    #[test]
    fn test_evaluated_on_scaled_positions() {
        // Chord only affects validation, not the evaluation itself
        let a = compute_profile(&[0.3, 0.7], 1.0).unwrap();
        let b = compute_profile(&[0.3, 0.7], 2.0).unwrap();
        assert_eq!(a, b);
        assert_relative_eq!(a[0], naca0012_half_thickness(0.3));
    }

    #[test]
    fn test_maximum_thickness_near_30_percent() {
        let x = uniform_samples(1001, 1.0);
        let y = compute_profile(&x, 1.0).unwrap();
        let (i_max, y_max) = y
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });

        assert!((x[i_max] - 0.3).abs() < 0.01);
        // 12% thickness -> half-thickness 0.06
        assert_relative_eq!(y_max, 0.06, epsilon = 1e-3);
    }

    #[test]
    fn test_rejects_bad_chord() {
        assert!(matches!(
            compute_profile(&[0.0], 0.0),
            Err(MeshError::InvalidArgument { .. })
        ));
        assert!(compute_profile(&[0.0], -1.0).is_err());
        assert!(compute_profile(&[0.0], f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_negative_sample() {
        let err = compute_profile(&[0.0, -0.1], 1.0).unwrap_err();
        assert!(err.to_string().contains("x_positions"));
    }
}
