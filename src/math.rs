//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use std::f64::consts::PI;

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors (positions and offsets in meters).
pub type R3 = Vector3<Scalar>;
/// Primary complex scalar type used for excitations and impedances.
pub type CScalar = num_complex::Complex<Scalar>;

/// Converts degrees to radians, evaluated strictly as `deg * π / 180`.
///
/// Not interchangeable with `f64::to_radians`, which rounds differently for some inputs.
#[inline]
#[must_use]
pub fn deg_to_rad(deg: Scalar) -> Scalar {
    deg * PI / 180.0
}

/// Returns `magnitude * (cos θ + j sin θ)` for a phase given in degrees.
#[must_use]
pub fn phasor_deg(magnitude: Scalar, phase_deg: Scalar) -> CScalar {
    let theta = deg_to_rad(phase_deg);
    CScalar::new(magnitude * theta.cos(), magnitude * theta.sin())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_quadrature_points() {
        let p = phasor_deg(2.0, 90.0);
        assert_relative_eq!(p.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, 2.0, epsilon = 1.0e-12);
        let p = phasor_deg(1.0, 180.0);
        assert_relative_eq!(p.re, -1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_phase_is_exactly_real() {
        let p = phasor_deg(1.0, 0.0);
        assert_eq!(p, CScalar::new(1.0, 0.0));
    }
}
