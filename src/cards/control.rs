//! Program control cards: ground, radiation pattern request.

use std::fmt;

use crate::math::Scalar;

use super::format::Real;

/// Ground model (`GN`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    /// Ground type: 0 finite (reflection coefficient), 1 perfect, 2 Sommerfeld/Norton.
    pub ground_type: i32,
    /// Relative dielectric constant of the ground.
    pub epsilon_r: Scalar,
    /// Ground conductivity in S/m.
    pub conductivity: Scalar,
}

impl Default for Ground {
    /// Sommerfeld ground with average soil (εr = 13, σ = 0.005 S/m).
    fn default() -> Self {
        Self { ground_type: 2, epsilon_r: 13.0, conductivity: 0.005 }
    }
}

impl fmt::Display for Ground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GN {} 0 0 0 {} {}",
            self.ground_type,
            Real(self.epsilon_r),
            Real(self.conductivity)
        )
    }
}

/// Far-field pattern request (`RP`), angles in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationPattern {
    /// Number of elevation (θ) steps.
    pub theta_steps: u32,
    /// Number of azimuth (φ) steps.
    pub phi_steps: u32,
    /// First θ.
    pub theta_start: Scalar,
    /// First φ.
    pub phi_start: Scalar,
    /// θ increment.
    pub theta_increment: Scalar,
    /// φ increment.
    pub phi_increment: Scalar,
}

impl Default for RadiationPattern {
    /// Full azimuth cut (φ 0°..360° in 1° steps) at every elevation from 0° to 89°.
    fn default() -> Self {
        Self {
            theta_steps: 90,
            phi_steps: 361,
            theta_start: 0.0,
            phi_start: 0.0,
            theta_increment: 1.0,
            phi_increment: 1.0,
        }
    }
}

impl RadiationPattern {
    /// Single elevation azimuth cut at `theta_deg`.
    #[must_use]
    pub fn azimuth_cut(theta_deg: Scalar) -> Self {
        Self { theta_steps: 1, theta_start: theta_deg, theta_increment: 0.0, ..Self::default() }
    }
}

impl fmt::Display for RadiationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // XNDA = 1000: major/minor axes, no normalisation, power gain, no averaging.
        write!(
            f,
            "RP 0 {} {} 1000 {} {} {} {}",
            self.theta_steps,
            self.phi_steps,
            Real(self.theta_start),
            Real(self.phi_start),
            Real(self.theta_increment),
            Real(self.phi_increment)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ground_card() {
        assert_eq!(Ground::default().to_string(), "GN 2 0 0 0 13.0 0.005");
    }

    #[test]
    fn default_pattern_card() {
        assert_eq!(RadiationPattern::default().to_string(), "RP 0 90 361 1000 0.0 0.0 1.0 1.0");
    }

    #[test]
    fn azimuth_cut_card() {
        assert_eq!(
            RadiationPattern::azimuth_cut(45.0).to_string(),
            "RP 0 1 361 1000 45.0 0.0 0.0 1.0"
        );
    }
}
