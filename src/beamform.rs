//! Excitation phase distributions for a linear array.
//!
//! All phases are in degrees. Beams are indexed from 1; beam 0 means "no steering". The beam
//! grid is centred between indices 7 and 8, so the valid range 1..=16 reaches one step further
//! clockwise than counter-clockwise.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::constants::wavelength_from_frequency;
use crate::errors::{DeckError, Result};
use crate::math::{deg_to_rad, Scalar};

/// Beam layout of a radar: angular separation between adjacent beams and beam count.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamPattern {
    /// Azimuth step between adjacent beams, degrees.
    pub separation_deg: Scalar,
    /// Number of beams.
    pub num_beams: u32,
}

impl Default for BeamPattern {
    fn default() -> Self {
        Self { separation_deg: 3.24, num_beams: 16 }
    }
}

impl BeamPattern {
    /// Azimuth of `beam` in degrees from boresight; negative is counter-clockwise.
    #[must_use]
    pub fn beam_azimuth(&self, beam: u32) -> Scalar {
        (Scalar::from(beam) - Scalar::from(self.num_beams) / 2.0 + 0.5) * self.separation_deg
    }

    /// Phase difference between adjacent elements that points the array at `beam`.
    pub fn steering_phase(
        &self,
        beam: u32,
        frequency_hz: Scalar,
        spacing_m: Scalar,
    ) -> Result<Scalar> {
        check_frequency(frequency_hz)?;
        if beam == 0 {
            return Ok(0.0);
        }
        if beam > self.num_beams {
            return Err(DeckError::Configuration(format!(
                "beam {beam} out of range 1..={}",
                self.num_beams
            )));
        }
        let wavelength = wavelength_from_frequency(frequency_hz);
        let azimuth = self.beam_azimuth(beam);
        let phase = 360.0 * spacing_m * deg_to_rad(azimuth).sin() / wavelength;
        debug!(beam, azimuth, wavelength, phase, "steering phase");
        Ok(phase)
    }
}

/// [`BeamPattern::steering_phase`] for the default 16-beam, 3.24° layout.
pub fn steering_phase(beam: u32, frequency_hz: Scalar, spacing_m: Scalar) -> Result<Scalar> {
    BeamPattern::default().steering_phase(beam, frequency_hz, spacing_m)
}

/// Per-element phases for a uniform ramp of `step_deg` across `num_elements`.
#[must_use]
pub fn progressive_phase(step_deg: Scalar, num_elements: usize) -> Vec<Scalar> {
    (0..num_elements).map(|i| step_deg * i as Scalar).collect()
}

/// Broadened beam from `num_subarrays` sub-arrays, each steered to a different azimuth.
///
/// Sub-array `k` of the first half points at `acos((2k+1)·λ·M / (2·N·d)) − π/2` and ramps its
/// phase cumulatively across its elements. The second half mirrors the first, so the result is
/// symmetric about the array centre.
pub fn broadened_phase(
    frequency_hz: Scalar,
    spacing_m: Scalar,
    num_elements: usize,
    num_subarrays: usize,
) -> Result<Vec<Scalar>> {
    check_frequency(frequency_hz)?;
    if num_subarrays == 0 || num_subarrays % 2 != 0 {
        return Err(DeckError::Configuration(format!(
            "broadened beam needs a positive even sub-array count, got {num_subarrays}"
        )));
    }
    if num_elements % num_subarrays != 0 {
        return Err(DeckError::Configuration(format!(
            "{num_elements} elements cannot be split into {num_subarrays} equal sub-arrays"
        )));
    }
    if !(spacing_m.is_finite() && spacing_m > 0.0) {
        return Err(DeckError::Configuration(format!(
            "element spacing must be positive, got {spacing_m} m"
        )));
    }

    let wavelength = wavelength_from_frequency(frequency_hz);
    let per_subarray = num_elements / num_subarrays;
    let mut phases = Vec::with_capacity(num_elements);
    for k in 0..num_subarrays / 2 {
        let arg = (2 * k + 1) as Scalar * wavelength * num_subarrays as Scalar
            / (2.0 * num_elements as Scalar * spacing_m);
        if !(-1.0..=1.0).contains(&arg) {
            return Err(DeckError::NumericDomain(format!(
                "sub-array {k} arc-cosine argument {arg} outside [-1, 1]"
            )));
        }
        let azimuth = arg.acos() - FRAC_PI_2;
        let step = 360.0 * spacing_m * azimuth.sin() / wavelength;
        debug!(subarray = k, azimuth_deg = azimuth.to_degrees(), step, "broadened sub-array");
        phases.extend((1..=per_subarray).map(|n| step * n as Scalar));
    }
    let mirrored: Vec<Scalar> = phases.iter().rev().copied().collect();
    phases.extend(mirrored);
    Ok(phases)
}

/// Parabolic phase taper. Not implemented.
pub fn parabolic_phase(
    _frequency_hz: Scalar,
    _spacing_m: Scalar,
    _num_elements: usize,
) -> Result<Vec<Scalar>> {
    Err(DeckError::NotSupported("parabolic phase distribution"))
}

/// Circular phase taper. Not implemented.
pub fn circular_phase(
    _frequency_hz: Scalar,
    _spacing_m: Scalar,
    _num_elements: usize,
) -> Result<Vec<Scalar>> {
    Err(DeckError::NotSupported("circular phase distribution"))
}

fn check_frequency(frequency_hz: Scalar) -> Result<()> {
    if frequency_hz.is_finite() && frequency_hz > 0.0 {
        Ok(())
    } else {
        Err(DeckError::Configuration(format!(
            "frequency must be positive, got {frequency_hz} Hz"
        )))
    }
}
