//! Physical constants and fixed design values used while generating decks.
//!
//! ## References
//!
//! - Speed of light is exact by SI definition (2019 revision).
//! - Segment-length guidance follows the NEC-2 user manual, part III: segments should stay
//!   below 0.1 λ, and below 0.05 λ on critical sections.
//! - Conductivities are handbook values at 20 °C.

use crate::errors::{DeckError, Result};
use crate::math::Scalar;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Fraction of the shortest wavelength used as the target segment length.
pub const SEGMENT_WAVELENGTH_FRACTION: Scalar = 0.05;

/// Lowest design frequency used for automatic segmentation (Hz).
pub const DEFAULT_MIN_FREQUENCY_HZ: Scalar = 8.0e6;

/// Aluminium conductivity in siemens per meter.
pub const ALUMINUM_CONDUCTIVITY: Scalar = 3.5e7;
/// Copper conductivity in siemens per meter.
pub const COPPER_CONDUCTIVITY: Scalar = 5.96e7;
/// Annealed copper conductivity in siemens per meter.
pub const ANNEALED_COPPER_CONDUCTIVITY: Scalar = 5.8e7;

/// Value substituted for an exactly-zero current-source component.
///
/// The 4nec2 engine rejects `EX 6` cards with a zero real or imaginary part.
pub const ZERO_CURRENT_NUDGE: Scalar = 1.0e-10;

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

/// Converts an American Wire Gauge number (0 to 36 inclusive) into a radius in meters.
pub fn radius_from_awg(awg: u32) -> Result<Scalar> {
    if awg > 36 {
        return Err(DeckError::Configuration(format!(
            "supplied AWG of {awg} is invalid"
        )));
    }
    let radius_mm = 0.127 * (92.0_f64).powf(Scalar::from(36 - awg) / 39.0);
    Ok(radius_mm / 1000.0)
}
