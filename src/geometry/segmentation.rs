//! Automatic wire segmentation.
//!
//! NEC splits every wire into segments for its current expansion. A segment should stay below
//! 0.05 λ at the lowest frequency of interest, and feeds and loads want a single middle segment,
//! so the count is always odd.

use crate::constants::{SEGMENT_WAVELENGTH_FRACTION, SPEED_OF_LIGHT};
use crate::errors::{DeckError, Result};
use crate::math::Scalar;

/// Target segment length in meters at `min_frequency_hz`.
pub fn target_segment_length(min_frequency_hz: Scalar) -> Result<Scalar> {
    if !(min_frequency_hz.is_finite() && min_frequency_hz > 0.0) {
        return Err(DeckError::Configuration(format!(
            "minimum design frequency must be positive, got {min_frequency_hz} Hz"
        )));
    }
    Ok(SEGMENT_WAVELENGTH_FRACTION * SPEED_OF_LIGHT / min_frequency_hz)
}

/// Returns the odd, positive segment count for a wire of `length_m` meters.
///
/// `floor(length / (0.05 λ_min))`, bumped to the next odd number when even. Wires shorter than
/// one target segment get a single segment.
pub fn segments_for(length_m: Scalar, min_frequency_hz: Scalar) -> Result<u32> {
    if !(length_m.is_finite() && length_m > 0.0) {
        return Err(DeckError::Geometry(format!(
            "wire length must be positive and finite, got {length_m} m"
        )));
    }
    let segment_length = target_segment_length(min_frequency_hz)?;
    // Saturates at u32::MAX, which is already odd.
    let mut segments = (length_m / segment_length).floor() as u32;
    if segments % 2 == 0 {
        segments += 1;
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;

    #[test]
    fn reference_lengths_at_eight_megahertz() {
        // 0.05 * c / 8 MHz = 1.8737 m per segment
        assert_eq!(segments_for(8.0, DEFAULT_MIN_FREQUENCY_HZ).unwrap(), 5);
        assert_eq!(segments_for(12.0, DEFAULT_MIN_FREQUENCY_HZ).unwrap(), 7);
        assert_eq!(segments_for(2.5, DEFAULT_MIN_FREQUENCY_HZ).unwrap(), 1);
        assert_eq!(segments_for(0.3, DEFAULT_MIN_FREQUENCY_HZ).unwrap(), 1);
        assert_eq!(segments_for(259.08, DEFAULT_MIN_FREQUENCY_HZ).unwrap(), 139);
    }

    #[test]
    fn degenerate_lengths_are_geometry_errors() {
        for length in [0.0, -1.0, Scalar::NAN, Scalar::INFINITY] {
            assert!(matches!(
                segments_for(length, DEFAULT_MIN_FREQUENCY_HZ),
                Err(DeckError::Geometry(_))
            ));
        }
    }

    #[test]
    fn non_positive_frequency_is_a_configuration_error() {
        assert!(matches!(segments_for(1.0, 0.0), Err(DeckError::Configuration(_))));
        assert!(matches!(segments_for(1.0, -8.0e6), Err(DeckError::Configuration(_))));
    }

    proptest! {
        #[test]
        fn segment_count_is_odd_and_positive(length in 1.0e-3f64..1.0e4, freq in 1.0e5f64..1.0e9) {
            let n = segments_for(length, freq).unwrap();
            prop_assert!(n >= 1);
            prop_assert_eq!(n % 2, 1);
        }

        #[test]
        fn segment_count_is_monotone_in_length(a in 1.0e-3f64..1.0e4, b in 1.0e-3f64..1.0e4, freq in 1.0e5f64..1.0e9) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(segments_for(short, freq).unwrap() <= segments_for(long, freq).unwrap());
        }
    }
}
