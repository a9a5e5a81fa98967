//! Reflector fence behind an array.

use crate::constants::radius_from_awg;
use crate::errors::{DeckError, Result};
use crate::math::{deg_to_rad, Scalar, R3};

use super::wire::{TagSequence, Wire};

/// Row of horizontal wires approximating a reflecting screen.
///
/// The first wire hangs at `start_height_m`; each following wire sits `spacing_m` further down
/// the slope, which descends away from the array (towards -y) at `angle_deg`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectorFence {
    /// Length of every fence wire in meters.
    pub length_m: Scalar,
    /// Straight-line distance between successive wires along the slope, meters.
    pub spacing_m: Scalar,
    /// Number of wires. Zero would mean "fill down to the ground", which is not implemented.
    pub num_wires: u32,
    /// Height of the top wire in meters.
    pub start_height_m: Scalar,
    /// Slope angle in degrees.
    pub angle_deg: Scalar,
    /// Wire gauge (AWG).
    pub awg: u32,
    /// Global offset applied to every wire.
    pub offset: R3,
}

impl ReflectorFence {
    /// Fence with the usual 15 m start height, 45° slope and 13 AWG wire.
    #[must_use]
    pub fn new(length_m: Scalar, spacing_m: Scalar, num_wires: u32) -> Self {
        Self {
            length_m,
            spacing_m,
            num_wires,
            start_height_m: 15.0,
            angle_deg: 45.0,
            awg: 13,
            offset: R3::zeros(),
        }
    }

    /// Places the fence at `offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: R3) -> Self {
        self.offset = offset;
        self
    }

    /// Builds the fence wires, allocating tags from `tags`.
    pub fn build(&self, tags: &mut TagSequence) -> Result<Vec<Wire>> {
        if self.num_wires == 0 {
            return Err(DeckError::NotSupported(
                "reflector wire count derived from fence geometry",
            ));
        }
        let angle = deg_to_rad(self.angle_deg);
        let lowest = self.start_height_m
            - Scalar::from(self.num_wires - 1) * angle.sin() * self.spacing_m
            + self.offset.z;
        if lowest <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "reflector fence reaches the ground: lowest wire at {lowest} m"
            )));
        }
        let radius = radius_from_awg(self.awg)?;

        let mut wires = Vec::with_capacity(self.num_wires as usize);
        for k in 0..self.num_wires {
            let k = Scalar::from(k);
            let y = -k * angle.cos() * self.spacing_m;
            let z = self.start_height_m - k * angle.sin() * self.spacing_m;
            let start = R3::new(-self.length_m / 2.0, y, z) + self.offset;
            let end = R3::new(self.length_m / 2.0, y, z) + self.offset;
            wires.push(tags.wire(start, end, radius)?);
        }
        Ok(wires)
    }
}

/// Builds a fence of `num_wires` wires from the given dimensions.
pub fn build(
    tags: &mut TagSequence,
    length_m: Scalar,
    spacing_m: Scalar,
    num_wires: u32,
    start_height_m: Scalar,
    angle_deg: Scalar,
    offset: R3,
) -> Result<Vec<Wire>> {
    ReflectorFence {
        start_height_m,
        angle_deg,
        offset,
        ..ReflectorFence::new(length_m, spacing_m, num_wires)
    }
    .build(tags)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;

    #[test]
    fn wires_step_down_the_slope() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let wires = build(&mut tags, 259.08, 0.707, 21, 15.0, 45.0, R3::zeros()).unwrap();
        assert_eq!(wires.len(), 21);
        assert_relative_eq!(wires[0].start, R3::new(-129.54, 0.0, 15.0));
        let step = 0.707 * std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(wires[20].start.y, -20.0 * step, epsilon = 1.0e-9);
        assert_relative_eq!(wires[20].start.z, 15.0 - 20.0 * step, epsilon = 1.0e-9);
        for wire in &wires {
            assert_relative_eq!(wire.length(), 259.08, epsilon = 1.0e-9);
            assert_relative_eq!(wire.start.z, wire.end.z);
        }
        assert_eq!(tags.issued(), 21);
    }

    #[test]
    fn offset_moves_whole_fence() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let fence = ReflectorFence::new(76.2, 0.707, 3).with_offset(R3::new(0.0, -100.0, 0.0));
        let wires = fence.build(&mut tags).unwrap();
        assert_relative_eq!(wires[0].start.y, -100.0);
        assert!(wires[2].start.y < -100.0);
    }

    #[test]
    fn zero_wires_is_not_supported() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let result = build(&mut tags, 10.0, 0.7, 0, 15.0, 45.0, R3::zeros());
        assert!(matches!(result, Err(DeckError::NotSupported(_))));
        assert_eq!(tags.issued(), 0);
    }

    #[test]
    fn fence_into_the_ground_is_rejected() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let result = build(&mut tags, 10.0, 1.0, 40, 15.0, 45.0, R3::zeros());
        assert!(matches!(result, Err(DeckError::Configuration(_))));
        assert_eq!(tags.issued(), 0);
    }
}
