//! Ideal transmission line between two wire segments (`TL` card).

use std::fmt;

use crate::geometry::wire::WireTag;
use crate::math::Scalar;

use super::format::Real;

/// Default characteristic impedance in ohms.
pub const DEFAULT_LINE_IMPEDANCE: Scalar = 50.0;

/// One end of a transmission line: a wire tag and a one-based segment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRef {
    /// Wire tag.
    pub tag: WireTag,
    /// Segment number on that wire.
    pub segment: u32,
}

impl SegmentRef {
    /// Refers to `segment` of wire `tag`.
    #[must_use]
    pub const fn new(tag: WireTag, segment: u32) -> Self {
        Self { tag, segment }
    }
}

/// Non-radiating transmission line descriptor.
///
/// A crossed line carries a 180° twist between its ends, which the engine expects as a negated
/// characteristic impedance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionLine {
    /// End 1.
    pub from: SegmentRef,
    /// End 2.
    pub to: SegmentRef,
    /// Characteristic impedance magnitude in ohms.
    pub impedance: Scalar,
    /// Physical length in meters; zero lets the engine use the straight-line distance.
    pub length_m: Scalar,
    /// Whether the line is twisted between its ends.
    pub crossed: bool,
}

impl TransmissionLine {
    /// Straight 50 Ω line of engine-computed length.
    #[must_use]
    pub fn new(from: SegmentRef, to: SegmentRef) -> Self {
        Self { from, to, impedance: DEFAULT_LINE_IMPEDANCE, length_m: 0.0, crossed: false }
    }

    /// Crossed 50 Ω line of engine-computed length.
    #[must_use]
    pub fn crossed(from: SegmentRef, to: SegmentRef) -> Self {
        Self { crossed: true, ..Self::new(from, to) }
    }

    /// Sets the characteristic impedance.
    #[must_use]
    pub fn with_impedance(mut self, impedance: Scalar) -> Self {
        self.impedance = impedance;
        self
    }

    /// Sets an explicit physical length.
    #[must_use]
    pub fn with_length(mut self, length_m: Scalar) -> Self {
        self.length_m = length_m;
        self
    }

    /// Impedance as written to the card, negated for crossed lines.
    #[must_use]
    pub fn signed_impedance(&self) -> Scalar {
        if self.crossed {
            -self.impedance
        } else {
            self.impedance
        }
    }
}

impl fmt::Display for TransmissionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TL {} {} {} {} {} {} 0.0 0.0 0.0 0.0",
            self.from.tag,
            self.from.segment,
            self.to.tag,
            self.to.segment,
            Real(self.signed_impedance()),
            Real(self.length_m)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;
    use crate::geometry::wire::TagSequence;
    use crate::math::R3;

    fn two_tags() -> (WireTag, WireTag) {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let a = tags.wire(R3::zeros(), R3::new(1.0, 0.0, 0.0), 0.01).unwrap();
        let b = tags.wire(R3::zeros(), R3::new(0.0, 1.0, 0.0), 0.01).unwrap();
        (a.tag(), b.tag())
    }

    #[test]
    fn crossed_line_negates_impedance() {
        let (a, b) = two_tags();
        let tl = TransmissionLine::crossed(SegmentRef::new(a, 7), SegmentRef::new(b, 8));
        assert_eq!(tl.to_string(), "TL 1 7 2 8 -50.0 0.0 0.0 0.0 0.0 0.0");
    }

    #[test]
    fn straight_line_with_explicit_length() {
        let (a, b) = two_tags();
        let tl = TransmissionLine::new(SegmentRef::new(a, 1), SegmentRef::new(b, 1))
            .with_impedance(75.0)
            .with_length(0.5);
        assert_eq!(tl.signed_impedance(), 75.0);
        assert_eq!(tl.to_string(), "TL 1 1 2 1 75.0 0.5 0.0 0.0 0.0 0.0");
    }
}
