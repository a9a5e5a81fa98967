//! Loads, conductor material and excitations (`LD` and `EX` cards).

use std::fmt;

use crate::constants::ZERO_CURRENT_NUDGE;
use crate::geometry::wire::WireTag;
use crate::math::{CScalar, Scalar};

use super::format::Real;

/// Segments of a wire a card applies to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentSpan {
    /// Every segment of the wire (written as `0 0`).
    #[default]
    Whole,
    /// Inclusive one-based segment range.
    Range {
        /// First segment.
        start: u32,
        /// Last segment.
        end: u32,
    },
}

impl SegmentSpan {
    /// A single segment.
    #[must_use]
    pub const fn single(segment: u32) -> Self {
        Self::Range { start: segment, end: segment }
    }

    fn bounds(self) -> (u32, u32) {
        match self {
            Self::Whole => (0, 0),
            Self::Range { start, end } => (start, end),
        }
    }
}

/// Series impedance load (`LD 4`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    /// Loaded wire.
    pub tag: WireTag,
    /// Loaded segments.
    pub span: SegmentSpan,
    /// Complex impedance in ohms.
    pub impedance: CScalar,
}

impl Load {
    /// Purely resistive load of `ohms` on `span` of wire `tag`.
    #[must_use]
    pub fn resistive(tag: WireTag, span: SegmentSpan, ohms: Scalar) -> Self {
        Self { tag, span, impedance: CScalar::new(ohms, 0.0) }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.span.bounds();
        write!(
            f,
            "LD 4 {} {} {} {} {}",
            self.tag,
            start,
            end,
            Real(self.impedance.re),
            Real(self.impedance.im)
        )
    }
}

/// Wire conductivity (`LD 5`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductivity {
    /// Wire the material applies to.
    pub tag: WireTag,
    /// Segments the material applies to.
    pub span: SegmentSpan,
    /// Conductivity in siemens per meter.
    pub siemens_per_m: Scalar,
}

impl Conductivity {
    /// Applies `siemens_per_m` to the whole of wire `tag`.
    #[must_use]
    pub fn whole_wire(tag: WireTag, siemens_per_m: Scalar) -> Self {
        Self { tag, span: SegmentSpan::Whole, siemens_per_m }
    }
}

impl fmt::Display for Conductivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.span.bounds();
        write!(f, "LD 5 {} {} {} {}", self.tag, start, end, Real(self.siemens_per_m))
    }
}

/// Excitation mode selected by the first `EX` field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Applied-field voltage source (`EX 0`).
    Voltage,
    /// Current source (`EX 6`), a 4nec2 extension.
    #[default]
    Current,
}

impl SourceKind {
    fn code(self) -> u8 {
        match self {
            Self::Voltage => 0,
            Self::Current => 6,
        }
    }
}

/// Source placed on one wire segment (`EX`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excitation {
    /// Excited wire.
    pub tag: WireTag,
    /// Excited segment.
    pub segment: u32,
    /// Complex current (A) or voltage (V).
    pub amplitude: CScalar,
    /// Source mode.
    pub kind: SourceKind,
}

impl Excitation {
    /// Current source on `segment` of wire `tag`.
    ///
    /// Exactly-zero components are replaced by [`ZERO_CURRENT_NUDGE`]; the engine refuses zero
    /// current sources.
    #[must_use]
    pub fn current(tag: WireTag, segment: u32, amplitude: CScalar) -> Self {
        let nudge = |v: Scalar| if v == 0.0 { v + ZERO_CURRENT_NUDGE } else { v };
        Self {
            tag,
            segment,
            amplitude: CScalar::new(nudge(amplitude.re), nudge(amplitude.im)),
            kind: SourceKind::Current,
        }
    }

    /// Voltage source on `segment` of wire `tag`, amplitude kept as given.
    #[must_use]
    pub fn voltage(tag: WireTag, segment: u32, amplitude: CScalar) -> Self {
        Self { tag, segment, amplitude, kind: SourceKind::Voltage }
    }
}

impl fmt::Display for Excitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EX {} {} {} 0 {} {}",
            self.kind.code(),
            self.tag,
            self.segment,
            Real(self.amplitude.re),
            Real(self.amplitude.im)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MIN_FREQUENCY_HZ, COPPER_CONDUCTIVITY};
    use crate::geometry::wire::TagSequence;
    use crate::math::R3;

    fn tag() -> WireTag {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        tags.wire(R3::zeros(), R3::new(8.0, 0.0, 0.0), 0.001).unwrap().tag()
    }

    #[test]
    fn load_card_fields() {
        let load = Load::resistive(tag(), SegmentSpan::single(3), 100.0);
        assert_eq!(load.to_string(), "LD 4 1 3 3 100.0 0.0");
        let whole = Load { span: SegmentSpan::Whole, impedance: CScalar::new(50.0, -12.5), ..load };
        assert_eq!(whole.to_string(), "LD 4 1 0 0 50.0 -12.5");
    }

    #[test]
    fn conductivity_card_fields() {
        let card = Conductivity::whole_wire(tag(), COPPER_CONDUCTIVITY);
        assert_eq!(card.to_string(), "LD 5 1 0 0 59600000.0");
    }

    #[test]
    fn zero_current_components_are_nudged() {
        let ex = Excitation::current(tag(), 4, CScalar::new(0.0, 0.0));
        assert_eq!(ex.amplitude, CScalar::new(1.0e-10, 1.0e-10));
        assert_eq!(ex.to_string(), "EX 6 1 4 0 1e-10 1e-10");

        let ex = Excitation::current(tag(), 4, CScalar::new(1.0, 0.0));
        assert_eq!(ex.to_string(), "EX 6 1 4 0 1.0 1e-10");
    }

    #[test]
    fn voltage_sources_are_not_nudged() {
        let ex = Excitation::voltage(tag(), 2, CScalar::new(1.0, 0.0));
        assert_eq!(ex.to_string(), "EX 0 1 2 0 1.0 0.0");
    }
}
