use crate::cards::format::real;
use crate::cards::{Card, Excitation, Load, SegmentSpan};
use crate::constants::radius_from_awg;
use crate::errors::{DeckError, Result};
use crate::geometry::wire::{TagSequence, Wire};
use crate::math::{Scalar, R3};

use super::{comment_block, wire_cards, Antenna, Placement};

/// Dimensions of a twin-terminated folded dipole.
///
/// ```text
///                top wire
///       ------------Load------------
///     /                              \
///   x-------------Feed----------------x     middle wire (mid_width)
///     \                              /
///       ------------Load------------
///                bottom wire
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TtfdParams {
    /// Wire gauge (AWG).
    pub wire_gauge: u32,
    /// Height of the middle wire above ground, meters.
    pub height: Scalar,
    /// Termination load resistance, ohms.
    pub termination: Scalar,
    /// Middle wire width, meters.
    pub mid_width: Scalar,
    /// Top and bottom wire width, meters.
    pub top_width: Scalar,
    /// Vertical distance from the middle wire to the top and bottom wires, meters.
    pub wire_spacing: Scalar,
}

impl Default for TtfdParams {
    fn default() -> Self {
        Self {
            wire_gauge: 13,
            height: 10.0,
            termination: 100.0,
            mid_width: 12.0,
            top_width: 8.0,
            wire_spacing: 1.5,
        }
    }
}

/// Twin-terminated folded dipole: seven wires, two termination loads, one feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ttfd {
    params: TtfdParams,
    top_left: Wire,
    top: Wire,
    top_right: Wire,
    middle: Wire,
    bottom_left: Wire,
    bottom: Wire,
    bottom_right: Wire,
    top_load: Load,
    bottom_load: Load,
    excitation: Excitation,
}

impl Ttfd {
    /// Builds the dipole at `placement`.
    pub fn new(tags: &mut TagSequence, params: &TtfdParams, placement: Placement) -> Result<Self> {
        if params.mid_width <= params.top_width {
            return Err(DeckError::Configuration(format!(
                "TTFD middle width {} m must exceed top width {} m",
                params.mid_width, params.top_width
            )));
        }
        let radius = radius_from_awg(params.wire_gauge)?;
        let h = params.height;
        let top_z = params.wire_spacing + h;
        let bottom_z = -params.wire_spacing + h;
        let mid = params.mid_width / 2.0;
        let top = params.top_width / 2.0;

        let mut wire = |start: R3, end: R3| -> Result<Wire> {
            let mut w = tags.wire(start, end, radius)?;
            w.translate(placement.offset);
            Ok(w)
        };
        let top_left = wire(R3::new(-mid, 0.0, h), R3::new(-top, 0.0, top_z))?;
        let top_wire = wire(R3::new(-top, 0.0, top_z), R3::new(top, 0.0, top_z))?;
        let top_right = wire(R3::new(mid, 0.0, h), R3::new(top, 0.0, top_z))?;
        let middle = wire(R3::new(-mid, 0.0, h), R3::new(mid, 0.0, h))?;
        let bottom_left = wire(R3::new(-mid, 0.0, h), R3::new(-top, 0.0, bottom_z))?;
        let bottom = wire(R3::new(-top, 0.0, bottom_z), R3::new(top, 0.0, bottom_z))?;
        let bottom_right = wire(R3::new(mid, 0.0, h), R3::new(top, 0.0, bottom_z))?;

        let termination = |w: &Wire| -> Result<Load> {
            Ok(Load::resistive(w.tag(), SegmentSpan::single(w.mid_segment()?), params.termination))
        };
        let top_load = termination(&top_wire)?;
        let bottom_load = termination(&bottom)?;
        let excitation = Excitation::current(middle.tag(), middle.mid_segment()?, placement.current);

        Ok(Self {
            params: params.clone(),
            top_left,
            top: top_wire,
            top_right,
            middle,
            bottom_left,
            bottom,
            bottom_right,
            top_load,
            bottom_load,
            excitation,
        })
    }

    /// Feed point source.
    #[must_use]
    pub fn excitation(&self) -> &Excitation {
        &self.excitation
    }
}

impl Antenna for Ttfd {
    fn wires(&self) -> Vec<&Wire> {
        vec![
            &self.top_left,
            &self.top,
            &self.top_right,
            &self.middle,
            &self.bottom_left,
            &self.bottom,
            &self.bottom_right,
        ]
    }

    fn geometry(&self) -> Vec<Card> {
        wire_cards(self.wires())
    }

    fn loads(&self) -> Vec<Card> {
        vec![self.top_load.into(), self.bottom_load.into()]
    }

    fn excitations(&self) -> Vec<Card> {
        vec![self.excitation.into()]
    }

    fn comment_block(&self) -> Vec<Card> {
        let p = &self.params;
        comment_block([
            "SuperDARN TTFD".to_string(),
            format!("Height: {} m", real(p.height)),
            format!("Wire gauge: {} AWG", p.wire_gauge),
            format!("Termination: {} Ohms", real(p.termination)),
            format!("Mid wire width: {} m", real(p.mid_width)),
            format!("Top/bottom wire width: {} m", real(p.top_width)),
            format!("Wire spacing: {} m", real(p.wire_spacing)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::cards::render;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;
    use crate::math::CScalar;

    fn build(params: &TtfdParams, placement: Placement) -> (TagSequence, Result<Ttfd>) {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let ttfd = Ttfd::new(&mut tags, params, placement);
        (tags, ttfd)
    }

    #[test]
    fn seven_wires_with_loads_and_feed_on_middle() {
        let (tags, ttfd) = build(&TtfdParams::default(), Placement::default());
        let ttfd = ttfd.unwrap();
        assert_eq!(tags.issued(), 7);
        let segments: Vec<u32> = ttfd.wires().iter().map(|w| w.segments()).collect();
        assert_eq!(segments, vec![1, 5, 1, 7, 1, 5, 1]);
        assert_eq!(
            render(&ttfd.loads()),
            "LD 4 2 3 3 100.0 0.0\r\nLD 4 6 3 3 100.0 0.0\r\n"
        );
        assert_eq!(render(&ttfd.excitations()), "EX 6 4 4 0 1.0 1e-10\r\n");
    }

    #[test]
    fn offset_is_applied_to_every_wire() {
        let offset = R3::new(-114.3, -100.0, 0.5);
        let (_, ttfd) = build(&TtfdParams::default(), Placement::new(offset, CScalar::new(0.0, 1.0)));
        let ttfd = ttfd.unwrap();
        assert_relative_eq!(ttfd.middle.start, R3::new(-120.3, -100.0, 10.5), epsilon = 1e-12);
        assert_relative_eq!(ttfd.top.end, R3::new(-110.3, -100.0, 12.0), epsilon = 1e-12);
        assert_eq!(ttfd.excitation().amplitude, CScalar::new(1.0e-10, 1.0));
    }

    #[test]
    fn mid_width_must_exceed_top_width() {
        let params = TtfdParams { mid_width: 8.0, top_width: 8.0, ..TtfdParams::default() };
        let (tags, ttfd) = build(&params, Placement::default());
        assert!(matches!(ttfd, Err(DeckError::Configuration(_))));
        assert_eq!(tags.issued(), 0);
    }

    #[test]
    fn comment_block_lists_dimensions() {
        let (_, ttfd) = build(&TtfdParams::default(), Placement::default());
        let text = render(&ttfd.unwrap().comment_block());
        assert!(text.starts_with("CM SuperDARN TTFD\r\nCM Height: 10.0 m\r\n"));
        assert!(text.contains("CM Wire gauge: 13 AWG\r\n"));
        assert!(text.ends_with("CM Wire spacing: 1.5 m\r\nCE\r\n"));
    }
}
