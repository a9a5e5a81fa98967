use crate::cards::format::real;
use crate::cards::{Card, Excitation, SegmentRef, TransmissionLine};
use crate::errors::Result;
use crate::geometry::wire::{TagSequence, Wire};
use crate::math::{Scalar, R3};

use super::{comment_block, wire_cards, Antenna, Placement};

/// One dipole of the log-periodic array: total length, distance along the boom from the apex,
/// and fixed segment count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipoleDimension {
    /// Tip-to-tip length in meters.
    pub length: Scalar,
    /// Boom position measured from the apex element, meters.
    pub boom_offset: Scalar,
    /// Segments used for this dipole.
    pub segments: u32,
}

const fn dipole(length: Scalar, boom_offset: Scalar, segments: u32) -> DipoleDimension {
    DipoleDimension { length, boom_offset, segments }
}

/// Sabre Communications model 610 dimensions, apex (shortest) element first.
///
/// Segment counts start at 13 on the apex dipole for accurate high-frequency modelling and grow
/// with element length.
pub const SABRE_610: [DipoleDimension; 10] = [
    dipole(6.04, 0.0, 13),
    dipole(6.70, 0.725, 15),
    dipole(7.57, 1.585, 17),
    dipole(8.46, 2.59, 19),
    dipole(9.49, 3.765, 21),
    dipole(10.55, 5.165, 23),
    dipole(11.87, 6.68, 25),
    dipole(13.37, 8.385, 27),
    dipole(15.38, 10.325, 29),
    dipole(15.40, 11.63, 31),
];

/// Log-periodic dipole array settings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LogPeriodicParams {
    /// Height of the boom above ground, meters.
    pub height: Scalar,
    /// Element radius, meters.
    pub radius: Scalar,
    /// Characteristic impedance of the boom feed line, ohms.
    pub feed_impedance: Scalar,
    /// Length of the shorting stub behind the longest element, meters. No stub wire is modelled;
    /// the value is only reported in the comment block.
    pub stub_length: Scalar,
}

impl Default for LogPeriodicParams {
    fn default() -> Self {
        Self { height: 15.0, radius: 0.01, feed_impedance: 50.0, stub_length: 0.0 }
    }
}

/// Design ratios of a log-periodic array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignRatios {
    /// Mean ratio of successive element lengths (shorter over longer), below 1.
    pub tau: Scalar,
    /// Mean relative spacing: gap to the next element over twice that element's length.
    pub sigma: Scalar,
    /// Half apex angle of the element envelope, radians.
    pub alpha: Scalar,
}

impl DesignRatios {
    /// Derives τ, σ and α from a dimension table ordered apex first.
    #[must_use]
    pub fn from_dimensions(dims: &[DipoleDimension]) -> Self {
        let (Some(first), Some(last)) = (dims.first(), dims.last()) else {
            return Self { tau: 0.0, sigma: 0.0, alpha: 0.0 };
        };
        let pairs = dims.len().saturating_sub(1).max(1) as Scalar;
        let tau = dims.windows(2).map(|w| w[0].length / w[1].length).sum::<Scalar>() / pairs;
        let sigma = dims
            .windows(2)
            .map(|w| (w[1].boom_offset - w[0].boom_offset) / (2.0 * w[1].length))
            .sum::<Scalar>()
            / pairs;
        let boom = last.boom_offset - first.boom_offset;
        let alpha = if boom > 0.0 {
            ((last.length - first.length) / 2.0).atan2(boom)
        } else {
            0.0
        };
        Self { tau, sigma, alpha }
    }
}

/// Log-periodic dipole array fed at the apex through a crossed boom line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPeriodic {
    params: LogPeriodicParams,
    drivens: Vec<Wire>,
    excitation: Excitation,
    transmission_lines: Vec<TransmissionLine>,
    ratios: DesignRatios,
}

impl LogPeriodic {
    /// Builds the array at `placement`.
    pub fn new(
        tags: &mut TagSequence,
        params: &LogPeriodicParams,
        placement: Placement,
    ) -> Result<Self> {
        let mut drivens = Vec::with_capacity(SABRE_610.len());
        for dim in &SABRE_610 {
            let half = dim.length / 2.0;
            let mut wire = tags.wire_with_segments(
                R3::new(-half, dim.boom_offset, params.height),
                R3::new(half, dim.boom_offset, params.height),
                params.radius,
                dim.segments,
            )?;
            wire.translate(placement.offset);
            drivens.push(wire);
        }

        let apex = &drivens[0];
        let excitation = Excitation::current(apex.tag(), apex.mid_segment()?, placement.current);

        // Every element is fed with the opposite polarity of its neighbour.
        let mut transmission_lines = Vec::with_capacity(drivens.len() - 1);
        for pair in drivens.windows(2) {
            let from = SegmentRef::new(pair[0].tag(), pair[0].mid_segment()?);
            let to = SegmentRef::new(pair[1].tag(), pair[1].mid_segment()?);
            transmission_lines
                .push(TransmissionLine::crossed(from, to).with_impedance(params.feed_impedance));
        }

        Ok(Self {
            params: params.clone(),
            drivens,
            excitation,
            transmission_lines,
            ratios: DesignRatios::from_dimensions(&SABRE_610),
        })
    }

    /// τ, σ and α of the element table.
    #[must_use]
    pub fn ratios(&self) -> DesignRatios {
        self.ratios
    }
}

impl Antenna for LogPeriodic {
    fn wires(&self) -> Vec<&Wire> {
        self.drivens.iter().collect()
    }

    fn geometry(&self) -> Vec<Card> {
        wire_cards(&self.drivens)
    }

    fn excitations(&self) -> Vec<Card> {
        vec![self.excitation.into()]
    }

    fn transmission_lines(&self) -> Vec<Card> {
        self.transmission_lines.iter().copied().map(Card::from).collect()
    }

    fn comment_block(&self) -> Vec<Card> {
        comment_block([
            "Log-Periodic".to_string(),
            format!("Height: {} m", real(self.params.height)),
            format!("Tau: {}", real(self.ratios.tau)),
            format!("Alpha: {} deg", real(self.ratios.alpha.to_degrees())),
            format!("Sigma: {}", real(self.ratios.sigma)),
            format!("Stub length: {} m", real(self.params.stub_length)),
        ])
    }
}
