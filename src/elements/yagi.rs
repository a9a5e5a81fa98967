use crate::cards::format::real;
use crate::cards::{Card, Excitation};
use crate::errors::Result;
use crate::geometry::wire::{TagSequence, Wire};
use crate::math::{Scalar, R3};

use super::{comment_block, wire_cards, Antenna, Placement};

/// (length, boom position) of each director in meters, front of the boom first.
const DIRECTORS: [(Scalar, Scalar); 4] =
    [(0.749, 4.7976), (0.724, 3.3276), (0.711, 1.7908), (0.591, 0.0508)];
const REFLECTOR: (Scalar, Scalar) = (0.889, 6.0836);
const DRIVEN: (Scalar, Scalar) = (0.762, 5.3976);

/// Yagi settings. Element dimensions follow the Cushcraft A50-6S.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct YagiParams {
    /// Element radius, meters.
    pub radius: Scalar,
    /// Height of the boom above ground, meters.
    pub height: Scalar,
}

impl Default for YagiParams {
    fn default() -> Self {
        Self { radius: 0.0175, height: 15.0 }
    }
}

/// Yagi with one driven element, one reflector and four directors.
#[derive(Debug, Clone, PartialEq)]
pub struct Yagi {
    params: YagiParams,
    directors: Vec<Wire>,
    reflector: Wire,
    driven: Wire,
    excitation: Excitation,
}

impl Yagi {
    /// Builds the Yagi at `placement`. The feed sits on the driven element's middle segment.
    pub fn new(tags: &mut TagSequence, params: &YagiParams, placement: Placement) -> Result<Self> {
        let mut element = |(length, boom): (Scalar, Scalar)| -> Result<Wire> {
            let half = length / 2.0;
            let mut wire = tags.wire(
                R3::new(-half, boom, params.height),
                R3::new(half, boom, params.height),
                params.radius,
            )?;
            wire.translate(placement.offset);
            Ok(wire)
        };
        let directors = DIRECTORS.into_iter().map(&mut element).collect::<Result<Vec<_>>>()?;
        let reflector = element(REFLECTOR)?;
        let driven = element(DRIVEN)?;
        let excitation = Excitation::current(driven.tag(), driven.mid_segment()?, placement.current);
        Ok(Self { params: params.clone(), directors, reflector, driven, excitation })
    }

    /// The fed element.
    #[must_use]
    pub fn driven(&self) -> &Wire {
        &self.driven
    }
}

impl Antenna for Yagi {
    fn wires(&self) -> Vec<&Wire> {
        self.directors.iter().chain([&self.reflector, &self.driven]).collect()
    }

    /// Directors, then the driven element, then the reflector.
    fn geometry(&self) -> Vec<Card> {
        wire_cards(self.directors.iter().chain([&self.driven, &self.reflector]))
    }

    fn excitations(&self) -> Vec<Card> {
        vec![self.excitation.into()]
    }

    fn comment_block(&self) -> Vec<Card> {
        comment_block(["YAGI".to_string(), format!("Height: {} m", real(self.params.height))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;
    use crate::math::CScalar;

    #[test]
    fn excitation_targets_driven_element() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let placement = Placement::new(R3::zeros(), CScalar::new(0.5, -0.5));
        let yagi = Yagi::new(&mut tags, &YagiParams::default(), placement).unwrap();
        assert_eq!(tags.issued(), 6);
        // Directors take tags 1-4 and the reflector 5, so the driven element is 6.
        assert_eq!(yagi.driven().tag().get(), 6);
        assert_eq!(yagi.excitations()[0].to_string(), "EX 6 6 1 0 0.5 -0.5");
    }

    #[test]
    fn geometry_lists_driven_before_reflector() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let yagi = Yagi::new(&mut tags, &YagiParams::default(), Placement::default()).unwrap();
        let tags_in_order: Vec<String> = yagi
            .geometry()
            .iter()
            .map(|c| c.to_string().split(' ').nth(1).unwrap_or_default().to_string())
            .collect();
        assert_eq!(tags_in_order, vec!["1", "2", "3", "4", "6", "5"]);
    }

    #[test]
    fn offset_applies_to_all_elements() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let placement = Placement { offset: R3::new(10.0, 0.0, 0.0), ..Placement::default() };
        let yagi = Yagi::new(&mut tags, &YagiParams::default(), placement).unwrap();
        for wire in yagi.wires() {
            assert!(wire.start.x > 9.0 && wire.end.x < 11.0);
        }
    }
}
