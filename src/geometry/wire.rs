//! Straight wire primitive and the per-run tag sequence.

use std::fmt;

use crate::errors::{DeckError, Result};
use crate::math::{Scalar, R3};

use super::segmentation::segments_for;

/// Tag number identifying a wire in the deck. Tags start at 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireTag(u32);

impl WireTag {
    /// Raw tag number as written to the deck.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Straight wire between two points, split into `segments` for the engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    tag: WireTag,
    segments: u32,
    /// First endpoint in meters.
    pub start: R3,
    /// Second endpoint in meters.
    pub end: R3,
    /// Conductor radius in meters.
    pub radius: Scalar,
}

impl Wire {
    /// Tag assigned at construction.
    #[must_use]
    pub fn tag(&self) -> WireTag {
        self.tag
    }

    /// Number of segments.
    #[must_use]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Straight-line length in meters.
    #[must_use]
    pub fn length(&self) -> Scalar {
        (self.end - self.start).norm()
    }

    /// One-based index of the unique middle segment.
    pub fn mid_segment(&self) -> Result<u32> {
        if self.segments % 2 == 0 {
            return Err(DeckError::Geometry(format!(
                "wire {} has an even number of segments ({}), no middle segment",
                self.tag, self.segments
            )));
        }
        Ok(1 + self.segments / 2)
    }

    /// Moves both endpoints by `offset` meters.
    pub fn translate(&mut self, offset: R3) {
        self.start += offset;
        self.end += offset;
    }

    /// Rotates the wire by `alpha`, `beta`, `gamma` degrees about the x, y and z axes.
    pub fn rotate(&mut self, _alpha: Scalar, _beta: Scalar, _gamma: Scalar) -> Result<()> {
        Err(DeckError::NotSupported("wire rotation"))
    }
}

/// Hands out wire tags in construction order for one deck-generation run.
///
/// Tag order drives the conductivity cards, so a sequence must never be shared between runs.
/// [`crate::generator::generate`] creates a fresh one per call.
#[derive(Debug, Clone)]
pub struct TagSequence {
    issued: u32,
    min_frequency_hz: Scalar,
}

impl TagSequence {
    /// Creates an empty sequence segmenting wires for `min_frequency_hz`.
    #[must_use]
    pub fn new(min_frequency_hz: Scalar) -> Self {
        Self { issued: 0, min_frequency_hz }
    }

    /// Forgets every issued tag; the next wire is tag 1 again.
    pub fn reset(&mut self) {
        self.issued = 0;
    }

    /// Number of tags issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }

    /// All issued tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = WireTag> {
        (1..=self.issued).map(WireTag)
    }

    /// Lowest design frequency used for automatic segmentation.
    #[must_use]
    pub fn min_frequency_hz(&self) -> Scalar {
        self.min_frequency_hz
    }

    /// Creates a wire segmented for the minimum design frequency.
    pub fn wire(&mut self, start: R3, end: R3, radius: Scalar) -> Result<Wire> {
        let segments = segments_for((end - start).norm(), self.min_frequency_hz)?;
        self.issue(start, end, radius, segments)
    }

    /// Creates a wire with an explicit segment count.
    pub fn wire_with_segments(
        &mut self,
        start: R3,
        end: R3,
        radius: Scalar,
        segments: u32,
    ) -> Result<Wire> {
        if segments == 0 {
            return Err(DeckError::Geometry("a wire needs at least one segment".into()));
        }
        let length = (end - start).norm();
        if !(length.is_finite() && length > 0.0) {
            return Err(DeckError::Geometry(format!(
                "wire length must be positive and finite, got {length} m"
            )));
        }
        self.issue(start, end, radius, segments)
    }

    fn issue(&mut self, start: R3, end: R3, radius: Scalar, segments: u32) -> Result<Wire> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(DeckError::Geometry(format!(
                "wire radius must be positive, got {radius} m"
            )));
        }
        self.issued += 1;
        Ok(Wire { tag: WireTag(self.issued), segments, start, end, radius })
    }
}
