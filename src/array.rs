//! Linear array placement: where each element goes and what current it gets.

use tracing::debug;

use crate::elements::{Element, ElementKind, Placement};
use crate::errors::{DeckError, Result};
use crate::geometry::wire::TagSequence;
use crate::math::{phasor_deg, CScalar, Scalar, R3};

/// Shape of one linear array along x.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLayout {
    /// Number of elements.
    pub num_elements: usize,
    /// Distance between adjacent elements, meters.
    pub spacing_m: Scalar,
    /// Offset of the array centre, meters.
    pub offset: R3,
    /// Relative amplitude applied to every element.
    pub magnitude: Scalar,
}

impl ArrayLayout {
    /// `num_elements` unit-magnitude elements centred on the origin.
    #[must_use]
    pub fn new(num_elements: usize, spacing_m: Scalar) -> Self {
        Self { num_elements, spacing_m, offset: R3::zeros(), magnitude: 1.0 }
    }

    /// Moves the array centre to `offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: R3) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the common element magnitude.
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: Scalar) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// True if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// One copy of [`Self::magnitude`] per element.
    #[must_use]
    pub fn uniform_magnitudes(&self) -> Vec<Scalar> {
        vec![self.magnitude; self.num_elements]
    }

    /// Global x/y/z of element `index`, the array being centred on its offset.
    #[must_use]
    pub fn position(&self, index: usize) -> R3 {
        let span = self.num_elements.saturating_sub(1) as Scalar * self.spacing_m;
        R3::new(index as Scalar * self.spacing_m - span / 2.0, 0.0, 0.0) + self.offset
    }
}

/// Resolved position and drive of one array element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArraySlot {
    /// Element index, 0 at the -x end.
    pub index: usize,
    /// Relative amplitude.
    pub magnitude: Scalar,
    /// Feed phase in degrees.
    pub phase_deg: Scalar,
    /// Global offset of the element.
    pub offset: R3,
}

impl ArraySlot {
    /// Complex feed current `magnitude·(cos φ, sin φ)`.
    #[must_use]
    pub fn current(&self) -> CScalar {
        phasor_deg(self.magnitude, self.phase_deg)
    }

    /// Placement handed to the element constructor.
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::new(self.offset, self.current())
    }
}

/// Resolves every slot of `layout`. Fails before anything is built if the per-element lists do
/// not match the element count or hold a non-finite value.
pub fn slots(
    layout: &ArrayLayout,
    magnitudes: &[Scalar],
    phases: &[Scalar],
) -> Result<Vec<ArraySlot>> {
    let n = layout.num_elements;
    if magnitudes.len() != n || phases.len() != n {
        return Err(DeckError::Configuration(format!(
            "array of {n} elements got {} magnitudes and {} phases",
            magnitudes.len(),
            phases.len()
        )));
    }
    if n > 1 && !(layout.spacing_m.is_finite() && layout.spacing_m > 0.0) {
        return Err(DeckError::Configuration(format!(
            "element spacing must be positive, got {} m",
            layout.spacing_m
        )));
    }
    let drive = magnitudes.iter().zip(phases).position(|(m, p)| !(m.is_finite() && p.is_finite()));
    if let Some(index) = drive {
        return Err(DeckError::Configuration(format!(
            "element {index} drive must be finite, got magnitude {} and phase {} deg",
            magnitudes[index], phases[index]
        )));
    }
    Ok(magnitudes
        .iter()
        .zip(phases)
        .enumerate()
        .map(|(index, (&magnitude, &phase_deg))| ArraySlot {
            index,
            magnitude,
            phase_deg,
            offset: layout.position(index),
        })
        .collect())
}

/// Builds one element of `kind` per slot, in slot order.
pub fn build(
    tags: &mut TagSequence,
    slots: &[ArraySlot],
    kind: &ElementKind,
) -> Result<Vec<Element>> {
    slots
        .iter()
        .map(|slot| {
            debug!(
                index = slot.index,
                magnitude = slot.magnitude,
                phase_deg = slot.phase_deg,
                kind = kind.name(),
                "placing element"
            );
            kind.build(tags, slot.placement())
        })
        .collect()
}

/// Validates and builds one array.
pub fn assemble(
    tags: &mut TagSequence,
    layout: &ArrayLayout,
    magnitudes: &[Scalar],
    phases: &[Scalar],
    kind: &ElementKind,
) -> Result<Vec<Element>> {
    let slots = slots(layout, magnitudes, phases)?;
    build(tags, &slots, kind)
}

/// Per-element drive of one array.
#[derive(Debug, Clone, Copy)]
pub struct ArrayDrive<'a> {
    /// Array shape.
    pub layout: &'a ArrayLayout,
    /// Relative amplitudes, one per element.
    pub magnitudes: &'a [Scalar],
    /// Phases in degrees, one per element.
    pub phases: &'a [Scalar],
}

/// Main and interferometer arrays, built in that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayPair {
    /// Main array elements.
    pub main: Vec<Element>,
    /// Interferometer array elements.
    pub interferometer: Vec<Element>,
}

impl ArrayPair {
    /// Main elements followed by interferometer elements.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.main.iter().chain(&self.interferometer)
    }
}

/// Builds the main array and then the interferometer array. Both drives are validated first, so
/// a bad interferometer list never leaves main-array wires behind.
pub fn assemble_pair(
    tags: &mut TagSequence,
    main: ArrayDrive<'_>,
    interferometer: ArrayDrive<'_>,
    kind: &ElementKind,
) -> Result<ArrayPair> {
    let main_slots = slots(main.layout, main.magnitudes, main.phases)?;
    let int_slots = slots(interferometer.layout, interferometer.magnitudes, interferometer.phases)?;
    let main = build(tags, &main_slots, kind)?;
    let interferometer = build(tags, &int_slots, kind)?;
    Ok(ArrayPair { main, interferometer })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;
    use crate::elements::Antenna;

    #[test]
    fn array_is_centred_on_offset() {
        let layout = ArrayLayout::new(16, 15.24);
        assert_relative_eq!(layout.position(0).x, -114.3, epsilon = 1e-9);
        assert_relative_eq!(layout.position(15).x, 114.3, epsilon = 1e-9);
        let shifted = ArrayLayout::new(4, 15.24).with_offset(R3::new(0.0, -100.0, 0.0));
        assert_relative_eq!(shifted.position(0), R3::new(-22.86, -100.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn slot_current_follows_phase() {
        let layout = ArrayLayout::new(2, 15.24);
        let slots = slots(&layout, &[1.0, 2.0], &[0.0, 90.0]).unwrap();
        assert_relative_eq!(slots[0].current().re, 1.0);
        assert_relative_eq!(slots[1].current().re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(slots[1].current().im, 2.0);
    }

    #[test]
    fn mismatched_lists_fail_before_any_wire() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let layout = ArrayLayout::new(4, 15.24);
        let result = assemble(&mut tags, &layout, &[1.0; 4], &[0.0; 3], &ElementKind::default());
        assert!(matches!(result, Err(DeckError::Configuration(_))));
        assert_eq!(tags.issued(), 0);
    }

    #[test]
    fn non_finite_drive_is_rejected() {
        let layout = ArrayLayout::new(2, 15.24);
        for (magnitudes, phases) in [
            ([1.0, Scalar::NAN], [0.0, 0.0]),
            ([1.0, 1.0], [Scalar::INFINITY, 0.0]),
            ([Scalar::NEG_INFINITY, 1.0], [0.0, 0.0]),
        ] {
            let result = slots(&layout, &magnitudes, &phases);
            assert!(
                matches!(result, Err(DeckError::Configuration(_))),
                "{magnitudes:?} {phases:?}"
            );
        }
    }

    #[test]
    fn bad_interferometer_drive_builds_nothing() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let main = ArrayLayout::new(2, 15.24);
        let int = ArrayLayout::new(2, 15.24);
        let result = assemble_pair(
            &mut tags,
            ArrayDrive { layout: &main, magnitudes: &[1.0; 2], phases: &[0.0; 2] },
            ArrayDrive { layout: &int, magnitudes: &[0.0; 1], phases: &[0.0; 2] },
            &ElementKind::default(),
        );
        assert!(matches!(result, Err(DeckError::Configuration(_))));
        assert_eq!(tags.issued(), 0);
    }

    #[test]
    fn pair_tags_main_first() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let main = ArrayLayout::new(2, 15.24);
        let int = ArrayLayout::new(1, 15.24).with_offset(R3::new(0.0, -100.0, 0.0));
        let magnitudes = main.uniform_magnitudes();
        let pair = assemble_pair(
            &mut tags,
            ArrayDrive { layout: &main, magnitudes: &magnitudes, phases: &[0.0, 0.0] },
            ArrayDrive { layout: &int, magnitudes: &[0.0], phases: &[0.0] },
            &ElementKind::default(),
        )
        .unwrap();
        assert_eq!(pair.iter().count(), 3);
        assert_eq!(tags.issued(), 21);
        let int_wires = pair.interferometer[0].wires();
        assert_eq!(int_wires[0].tag().get(), 15);
        assert_relative_eq!(int_wires[0].start.y, -100.0);
    }
}
