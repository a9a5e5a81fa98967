//! Convenience re-exports for generating array decks.

pub use crate::array::{assemble, assemble_pair, ArrayDrive, ArrayLayout, ArrayPair, ArraySlot};
pub use crate::beamform::{
    broadened_phase, circular_phase, parabolic_phase, progressive_phase, steering_phase,
    BeamPattern,
};
pub use crate::cards::{
    Card, Conductivity, Deck, Excitation, Ground, Load, RadiationPattern, SegmentRef,
    SegmentSpan, SourceKind, TransmissionLine,
};
pub use crate::config::{DeckConfig, FenceConfig, PhaseMode};
pub use crate::constants::*;
pub use crate::elements::{
    Antenna, Element, ElementKind, LogPeriodic, LogPeriodicParams, Placement, Ttfd, TtfdParams,
    Yagi, YagiParams,
};
pub use crate::errors::{DeckError, Result};
pub use crate::generator::generate;
pub use crate::geometry::{segments_for, ReflectorFence, TagSequence, Wire, WireTag};
pub use crate::io::{generate_to_file, persist_deck, write_deck};
pub use crate::math::{phasor_deg, CScalar, Scalar, R3};
pub use crate::sweep::{linspace, FrequencySweep};
