//! Wire geometry: segmentation, tagged wires and reflector fences.

/// Reflector fence behind an array.
pub mod reflector;
/// Segment counts for a minimum design frequency.
pub mod segmentation;
/// Straight wires and the per-run tag sequence.
pub mod wire;

pub use reflector::ReflectorFence;
pub use segmentation::{segments_for, target_segment_length};
pub use wire::{TagSequence, Wire, WireTag};
