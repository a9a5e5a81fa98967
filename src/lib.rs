#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants, conductor materials and wire gauges.
pub mod constants;
/// Shared vector and complex aliases.
pub mod math;
/// Wire geometry, segmentation and reflector fences.
pub mod geometry;
/// Antenna element designs.
pub mod elements;
/// Linear array placement and feed currents.
pub mod array;
/// Steering and broadened-beam phase distributions.
pub mod beamform;
/// NEC cards and deck rendering.
pub mod cards;
/// Frequency sweep definitions.
pub mod sweep;
/// Run configuration.
pub mod config;
/// Deck generation in engine card order.
pub mod generator;
/// Deck output.
pub mod io;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
