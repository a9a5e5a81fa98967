//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Every variant is raised at the point of detection. Nothing is written to disk until a
/// deck has been generated in full, so an error never leaves a truncated deck behind.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Inconsistent input sizes or incompatible dimensions.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Degenerate wire dimensions.
    #[error("geometry error: {0}")]
    Geometry(String),
    /// Beamforming math pushed outside a valid trigonometric domain.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),
    /// A declared capability that has no implementation.
    #[error("not supported: {0}")]
    NotSupported(&'static str),
    /// Raised while persisting a finished deck.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T, E = DeckError> = std::result::Result<T, E>;
