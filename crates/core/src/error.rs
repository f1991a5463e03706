//! Error types for the cutting engine.

use thiserror::Error;

/// Errors produced while cutting polygons.
///
/// Only [`Error::MalformedGeometry`] aborts a whole cut invocation; a
/// self-intersecting layer is skipped and the cut continues with the
/// remaining candidates.
#[derive(Debug, Error)]
pub enum Error {
    /// A ring has fewer than three distinct points.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// A ring crosses itself.
    #[error("self-intersecting geometry: {0}")]
    SelfIntersecting(String),
}

/// Convenience alias used throughout the crates.
pub type Result<T> = std::result::Result<T, Error>;
