//! Error types raised while configuring the metrics engine.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by [`EngineConfig::validate`](crate::EngineConfig::validate).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineConfigError {
    /// A ranking weight was negative or not finite, or all weights were zero.
    #[error("ranking weights must be finite, non-negative and sum to a positive total")]
    InvalidWeights,
    /// The rating scale was zero, negative or not finite.
    #[error("rating scale must be finite and positive")]
    InvalidRatingScale,
    /// The ranking would keep no place.
    #[error("top-N limit must be at least 1")]
    ZeroTopN,
}
