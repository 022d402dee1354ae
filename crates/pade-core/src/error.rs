//! Error types for pade-core.

use thiserror::Error;

use crate::pade::SolveStrategy;

/// Errors raised while preprocessing, building or evaluating a Padé model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PadeError {
    /// The tail vector `d` does not have `N` elements.
    #[error("dimension mismatch: expected d vector of {expected} elements, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The linear system for the denominator coefficients could not be solved.
    #[error("singular system ({strategy:?} solve): {reason}")]
    SingularSystem {
        strategy: SolveStrategy,
        reason: &'static str,
    },

    #[error("Padé model is not built; call build() first")]
    NotBuilt,

    #[error("Padé model is already built")]
    AlreadyBuilt,

    #[error("at least 3 samples are required after parity trimming, got {got}")]
    InsufficientSamples { got: usize },

    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        arg: &'static str,
        reason: &'static str,
    },

    #[error("no peaks found in spectrum")]
    NoPeaks,
}

pub type Result<T, E = PadeError> = std::result::Result<T, E>;
