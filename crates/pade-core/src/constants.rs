//! Numerical constants for Padé spectra
//!
//! Provides standardized tolerance values used throughout the library.

/// Tolerance for detecting near-zero values in division and singularity checks.
/// The Levinson recursion scales it by the largest matrix entry when testing
/// the leading minor.
pub const NEAR_ZERO: f64 = 1e-15;

/// Relative tolerance within which the structured and direct solve paths
/// are expected to agree on well-conditioned input.
pub const STRATEGY_AGREEMENT_TOL: f64 = 1e-8;

/// Smallest number of samples (after parity trimming) that yields a
/// non-trivial approximant (N = 1).
pub const MIN_SAMPLES: usize = 3;

/// Relative height at which peak widths are measured for FWHM.
pub const HALF_MAXIMUM: f64 = 0.5;
