//! Padé approximants of finite time series
//!
//! This module reconstructs a high-resolution spectrum from a short, evenly
//! sampled time-domain signal by fitting a rational function `p(z) / q(z)`,
//! `z = exp(-i*omega*dt)`, to its Z-transform.
//!
//! The pipeline is:
//! 1. [`PadeSeries::new`] centers the samples and enforces an odd length.
//! 2. [`PadeSeries::build`] solves for the denominator `b` and numerator `a`
//!    coefficients with either [`SolveStrategy`].
//! 3. [`PadeApproximant::evaluate`] evaluates the rational function at any
//!    angular frequencies.
//!
//! [`Pade`] ties the steps together as an explicit `Unbuilt`/`Built` state.
//!
//! # References
//!
//! - A. Bruner, D. LaMaster, K. Lopata, "Accelerated Broadband Spectra Using
//!   Transition Dipole Decomposition and Padé Approximants",
//!   J. Chem. Theory Comput. 12, 3741 (2016), doi:10.1021/acs.jctc.6b00511

mod core;
mod model;
mod series;
mod solver;

pub use self::core::Pade;
pub use model::{evaluate_rational, PadeApproximant};
pub use series::PadeSeries;
pub use solver::{numerator_direct, numerator_triangular, PadeCoefficients, SolveStrategy};
