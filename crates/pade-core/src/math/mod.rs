//! Mathematical functions module
//!
//! Numeric helpers shared by the Padé solver, the rational evaluator and the
//! signal utilities.

pub mod linalg;
pub mod polynomial;
pub mod scaling;
pub mod toeplitz;

pub use polynomial::*;
pub use scaling::*;
pub use toeplitz::{lower_triangular_matvec, Toeplitz};

use nalgebra::ComplexField;
use num_complex::Complex64;

/// Scalar type of a time series: real (`f64`) or complex (`Complex64`) samples
pub trait Sample: ComplexField<RealField = f64> + Copy + Into<Complex64> {}

impl Sample for f64 {}
impl Sample for Complex64 {}
