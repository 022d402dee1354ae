//! pade-core: Padé approximant spectra from short time-domain signals
//!
//! Reconstructs a high-resolution frequency-domain spectrum from a brief,
//! evenly sampled trace by fitting a rational function to its Z-transform,
//! avoiding the leakage and resolution limits of a direct FFT on short records.
//!
//! ## Modules
//!
//! - `pade` - Preprocessing, coefficient solver and spectrum evaluation
//! - `frequency` - Angular frequency grids to evaluate on
//! - `math` - Polynomials, Toeplitz solves, dense linear algebra
//! - `signal` - FFT reference spectra, denoising, damping, FWHM
//!
//! ## Example
//!
//! ```
//! use pade_core::{FrequencyGrid, Pade, SolveStrategy};
//!
//! let dt = 0.1;
//! let signal: Vec<f64> = (0..9)
//!     .map(|k| {
//!         let t = k as f64 * dt;
//!         (-0.2 * t).exp() * (2.0 * t).sin() + 0.5 * (-0.4 * t).exp() * (5.0 * t).sin()
//!     })
//!     .collect();
//!
//! let mut pade = Pade::new(&signal, dt)?;
//! pade.build(SolveStrategy::Direct)?;
//!
//! let grid = FrequencyGrid::linspace(0.0, 8.0, 801);
//! let spectrum = pade.evaluate(grid.w(), false)?;
//! assert_eq!(spectrum.len(), 801);
//! # Ok::<(), pade_core::PadeError>(())
//! ```

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod pade;
pub mod signal;

pub use error::{PadeError, Result};
pub use frequency::FrequencyGrid;
pub use math::Sample;
pub use pade::{Pade, PadeApproximant, PadeCoefficients, PadeSeries, SolveStrategy};
