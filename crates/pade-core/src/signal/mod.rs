//! Signal utilities around the Padé engine
//!
//! Stateless single-pass helpers: an FFT reference spectrum, a power-spectrum
//! denoiser and an exponential damping window applied before fitting, and an
//! FWHM estimate of a resulting spectrum.

mod damp;
mod denoise;
mod fourier;
mod fwhm;
pub mod peaks;

pub use damp::damp;
pub use denoise::denoise;
pub use fourier::{angular_fftfreq, fft, fftfreq, ft, ifft, positive_angular_frequencies};
pub use fwhm::fwhm;

use crate::error::{PadeError, Result};

fn check_time_step(dt: f64) -> Result<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PadeError::InvalidArgument {
            arg: "dt",
            reason: "time step must be finite and positive",
        });
    }
    Ok(())
}
