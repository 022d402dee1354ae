//! Full width at half maximum of a spectral line

use log::debug;

use super::check_time_step;
use super::peaks::{find_peaks, peak_widths};
use crate::constants::HALF_MAXIMUM;
use crate::error::{PadeError, Result};

use std::f64::consts::PI;

/// FWHM, in angular frequency, of the dominant peak of `spectrum`
///
/// `spectrum` holds magnitudes on the positive bins of an FFT of the signal
/// sampled every `dt`. The bin spacing is recovered from its length: `L = 2(len + 1)`
/// points for odd lengths, `2 len` for even ones, spacing `2*pi / (L*dt)`.
/// Among all peaks the one with the highest half-maximum level is reported.
pub fn fwhm(spectrum: &[f64], dt: f64) -> Result<f64> {
    check_time_step(dt)?;

    let length = if spectrum.len() % 2 == 1 {
        2 * (spectrum.len() + 1)
    } else {
        2 * spectrum.len()
    };
    let spacing = 2.0 * PI / (length as f64 * dt);

    let peaks = find_peaks(spectrum);
    if peaks.is_empty() {
        return Err(PadeError::NoPeaks);
    }

    let widths = peak_widths(spectrum, &peaks, HALF_MAXIMUM);
    let dominant = widths
        .width_heights
        .iter()
        .enumerate()
        .fold(0, |best, (i, &h)| {
            if h > widths.width_heights[best] {
                i
            } else {
                best
            }
        });

    debug!(
        "fwhm: {} peaks, dominant at bin {} with width {} bins",
        peaks.len(),
        peaks[dominant],
        widths.widths[dominant]
    );

    Ok(widths.widths[dominant] * spacing)
}
