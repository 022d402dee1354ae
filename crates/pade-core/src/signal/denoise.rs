//! Power-spectrum threshold denoising

use log::debug;
use ndarray::Array1;
use num_complex::Complex64;

use super::{check_time_step, fft, ifft, positive_angular_frequencies};
use crate::error::Result;
use crate::math::Sample;

/// Remove weak frequency components from a time-domain signal
///
/// Components whose power `|X_k|^2 / L` does not exceed `filter_level` are
/// zeroed; the real part of the inverse transform is returned.
pub fn denoise<T: Sample>(f: &[T], filter_level: f64, dt: f64) -> Result<Array1<f64>> {
    check_time_step(dt)?;
    let length = f.len();
    if length == 0 {
        return Ok(Array1::zeros(0));
    }

    let samples: Vec<Complex64> = f.iter().map(|&x| x.into()).collect();
    let mut fhat = fft(&samples);

    let mut kept = 0usize;
    for coeff in fhat.iter_mut() {
        let power = coeff.norm_sqr() / length as f64;
        if power > filter_level {
            kept += 1;
        } else {
            *coeff = Complex64::new(0.0, 0.0);
        }
    }

    debug!(
        "denoise: kept {} of {} components above power {} (band limit {:.4} rad/time)",
        kept,
        length,
        filter_level,
        positive_angular_frequencies(length, dt)
            .last()
            .copied()
            .unwrap_or(0.0)
    );

    Ok(ifft(&fhat).iter().map(|c| c.re).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_removes_weak_tone() {
        let n = 64;
        let strong: Vec<f64> = (0..n).map(|k| (2.0 * PI * 4.0 * k as f64 / n as f64).cos()).collect();
        let noisy: Vec<f64> = strong
            .iter()
            .enumerate()
            .map(|(k, s)| s + 0.01 * (2.0 * PI * 13.0 * k as f64 / n as f64).sin())
            .collect();

        // Strong tone power: (n/2)^2 / n = 16; weak tone: (0.01 n/2)^2 / n = 0.0016
        let clean = denoise(&noisy, 1.0, 0.1).unwrap();
        for (c, s) in clean.iter().zip(strong.iter()) {
            assert_relative_eq!(*c, *s, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_high_threshold_zeroes_signal() {
        let clean = denoise(&[1.0, -1.0, 2.0, 0.5], 1e6, 1.0).unwrap();
        assert!(clean.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(denoise::<f64>(&[], 0.1, 1.0).unwrap().is_empty());
        assert!(denoise(&[1.0], 0.1, -1.0).is_err());
    }
}
