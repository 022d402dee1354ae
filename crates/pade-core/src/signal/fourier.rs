//! FFT reference spectra
//!
//! A direct transform of the same samples the Padé model is built from; used
//! to validate the approximant against the leakage-limited ground truth.

use ndarray::Array1;
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use super::check_time_step;
use crate::error::{PadeError, Result};
use crate::math::{normalize_components, Sample};

/// Sample frequencies of an `n`-point DFT with spacing `dt` (cycles per unit time)
///
/// Same ordering as numpy's `fftfreq`: zero, positive, then negative frequencies.
pub fn fftfreq(n: usize, dt: f64) -> Array1<f64> {
    if n == 0 {
        return Array1::zeros(0);
    }
    let scale = 1.0 / (n as f64 * dt);
    let n_pos = (n - 1) / 2 + 1;
    Array1::from_shape_fn(n, |k| {
        if k < n_pos {
            k as f64 * scale
        } else {
            -((n - k) as f64) * scale
        }
    })
}

/// [`fftfreq`] in radians per unit time
pub fn angular_fftfreq(n: usize, dt: f64) -> Array1<f64> {
    fftfreq(n, dt).mapv(|f| 2.0 * PI * f)
}

/// Angular frequencies of the positive bins `1..n/2`
pub fn positive_angular_frequencies(n: usize, dt: f64) -> Array1<f64> {
    let scale = 2.0 * PI / (n as f64 * dt);
    (1..n / 2).map(|k| k as f64 * scale).collect()
}

/// Forward FFT using rustfft
pub fn fft(data: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = data.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);
    buffer
}

/// Inverse FFT using rustfft, normalized by `1/n`
pub fn ifft(data: &[Complex64]) -> Vec<Complex64> {
    let n = data.len();
    if n == 0 {
        return vec![];
    }

    let mut buffer = data.to_vec();
    let mut planner = FftPlanner::new();
    planner.plan_fft_inverse(n).process(&mut buffer);

    let scale = 1.0 / n as f64;
    for c in buffer.iter_mut() {
        *c *= scale;
    }
    buffer
}

/// Reference spectrum of `data` on the positive FFT bins
///
/// # Arguments
/// * `data` - Time-domain samples
/// * `dt` - Time step
/// * `normalize` - Scale real and imaginary parts independently to a peak of 1
/// * `n` - Transform length; shorter truncates, longer zero-pads (default: `data.len()`)
///
/// # Returns
/// `(omega, spectrum)` for bins `1..n/2`, `omega = 2*pi*k / (n*dt)`
pub fn ft<T: Sample>(
    data: &[T],
    dt: f64,
    normalize: bool,
    n: Option<usize>,
) -> Result<(Array1<f64>, Array1<Complex64>)> {
    check_time_step(dt)?;
    let n = n.unwrap_or(data.len());
    if n == 0 {
        return Err(PadeError::InvalidArgument {
            arg: "n",
            reason: "transform length must be positive",
        });
    }

    let mut buffer = vec![Complex64::new(0.0, 0.0); n];
    for (slot, &x) in buffer.iter_mut().zip(data.iter()) {
        *slot = x.into();
    }

    let transformed = fft(&buffer);
    let upper = (n / 2).max(1);
    let spectrum: Array1<Complex64> = transformed[1..upper].iter().copied().collect();
    let omega = positive_angular_frequencies(n, dt);

    let spectrum = if normalize {
        normalize_components(&spectrum)
    } else {
        spectrum
    };
    Ok((omega, spectrum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fftfreq_matches_numpy_layout() {
        let even = fftfreq(4, 0.5);
        assert_eq!(even.to_vec(), vec![0.0, 0.5, -1.0, -0.5]);

        let odd = fftfreq(5, 1.0);
        assert_eq!(odd.to_vec(), vec![0.0, 0.2, 0.4, -0.4, -0.2]);
    }

    #[test]
    fn test_fft_ifft_inverse() {
        let data: Vec<Complex64> = (0..6)
            .map(|k| Complex64::new(k as f64, (k * k) as f64 * 0.1))
            .collect();
        let back = ifft(&fft(&data));
        for (x, y) in data.iter().zip(back.iter()) {
            assert_relative_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ft_locates_cosine_bin() {
        let n = 64;
        let dt = 0.1;
        let bin = 5;
        let omega0 = 2.0 * PI * bin as f64 / (n as f64 * dt);
        let data: Vec<f64> = (0..n).map(|k| (omega0 * k as f64 * dt).cos()).collect();

        let (omega, spectrum) = ft(&data, dt, false, None).unwrap();
        assert_eq!(omega.len(), n / 2 - 1);
        assert_eq!(spectrum.len(), n / 2 - 1);

        let peak = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .map(|(i, _)| i)
            .unwrap();
        assert_relative_eq!(omega[peak], omega0, epsilon = 1e-12);
        assert_relative_eq!(spectrum[peak].re, n as f64 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ft_zero_padding_and_normalization() {
        let data = [1.0, 0.5, -0.25, 0.125];
        let (omega, spectrum) = ft(&data, 1.0, true, Some(16)).unwrap();
        assert_eq!(omega.len(), 7);

        let max_re = spectrum.iter().fold(0.0_f64, |m, v| m.max(v.re.abs()));
        let max_im = spectrum.iter().fold(0.0_f64, |m, v| m.max(v.im.abs()));
        assert_relative_eq!(max_re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(max_im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ft_rejects_bad_arguments() {
        assert!(ft(&[1.0, 2.0], 0.0, false, None).is_err());
        assert!(ft(&[1.0, 2.0], 1.0, false, Some(0)).is_err());
        assert!(ft::<f64>(&[], 1.0, false, None).is_err());
    }
}
