//! Component-wise display scaling of complex spectra

use ndarray::Array1;
use num_complex::Complex64;

/// Divide the real and imaginary parts independently by their largest magnitude
///
/// Each component of the result peaks at exactly 1 in absolute value, or stays
/// 0 when that component is identically zero. This is a display convenience:
/// it does not preserve the magnitude or phase of the spectrum and carries no
/// physical meaning.
pub fn normalize_components(values: &Array1<Complex64>) -> Array1<Complex64> {
    let max_re = values.iter().fold(0.0_f64, |m, v| m.max(v.re.abs()));
    let max_im = values.iter().fold(0.0_f64, |m, v| m.max(v.im.abs()));

    let scale = |x: f64, max: f64| if max > 0.0 { x / max } else { x };

    values.mapv(|v| Complex64::new(scale(v.re, max_re), scale(v.im, max_im)))
}
