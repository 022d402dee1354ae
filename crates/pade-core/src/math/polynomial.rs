//! Polynomial and rational-function evaluation on the complex plane

use ndarray::ArrayView1;
use num_complex::Complex64;

use super::Sample;

/// Evaluate `sum_k coeffs[k] * z^k` (ascending powers) by Horner's rule
pub fn polyval<T: Sample>(coeffs: ArrayView1<'_, T>, z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| {
            let c: Complex64 = c.into();
            acc * z + c
        })
}

/// Evaluate the rational function `p(z) / q(z)` with ascending-power coefficients
#[inline]
pub fn rational<T: Sample>(
    numerator: ArrayView1<'_, T>,
    denominator: ArrayView1<'_, T>,
    z: Complex64,
) -> Complex64 {
    polyval(numerator, z) / polyval(denominator, z)
}

/// Point `exp(-i * omega * dt)` on the unit circle
///
/// Z-transform substitution for evenly sampled data.
#[inline]
pub fn unit_circle_point(omega: f64, dt: f64) -> Complex64 {
    Complex64::from_polar(1.0, -omega * dt)
}
