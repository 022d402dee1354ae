//! Spectrum evaluation
//!
//! Functions for evaluating the fitted rational function at given angular
//! frequencies.

use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;

use super::series::PadeSeries;
use super::solver::{PadeCoefficients, SolveStrategy};
use crate::math::{normalize_components, rational, unit_circle_point, Sample};

/// A built Padé approximant
///
/// Immutable once constructed: evaluation only reads the coefficient vectors,
/// so a shared reference can be used from several threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PadeApproximant<T = f64> {
    series: PadeSeries<T>,
    coefficients: PadeCoefficients<T>,
    strategy: SolveStrategy,
}

impl<T: Sample> PadeApproximant<T> {
    pub(crate) fn new(
        series: PadeSeries<T>,
        coefficients: PadeCoefficients<T>,
        strategy: SolveStrategy,
    ) -> Self {
        Self {
            series,
            coefficients,
            strategy,
        }
    }

    /// Numerator coefficients `a`
    #[inline]
    pub fn a(&self) -> &Array1<T> {
        &self.coefficients.a
    }

    /// Denominator coefficients `b`, `b[0] == 1`
    #[inline]
    pub fn b(&self) -> &Array1<T> {
        &self.coefficients.b
    }

    #[inline]
    pub fn coefficients(&self) -> &PadeCoefficients<T> {
        &self.coefficients
    }

    /// The preprocessed series the approximant was built from
    #[inline]
    pub fn series(&self) -> &PadeSeries<T> {
        &self.series
    }

    /// Strategy used to solve the denominator system
    #[inline]
    pub fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.series.dt()
    }

    /// Order of the approximant
    #[inline]
    pub fn order(&self) -> usize {
        self.series.n()
    }

    /// Evaluate the approximate spectrum at angular frequencies `omegas`
    ///
    /// With `normalize`, real and imaginary parts are scaled independently so
    /// that each peaks at 1 in magnitude (see [`normalize_components`]); this
    /// is for display only and distorts magnitude and phase.
    pub fn evaluate(&self, omegas: &[f64], normalize: bool) -> Array1<Complex64> {
        let spectrum = evaluate_rational(self.a().view(), self.b().view(), self.dt(), omegas);
        if normalize {
            normalize_components(&spectrum)
        } else {
            spectrum
        }
    }

    /// Evaluate at a single angular frequency
    pub fn evaluate_at(&self, omega: f64) -> Complex64 {
        rational(
            self.a().view(),
            self.b().view(),
            unit_circle_point(omega, self.dt()),
        )
    }
}

/// Evaluate `F(omega) = p(z) / q(z)`, `z = exp(-i * omega * dt)`
///
/// # Arguments
/// * `a` - Numerator coefficients, ascending powers of `z`
/// * `b` - Denominator coefficients, ascending powers of `z`
/// * `dt` - Sampling time step
/// * `omegas` - Angular frequencies at which to evaluate
pub fn evaluate_rational<T: Sample>(
    a: ArrayView1<'_, T>,
    b: ArrayView1<'_, T>,
    dt: f64,
    omegas: &[f64],
) -> Array1<Complex64> {
    omegas
        .iter()
        .map(|&omega| rational(a, b, unit_circle_point(omega, dt)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_evaluate_constant_ratio() {
        // p(z) = 2, q(z) = 1
        let a = array![2.0];
        let b = array![1.0];
        let response = evaluate_rational(a.view(), b.view(), 0.1, &[0.0, 1.0, 5.0]);

        for h in response.iter() {
            assert_relative_eq!(h.re, 2.0, epsilon = 1e-12);
            assert_relative_eq!(h.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_single_pole() {
        // 1 / (1 - 0.5 z) at omega = 0 (z = 1) is 2
        let a = array![1.0, 0.0];
        let b = array![1.0, -0.5];
        let response = evaluate_rational(a.view(), b.view(), 1.0, &[0.0]);
        assert_relative_eq!(response[0].re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(response[0].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_empty_query() {
        let a = array![1.0];
        let b = array![1.0];
        assert!(evaluate_rational(a.view(), b.view(), 1.0, &[]).is_empty());
    }
}
