//! Signal preprocessing
//!
//! Turns raw samples into the centered, odd-length series the Padé
//! recursion expects.

use log::warn;
use ndarray::{s, Array1};

use crate::constants::MIN_SAMPLES;
use crate::error::{PadeError, Result};
use crate::math::Sample;

/// Centered, odd-length time series (the unbuilt model)
///
/// Holds `c` with `c[0] == 0`, `M = len - 1` (even) and `N = M / 2`.
/// The samples are copied on construction; the caller's buffer is never
/// touched.
#[derive(Debug, Clone, PartialEq)]
pub struct PadeSeries<T = f64> {
    c: Array1<T>,
    m: usize,
    n: usize,
    dt: f64,
    trimmed: bool,
}

impl<T: Sample> PadeSeries<T> {
    /// Preprocess `samples` taken every `dt`
    ///
    /// An even number of samples is corrected by dropping the last one; the
    /// correction is logged and reported by [`PadeSeries::was_trimmed`].
    pub fn new(samples: &[T], dt: f64) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PadeError::InvalidArgument {
                arg: "dt",
                reason: "time step must be finite and positive",
            });
        }

        let trimmed = !samples.is_empty() && samples.len() % 2 == 0;
        let kept = if trimmed {
            warn!(
                "Odd number of samples required - removing last data point ({} -> {})",
                samples.len(),
                samples.len() - 1
            );
            &samples[..samples.len() - 1]
        } else {
            samples
        };

        if kept.len() < MIN_SAMPLES {
            return Err(PadeError::InsufficientSamples { got: kept.len() });
        }

        let origin = kept[0];
        let c: Array1<T> = kept.iter().map(|&x| x - origin).collect();
        let m = c.len() - 1;
        let n = m / 2;

        Ok(Self {
            c,
            m,
            n,
            dt,
            trimmed,
        })
    }

    /// Centered samples `c`
    #[inline]
    pub fn c(&self) -> &Array1<T> {
        &self.c
    }

    /// Polynomial degree of the series, `M = len - 1`
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Order of the approximant, `N = M / 2`
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Time step
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples kept after parity trimming
    #[inline]
    pub fn len(&self) -> usize {
        self.c.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }

    /// Whether the last sample was dropped to make the length odd
    #[inline]
    pub fn was_trimmed(&self) -> bool {
        self.trimmed
    }

    /// Negated tail `d = -c[N+1..]`, the right-hand side of the denominator system
    pub fn tail(&self) -> Array1<T> {
        self.c.slice(s![self.n + 1..]).mapv(|v| -v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use num_complex::Complex64;

    #[test]
    fn test_centers_on_first_sample() {
        let samples = [2.0, 3.0, 5.0, 1.0, 2.0];
        let series = PadeSeries::new(&samples, 0.1).unwrap();

        assert_eq!(series.c(), &array![0.0, 1.0, 3.0, -1.0, 0.0]);
        assert_eq!(series.m(), 4);
        assert_eq!(series.n(), 2);
        assert!(!series.was_trimmed());
        // Caller data is untouched
        assert_eq!(samples, [2.0, 3.0, 5.0, 1.0, 2.0]);
    }

    #[test]
    fn test_even_length_is_trimmed() {
        let series = PadeSeries::new(&[1.0, 2.0, 4.0, 8.0], 1.0).unwrap();

        assert!(series.was_trimmed());
        assert_eq!(series.len(), 3);
        assert_eq!(series.c(), &array![0.0, 1.0, 3.0]);
        assert_eq!(series.n(), 1);
    }

    #[test]
    fn test_tail_has_n_elements() {
        let series = PadeSeries::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 1.0).unwrap();
        assert_eq!(series.n(), 3);
        assert_eq!(series.tail(), array![-4.0, -5.0, -6.0]);
    }

    #[test]
    fn test_complex_samples() {
        let samples = [
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, -1.0),
        ];
        let series = PadeSeries::new(&samples, 0.5).unwrap();
        assert_eq!(series.c()[0], Complex64::new(0.0, 0.0));
        assert_eq!(series.c()[1], Complex64::new(1.0, -1.0));
        assert_eq!(series.c()[2], Complex64::new(-1.0, -2.0));
    }

    #[test]
    fn test_rejects_short_input() {
        assert_eq!(
            PadeSeries::<f64>::new(&[], 1.0),
            Err(PadeError::InsufficientSamples { got: 0 })
        );
        assert_eq!(
            PadeSeries::new(&[1.0, 2.0], 1.0),
            Err(PadeError::InsufficientSamples { got: 1 })
        );
    }

    #[test]
    fn test_rejects_bad_time_step() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PadeSeries::new(&[1.0, 2.0, 3.0], dt),
                Err(PadeError::InvalidArgument { arg: "dt", .. })
            ));
        }
    }
}
