//! Exponential damping window

use log::debug;
use ndarray::Array1;

use super::check_time_step;
use crate::error::{PadeError, Result};
use crate::math::Sample;

/// Multiply `f` by `exp(-t / tau)`, `t = k * dt`
///
/// Damping broadens the lines of a truncated signal so the Padé denominator
/// is better conditioned.
pub fn damp<T: Sample>(f: &[T], dt: f64, tau: f64) -> Result<Array1<T>> {
    check_time_step(dt)?;
    if !tau.is_finite() || tau <= 0.0 {
        return Err(PadeError::InvalidArgument {
            arg: "tau",
            reason: "decay constant must be finite and positive",
        });
    }
    debug!("damp: {} samples, dt = {}, tau = {}", f.len(), dt, tau);

    Ok(f
        .iter()
        .enumerate()
        .map(|(k, &x)| x.scale((-(k as f64) * dt / tau).exp()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_damping_envelope() {
        let damped = damp(&[1.0; 4], 0.5, 2.0).unwrap();
        for (k, v) in damped.iter().enumerate() {
            assert_relative_eq!(*v, (-(k as f64) * 0.25).exp(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_damping_complex_samples() {
        let damped = damp(&[Complex64::new(0.0, 2.0), Complex64::new(1.0, 1.0)], 1.0, 1.0).unwrap();
        assert_eq!(damped[0], Complex64::new(0.0, 2.0));
        assert_relative_eq!(damped[1].re, (-1.0f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(damped[1].im, (-1.0f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_non_positive_tau() {
        assert!(matches!(
            damp(&[1.0, 2.0], 1.0, 0.0),
            Err(PadeError::InvalidArgument { arg: "tau", .. })
        ));
        assert!(damp(&[1.0, 2.0], 0.0, 1.0).is_err());
    }
}
