//! Core Pade state machine

use ndarray::Array1;
use num_complex::Complex64;

use super::model::PadeApproximant;
use super::series::PadeSeries;
use super::solver::SolveStrategy;
use crate::error::{PadeError, Result};
use crate::math::Sample;

/// A Padé model, either waiting to be built or ready to evaluate
///
/// `Unbuilt -> Built` happens once through [`Pade::build`]; `Built` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Pade<T = f64> {
    /// Preprocessed series, no coefficients yet
    Unbuilt(PadeSeries<T>),
    /// Coefficients solved
    Built(PadeApproximant<T>),
}

impl<T: Sample> Pade<T> {
    /// Preprocess `samples` taken every `dt` into an unbuilt model
    ///
    /// # Example
    /// ```
    /// use pade_core::{Pade, SolveStrategy};
    ///
    /// let signal: Vec<f64> = (0..9)
    ///     .map(|k| {
    ///         let t = 0.1 * k as f64;
    ///         (-0.3 * t).exp() * (1.5 * t).cos() + 0.6 * (-0.5 * t).exp() * (3.2 * t).cos()
    ///     })
    ///     .collect();
    /// let mut pade = Pade::new(&signal, 0.1).unwrap();
    /// pade.build(SolveStrategy::Direct).unwrap();
    /// let spectrum = pade.evaluate(&[1.0, 2.0, 3.0], false).unwrap();
    /// assert_eq!(spectrum.len(), 3);
    /// ```
    pub fn new(samples: &[T], dt: f64) -> Result<Self> {
        Ok(Pade::Unbuilt(PadeSeries::new(samples, dt)?))
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        matches!(self, Pade::Built(_))
    }

    /// The preprocessed series, available in both states
    pub fn series(&self) -> &PadeSeries<T> {
        match self {
            Pade::Unbuilt(series) => series,
            Pade::Built(approximant) => approximant.series(),
        }
    }

    /// Solve for the coefficients and move to `Built`
    ///
    /// On error the model stays `Unbuilt`. Building twice is an error.
    pub fn build(&mut self, strategy: SolveStrategy) -> Result<()> {
        match self {
            Pade::Built(_) => Err(PadeError::AlreadyBuilt),
            Pade::Unbuilt(series) => {
                let approximant = series.build(strategy)?;
                *self = Pade::Built(approximant);
                Ok(())
            }
        }
    }

    /// The built approximant
    pub fn approximant(&self) -> Result<&PadeApproximant<T>> {
        match self {
            Pade::Built(approximant) => Ok(approximant),
            Pade::Unbuilt(_) => Err(PadeError::NotBuilt),
        }
    }

    /// Numerator coefficients, if built
    pub fn a(&self) -> Option<&Array1<T>> {
        self.approximant().ok().map(PadeApproximant::a)
    }

    /// Denominator coefficients, if built
    pub fn b(&self) -> Option<&Array1<T>> {
        self.approximant().ok().map(PadeApproximant::b)
    }

    /// Approximate spectrum at angular frequencies `omegas`
    ///
    /// Fails with [`PadeError::NotBuilt`] before [`Pade::build`].
    pub fn evaluate(&self, omegas: &[f64], normalize: bool) -> Result<Array1<Complex64>> {
        Ok(self.approximant()?.evaluate(omegas, normalize))
    }
}

impl<T: Sample> From<PadeSeries<T>> for Pade<T> {
    fn from(series: PadeSeries<T>) -> Self {
        Pade::Unbuilt(series)
    }
}

impl<T: Sample> From<PadeApproximant<T>> for Pade<T> {
    fn from(approximant: PadeApproximant<T>) -> Self {
        Pade::Built(approximant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal() -> Vec<f64> {
        (0..9)
            .map(|k| {
                let t = 0.1 * k as f64;
                (-0.3 * t).exp() * (1.5 * t).cos() + 0.6 * (-0.5 * t).exp() * (3.2 * t + 0.4).cos()
            })
            .collect()
    }

    #[test]
    fn test_new_is_unbuilt() {
        let pade = Pade::new(&signal(), 0.1).unwrap();
        assert!(!pade.is_built());
        assert!(pade.a().is_none());
        assert!(pade.b().is_none());
        assert_eq!(pade.series().n(), 4);
    }

    #[test]
    fn test_evaluate_before_build_fails() {
        let pade = Pade::new(&signal(), 0.1).unwrap();
        assert_eq!(pade.evaluate(&[1.0], false), Err(PadeError::NotBuilt));
    }

    #[test]
    fn test_build_transitions_once() {
        let mut pade = Pade::new(&signal(), 0.1).unwrap();
        pade.build(SolveStrategy::Structured).unwrap();

        assert!(pade.is_built());
        assert_eq!(pade.b().map(|b| b[0]), Some(1.0));
        assert_eq!(pade.a().map(|a| a.len()), Some(5));
        assert_eq!(pade.build(SolveStrategy::Direct), Err(PadeError::AlreadyBuilt));
        assert_eq!(
            pade.approximant().map(|a| a.strategy()),
            Ok(SolveStrategy::Structured)
        );
    }

    #[test]
    fn test_failed_build_stays_unbuilt() {
        let mut pade = Pade::new(&[1.0; 5], 1.0).unwrap();
        let err = pade.build(SolveStrategy::Direct).unwrap_err();

        assert!(matches!(err, PadeError::SingularSystem { .. }));
        assert!(!pade.is_built());
        assert_eq!(pade.evaluate(&[0.5], false), Err(PadeError::NotBuilt));
    }
}
