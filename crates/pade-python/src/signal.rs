//! Python bindings for the signal utilities

use num_complex::Complex64;
use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;
use pade_core::signal;

use crate::to_py_err;

/// Reference FFT spectrum on the positive bins
///
/// Args:
///     data: Time-domain samples
///     dt: Time step
///     norm: Scale real and imaginary parts independently to a peak of 1
///     n: Transform length (default: len(data))
///
/// Returns:
///     (omega, spectrum) tuple of numpy arrays
#[pyfunction]
#[pyo3(signature = (data, dt, norm=false, n=None))]
#[allow(clippy::type_complexity)]
pub fn ft<'py>(
    py: Python<'py>,
    data: Vec<f64>,
    dt: f64,
    norm: bool,
    n: Option<usize>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<Complex64>>)> {
    let (omega, spectrum) = signal::ft(&data, dt, norm, n).map_err(to_py_err)?;
    Ok((omega.to_pyarray(py), spectrum.to_pyarray(py)))
}

/// Zero frequency components whose power does not exceed `filter_level`
#[pyfunction]
pub fn denoise<'py>(
    py: Python<'py>,
    f: Vec<f64>,
    filter_level: f64,
    dt: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    signal::denoise(&f, filter_level, dt)
        .map(|clean| clean.to_pyarray(py))
        .map_err(to_py_err)
}

/// Apply the exponential window `exp(-t / tau)`
#[pyfunction]
pub fn damp<'py>(
    py: Python<'py>,
    f: Vec<f64>,
    dt: f64,
    tau: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    signal::damp(&f, dt, tau)
        .map(|damped| damped.to_pyarray(py))
        .map_err(to_py_err)
}

/// Full width at half maximum of the dominant line, in angular frequency
#[pyfunction]
pub fn fwhm(spectrum: Vec<f64>, dt: f64) -> PyResult<f64> {
    signal::fwhm(&spectrum, dt).map_err(to_py_err)
}
