//! Python bindings for pade-core
//!
//! This module exposes pade-core functionality to Python via PyO3.
//!
//! ## Classes
//!
//! - `Pade` - Padé approximant of a sampled time signal
//! - `FrequencyGrid` - Angular frequency axis
//!
//! ## Functions
//!
//! - `ft`, `denoise`, `damp`, `fwhm` - Signal utilities

use pade_core::PadeError;
use pyo3::prelude::*;

mod frequency;
mod pade;
mod signal;

pub use frequency::PyFrequencyGrid;
pub use pade::PyPade;

/// Map a core error onto the closest Python exception
pub(crate) fn to_py_err(err: PadeError) -> PyErr {
    match err {
        PadeError::InvalidArgument { .. }
        | PadeError::InsufficientSamples { .. }
        | PadeError::DimensionMismatch { .. } => {
            pyo3::exceptions::PyValueError::new_err(err.to_string())
        }
        PadeError::SingularSystem { .. } => {
            pyo3::exceptions::PyArithmeticError::new_err(err.to_string())
        }
        PadeError::NotBuilt | PadeError::AlreadyBuilt | PadeError::NoPeaks => {
            pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// pade_python - Python bindings for the Padé spectral engine
///
/// Example:
///     >>> import pade_python as pade
///     >>> p = pade.Pade(signal, dt=0.1)
///     >>> p.build(toeplitz_solver=True)
///     >>> spectrum = p.approx(omegas)
#[pymodule]
fn pade_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Add classes with clean names (no Py prefix in Python)
    m.add_class::<PyPade>()?;
    m.add_class::<PyFrequencyGrid>()?;

    m.add_function(wrap_pyfunction!(signal::ft, m)?)?;
    m.add_function(wrap_pyfunction!(signal::denoise, m)?)?;
    m.add_function(wrap_pyfunction!(signal::damp, m)?)?;
    m.add_function(wrap_pyfunction!(signal::fwhm, m)?)?;

    m.add("__version__", "0.1.0")?;

    Ok(())
}
