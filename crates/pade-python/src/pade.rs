//! Python bindings for the Padé approximant

use num_complex::Complex64;
use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;
use pade_core::{Pade, SolveStrategy};

use crate::frequency::PyFrequencyGrid;
use crate::to_py_err;

/// Python wrapper for Pade
///
/// Example:
///     >>> p = Pade(signal, dt=0.1)
///     >>> p.build()
///     >>> spectrum = p.approx(omegas, norm=True)
#[pyclass(name = "Pade")]
pub struct PyPade {
    inner: Pade,
}

#[pymethods]
impl PyPade {
    /// Preprocess real-valued samples taken every `dt`
    ///
    /// An even number of samples drops the last one.
    #[new]
    pub fn new(data: Vec<f64>, dt: f64) -> PyResult<Self> {
        Ok(Self {
            inner: Pade::new(&data, dt).map_err(to_py_err)?,
        })
    }

    /// Solve for the Padé coefficients
    ///
    /// Args:
    ///     toeplitz_solver: Use the O(N^2) Levinson solve (default: True);
    ///         False assembles the dense system
    ///     strategy: 'structured' or 'direct', overrides `toeplitz_solver`
    #[pyo3(signature = (toeplitz_solver=true, strategy=None))]
    pub fn build(&mut self, toeplitz_solver: bool, strategy: Option<&str>) -> PyResult<()> {
        let strategy = match strategy {
            Some(name) => SolveStrategy::from_str(name).ok_or_else(|| {
                pyo3::exceptions::PyValueError::new_err(format!(
                    "Invalid strategy: {}. Use 'structured' or 'direct'",
                    name
                ))
            })?,
            None if toeplitz_solver => SolveStrategy::Structured,
            None => SolveStrategy::Direct,
        };

        self.inner.build(strategy).map_err(to_py_err)
    }

    /// Approximate spectrum at angular frequencies `o`
    ///
    /// Args:
    ///     o: Angular frequencies
    ///     norm: Scale real and imaginary parts independently to a peak of 1
    ///
    /// Returns:
    ///     Complex spectrum as numpy array
    #[pyo3(signature = (o, norm=false))]
    pub fn approx<'py>(
        &self,
        py: Python<'py>,
        o: Vec<f64>,
        norm: bool,
    ) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
        self.inner
            .evaluate(&o, norm)
            .map(|spectrum| spectrum.to_pyarray(py))
            .map_err(to_py_err)
    }

    /// Approximate spectrum on a FrequencyGrid
    #[pyo3(signature = (grid, norm=false))]
    pub fn approx_grid<'py>(
        &self,
        py: Python<'py>,
        grid: &PyFrequencyGrid,
        norm: bool,
    ) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
        self.approx(py, grid.inner().w().to_vec(), norm)
    }

    /// Numerator coefficients
    #[getter]
    pub fn a<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.inner
            .a()
            .map(|arr| arr.to_pyarray(py))
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("Model not built yet"))
    }

    /// Denominator coefficients, `b[0] == 1`
    #[getter]
    pub fn b<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.inner
            .b()
            .map(|arr| arr.to_pyarray(py))
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("Model not built yet"))
    }

    /// Centered samples
    #[getter]
    pub fn c<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.series().c().to_pyarray(py)
    }

    #[getter(M)]
    pub fn m(&self) -> usize {
        self.inner.series().m()
    }

    #[getter(N)]
    pub fn n(&self) -> usize {
        self.inner.series().n()
    }

    #[getter]
    pub fn dt(&self) -> f64 {
        self.inner.series().dt()
    }

    #[getter]
    pub fn is_built(&self) -> bool {
        self.inner.is_built()
    }

    fn __repr__(&self) -> String {
        format!(
            "Pade(N={}, dt={}, {})",
            self.n(),
            self.dt(),
            if self.is_built() { "built" } else { "unbuilt" }
        )
    }
}
