//! Python bindings for FrequencyGrid

use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;
use pade_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};

use crate::to_py_err;

/// Python wrapper for FrequencyGrid
#[pyclass(name = "FrequencyGrid")]
#[derive(Clone)]
pub struct PyFrequencyGrid {
    inner: FrequencyGrid,
}

#[pymethods]
impl PyFrequencyGrid {
    /// Create a new frequency grid
    ///
    /// Args:
    ///     start: Start frequency in `unit`
    ///     stop: Stop frequency in `unit`
    ///     npoints: Number of frequency points
    ///     unit: Frequency unit ('angular' or 'ordinary')
    ///     sweep_type: Sweep type ('linear' or 'log')
    #[new]
    #[pyo3(signature = (start, stop, npoints, unit="angular", sweep_type="linear"))]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: &str,
        sweep_type: &str,
    ) -> PyResult<Self> {
        let freq_unit = FrequencyUnit::from_str(unit).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Invalid frequency unit: {}. Use 'angular' or 'ordinary'",
                unit
            ))
        })?;

        let sweep = match sweep_type.to_lowercase().as_str() {
            "linear" | "lin" => SweepType::Linear,
            "log" | "logarithmic" => SweepType::Log,
            _ => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "Invalid sweep type: {}. Use 'linear' or 'log'",
                    sweep_type
                )))
            }
        };

        Ok(Self {
            inner: FrequencyGrid::new(start, stop, npoints, freq_unit, sweep).map_err(to_py_err)?,
        })
    }

    /// Positive FFT bins of an `n`-point transform with time step `dt`
    #[staticmethod]
    pub fn fft_bins(n: usize, dt: f64) -> Self {
        Self {
            inner: FrequencyGrid::fft_bins(n, dt),
        }
    }

    /// Angular frequencies as numpy array
    #[getter]
    pub fn w<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.w().to_pyarray(py)
    }

    /// Frequencies in the display unit as numpy array
    #[getter]
    pub fn scaled<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.scaled().to_pyarray(py)
    }

    #[getter]
    pub fn start(&self) -> f64 {
        self.inner.start()
    }

    #[getter]
    pub fn stop(&self) -> f64 {
        self.inner.stop()
    }

    #[getter]
    pub fn step(&self) -> f64 {
        self.inner.step()
    }

    #[getter]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Frequency unit as string
    #[getter]
    pub fn unit(&self) -> &str {
        match self.inner.unit() {
            FrequencyUnit::Angular => "angular",
            FrequencyUnit::Ordinary => "ordinary",
        }
    }

    /// Sweep type as string
    #[getter]
    pub fn sweep_type(&self) -> &str {
        match self.inner.sweep_type() {
            SweepType::Linear => "linear",
            SweepType::Log => "log",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "FrequencyGrid({} - {} rad/time, {} points, {})",
            self.inner.start(),
            self.inner.stop(),
            self.npoints(),
            self.sweep_type()
        )
    }

    fn __len__(&self) -> usize {
        self.npoints()
    }
}

impl PyFrequencyGrid {
    /// Get the inner FrequencyGrid reference (for internal use)
    pub fn inner(&self) -> &FrequencyGrid {
        &self.inner
    }
}
