//! WASM bindings for FrequencyGrid

use js_sys::Float64Array;
use pade_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
use wasm_bindgen::prelude::*;

use crate::to_js_err;

/// Angular frequency axis for WASM
#[wasm_bindgen]
pub struct WasmFrequencyGrid {
    inner: FrequencyGrid,
}

#[wasm_bindgen]
impl WasmFrequencyGrid {
    /// Create a new frequency grid
    ///
    /// @param start - Start frequency in the specified unit
    /// @param stop - Stop frequency in the specified unit
    /// @param npoints - Number of frequency points
    /// @param unit - Frequency unit ('angular' or 'ordinary')
    /// @param sweep_type - Sweep type ('linear' or 'log')
    #[wasm_bindgen(constructor)]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: Option<String>,
        sweep_type: Option<String>,
    ) -> Result<WasmFrequencyGrid, JsValue> {
        let unit = unit.as_deref().unwrap_or("angular");
        let freq_unit = FrequencyUnit::from_str(unit)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid unit: {}", unit)))?;

        let sweep = match sweep_type
            .as_deref()
            .unwrap_or("linear")
            .to_lowercase()
            .as_str()
        {
            "linear" | "lin" => SweepType::Linear,
            "log" | "logarithmic" => SweepType::Log,
            s => return Err(JsValue::from_str(&format!("Invalid sweep type: {}", s))),
        };

        Ok(WasmFrequencyGrid {
            inner: FrequencyGrid::new(start, stop, npoints, freq_unit, sweep).map_err(to_js_err)?,
        })
    }

    /// Positive FFT bins of an `n`-point transform with time step `dt`
    #[wasm_bindgen(js_name = fftBins)]
    pub fn fft_bins(n: usize, dt: f64) -> WasmFrequencyGrid {
        WasmFrequencyGrid {
            inner: FrequencyGrid::fft_bins(n, dt),
        }
    }

    /// Angular frequencies as Float64Array
    #[wasm_bindgen(getter)]
    pub fn w(&self) -> Float64Array {
        Float64Array::from(self.inner.w())
    }

    /// Frequencies in the display unit as Float64Array
    #[wasm_bindgen(getter)]
    pub fn scaled(&self) -> Float64Array {
        Float64Array::from(self.inner.scaled().as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn start(&self) -> f64 {
        self.inner.start()
    }

    #[wasm_bindgen(getter)]
    pub fn stop(&self) -> f64 {
        self.inner.stop()
    }

    #[wasm_bindgen(getter)]
    pub fn step(&self) -> f64 {
        self.inner.step()
    }

    #[wasm_bindgen(getter)]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }
}

impl WasmFrequencyGrid {
    pub fn inner(&self) -> &FrequencyGrid {
        &self.inner
    }
}
