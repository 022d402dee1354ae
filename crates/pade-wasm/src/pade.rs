//! WASM bindings for the Padé approximant

use js_sys::Float64Array;
use pade_core::{Pade, SolveStrategy};
use wasm_bindgen::prelude::*;

use crate::frequency::WasmFrequencyGrid;
use crate::{complex_to_js, to_js_err};

/// Padé approximant of a sampled signal - WASM binding
#[wasm_bindgen]
pub struct WasmPade {
    inner: Pade,
}

#[wasm_bindgen]
impl WasmPade {
    /// Preprocess samples taken every `dt`
    ///
    /// @param data - Time-domain samples (Float64Array)
    /// @param dt - Time step
    #[wasm_bindgen(constructor)]
    pub fn new(data: Float64Array, dt: f64) -> Result<WasmPade, JsValue> {
        let samples = data.to_vec();
        Ok(WasmPade {
            inner: Pade::new(&samples, dt).map_err(to_js_err)?,
        })
    }

    /// Solve for the Padé coefficients
    ///
    /// @param toeplitz_solver - Use the Levinson solve (default: true)
    #[wasm_bindgen]
    pub fn build(&mut self, toeplitz_solver: Option<bool>) -> Result<(), JsValue> {
        let strategy = if toeplitz_solver.unwrap_or(true) {
            SolveStrategy::Structured
        } else {
            SolveStrategy::Direct
        };
        self.inner.build(strategy).map_err(to_js_err)
    }

    /// Approximate spectrum at angular frequencies
    ///
    /// @param omegas - Angular frequencies (Float64Array)
    /// @param norm - Scale real and imaginary parts to a peak of 1 (default: false)
    /// Returns: Object with {real: Float64Array, imag: Float64Array}
    #[wasm_bindgen]
    pub fn approx(&self, omegas: Float64Array, norm: Option<bool>) -> Result<JsValue, JsValue> {
        let omegas = omegas.to_vec();
        let spectrum = self
            .inner
            .evaluate(&omegas, norm.unwrap_or(false))
            .map_err(to_js_err)?;
        complex_to_js(spectrum.iter())
    }

    /// Approximate spectrum on a frequency grid
    #[wasm_bindgen(js_name = approxGrid)]
    pub fn approx_grid(
        &self,
        grid: &WasmFrequencyGrid,
        norm: Option<bool>,
    ) -> Result<JsValue, JsValue> {
        let spectrum = self
            .inner
            .evaluate(grid.inner().w(), norm.unwrap_or(false))
            .map_err(to_js_err)?;
        complex_to_js(spectrum.iter())
    }

    /// Numerator coefficients
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> Result<Float64Array, JsValue> {
        self.inner
            .a()
            .map(|a| Float64Array::from(a.to_vec().as_slice()))
            .ok_or_else(|| JsValue::from_str("Model not built yet"))
    }

    /// Denominator coefficients
    #[wasm_bindgen(getter)]
    pub fn b(&self) -> Result<Float64Array, JsValue> {
        self.inner
            .b()
            .map(|b| Float64Array::from(b.to_vec().as_slice()))
            .ok_or_else(|| JsValue::from_str("Model not built yet"))
    }

    /// Order of the approximant
    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize {
        self.inner.series().n()
    }

    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 {
        self.inner.series().dt()
    }

    #[wasm_bindgen(getter, js_name = isBuilt)]
    pub fn is_built(&self) -> bool {
        self.inner.is_built()
    }
}
