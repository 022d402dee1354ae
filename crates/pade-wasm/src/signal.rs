//! WASM bindings for the signal utilities

use js_sys::Float64Array;
use pade_core::signal;
use wasm_bindgen::prelude::*;

use crate::{complex_to_js, to_js_err};

/// Reference FFT spectrum on the positive bins
///
/// Returns: Object with {omega: Float64Array, real: Float64Array, imag: Float64Array}
#[wasm_bindgen]
pub fn ft(
    data: Float64Array,
    dt: f64,
    norm: Option<bool>,
    n: Option<usize>,
) -> Result<JsValue, JsValue> {
    let (omega, spectrum) =
        signal::ft(&data.to_vec(), dt, norm.unwrap_or(false), n).map_err(to_js_err)?;

    let obj = complex_to_js(spectrum.iter())?;
    js_sys::Reflect::set(
        &obj,
        &"omega".into(),
        &Float64Array::from(omega.to_vec().as_slice()),
    )?;
    Ok(obj)
}

/// Zero frequency components whose power does not exceed `filter_level`
#[wasm_bindgen]
pub fn denoise(f: Float64Array, filter_level: f64, dt: f64) -> Result<Float64Array, JsValue> {
    let clean = signal::denoise(&f.to_vec(), filter_level, dt).map_err(to_js_err)?;
    Ok(Float64Array::from(clean.to_vec().as_slice()))
}

/// Apply the exponential window `exp(-t / tau)`
#[wasm_bindgen]
pub fn damp(f: Float64Array, dt: f64, tau: f64) -> Result<Float64Array, JsValue> {
    let damped = signal::damp(&f.to_vec(), dt, tau).map_err(to_js_err)?;
    Ok(Float64Array::from(damped.to_vec().as_slice()))
}

/// Full width at half maximum of the dominant line
#[wasm_bindgen]
pub fn fwhm(spectrum: Float64Array, dt: f64) -> Result<f64, JsValue> {
    signal::fwhm(&spectrum.to_vec(), dt).map_err(to_js_err)
}
