//! WASM bindings for pade-core
//!
//! This module exposes pade-core functionality to JavaScript/WASM.

use js_sys::Float64Array;
use num_complex::Complex64;
use pade_core::PadeError;
use wasm_bindgen::prelude::*;

mod frequency;
mod pade;
mod signal;

pub use frequency::WasmFrequencyGrid;
pub use pade::WasmPade;
pub use signal::{damp, denoise, ft, fwhm};

pub(crate) fn to_js_err(err: PadeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Split complex values into an object with {real: Float64Array, imag: Float64Array}
pub(crate) fn complex_to_js<'a>(
    values: impl Iterator<Item = &'a Complex64> + Clone,
) -> Result<JsValue, JsValue> {
    let real: Vec<f64> = values.clone().map(|c| c.re).collect();
    let imag: Vec<f64> = values.map(|c| c.im).collect();

    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"real".into(), &Float64Array::from(real.as_slice()))?;
    js_sys::Reflect::set(&obj, &"imag".into(), &Float64Array::from(imag.as_slice()))?;

    Ok(obj.into())
}

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    "0.1.0".to_string()
}
