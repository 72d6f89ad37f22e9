//! # Formatting Utilities for the Mint Page
//!
//! - [`format_js_error`] - Turn a thrown JavaScript value into display text

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort message for a value thrown across the JS boundary.
///
/// `Error` objects yield their `message`, strings are used as-is, anything
/// else falls back to its debug form.
pub fn format_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
