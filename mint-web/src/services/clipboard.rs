//! Clipboard access

use wasm_bindgen_futures::JsFuture;

use shared::error::MintError;

use crate::utils::format::format_js_error;

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), MintError> {
    let window = web_sys::window().ok_or(MintError::Clipboard)?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise).await.map(|_| ()).map_err(|e| {
        log::warn!("Clipboard write failed: {}", format_js_error(&e));
        MintError::Clipboard
    })
}
