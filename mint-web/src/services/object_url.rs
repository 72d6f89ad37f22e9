//! `blob:` object URLs for dropped or picked image files

use web_sys::{File, Url};

use shared::state::ObjectUrlRevoker;

use crate::utils::format::format_js_error;

/// The browser's object URL registry.
pub struct BrowserObjectUrls;

impl ObjectUrlRevoker for BrowserObjectUrls {
    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {}", url, format_js_error(&e));
        }
    }
}

/// Create a session-local URL for `file`. Nothing is uploaded.
pub fn create_for_file(file: &File) -> Result<String, String> {
    Url::create_object_url_with_blob(file).map_err(|e| format_js_error(&e))
}
