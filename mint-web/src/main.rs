//! Loyalty card NFT mint page
//!
//! Connect a Sui wallet, fill in the package id, recipient and image, and mint.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Loyalty mint page starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html
pub(crate) fn hide_loading_screen() {
    let Some(element) = gloo_utils::document().get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not present", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }
    // Also set display:none in case the stylesheet has not loaded yet
    if let Err(e) = element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {:?}", e);
    }
}
