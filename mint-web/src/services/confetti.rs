//! Confetti Burst
//! Drops a short-lived layer of coloured particles over the page after a mint

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::utils::constants::CONFETTI_LIFETIME_MS;
use crate::utils::format::format_js_error;

/// Append `count` particles to `<body>` and remove them once the animation ends.
pub fn burst_confetti(count: u32) {
    if let Err(e) = try_burst(count) {
        log::warn!("Confetti failed: {}", format_js_error(&e));
    }
}

fn try_burst(count: u32) -> Result<(), JsValue> {
    let window = gloo_utils::window();
    let document = gloo_utils::document();

    let container = document.create_element("div")?;
    container.set_class_name("confetti-container");
    gloo_utils::body().append_child(&container)?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0);

    for _ in 0..count {
        let piece: Element = particle(&document, width)?;
        container.append_child(&piece)?;
    }

    // Detach on a fixed schedule regardless of what the page does meanwhile.
    Timeout::new(CONFETTI_LIFETIME_MS, move || container.remove()).forget();
    Ok(())
}

fn particle(document: &Document, viewport_width: f64) -> Result<Element, JsValue> {
    let piece = document.create_element("span")?;
    piece.set_class_name("confetti");

    let size = (js_sys::Math::random() * 8.0).floor() + 6.0; // 6-14px
    let left = js_sys::Math::random() * viewport_width;
    let hue = (js_sys::Math::random() * 360.0).floor();
    let delay = js_sys::Math::random() * 0.2;
    let rotation = js_sys::Math::random() * 180.0;

    piece.set_attribute(
        "style",
        &format!(
            "left: {}px; width: {}px; height: {}px; background: hsl({} 90% 60%); \
             animation-delay: {}s; transform: rotate({}deg);",
            left,
            size,
            size * 0.4,
            hue,
            delay,
            rotation
        ),
    )?;
    Ok(piece)
}
