//! NFT card preview

use leptos::prelude::*;
use web_sys::HtmlImageElement;

use shared::utils::{owner_label, preview_token};

#[component]
pub fn NftPreview(
    #[prop(into)] image: Signal<String>,
    #[prop(into)] owner: Signal<String>,
) -> impl IntoView {
    let label = move || owner.with(|o| owner_label(o));
    let token = move || owner.with(|o| preview_token(o));

    view! {
        <div class="nft-card">
            <div class="nft-media">
                <img
                    src=move || image.get()
                    alt="NFT preview"
                    on:load=|ev| {
                        let img = event_target::<HtmlImageElement>(&ev);
                        if let Err(e) = web_sys::HtmlElement::style(&img).set_property("opacity", "1") {
                            log::debug!("preview fade-in skipped: {:?}", e);
                        }
                    }
                />
            </div>
            <div class="nft-meta">
                <div class="meta-row">
                    <span class="muted">"Owner"</span>
                    <span class="value">{label}</span>
                </div>
                <div class="meta-row">
                    <span class="muted">"Preview Token"</span>
                    <span class="value">"#" {token}</span>
                </div>
            </div>
        </div>
    }
}
