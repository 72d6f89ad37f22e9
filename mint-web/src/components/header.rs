//! Page header: title, wallet button and theme toggle

use leptos::prelude::*;

use crate::components::ConnectButton;
use crate::state::page::use_page_context;

#[component]
pub fn Header() -> impl IntoView {
    let page = use_page_context();
    let dark_mode = move || page.state.with(|s| s.flags.dark_mode);

    view! {
        <header class="header">
            <h1>"Mint Your NFT On SUI"</h1>
            <div class="header-actions">
                <ConnectButton/>
                <button
                    type="button"
                    class="toggle-theme"
                    aria-label="Toggle theme"
                    title="Toggle theme"
                    on:click=move |_| page.toggle_theme()
                >
                    {move || if dark_mode() { "☀️" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
