//! Mint page
//!
//! Package id, recipient, image, preview card and the mint button. All state
//! transitions go through [`PageContext`]; this file is layout and wiring.

use leptos::prelude::*;

use shared::executor::run_mint;
use shared::state::MintOutcome;

use crate::components::{CopyField, DropZone, Header, NftPreview, ToastView};
use crate::services::confetti::burst_confetti;
use crate::services::object_url::BrowserObjectUrls;
use crate::services::wallet::SuiWalletExecutor;
use crate::state::page::use_page_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::CONFETTI_COUNT;

#[component]
pub fn MintPage() -> impl IntoView {
    let page = use_page_context();
    let wallet_ctx = use_wallet_context();

    let package_id = Memo::new(move |_| page.state.with(|s| s.form.package_id.clone()));
    let customer = Memo::new(move |_| page.state.with(|s| s.form.customer_address.clone()));
    let image = Memo::new(move |_| page.state.with(|s| s.form.image.value().to_string()));
    let loading = Memo::new(move |_| page.state.with(|s| s.flags.loading));
    let can_submit = Memo::new(move |_| page.state.with(|s| s.can_submit()));

    let mint = move |_| {
        let executor = SuiWalletExecutor::new(wallet_ctx);
        leptos::task::spawn_local(async move {
            match run_mint(&page, &executor, &BrowserObjectUrls).await {
                Ok(MintOutcome::Minted { .. }) => burst_confetti(CONFETTI_COUNT),
                Ok(MintOutcome::Failed(_)) => {}
                Err(e) => log::debug!("Mint not submitted: {}", e),
            }
        });
    };

    view! {
        <div class="app-wrap">
            <ToastView/>
            <Header/>

            <div class="card">
                <label class="label" for="packageId">"Package ID"</label>
                <CopyField
                    id="packageId"
                    placeholder="Enter the contract Package ID"
                    copy_label="Copy package id"
                    value=package_id
                    on_input=Callback::new(move |value| page.set_package_id(value))
                />
            </div>

            <section class="card">
                <h2 class="section-title">"Mint a New Card"</h2>

                <label class="label" for="customerId">"Wallet Address"</label>
                <CopyField
                    id="customerId"
                    placeholder="Enter Customer's SUI Address"
                    copy_label="Copy wallet address"
                    value=customer
                    on_input=Callback::new(move |value| page.set_customer_address(value))
                />

                <label class="label" for="imageUrl">"Image URL"</label>
                <input
                    id="imageUrl"
                    type="text"
                    placeholder="Paste a public Image URL"
                    prop:value=move || image.get()
                    on:input=move |ev| page.set_image_url(event_target_value(&ev))
                />

                <DropZone/>

                <Show when=move || image.with(|url| !url.is_empty())>
                    <NftPreview image=image owner=customer/>
                </Show>

                <button class="primary-btn" on:click=mint disabled=move || !can_submit.get()>
                    {move || if loading.get() { "Minting…" } else { "Mint your NFT" }}
                </button>

                <p class="hint">
                    "Heads up: files dropped here use a " <code>"blob:"</code> " URL (local). "
                    "For on-chain metadata, upload to IPFS and use that URL."
                </p>
            </section>
        </div>
    }
}
