//! Wallet connect / disconnect control

use leptos::prelude::*;

use shared::state::ToastKind;
use shared::utils::shorten_address;

use crate::services::wallet::{
    connect_wallet,
    disconnect_wallet,
    get_available_wallets,
    DetectedWallet,
    WalletState,
};
use crate::state::page::use_page_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let page = use_page_context();
    let (choices, set_choices) = signal(Vec::<DetectedWallet>::new());

    let connect = move |name: String| {
        set_choices.set(vec![]);
        wallet_ctx.set_connecting();

        leptos::task::spawn_local(async move {
            match connect_wallet(&name).await {
                Ok(account) => {
                    log::info!("Connected {} account {}", account.name, account.address);
                    wallet_ctx.set_connected(account.address, account.name);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    page.notify(ToastKind::Error, e.to_string());
                    wallet_ctx.set_error(e.to_string());
                }
            }
        });
    };

    let open = move |_| {
        let wallets = get_available_wallets();
        match wallets.len() {
            0 => page.notify(ToastKind::Error, "No Sui wallet detected. Install a Sui wallet extension."),
            1 => connect(wallets[0].name.clone()),
            _ => set_choices.set(wallets),
        }
    };

    let disconnect = move |_| {
        if let Some(name) = wallet_ctx.wallet_name() {
            leptos::task::spawn_local(async move {
                if let Err(e) = disconnect_wallet(&name).await {
                    log::warn!("Disconnect from {} failed: {}", name, e);
                }
            });
        }
        wallet_ctx.disconnect();
    };

    view! {
        <div class="connect">
            {move || match wallet_ctx.wallet.get() {
                WalletState::Connected { address, .. } => view! {
                    <span class="account" title=address.clone()>{shorten_address(&address)}</span>
                    <button type="button" class="connect-btn" on:click=disconnect>"Disconnect"</button>
                }.into_any(),
                WalletState::Connecting => view! {
                    <button type="button" class="connect-btn" disabled=true>"Connecting…"</button>
                }.into_any(),
                WalletState::Disconnected | WalletState::Error(_) => view! {
                    <button type="button" class="connect-btn" on:click=open>"Connect Wallet"</button>
                }.into_any(),
            }}

            {move || {
                let wallets = choices.get();
                (!wallets.is_empty()).then(|| view! {
                    <ul class="wallet-list">
                        {wallets
                            .into_iter()
                            .map(|wallet| {
                                let name = wallet.name.clone();
                                view! {
                                    <li>
                                        <button type="button" on:click=move |_| connect(name.clone())>
                                            {wallet.icon.map(|icon| view! { <img class="wallet-icon" src=icon alt=""/> })}
                                            {wallet.name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                })
            }}
        </div>
    }
}
