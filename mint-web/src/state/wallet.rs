//! Wallet state management

use leptos::prelude::*;
use crate::services::wallet::WalletState;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    /// Read outside the reactive graph (event handlers, async tasks).
    pub fn is_connected_untracked(&self) -> bool {
        self.wallet.with_untracked(|state| state.is_connected())
    }

    pub fn wallet_name(&self) -> Option<String> {
        self.wallet
            .with_untracked(|state| state.wallet_name().map(|s| s.to_string()))
    }

    /// `(wallet name, account address)` of the connected account.
    pub fn account_untracked(&self) -> Option<(String, String)> {
        self.wallet.with_untracked(|state| match state {
            WalletState::Connected { address, wallet } => Some((wallet.clone(), address.clone())),
            _ => None,
        })
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, wallet: String) {
        self.wallet.set(WalletState::Connected { address, wallet });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
