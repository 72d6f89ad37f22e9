//! Sui Wallet Standard Integration via wasm-bindgen
//!
//! Wallet extensions announce themselves through the Wallet Standard
//! `wallet-standard:register-wallet` / `wallet-standard:app-ready` events. The
//! JavaScript side keeps the registry; Rust only sees plain objects.
//!
//! The transaction itself is assembled with the Sui TypeScript SDK, which
//! `index.html` exposes as `window.suiSdk`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use shared::dto::MoveCall;
use shared::error::MintError;
use shared::executor::{ExecutionReceipt, TransactionExecutor};

use crate::state::wallet::WalletContext;
use crate::utils::constants::SUI_CHAIN;
use crate::utils::format::format_js_error;

// ============================================================================
// WALLET STANDARD (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
const registry = new Map();
let listening = false;

function isSuiWallet(wallet) {
    if (!wallet || !wallet.name || !wallet.features) {
        return false;
    }
    const features = wallet.features;
    return !!features['standard:connect'] &&
        (!!features['sui:signAndExecuteTransaction'] || !!features['sui:signAndExecuteTransactionBlock']);
}

function register(...wallets) {
    for (const wallet of wallets) {
        if (isSuiWallet(wallet)) {
            registry.set(wallet.name, wallet);
        }
    }
    return () => {
        for (const wallet of wallets) {
            registry.delete(wallet.name);
        }
    };
}

function listen() {
    if (listening) {
        return;
    }
    listening = true;
    const api = Object.freeze({ register });
    window.addEventListener('wallet-standard:register-wallet', (event) => event.detail(api));
    try {
        window.dispatchEvent(new CustomEvent('wallet-standard:app-ready', { detail: api }));
    } catch (error) {
        console.error('wallet-standard app-ready dispatch failed', error);
    }
}

function getWallet(name) {
    listen();
    const wallet = registry.get(name);
    if (!wallet) {
        throw new Error(name + ' wallet not found');
    }
    return wallet;
}

export function detectWallets() {
    listen();
    return Array.from(registry.values()).map((wallet) => ({
        name: wallet.name,
        icon: wallet.icon || null,
        chains: Array.from(wallet.chains || []),
    }));
}

export async function connectWallet(name) {
    const wallet = getWallet(name);
    const response = await wallet.features['standard:connect'].connect();
    const accounts = (response && response.accounts && response.accounts.length)
        ? response.accounts
        : wallet.accounts;
    if (!accounts || accounts.length === 0) {
        throw new Error('No account was authorized in ' + name);
    }
    return { address: accounts[0].address, name: wallet.name };
}

export async function disconnectWallet(name) {
    const wallet = registry.get(name);
    if (wallet && wallet.features['standard:disconnect']) {
        await wallet.features['standard:disconnect'].disconnect();
    }
}

export async function signAndExecuteMoveCall(name, address, chain, call) {
    const wallet = getWallet(name);
    const account = wallet.accounts.find((a) => a.address === address) || wallet.accounts[0];
    if (!account) {
        throw new Error('Wallet has no connected account');
    }

    const sdk = window.suiSdk;
    if (!sdk || typeof sdk.Transaction !== 'function') {
        throw new Error('Sui SDK not loaded');
    }

    const tx = new sdk.Transaction();
    tx.moveCall({
        target: call.target,
        arguments: call.arguments.map((arg) =>
            arg.type === 'address' ? tx.pure.address(arg.value) : tx.pure.string(arg.value)),
    });

    const current = wallet.features['sui:signAndExecuteTransaction'];
    if (current) {
        const result = await current.signAndExecuteTransaction({ transaction: tx, account, chain });
        return result.digest;
    }
    const legacy = wallet.features['sui:signAndExecuteTransactionBlock'];
    const result = await legacy.signAndExecuteTransactionBlock({ transactionBlock: tx, account, chain });
    return result.digest;
}
")]
extern "C" {
    /// List registered Sui wallets
    fn detectWallets() -> JsValue;

    /// Ask a wallet for account access
    #[wasm_bindgen(catch)]
    async fn connectWallet(name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn disconnectWallet(name: &str) -> Result<JsValue, JsValue>;

    /// Build, sign and submit one move call; resolves to the transaction digest
    #[wasm_bindgen(catch)]
    async fn signAndExecuteMoveCall(
        name: &str,
        address: &str,
        chain: &str,
        call: JsValue,
    ) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to connect to {wallet}: {reason}")]
    Connect { wallet: String, reason: String },

    #[error("{0}")]
    Execution(String),

    #[error("Wallet bridge error: {0}")]
    Interop(String),
}

impl From<WalletError> for MintError {
    fn from(err: WalletError) -> Self {
        match err {
            // The wallet's own wording is what the operator needs to see.
            WalletError::Execution(reason) => MintError::execution(Some(reason)),
            other => MintError::execution(Some(other.to_string())),
        }
    }
}

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, wallet: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn wallet_name(&self) -> Option<&str> {
        match self {
            WalletState::Connected { wallet, .. } => Some(wallet),
            _ => None,
        }
    }
}

/// Registered wallet as reported by the bridge
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub chains: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConnectedAccount {
    pub address: String,
    pub name: String,
}

/// Wallets that have registered so far. Extensions may register late, so this
/// is read on demand rather than once at startup.
pub fn get_available_wallets() -> Vec<DetectedWallet> {
    serde_wasm_bindgen::from_value(detectWallets()).unwrap_or_else(|e| {
        log::warn!("Failed to read wallet registry: {}", e);
        vec![]
    })
}

pub async fn connect_wallet(name: &str) -> Result<ConnectedAccount, WalletError> {
    let result = connectWallet(name).await.map_err(|e| WalletError::Connect {
        wallet: name.to_string(),
        reason: format_js_error(&e),
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| WalletError::Interop(e.to_string()))
}

pub async fn disconnect_wallet(name: &str) -> Result<(), WalletError> {
    disconnectWallet(name)
        .await
        .map(|_| ())
        .map_err(|e| WalletError::Interop(format_js_error(&e)))
}

pub async fn sign_and_execute(
    wallet: &str,
    address: &str,
    chain: &str,
    call: &MoveCall,
) -> Result<ExecutionReceipt, WalletError> {
    let call_js = serde_wasm_bindgen::to_value(call).map_err(|e| WalletError::Interop(e.to_string()))?;

    let digest = signAndExecuteMoveCall(wallet, address, chain, call_js)
        .await
        .map_err(|e| WalletError::Execution(format_js_error(&e)))?;

    Ok(ExecutionReceipt {
        digest: digest.as_string(),
    })
}

/// [`TransactionExecutor`] backed by the wallet in [`WalletContext`].
pub struct SuiWalletExecutor {
    wallet: WalletContext,
    chain: &'static str,
}

impl SuiWalletExecutor {
    pub fn new(wallet: WalletContext) -> Self {
        Self {
            wallet,
            chain: SUI_CHAIN,
        }
    }
}

#[async_trait(?Send)]
impl TransactionExecutor for SuiWalletExecutor {
    fn is_connected(&self) -> bool {
        self.wallet.is_connected_untracked()
    }

    async fn sign_and_execute(&self, call: &MoveCall) -> Result<ExecutionReceipt, MintError> {
        let (wallet, address) = self.wallet.account_untracked().ok_or(MintError::WalletNotConnected)?;
        log::debug!(
            "Sending move call to {}: {}",
            wallet,
            serde_json::to_string(call).unwrap_or_default()
        );

        let receipt = sign_and_execute(&wallet, &address, self.chain, call).await?;
        log::info!("Mint executed, digest {:?}", receipt.digest);
        Ok(receipt)
    }
}
