//! # Transaction Executor Seam
//!
//! The page never signs anything itself. It hands a [`MoveCall`] to whatever
//! implements [`TransactionExecutor`] (in the browser: the connected Sui wallet)
//! and waits for the single round trip to settle.
//!
//! [`run_mint`] is the whole mint action: check and flip the loading flag, call
//! the executor, fold the result back into the page. The state is only touched
//! through a [`PageStore`] so the caller never holds a borrow across the await.

use std::cell::RefCell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dto::MoveCall;
use crate::error::MintError;
use crate::state::image::ObjectUrlRevoker;
use crate::state::page::{MintOutcome, MintPageState};

/// What the signer reports back on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    pub digest: Option<String>,
}

impl ExecutionReceipt {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: Some(digest.into()),
        }
    }
}

/// Wallet capabilities the page consumes.
///
/// `?Send`: the browser runs everything on one thread and JS futures are not `Send`.
#[async_trait(?Send)]
pub trait TransactionExecutor {
    fn is_connected(&self) -> bool;

    async fn sign_and_execute(&self, call: &MoveCall) -> Result<ExecutionReceipt, MintError>;
}

/// Owner of the page state.
pub trait PageStore {
    /// Run `f` against the state. `None` once the page has been disposed.
    fn update_page<R>(&self, f: impl FnOnce(&mut MintPageState) -> R) -> Option<R>;
}

impl PageStore for RefCell<MintPageState> {
    fn update_page<R>(&self, f: impl FnOnce(&mut MintPageState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// One mint round trip.
///
/// `Err` means the request never left the page (busy, no wallet, missing
/// fields); the page has already been notified where appropriate. `Ok` carries
/// the settled outcome of the executor call.
pub async fn run_mint<S, E, R>(store: &S, executor: &E, revoker: &R) -> Result<MintOutcome, MintError>
where
    S: PageStore,
    E: TransactionExecutor + ?Sized,
    R: ObjectUrlRevoker,
{
    let call = store
        .update_page(|page| page.begin_mint(executor.is_connected()))
        .ok_or(MintError::Detached)??;

    log::info!("Submitting {}", call.target);
    let result = executor.sign_and_execute(&call).await;

    store
        .update_page(|page| page.complete_mint(result, revoker))
        .ok_or(MintError::Detached)
}
