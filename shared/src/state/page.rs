//! # Mint Page State
//!
//! The whole page as one serializable record: the form, the toast slot and the
//! UI flags. Every handler in the browser is a single call into this type.
//!
//! ## Mint lifecycle
//!
//! ```text
//! Idle --begin_mint--> Submitting --complete_mint(Ok)--> Success --> Idle
//!                           |
//!                           +------complete_mint(Err)--> Failure --> Idle
//! ```
//!
//! `Success` and `Failure` are momentary: they exist only as the toast and the
//! returned outcome. The persistent part is the `loading` flag, which is what
//! guards against a second submission while the first is in flight.

use serde::{Deserialize, Serialize};

use super::form::MintForm;
use super::image::ObjectUrlRevoker;
use super::toast::{ToastKind, ToastSlot, ToastTicket};
use crate::dto::MoveCall;
use crate::error::MintError;
use crate::executor::ExecutionReceipt;

pub const MINT_SUCCESS_MESSAGE: &str = "NFT minted successfully 🎉";
pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard";

/// Tunables the page reads at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// How long a toast stays up before its dismissal fires.
    pub toast_duration_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    pub loading: bool,
    pub drag_active: bool,
    pub dark_mode: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            loading: false,
            drag_active: false,
            dark_mode: true,
        }
    }
}

/// Result of a finished mint round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    Minted { digest: Option<String> },
    Failed(MintError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintPageState {
    pub form: MintForm,
    pub toast: ToastSlot,
    pub flags: UiFlags,
    #[serde(default)]
    pub config: PageConfig,
}

impl MintPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Whether the mint button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.flags.loading && self.form.is_complete()
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastTicket {
        self.toast.show(kind, message)
    }

    /// Surface an error in the toast slot unless it is a silent one.
    pub fn notify_error(&mut self, error: &MintError) -> Option<ToastTicket> {
        error
            .is_user_visible()
            .then(|| self.toast.error(error.to_string()))
    }

    /// Idle -> Submitting.
    ///
    /// Returns the call to hand to the wallet. A missing wallet fails here,
    /// before anything leaves the page.
    pub fn begin_mint(&mut self, wallet_connected: bool) -> Result<MoveCall, MintError> {
        if self.flags.loading {
            return Err(MintError::Busy);
        }
        let check = if !wallet_connected {
            Err(MintError::WalletNotConnected)
        } else if !self.form.is_complete() {
            Err(MintError::MissingFields)
        } else {
            Ok(self.form.to_move_call())
        };

        match check {
            Ok(call) => {
                self.flags.loading = true;
                log::debug!("mint submitting to {}", call.target);
                Ok(call)
            }
            Err(err) => {
                self.notify_error(&err);
                Err(err)
            }
        }
    }

    /// Submitting -> Success | Failure, then back to Idle.
    pub fn complete_mint(
        &mut self,
        result: Result<ExecutionReceipt, MintError>,
        revoker: &impl ObjectUrlRevoker,
    ) -> MintOutcome {
        self.flags.loading = false;
        match result {
            Ok(receipt) => {
                self.form.clear(revoker);
                self.toast.success(MINT_SUCCESS_MESSAGE);
                MintOutcome::Minted {
                    digest: receipt.digest,
                }
            }
            Err(err) => {
                // Anything reaching here came back from the signer; keep its reason.
                let err = if matches!(err, MintError::Execution(_)) {
                    err
                } else {
                    MintError::execution(Some(err.to_string()))
                };
                log::error!("{}", err);
                self.notify_error(&err);
                MintOutcome::Failed(err)
            }
        }
    }

    pub fn set_package_id(&mut self, value: String) {
        self.form.package_id = value;
    }

    pub fn set_customer_address(&mut self, value: String) {
        self.form.customer_address = value;
    }

    pub fn set_image_url(&mut self, text: &str, revoker: &impl ObjectUrlRevoker) {
        self.form.image.set_url(text, revoker);
    }

    /// Handle a dropped or picked file. `None` (empty drop) is ignored.
    pub fn select_image_file<F>(
        &mut self,
        mime: Option<&str>,
        create_url: F,
        revoker: &impl ObjectUrlRevoker,
    ) -> Result<(), MintError>
    where
        F: FnOnce() -> Result<String, String>,
    {
        let Some(mime) = mime else {
            return Ok(());
        };
        self.form
            .image
            .select_file(mime, create_url, revoker)
            .inspect_err(|err| {
                self.toast.error(err.to_string());
            })
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.flags.drag_active = active;
    }

    /// Flip the theme, returning the new dark-mode value.
    pub fn toggle_theme(&mut self) -> bool {
        self.flags.dark_mode = !self.flags.dark_mode;
        self.flags.dark_mode
    }

    /// Report a clipboard write.
    pub fn report_copy(&mut self, result: Result<(), MintError>) -> ToastTicket {
        match result {
            Ok(()) => self.toast.success(COPY_SUCCESS_MESSAGE),
            Err(_) => self.toast.error(MintError::Clipboard.to_string()),
        }
    }

    /// Page is going away: release anything the browser holds for us.
    pub fn teardown(&mut self, revoker: &impl ObjectUrlRevoker) {
        self.form.image.release(revoker);
        self.toast.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::image::tests::RecordingRevoker;
    use crate::state::image::NoopRevoker;

    fn filled_page() -> MintPageState {
        let mut page = MintPageState::new();
        page.set_package_id("0xabc".to_string());
        page.set_customer_address("0xdead...beef".to_string());
        page.set_image_url("https://x/y.png", &NoopRevoker);
        page
    }

    fn toast_message(page: &MintPageState) -> Option<&str> {
        page.toast.current().map(|t| t.message.as_str())
    }

    #[test]
    fn test_defaults() {
        let page = MintPageState::new();
        assert!(page.flags.dark_mode);
        assert!(!page.flags.loading);
        assert!(!page.can_submit());
        assert!(!page.toast.is_visible());
        assert_eq!(page.config.toast_duration_ms, 2500);
    }

    #[test]
    fn test_custom_config_survives_reset() {
        let mut page = MintPageState::with_config(PageConfig { toast_duration_ms: 500 });
        page.set_package_id("0xabc".to_string());
        page.set_customer_address("0xdead".to_string());
        page.set_image_url("https://x/y.png", &NoopRevoker);
        page.begin_mint(true).unwrap();
        page.complete_mint(Ok(ExecutionReceipt { digest: None }), &NoopRevoker);

        assert_eq!(page.config.toast_duration_ms, 500);
    }

    #[test]
    fn test_config_defaults_when_missing_from_json() {
        let json = serde_json::to_value(MintPageState::new()).unwrap();
        let mut object = json.as_object().unwrap().clone();
        object.remove("config");
        let back: MintPageState = serde_json::from_value(object.into()).unwrap();
        assert_eq!(back.config, PageConfig::default());
    }

    #[test]
    fn test_whitespace_keeps_button_disabled() {
        let mut page = filled_page();
        page.set_customer_address("   ".to_string());
        assert!(!page.can_submit());
    }

    #[test]
    fn test_wallet_missing_short_circuits() {
        let mut page = filled_page();
        let result = page.begin_mint(false);

        assert_eq!(result, Err(MintError::WalletNotConnected));
        assert!(!page.flags.loading);
        assert_eq!(toast_message(&page), Some("Please connect your wallet"));
        assert_eq!(page.form.package_id, "0xabc");
    }

    #[test]
    fn test_begin_mint_sets_loading_and_blocks_reentry() {
        let mut page = filled_page();
        let call = page.begin_mint(true).unwrap();
        assert_eq!(call.target.to_string(), "0xabc::loyalty_card::mint_loyalty");
        assert!(page.flags.loading);
        assert!(!page.can_submit());

        assert_eq!(page.begin_mint(true), Err(MintError::Busy));
        assert!(!page.toast.is_visible());
    }

    #[test]
    fn test_incomplete_form_is_rejected() {
        let mut page = MintPageState::new();
        assert_eq!(page.begin_mint(true), Err(MintError::MissingFields));
        assert!(!page.flags.loading);
    }

    #[test]
    fn test_successful_mint_resets_form() {
        let mut page = filled_page();
        page.begin_mint(true).unwrap();

        let outcome = page.complete_mint(Ok(ExecutionReceipt::new("0xdigest")), &NoopRevoker);

        assert_eq!(
            outcome,
            MintOutcome::Minted {
                digest: Some("0xdigest".to_string())
            }
        );
        assert!(!page.flags.loading);
        assert_eq!(page.form.package_id, "");
        assert_eq!(page.form.customer_address, "");
        assert_eq!(page.form.image.value(), "");
        assert_eq!(page.toast.current().map(|t| t.kind), Some(ToastKind::Success));
        assert_eq!(toast_message(&page), Some(MINT_SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failed_mint_surfaces_reason() {
        let mut page = filled_page();
        page.begin_mint(true).unwrap();

        let outcome = page.complete_mint(
            Err(MintError::execution(Some("Insufficient gas".to_string()))),
            &NoopRevoker,
        );

        assert!(matches!(outcome, MintOutcome::Failed(_)));
        assert!(!page.flags.loading);
        assert!(toast_message(&page).unwrap().contains("Insufficient gas"));
        assert_eq!(page.toast.current().map(|t| t.kind), Some(ToastKind::Error));
        assert_eq!(page.form.package_id, "0xabc");
    }

    #[test]
    fn test_failed_mint_without_reason() {
        let mut page = filled_page();
        page.begin_mint(true).unwrap();
        page.complete_mint(Err(MintError::execution(None)), &NoopRevoker);
        assert_eq!(toast_message(&page), Some("Mint failed: Unknown error"));
    }

    #[test]
    fn test_success_releases_dropped_image() {
        let revoker = RecordingRevoker::default();
        let mut page = filled_page();
        page.select_image_file(Some("image/png"), || Ok("blob:local/1".to_string()), &revoker)
            .unwrap();
        page.begin_mint(true).unwrap();
        page.complete_mint(Ok(ExecutionReceipt::default()), &revoker);

        assert_eq!(*revoker.revoked.borrow(), vec!["blob:local/1".to_string()]);
    }

    #[test]
    fn test_text_file_drop() {
        let revoker = RecordingRevoker::default();
        let mut page = filled_page();

        let result = page.select_image_file(Some("text/plain"), || Ok("blob:local/txt".to_string()), &revoker);

        assert_eq!(result, Err(MintError::NotAnImage));
        assert_eq!(toast_message(&page), Some("Please select an image file"));
        assert_eq!(page.form.image.value(), "https://x/y.png");
        assert!(revoker.revoked.borrow().is_empty());
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let mut page = filled_page();
        assert!(page
            .select_image_file(None, || Ok("blob:never".to_string()), &NoopRevoker)
            .is_ok());
        assert!(!page.toast.is_visible());
    }

    #[test]
    fn test_copy_reports() {
        let mut page = MintPageState::new();
        page.report_copy(Ok(()));
        assert_eq!(toast_message(&page), Some(COPY_SUCCESS_MESSAGE));
        page.report_copy(Err(MintError::Clipboard));
        assert_eq!(toast_message(&page), Some("Copy failed"));
    }

    #[test]
    fn test_theme_and_drag_flags() {
        let mut page = MintPageState::new();
        assert!(!page.toggle_theme());
        assert!(page.toggle_theme());

        page.set_drag_active(true);
        assert!(page.flags.drag_active);
        page.set_drag_active(false);
        assert!(!page.flags.drag_active);
    }

    #[test]
    fn test_teardown_releases_transient() {
        let revoker = RecordingRevoker::default();
        let mut page = MintPageState::new();
        page.select_image_file(Some("image/gif"), || Ok("blob:local/gif".to_string()), &revoker)
            .unwrap();

        page.teardown(&revoker);
        assert_eq!(*revoker.revoked.borrow(), vec!["blob:local/gif".to_string()]);

        // A second teardown has nothing left to release.
        page.teardown(&revoker);
        assert_eq!(revoker.revoked.borrow().len(), 1);
    }

    #[test]
    fn test_state_serializes() {
        let page = filled_page();
        let json = serde_json::to_string(&page).unwrap();
        let back: MintPageState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}
