//! # Mint Page Error Types
//!
//! Every failure the page can hit ends up as a toast, so the `Display` text of
//! each variant is exactly what the operator reads.
//!
//! ## Error Categories
//!
//! - **Local checks**: [`MintError::WalletNotConnected`], [`MintError::NotAnImage`],
//!   [`MintError::MissingFields`], [`MintError::Busy`]
//! - **Downstream**: [`MintError::Execution`] carries the wallet/chain reason verbatim
//! - **Browser**: [`MintError::Clipboard`], [`MintError::ImageUnreadable`], [`MintError::Detached`]
//!
//! ```rust
//! use shared::error::MintError;
//!
//! let err = MintError::execution(Some("Insufficient gas".to_string()));
//! assert_eq!(err.to_string(), "Mint failed: Insufficient gas");
//! assert_eq!(MintError::execution(None).to_string(), "Mint failed: Unknown error");
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    #[error("Please connect your wallet")]
    WalletNotConnected,

    #[error("Please select an image file")]
    NotAnImage,

    #[error("Could not read image file: {0}")]
    ImageUnreadable(String),

    #[error("Package ID, wallet address and image are required")]
    MissingFields,

    /// A mint is already in flight; the request is dropped without a toast.
    #[error("A mint is already in progress")]
    Busy,

    #[error("Mint failed: {}", .0.as_deref().unwrap_or("Unknown error"))]
    Execution(Option<String>),

    #[error("Copy failed")]
    Clipboard,

    /// The page state was disposed while a call was in flight.
    #[error("Page is no longer available")]
    Detached,
}

impl MintError {
    /// Wrap a downstream failure. Blank reasons fall back to the generic text.
    pub fn execution(reason: Option<String>) -> Self {
        MintError::Execution(reason.filter(|r| !r.trim().is_empty()))
    }

    /// Whether the error should reach the notification slot.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, MintError::Busy | MintError::Detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_messages() {
        assert_eq!(MintError::WalletNotConnected.to_string(), "Please connect your wallet");
        assert_eq!(MintError::NotAnImage.to_string(), "Please select an image file");
        assert_eq!(MintError::Clipboard.to_string(), "Copy failed");
    }

    #[test]
    fn test_execution_fallback() {
        assert_eq!(
            MintError::execution(Some("   ".to_string())).to_string(),
            "Mint failed: Unknown error"
        );
        assert!(MintError::execution(Some("Insufficient gas".to_string()))
            .to_string()
            .contains("Insufficient gas"));
    }

    #[test]
    fn test_busy_is_silent() {
        assert!(!MintError::Busy.is_user_visible());
        assert!(MintError::WalletNotConnected.is_user_visible());
    }
}
