//! # Loyalty Mint Core Library
//!
//! Browser-independent core of the mint page. Everything the page decides lives
//! here so it can be exercised with plain `cargo test`; the `mint-web` crate only
//! binds these types to signals, DOM events and the wallet.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data sent across the wallet boundary
//!   - **[`dto::move_call`]**: The `loyalty_card::mint_loyalty` move call and its pure arguments
//! - **[`state`]**: The page state record
//!   - **[`state::form`]**: Package id, recipient address and image source
//!   - **[`state::image`]**: Image source slot and transient object URL ownership
//!   - **[`state::toast`]**: Single-slot notification
//!   - **[`state::page`]**: [`state::page::MintPageState`] and its transitions
//! - **[`executor`]**: The signing seam and the mint round trip
//! - **[`error`]**: User-facing error taxonomy
//! - **[`utils`]**: Address shortening and the decorative preview token
//!
//! ## Usage
//!
//! ```rust
//! use shared::state::page::MintPageState;
//! use shared::state::image::NoopRevoker;
//!
//! let mut page = MintPageState::new();
//! page.form.package_id = "0xabc".to_string();
//! page.form.customer_address = "0xdeadbeef".to_string();
//! page.set_image_url("https://x/y.png", &NoopRevoker);
//! assert!(page.can_submit());
//!
//! let call = page.begin_mint(true).unwrap();
//! assert_eq!(call.target.to_string(), "0xabc::loyalty_card::mint_loyalty");
//! ```

pub mod dto;
pub mod error;
pub mod executor;
pub mod state;
pub mod utils;

pub use dto::*;
pub use error::MintError;
pub use utils::*;
