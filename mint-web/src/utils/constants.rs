//! Application constants

/// Chain identifier passed to the wallet with every transaction.
pub const SUI_CHAIN: &str = "sui:testnet";

// UI timing
pub const CONFETTI_LIFETIME_MS: u32 = 1800;
pub const CONFETTI_COUNT: u32 = 80;

// DOM hooks shared with index.html / style.css
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
pub const THEME_DARK_CLASS: &str = "theme-dark";
