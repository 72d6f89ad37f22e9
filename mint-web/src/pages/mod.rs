//! Page modules

pub mod mint;

pub use mint::MintPage;
