//! Reactive contexts shared across components

pub mod page;
pub mod wallet;
