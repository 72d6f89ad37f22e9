//! Constants and small helpers

pub mod constants;
pub mod format;
