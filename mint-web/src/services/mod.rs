//! Browser services: wallet bridge, clipboard, object URLs and effects

pub mod clipboard;
pub mod confetti;
pub mod object_url;
pub mod wallet;
