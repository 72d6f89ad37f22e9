//! # Data Transfer Objects (DTOs)
//!
//! Structures handed to the wallet integration. The page never talks to a
//! backend; the only outbound payload is a single move call.
//!
//! ## Serialization Format
//!
//! - **Targets**: a `package::module::function` string
//! - **Arguments**: adjacently tagged, lowercase type names
//!
//! ```text
//! {
//!   "target": "0xabc::loyalty_card::mint_loyalty",
//!   "arguments": [
//!     { "type": "address", "value": "0xdeadbeef" },
//!     { "type": "string",  "value": "https://x/y.png" }
//!   ]
//! }
//! ```

pub mod move_call;

pub use move_call::*;
