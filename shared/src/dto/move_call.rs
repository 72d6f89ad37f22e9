//! Move call description for the loyalty card contract.
//!
//! The package id is typed by the operator at runtime; module and function are
//! fixed by the deployed contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const LOYALTY_MODULE: &str = "loyalty_card";
pub const MINT_FUNCTION: &str = "mint_loyalty";

/// Fully qualified `package::module::function` entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTarget {
    pub package: String,
    pub module: String,
    pub function: String,
}

impl MoveTarget {
    pub fn new(package: impl Into<String>, module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            module: module.into(),
            function: function.into(),
        }
    }

    /// `<package>::loyalty_card::mint_loyalty`
    pub fn mint_loyalty(package: impl Into<String>) -> Self {
        Self::new(package, LOYALTY_MODULE, MINT_FUNCTION)
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

impl FromStr for MoveTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split from the right so a package id containing "::" is not mangled.
        let mut parts = s.rsplitn(3, "::");
        let function = parts.next().filter(|p| !p.is_empty());
        let module = parts.next().filter(|p| !p.is_empty());
        let package = parts.next().filter(|p| !p.is_empty());

        match (package, module, function) {
            (Some(package), Some(module), Some(function)) => Ok(Self::new(package, module, function)),
            _ => Err(format!("invalid move target: {s}")),
        }
    }
}

impl Serialize for MoveTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MoveTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A pure (non-object) argument, typed the way the transaction builder expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PureArg {
    Address(String),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    pub target: MoveTarget,
    pub arguments: Vec<PureArg>,
}

impl MoveCall {
    /// Build the mint call: recipient address first, image source second.
    pub fn mint_loyalty(package: &str, recipient: &str, image_url: &str) -> Self {
        Self {
            target: MoveTarget::mint_loyalty(package),
            arguments: vec![
                PureArg::Address(recipient.to_string()),
                PureArg::String(image_url.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_target_string() {
        let target = MoveTarget::mint_loyalty("0xabc");
        assert_eq!(target.to_string(), "0xabc::loyalty_card::mint_loyalty");
    }

    #[test]
    fn test_mint_call_argument_order() {
        let call = MoveCall::mint_loyalty("0xabc", "0xdeadbeef", "https://x/y.png");
        assert_eq!(
            call.arguments,
            vec![
                PureArg::Address("0xdeadbeef".to_string()),
                PureArg::String("https://x/y.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_mint_call_wire_shape() {
        let call = MoveCall::mint_loyalty("0xabc", "0xdeadbeef", "https://x/y.png");
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "target": "0xabc::loyalty_card::mint_loyalty",
                "arguments": [
                    { "type": "address", "value": "0xdeadbeef" },
                    { "type": "string", "value": "https://x/y.png" }
                ]
            })
        );
    }

    #[test]
    fn test_target_parse() {
        let target: MoveTarget = "0x2::coin::mint".parse().unwrap();
        assert_eq!(target, MoveTarget::new("0x2", "coin", "mint"));

        assert!("coin::mint".parse::<MoveTarget>().is_err());
        assert!("::loyalty_card::mint_loyalty".parse::<MoveTarget>().is_err());
    }
}
