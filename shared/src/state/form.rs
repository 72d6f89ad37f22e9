//! Mint form fields.

use serde::{Deserialize, Serialize};

use super::image::{ImageSlot, ObjectUrlRevoker};
use crate::dto::MoveCall;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintForm {
    pub package_id: String,
    pub customer_address: String,
    pub image: ImageSlot,
}

impl MintForm {
    /// All three fields are non-empty after trimming. No format checks: the
    /// contract call reports malformed input itself.
    pub fn is_complete(&self) -> bool {
        !self.package_id.trim().is_empty()
            && !self.customer_address.trim().is_empty()
            && !self.image.is_blank()
    }

    pub fn to_move_call(&self) -> MoveCall {
        MoveCall::mint_loyalty(
            self.package_id.trim(),
            self.customer_address.trim(),
            self.image.value().trim(),
        )
    }

    pub fn clear(&mut self, revoker: &impl ObjectUrlRevoker) {
        self.package_id.clear();
        self.customer_address.clear();
        self.image.release(revoker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::PureArg;
    use crate::state::image::NoopRevoker;

    fn filled() -> MintForm {
        let mut form = MintForm {
            package_id: "0xabc".to_string(),
            customer_address: "0xdeadbeef".to_string(),
            ..Default::default()
        };
        form.image.set_url("https://x/y.png", &NoopRevoker);
        form
    }

    #[test]
    fn test_complete_form() {
        assert!(filled().is_complete());
        assert!(!MintForm::default().is_complete());
    }

    #[test]
    fn test_whitespace_fields_are_empty() {
        for blank in [" ", "\t", "\n", "  \t \r\n "] {
            let mut form = filled();
            form.package_id = blank.to_string();
            assert!(!form.is_complete(), "package id {:?}", blank);

            let mut form = filled();
            form.customer_address = blank.to_string();
            assert!(!form.is_complete(), "address {:?}", blank);

            let mut form = filled();
            form.image.set_url(blank, &NoopRevoker);
            assert!(!form.is_complete(), "image {:?}", blank);
        }
    }

    #[test]
    fn test_move_call_uses_trimmed_values() {
        let mut form = filled();
        form.package_id = "  0xabc ".to_string();
        form.customer_address = "0xdeadbeef\n".to_string();

        let call = form.to_move_call();
        assert_eq!(call.target.to_string(), "0xabc::loyalty_card::mint_loyalty");
        assert_eq!(call.arguments[0], PureArg::Address("0xdeadbeef".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.clear(&NoopRevoker);
        assert_eq!(form, MintForm::default());
    }
}
