//! # Shared Utility Functions
//!
//! Display helpers for the NFT preview card.
//!
//! - [`format_address`] - Keep the first N and last M characters of an address
//! - [`shorten_address`] - `format_address` with the preview card's 6/4 split
//! - [`owner_label`] - Owner line of the preview card
//! - [`preview_token`] - Decorative token number derived from the address
//!
//! ```rust
//! use shared::utils::shorten_address;
//!
//! let addr = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";
//! assert_eq!(shorten_address(addr), "0x7d20...b58e");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Counts characters, not bytes, so pasted non-ASCII text never splits a code point.
/// Addresses too short to shorten are returned as-is.
///
/// ```rust
/// use shared::utils::format_address;
///
/// assert_eq!(format_address("0xdeadbeefcafe", 4, 4), "0xde...cafe");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an address for the preview card (first 6, last 4).
pub fn shorten_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Owner line of the preview card: the shortened address, or "—" when empty.
///
/// Takes the address exactly as typed, the same input [`preview_token`] sees.
pub fn owner_label(address: &str) -> String {
    if address.is_empty() {
        "—".to_string()
    } else {
        shorten_address(address)
    }
}

/// Decorative "preview token" number shown on the card.
///
/// Sums the leading UTF-16 unit of every character, adds one and wraps at 9999.
/// It identifies nothing; the real object id comes from the chain.
pub fn preview_token(address: &str) -> u32 {
    let mut buf = [0u16; 2];
    let sum: u64 = address
        .chars()
        .map(|c| u64::from(c.encode_utf16(&mut buf)[0]))
        .sum();
    ((sum + 1) % 9999) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";
        assert_eq!(format_address(addr, 4, 4), "0x7d...b58e");
        assert_eq!(format_address(addr, 6, 4), "0x7d20...b58e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(shorten_address(""), "");
        assert_eq!(shorten_address("0x12345678"), "0x12345678");
        assert_eq!(shorten_address("0x1234567890"), "0x1234...7890");
    }

    #[test]
    fn test_shorten_address_length_boundary() {
        // 6 + 4 characters fit as-is; one more gets the ellipsis.
        assert_eq!(shorten_address("abcdefghij"), "abcdefghij");
        assert_eq!(shorten_address("abcdefghijk"), "abcdef...hijk");
    }

    #[test]
    fn test_owner_label() {
        assert_eq!(owner_label(""), "—");
        assert_eq!(owner_label("0x1234567890"), "0x1234...7890");
        // Untrimmed, like the preview token.
        assert_eq!(owner_label(" 0x12345678 "), " 0x123...678 ");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ééééééééééé", 2, 2), "éé...éé");
    }

    #[test]
    fn test_preview_token() {
        assert_eq!(preview_token(""), 1);
        // 'a' = 97, 'b' = 98
        assert_eq!(preview_token("ab"), 196);
        assert!(preview_token(&"z".repeat(500)) < 9999);
    }

    #[test]
    fn test_preview_token_astral_uses_high_surrogate() {
        // U+1F389 encodes as D83C DF89
        assert_eq!(preview_token("🎉"), (0xD83C + 1) % 9999);
    }
}
