//! Identity hash used as the stored password "digest".
//!
//! **Not for production auth.** This is the classic `h * 31 + c` string hash
//! over UTF-16 code units with 32-bit wraparound. It is trivially reversible
//! for short inputs and collides easily; it exists so that plaintext passwords
//! are not sitting in localStorage verbatim, nothing more. Stored digests
//! must keep matching, so the function cannot change.

/// Hash `input` to lowercase hex (unpadded unsigned 32-bit value).
pub fn identity_hash(input: &str) -> String {
    let h = input
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    format!("{h:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(identity_hash(""), "0");
        assert_eq!(identity_hash("a"), "61");
        assert_eq!(identity_hash("abc"), "17862");
        assert_eq!(identity_hash("hello"), "5e918d2");
    }

    #[test]
    fn test_wraps_past_i32_min() {
        // Overflows to exactly 0x80000000 under signed 32-bit arithmetic.
        assert_eq!(identity_hash("polygenelubricants"), "80000000");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(identity_hash("secret123"), identity_hash("secret123"));
        assert_ne!(identity_hash("secret123"), identity_hash("secret124"));
    }

    #[test]
    fn test_counts_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00.
        let expected = 0xD83Du32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(identity_hash("\u{1F600}"), format!("{expected:x}"));
    }

    #[test]
    fn test_known_collision_is_accepted() {
        // "Aa" and "BB" share a digest.
        assert_eq!(identity_hash("Aa"), identity_hash("BB"));
    }
}
