//! Zero-byte padding.
//!
//! Padding always adds `16 - (len % 16)` zero bytes, so block-aligned input
//! gets a whole extra block. Unpadding right-trims every trailing `0x00`,
//! which also eats zero bytes that belonged to the plaintext: a file ending
//! in `00 00` comes back two bytes shorter. Envelopes carry no length or
//! version field, so there is no way to tell the two apart on decrypt.

use crate::aliases::PaddedPlaintext;
use crate::consts::BLOCK_SIZE;

/// Length after padding: always in `len + 1..=len + 16`.
#[inline]
#[must_use]
pub const fn padded_len(len: usize) -> usize {
    len + (BLOCK_SIZE - len % BLOCK_SIZE)
}

/// Append zero bytes up to the next block boundary (a full block when aligned).
///
/// The padded copy is returned in a zeroizing buffer since it holds plaintext.
#[must_use]
pub fn zero_pad(plaintext: &[u8]) -> PaddedPlaintext {
    let mut padded = Vec::with_capacity(padded_len(plaintext.len()));
    padded.extend_from_slice(plaintext);
    padded.resize(padded_len(plaintext.len()), 0);
    PaddedPlaintext::new(padded)
}

/// Strip every trailing zero byte.
#[must_use]
pub fn strip_zero_padding(padded: &[u8]) -> &[u8] {
    let end = padded
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    &padded[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_len_always_adds_between_1_and_16() {
        assert_eq!(padded_len(0), 16);
        assert_eq!(padded_len(1), 16);
        assert_eq!(padded_len(5), 16);
        assert_eq!(padded_len(15), 16);
        assert_eq!(padded_len(16), 32);
        assert_eq!(padded_len(17), 32);
        assert_eq!(padded_len(32), 48);
    }

    #[test]
    fn zero_pad_appends_zeros() {
        let padded = zero_pad(b"hello");
        let bytes = padded.expose_secret();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..5], b"hello");
        assert!(bytes[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn aligned_input_gets_full_block() {
        let padded = zero_pad(&[0xAA; 16]);
        assert_eq!(padded.expose_secret().len(), 32);
        assert_eq!(&padded.expose_secret()[16..], &[0u8; 16]);
    }

    #[test]
    fn strip_removes_all_trailing_zeros() {
        assert_eq!(strip_zero_padding(b"hello\0\0\0"), b"hello");
        assert_eq!(strip_zero_padding(b"a\0b\0\0"), b"a\0b");
        assert_eq!(strip_zero_padding(&[0u8; 32]), b"");
        assert_eq!(strip_zero_padding(b""), b"");
        assert_eq!(strip_zero_padding(b"xyz"), b"xyz");
    }

    #[test]
    fn genuine_trailing_zeros_are_lost() {
        let original = b"data\0\0";
        let padded = zero_pad(original);
        assert_eq!(strip_zero_padding(padded.expose_secret()), b"data");
    }
}
