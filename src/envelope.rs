//! # Envelope Codec
//!
//! On-disk layout of an encrypted file:
//!
//! ```text
//! +-----------+-----------+------------------------+
//! | salt (16) |  IV (16)  | ciphertext (n * 16)    |
//! +-----------+-----------+------------------------+
//! ```
//!
//! No magic number, version byte, length prefix or integrity tag. Salt and IV
//! have fixed lengths, so the ciphertext is simply whatever follows byte 32.

use crate::aliases::{Iv16, Salt16};
use crate::consts::{ENVELOPE_HEADER_LEN, IV_SIZE, SALT_SIZE};
use crate::error::ImgcryptError;

/// Parsed envelope. Salt and IV are public values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_SIZE],
    pub iv: [u8; IV_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: &Salt16, iv: &Iv16, ciphertext: Vec<u8>) -> Self {
        Self {
            salt: *salt.expose_secret(),
            iv: *iv.expose_secret(),
            ciphertext,
        }
    }

    /// Total serialized size: `32 + ciphertext.len()`.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        ENVELOPE_HEADER_LEN + self.ciphertext.len()
    }

    /// Salt as a secure buffer, ready for key derivation.
    #[must_use]
    pub fn salt16(&self) -> Salt16 {
        Salt16::new(self.salt)
    }

    /// IV as a secure buffer, ready for the cipher.
    #[must_use]
    pub fn iv16(&self) -> Iv16 {
        Iv16::new(self.iv)
    }

    /// Serialize as `salt ‖ IV ‖ ciphertext`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.salt, &self.iv, &self.ciphertext)
    }
}

/// Concatenate salt, IV and ciphertext.
#[must_use]
pub fn encode(salt: &[u8; SALT_SIZE], iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + ciphertext.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(iv);
    out.extend_from_slice(ciphertext);
    out
}

/// Split an envelope into salt, IV and ciphertext.
///
/// An envelope of exactly 32 bytes is accepted and yields an empty
/// ciphertext. The ciphertext length is not checked here; the cipher engine
/// rejects unaligned lengths.
///
/// # Errors
///
/// [`ImgcryptError::EnvelopeTooShort`] when fewer than 32 bytes are given.
pub fn decode(bytes: &[u8]) -> Result<Envelope, ImgcryptError> {
    if bytes.len() < ENVELOPE_HEADER_LEN {
        return Err(ImgcryptError::EnvelopeTooShort { len: bytes.len() });
    }

    let (salt, rest) = bytes.split_at(SALT_SIZE);
    let (iv, ciphertext) = rest.split_at(IV_SIZE);

    let mut envelope = Envelope {
        salt: [0u8; SALT_SIZE],
        iv: [0u8; IV_SIZE],
        ciphertext: ciphertext.to_vec(),
    };
    envelope.salt.copy_from_slice(salt);
    envelope.iv.copy_from_slice(iv);
    Ok(envelope)
}
