//! src/decryptor/decrypt.rs
//! Envelope decryption

use crate::aliases::{PaddedPlaintext, PasswordString};
use crate::crypto::cbc::decrypt_blocks;
use crate::crypto::kdf::{derive_key, KdfParams};
use crate::envelope::decode;
use crate::error::ImgcryptError;
use crate::padding::strip_zero_padding;

/// Decrypt an envelope and keep the zero padding.
///
/// Useful to inspect exactly what the cipher produced; most callers want
/// [`decrypt_bytes`].
pub fn decrypt_padded(
    envelope: &[u8],
    password: &PasswordString,
    params: &KdfParams,
) -> Result<PaddedPlaintext, ImgcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ImgcryptError::EmptyPassword);
    }

    let envelope = decode(envelope)?;
    let key = derive_key(password, &envelope.salt16(), params)?;
    let padded = decrypt_blocks(&key, &envelope.iv16(), &envelope.ciphertext)?;

    Ok(PaddedPlaintext::new(padded))
}

/// Decrypt an envelope and strip trailing zero bytes.
///
/// A wrong password is not detected: the result is garbage of roughly the
/// ciphertext length. Plaintexts that genuinely ended in `0x00` come back
/// without those bytes.
pub fn decrypt_bytes(
    envelope: &[u8],
    password: &PasswordString,
    params: &KdfParams,
) -> Result<Vec<u8>, ImgcryptError> {
    let padded = decrypt_padded(envelope, password, params)?;
    Ok(strip_zero_padding(padded.expose_secret()).to_vec())
}
