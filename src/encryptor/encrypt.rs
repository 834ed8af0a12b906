//! src/encryptor/encrypt.rs
//! Envelope encryption with fresh salt and IV

use crate::aliases::{Iv16, PasswordString, Salt16};
use crate::crypto::kdf::KdfParams;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::encrypt_fixed::encrypt_with_fixed_salt_iv;
use crate::error::ImgcryptError;

/// Encrypt `plaintext` into a `salt ‖ IV ‖ ciphertext` envelope.
///
/// A new salt and IV are drawn from the OS RNG on every call, so encrypting
/// the same bytes twice gives different envelopes.
///
/// The result is always `32 + padded_len(plaintext.len())` bytes.
pub fn encrypt_bytes(
    plaintext: &[u8],
    password: &PasswordString,
    params: &KdfParams,
) -> Result<Vec<u8>, ImgcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ImgcryptError::EmptyPassword);
    }

    let salt = Salt16::try_random()?;
    let iv = Iv16::try_random()?;

    encrypt_with_fixed_salt_iv(plaintext, password, params, &salt, &iv)
}
