//! src/encryptor/encrypt_fixed.rs
//! Deterministic envelope encryption with caller-supplied salt and IV
//! (known-answer tests, reproducible fixtures)

use crate::aliases::{Iv16, PasswordString, Salt16};
use crate::builders::kdf_builder::KdfBuilder;
use crate::crypto::cbc::encrypt_blocks;
use crate::crypto::kdf::KdfParams;
use crate::envelope::Envelope;
use crate::error::ImgcryptError;
use crate::padding::zero_pad;

/// Encrypt `plaintext` with a **fixed** salt and IV.
///
/// Never reuse an IV with the same password for different plaintexts;
/// production callers go through [`encrypt_bytes`](crate::encrypt_bytes).
pub fn encrypt_with_fixed_salt_iv(
    plaintext: &[u8],
    password: &PasswordString,
    params: &KdfParams,
    salt: &Salt16,
    iv: &Iv16,
) -> Result<Vec<u8>, ImgcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ImgcryptError::EmptyPassword);
    }

    let key = KdfBuilder::from_salt(*salt.expose_secret())
        .with_params(*params)
        .derive_secure_new(password)?;

    let padded = zero_pad(plaintext);
    let ciphertext = encrypt_blocks(&key, iv, padded.expose_secret())?;

    Ok(Envelope::new(salt, iv, ciphertext).to_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::Prf;
    use crate::padding::padded_len;

    #[test]
    fn test_fixed_salt_iv_deterministic() {
        let salt = Salt16::new([0x01; 16]);
        let iv = Iv16::new([0x02; 16]);
        let password = PasswordString::new("secret".to_string());
        let params = KdfParams { iterations: 10, prf: Prf::Sha1 };

        let out1 = encrypt_with_fixed_salt_iv(b"hello", &password, &params, &salt, &iv).unwrap();
        let out2 = encrypt_with_fixed_salt_iv(b"hello", &password, &params, &salt, &iv).unwrap();

        assert_eq!(out1, out2);
        assert_eq!(&out1[..16], &[0x01; 16]);
        assert_eq!(&out1[16..32], &[0x02; 16]);
    }

    #[test]
    fn envelope_length_follows_padding_rule() {
        let salt = Salt16::new([0x01; 16]);
        let iv = Iv16::new([0x02; 16]);
        let password = PasswordString::new("secret".to_string());
        let params = KdfParams { iterations: 1, prf: Prf::Sha1 };

        for n in [0usize, 1, 5, 15, 16, 17, 31, 32, 100] {
            let plaintext = vec![0x41u8; n];
            let out =
                encrypt_with_fixed_salt_iv(&plaintext, &password, &params, &salt, &iv).unwrap();
            assert_eq!(out.len(), 32 + padded_len(n), "n = {n}");
        }
    }
}
