//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{
    Aes256Key32, HmacSha1, HmacSha256, HmacSha512, PasswordBytes, PasswordString, Salt16,
};
use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::ImgcryptError;

use pbkdf2::pbkdf2;
use std::fmt;
use std::str::FromStr;

/// HMAC pseudorandom function driving PBKDF2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prf {
    /// HMAC-SHA1, the PRF the original image encryptor used.
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Prf::Sha1 => "sha1",
            Prf::Sha256 => "sha256",
            Prf::Sha512 => "sha512",
        })
    }
}

impl FromStr for Prf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Prf::Sha1),
            "sha256" => Ok(Prf::Sha256),
            "sha512" => Ok(Prf::Sha512),
            other => Err(format!("unknown PRF '{other}' (expected sha1, sha256 or sha512)")),
        }
    }
}

/// PBKDF2 parameters.
///
/// Not recorded in the envelope: decryption must be given the same values
/// that encryption used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
    pub prf: Prf,
}

impl KdfParams {
    /// Reject iteration counts outside `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
    pub fn validate(&self) -> Result<(), ImgcryptError> {
        if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&self.iterations) {
            return Err(ImgcryptError::Crypto(format!(
                "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {}",
                self.iterations
            )));
        }
        Ok(())
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            prf: Prf::default(),
        }
    }
}

/// Bytes of `password` as they enter PBKDF2.
///
/// Passwords made only of characters up to U+00FF are encoded as Latin-1,
/// one byte per character, which is how the original image encryptor fed
/// text passwords to PBKDF2. Anything wider falls back to UTF-8.
#[must_use]
pub fn password_bytes(password: &PasswordString) -> PasswordBytes {
    let text = password.expose_secret();
    let bytes = if text.chars().all(|c| u32::from(c) <= 0xFF) {
        text.chars().map(|c| u32::from(c) as u8).collect()
    } else {
        text.as_bytes().to_vec()
    };
    PasswordBytes::new(bytes)
}

/// Derive PBKDF2-HMAC directly into a caller-provided key buffer.
///
/// # Security
/// - Output buffer is zeroized on drop
/// - Password bytes are only read through `expose_secret()`
#[inline(always)]
pub fn derive_secure_pbkdf2_key(
    password: &PasswordString,
    salt: &Salt16,
    params: &KdfParams,
    out_key: &mut Aes256Key32,
) -> Result<(), ImgcryptError> {
    params.validate()?;

    let encoded = password_bytes(password);
    let password = encoded.expose_secret().as_slice();
    let salt = salt.expose_secret();
    let out = out_key.expose_secret_mut();

    match params.prf {
        Prf::Sha1 => pbkdf2::<HmacSha1>(password, salt, params.iterations, out),
        Prf::Sha256 => pbkdf2::<HmacSha256>(password, salt, params.iterations, out),
        Prf::Sha512 => pbkdf2::<HmacSha512>(password, salt, params.iterations, out),
    }
    .map_err(|e| ImgcryptError::Crypto(format!("PBKDF2 failed: {e}")))
}

/// Convenience: derive and return a fresh 32-byte key.
pub fn derive_key(
    password: &PasswordString,
    salt: &Salt16,
    params: &KdfParams,
) -> Result<Aes256Key32, ImgcryptError> {
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_secure_pbkdf2_key(password, salt, params, &mut key)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> PasswordString {
        PasswordString::new(s.to_string())
    }

    #[test]
    fn same_inputs_same_key() {
        let salt = Salt16::new([0x11; 16]);
        let params = KdfParams::default();
        let a = derive_key(&password("correct horse"), &salt, &params).unwrap();
        let b = derive_key(&password("correct horse"), &salt, &params).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn different_salts_give_different_keys() {
        let pw = password("correct horse");
        let params = KdfParams::default();
        let a = derive_key(&pw, &Salt16::new([0x11; 16]), &params).unwrap();
        let b = derive_key(&pw, &Salt16::new([0x22; 16]), &params).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn latin1_range_passwords_encode_one_byte_per_char() {
        let encoded = password_bytes(&password("café"));
        assert_eq!(encoded.expose_secret().as_slice(), b"caf\xe9");

        let ascii = password_bytes(&password("plain"));
        assert_eq!(ascii.expose_secret().as_slice(), b"plain");
    }

    #[test]
    fn wider_passwords_stay_utf8() {
        let encoded = password_bytes(&password("日本"));
        assert_eq!(encoded.expose_secret().as_slice(), "日本".as_bytes());

        // one wide char forces UTF-8 for the whole password
        let mixed = password_bytes(&password("é日"));
        assert_eq!(mixed.expose_secret().as_slice(), "é日".as_bytes());
    }

    #[test]
    fn prf_changes_the_key() {
        let salt = Salt16::new([0x11; 16]);
        let pw = password("correct horse");
        let sha1 = derive_key(&pw, &salt, &KdfParams { iterations: 10, prf: Prf::Sha1 }).unwrap();
        let sha256 =
            derive_key(&pw, &salt, &KdfParams { iterations: 10, prf: Prf::Sha256 }).unwrap();
        let sha512 =
            derive_key(&pw, &salt, &KdfParams { iterations: 10, prf: Prf::Sha512 }).unwrap();
        assert_ne!(sha1.expose_secret(), sha256.expose_secret());
        assert_ne!(sha256.expose_secret(), sha512.expose_secret());
    }

    #[test]
    fn zero_iterations_rejected() {
        let params = KdfParams { iterations: 0, prf: Prf::Sha1 };
        let err = derive_key(&password("x"), &Salt16::new([0; 16]), &params).unwrap_err();
        assert!(matches!(err, ImgcryptError::Crypto(_)));
    }

    #[test]
    fn prf_parses_case_insensitively() {
        assert_eq!("SHA256".parse::<Prf>().unwrap(), Prf::Sha256);
        assert_eq!(Prf::Sha512.to_string(), "sha512");
        assert!("md5".parse::<Prf>().is_err());
    }
}
