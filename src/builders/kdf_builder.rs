//! src/builders/kdf_builder.rs
//! PBKDF2 builder — salt, iteration count and PRF in one place

use crate::aliases::{Aes256Key32, PasswordString, Salt16};
use crate::crypto::kdf::{derive_secure_pbkdf2_key, KdfParams};
use crate::crypto::rng::SecureRandomExt;
use crate::error::ImgcryptError;

/// PBKDF2 key derivation builder
///
/// Defaults: fresh 16-byte random salt, [`KdfParams::default`]
/// (1000 iterations, HMAC-SHA1).
#[derive(Debug)]
pub struct KdfBuilder {
    params: KdfParams,
    salt: Salt16,
}

impl KdfBuilder {
    /// Create a builder with a fresh random salt and default parameters.
    pub fn new() -> Result<Self, ImgcryptError> {
        Ok(Self {
            params: KdfParams::default(),
            salt: Salt16::try_random()?,
        })
    }

    /// Create a builder around a known salt (decryption, test vectors).
    #[must_use]
    pub fn from_salt(salt: impl Into<[u8; 16]>) -> Self {
        Self {
            params: KdfParams::default(),
            salt: Salt16::new(salt.into()),
        }
    }

    /// Set custom iteration count. Out-of-range values are reported by
    /// [`derive_secure`](Self::derive_secure).
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Replace iterations and PRF at once.
    #[must_use]
    pub fn with_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self
    }

    /// Current salt as raw 16-byte array (for the envelope)
    #[must_use]
    pub fn salt(&self) -> &[u8; 16] {
        self.salt.expose_secret()
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.params.iterations
    }

    #[must_use]
    pub const fn params(&self) -> KdfParams {
        self.params
    }

    /// Derive key directly into caller-provided secure buffer — **preferred**
    #[inline]
    pub fn derive_secure(
        &self,
        password: &PasswordString,
        out_key: &mut Aes256Key32,
    ) -> Result<(), ImgcryptError> {
        derive_secure_pbkdf2_key(password, &self.salt, &self.params, out_key)
    }

    /// Convenience: derive and return a fresh secure key
    #[inline]
    pub fn derive_secure_new(&self, password: &PasswordString) -> Result<Aes256Key32, ImgcryptError> {
        let mut key = Aes256Key32::new([0u8; 32]);
        self.derive_secure(password, &mut key)?;
        Ok(key)
    }
}
