// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets
//!
//! Adds `T::try_random()` to every `SpanBuffer` alias (`Salt16`, `Iv16`, …)
//! backed by the operating system CSPRNG.

use crate::error::ImgcryptError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;

/// Extension trait – gives `.try_random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn try_random() -> Result<Self, ImgcryptError>;
}

/// Blanket impl – every `Fixed<[u8; N]>` gets `.try_random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn try_random() -> Result<Self, ImgcryptError> {
        let mut out = Fixed::new([0u8; N]);
        OsRng
            .try_fill_bytes(out.expose_secret_mut())
            .map_err(|e| ImgcryptError::Crypto(format!("OS random source failed: {e}")))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{Iv16, Salt16};

    #[test]
    fn consecutive_salts_differ() {
        let a = Salt16::try_random().unwrap();
        let b = Salt16::try_random().unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn iv_is_not_all_zero() {
        let iv = Iv16::try_random().unwrap();
        assert_ne!(iv.expose_secret(), &[0u8; 16]);
    }
}
