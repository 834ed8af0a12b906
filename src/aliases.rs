//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All types zeroize on drop and require an explicit `.expose_secret()` to read.
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - password wrapper
//! - [`PaddedPlaintext`] - zero-padded plaintext handed to the cipher
//! - [`PasswordBytes`] - encoded password fed to PBKDF2
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte derived AES-256 key
//! - [`Block16`] - one 16-byte AES block (CBC chaining scratch)
//! - [`Iv16`] - 16-byte CBC initialization vector
//! - [`Salt16`] - 16-byte PBKDF2 salt
//!
//! Fresh random values come from [`SecureRandomExt::try_random`](crate::crypto::rng::SecureRandomExt).

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives — PBKDF2 pseudorandom functions
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>; // derived key
pub type Block16 = SpanBuffer<16>; // one AES block
pub type Iv16 = SpanBuffer<16>; // CBC IV, stored in the envelope
pub type Salt16 = SpanBuffer<16>; // PBKDF2 salt, stored in the envelope

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = secure_gate::Dynamic<String>;
pub type PaddedPlaintext = secure_gate::Dynamic<Vec<u8>>;
pub type PasswordBytes = secure_gate::Dynamic<Vec<u8>>;
