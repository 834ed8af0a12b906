// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`kdf`] — PBKDF2 password → key derivation
//! - [`cbc`] — AES-256-CBC over block-aligned buffers
//! - [`rng`] — OS randomness for salts and IVs
//!
//! HMAC types are defined in `aliases.rs`.

pub mod cbc;
pub mod kdf;
pub mod rng;
