// src/encryptor/mod.rs

//! In-memory encryption into an envelope.
//!
//! Core API: `encrypt_bytes(plaintext, &password, &params)?`.
//! Deterministic variant: `encrypt_with_fixed_salt_iv` for known-answer tests.

pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed;

pub use encrypt::encrypt_bytes;
pub use encrypt_fixed::encrypt_with_fixed_salt_iv;
