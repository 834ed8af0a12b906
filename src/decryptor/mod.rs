// src/decryptor/mod.rs

//! In-memory decryption of an envelope.
//!
//! Core API: `decrypt_bytes(envelope, &password, &params)?`.

pub(crate) mod decrypt;

pub use decrypt::{decrypt_bytes, decrypt_padded};
