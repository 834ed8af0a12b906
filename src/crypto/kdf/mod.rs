//! # Key Derivation
//!
//! Turns a password plus a 16-byte salt into a 32-byte AES key.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2 with a selectable HMAC pseudorandom function
//!
//! ## Usage
//!
//! Most callers go through [`encrypt_bytes`](crate::encrypt_bytes) and
//! [`decrypt_bytes`](crate::decrypt_bytes), which derive the key themselves.
//! The function is exposed for custom flows and known-answer testing.

pub mod pbkdf2;

pub use self::pbkdf2::{derive_key, derive_secure_pbkdf2_key, password_bytes, KdfParams, Prf};
