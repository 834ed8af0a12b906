//! # Builders
//!
//! Builder patterns for configuring cryptographic operations.
//!
//! ## Modules
//!
//! - [`kdf_builder`] - Builder for PBKDF2 key derivation (salt, iterations, PRF)

pub mod kdf_builder;
