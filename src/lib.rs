// src/lib.rs

//! Password-based encryption of image folders.
//!
//! Every encrypted file is an envelope `salt(16) ‖ IV(16) ‖ ciphertext`:
//! PBKDF2 turns the password and salt into an AES-256 key, the file is
//! zero-padded and encrypted in CBC mode. There is no integrity tag, so a
//! wrong password decrypts to garbage instead of failing.

pub mod aliases;
pub mod builders;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod envelope;
pub mod error;
pub mod padding;
pub mod pipeline;
pub mod report;
pub mod utils;

// High-level API
pub use decryptor::{decrypt_bytes, decrypt_padded};
pub use encryptor::{encrypt_bytes, encrypt_with_fixed_salt_iv};
pub use error::ImgcryptError;
pub use pipeline::{decrypt_file, encrypt_file, run_batch, BatchReport};

pub use builders::kdf_builder::KdfBuilder;
pub use config::{FailurePolicy, Mode, PipelineConfig};
pub use crypto::cbc::{decrypt_blocks, encrypt_blocks};
pub use crypto::kdf::{derive_key, derive_secure_pbkdf2_key, KdfParams, Prf};
pub use envelope::Envelope;
pub use report::{MemoryReporter, ReportLevel, Reporter, TracingReporter};
