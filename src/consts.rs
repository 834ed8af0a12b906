//! Global constants for the envelope format and pipeline.
//!
//! Includes KDF parameters, envelope geometry and output naming.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Salt size (16 bytes), stored first in every envelope.
pub const SALT_SIZE: usize = 16;

/// IV size (16 bytes), stored right after the salt.
pub const IV_SIZE: usize = 16;

/// Derived key length (32 bytes = 256-bit key).
pub const KEY_LEN: usize = 32;

/// Bytes in front of the ciphertext: salt + IV.
pub const ENVELOPE_HEADER_LEN: usize = SALT_SIZE + IV_SIZE;

/// Default PBKDF2 iteration count.
///
/// 1000 is the count the original image encryptor ran with, so envelopes it
/// produced stay readable. Password encoding is covered by
/// [`password_bytes`](crate::crypto::kdf::password_bytes). Raise the count
/// with `--iterations` for new folders; the same count must then be given
/// to decrypt.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 1_000;

/// Minimum allowed PBKDF2 iterations.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iterations (5 million).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Subdirectory receiving encrypted outputs.
pub const ENCRYPTED_DIR: &str = "encrypted";

/// Subdirectory receiving decrypted outputs.
pub const DECRYPTED_DIR: &str = "decrypted";

/// Inserted before the 4-character tail of encrypted file names.
pub const ENCRYPTED_SUFFIX: &str = "_encrypted";

/// Inserted before the 4-character tail of decrypted file names.
pub const DECRYPTED_SUFFIX: &str = "_decrypted";

/// Width of the filename tail that output names are spliced around.
pub const NAME_TAIL_CHARS: usize = 4;

/// File name endings selected for a batch (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 2] = [".png", ".jpg"];
